//! Typed-value codec.
//!
//! Scalars are encoded either at their natural width (tag inferred from the
//! value) or at the declared width of a caller-supplied [`TypeTag`]. All
//! multi-byte fields are big-endian.
//!
//! [`TypeTag`]: crate::types::TypeTag

pub mod array;
pub mod decode;
pub mod encode;
pub mod wrap;

pub use array::{decode_array, decode_array_with, encode_array, encode_array_as};
pub use decode::{decode, decode_with};
pub use encode::{encode_as, encode_natural, infer_tag};
pub use wrap::wrap_to_width;
