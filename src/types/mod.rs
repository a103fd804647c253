//! Wire type tags and typed scalar values.

mod tag;
mod value;

pub use tag::{code, width_of, TypeTag, Width};
pub use value::Value;
