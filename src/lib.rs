//! typewire — a typed scalar value codec for RPC payloads.
//!
//! Values are sent as a one-byte type code plus a payload. Ordered lists of
//! values share one payload buffer, with a parallel list of codes carried
//! next to it by the transport.
//!
//! # Architecture
//!
//! - **`types`** — Wire type tags with declared widths, and the `Value` enum
//! - **`codec`** — Scalar encode/decode, integer wraparound, array framing
//! - **`config`** — `Codec` builder and decode options
//! - **`wire`** — Code/payload pairs as handed to a transport
//! - **`transport`** — The `Transport` trait (interface only)
//!
//! # Example
//!
//! ```
//! use typewire::{Codec, TypeTag, Value};
//!
//! let codec = Codec::default();
//! let wire = codec
//!     .encode_array_as(&[Value::Int(-5), Value::from("hi")], &[TypeTag::I16, TypeTag::String])
//!     .unwrap();
//! assert_eq!(&wire.payload[..], &[0xFF, 0xFB, 0x02, b'h', b'i']);
//! assert_eq!(codec.decode_wire(&wire).unwrap()[1], Value::from("hi"));
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod transport;
pub mod types;
pub mod wire;

pub use config::{Codec, CodecBuilder, DecodeOptions, Utf8Policy};
pub use error::CodecError;
pub use transport::Transport;
pub use types::{TypeTag, Value, Width};
pub use wire::{WireArray, WireScalar};
