//! Codec configuration and the configured [`Codec`] handle.

use bytes::{Bytes, BytesMut};

use crate::codec::{array, decode, encode};
use crate::error::CodecError;
use crate::types::{TypeTag, Value};
use crate::wire::WireArray;

/// How STRING and CHAR decoding treats bytes that are not valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Utf8Policy {
    /// Fail with [`CodecError::InvalidUtf8`].
    #[default]
    Strict,
    /// Substitute U+FFFD for invalid sequences.
    Lossy,
}

/// Options consulted while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    pub utf8: Utf8Policy,
    /// Array decoding stops after this many elements.
    pub max_array_len: Option<usize>,
}

/// A configured codec. Cheap to copy and safe to share between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Codec {
    options: DecodeOptions,
}

/// Builder for [`Codec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CodecBuilder {
    options: DecodeOptions,
}

impl CodecBuilder {
    /// Sets the UTF-8 policy for STRING and CHAR decoding.
    pub fn utf8_policy(mut self, policy: Utf8Policy) -> Self {
        self.options.utf8 = policy;
        self
    }

    /// Caps the number of elements returned by array decoding.
    pub fn max_array_len(mut self, limit: usize) -> Self {
        self.options.max_array_len = Some(limit);
        self
    }

    pub fn build(self) -> Codec {
        Codec {
            options: self.options,
        }
    }
}

impl Codec {
    /// Creates a builder with strict UTF-8 and no array cap.
    pub fn builder() -> CodecBuilder {
        CodecBuilder::default()
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    pub fn infer_tag(&self, value: &Value) -> TypeTag {
        encode::infer_tag(value)
    }

    pub fn encode_natural(&self, value: &Value) -> Bytes {
        let mut buf = BytesMut::new();
        encode::encode_natural(&mut buf, value);
        buf.freeze()
    }

    pub fn encode_as(&self, value: &Value, tag: TypeTag) -> Result<Bytes, CodecError> {
        let mut buf = BytesMut::new();
        encode::encode_as(&mut buf, value, tag)?;
        Ok(buf.freeze())
    }

    pub fn decode(&self, buf: &[u8], tag: TypeTag) -> Result<Value, CodecError> {
        decode::decode_with(buf, tag, &self.options)
    }

    /// Encodes values with inferred tags.
    pub fn encode_array(&self, values: &[Value]) -> WireArray {
        WireArray::natural(values)
    }

    /// Encodes values under caller-supplied tags.
    pub fn encode_array_as(
        &self,
        values: &[Value],
        tags: &[TypeTag],
    ) -> Result<WireArray, CodecError> {
        WireArray::typed(values, tags)
    }

    pub fn decode_array(&self, buf: &[u8], tags: &[TypeTag]) -> Result<Vec<Value>, CodecError> {
        array::decode_array_with(buf, tags, &self.options)
    }

    /// Decodes a wire array received from a transport.
    pub fn decode_wire(&self, wire: &WireArray) -> Result<Vec<Value>, CodecError> {
        wire.decode_with(&self.options)
    }
}
