//! Values as they cross the transport boundary: type codes plus payload.

use bytes::{Bytes, BytesMut};

use crate::codec::{array, decode, encode};
use crate::config::DecodeOptions;
use crate::error::CodecError;
use crate::types::{TypeTag, Value};

/// One value on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireScalar {
    pub code: u8,
    pub payload: Bytes,
}

impl WireScalar {
    /// Encodes with the inferred tag at its natural width.
    pub fn natural(value: &Value) -> Self {
        let mut buf = BytesMut::new();
        encode::encode_natural(&mut buf, value);
        Self {
            code: encode::infer_tag(value).code(),
            payload: buf.freeze(),
        }
    }

    pub fn typed(value: &Value, tag: TypeTag) -> Result<Self, CodecError> {
        let mut buf = BytesMut::new();
        encode::encode_as(&mut buf, value, tag)?;
        Ok(Self {
            code: tag.code(),
            payload: buf.freeze(),
        })
    }

    /// Unknown codes read as NULL.
    pub fn tag(&self) -> TypeTag {
        TypeTag::from_code(self.code)
    }

    pub fn decode(&self) -> Result<Value, CodecError> {
        self.decode_with(&DecodeOptions::default())
    }

    pub fn decode_with(&self, options: &DecodeOptions) -> Result<Value, CodecError> {
        decode::decode_with(&self.payload, self.tag(), options)
    }
}

/// An ordered list of values on the wire: one code per element and the
/// framed payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WireArray {
    pub codes: Vec<u8>,
    pub payload: Bytes,
}

impl WireArray {
    /// Encodes with inferred tags.
    pub fn natural(values: &[Value]) -> Self {
        let mut buf = BytesMut::new();
        let tags = array::encode_array(&mut buf, values);
        Self {
            codes: tags.into_iter().map(TypeTag::code).collect(),
            payload: buf.freeze(),
        }
    }

    pub fn typed(values: &[Value], tags: &[TypeTag]) -> Result<Self, CodecError> {
        let mut buf = BytesMut::new();
        array::encode_array_as(&mut buf, values, tags)?;
        Ok(Self {
            codes: tags.iter().map(|t| t.code()).collect(),
            payload: buf.freeze(),
        })
    }

    /// Unknown codes read as NULL.
    pub fn tags(&self) -> Vec<TypeTag> {
        self.codes.iter().map(|&c| TypeTag::from_code(c)).collect()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Decodes the payload. A short payload yields a short result.
    pub fn decode(&self) -> Result<Vec<Value>, CodecError> {
        self.decode_with(&DecodeOptions::default())
    }

    pub fn decode_with(&self, options: &DecodeOptions) -> Result<Vec<Value>, CodecError> {
        array::decode_array_with(&self.payload, &self.tags(), options)
    }
}
