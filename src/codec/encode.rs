//! Scalar encoding: `Value` → bytes.

use bytes::{BufMut, BytesMut};

use super::wrap::{fits_width, split_sign, wrap_to_width};
use crate::error::CodecError;
use crate::types::{TypeTag, Value};

/// Picks the tag used by the implicit entry points.
///
/// Booleans are matched before integers. A string of exactly one character
/// maps to CHAR, any other string to STRING.
pub fn infer_tag(value: &Value) -> TypeTag {
    match value {
        Value::Null => TypeTag::Null,
        Value::Bool(_) => TypeTag::Bool,
        Value::Int(_) | Value::UInt(_) => TypeTag::I64,
        Value::F32(_) | Value::F64(_) => TypeTag::F64,
        Value::Char(_) => TypeTag::Char,
        Value::String(s) if s.chars().count() == 1 => TypeTag::Char,
        Value::String(_) => TypeTag::String,
        Value::Bytes(_) => TypeTag::Bytes,
    }
}

/// Encodes a value at its natural width.
///
/// Integers are written as 8-byte two's complement and floats as 8-byte
/// doubles. Characters and strings are written as their full UTF-8 bytes,
/// even when [`infer_tag`] reports CHAR.
pub fn encode_natural(buf: &mut BytesMut, value: &Value) {
    match value {
        Value::Null => {}
        Value::Int(i) => {
            let (negative, magnitude) = split_sign(*i);
            put_int(buf, negative, magnitude, TypeTag::I64);
        }
        Value::UInt(u) => put_int(buf, false, *u, TypeTag::I64),
        Value::F32(f) => buf.put_f64(f64::from(*f)),
        Value::F64(f) => buf.put_f64(*f),
        Value::Bool(b) => encode_bool(buf, *b),
        Value::Char(c) => {
            let mut utf8 = [0u8; 4];
            buf.put_slice(c.encode_utf8(&mut utf8).as_bytes());
        }
        Value::String(s) => buf.put_slice(s.as_bytes()),
        Value::Bytes(b) => buf.put_slice(b),
    }
}

/// Encodes a value at the declared width of `tag`.
///
/// Integers wrap instead of failing. CHAR keeps only the first UTF-8 byte.
/// Fails with [`CodecError::Incompatible`] when the value has no conversion
/// to the tag at all, such as a byte buffer as I32.
pub fn encode_as(buf: &mut BytesMut, value: &Value, tag: TypeTag) -> Result<(), CodecError> {
    match tag {
        TypeTag::Null => {}
        TypeTag::I8
        | TypeTag::I16
        | TypeTag::I32
        | TypeTag::I64
        | TypeTag::I128
        | TypeTag::U8
        | TypeTag::U16
        | TypeTag::U32
        | TypeTag::U64
        | TypeTag::U128 => {
            let (negative, magnitude) = int_parts(value, tag)?;
            put_int(buf, negative, magnitude, tag);
        }
        TypeTag::F32 => buf.put_f32(float_value(value, tag)? as f32),
        TypeTag::F64 => buf.put_f64(float_value(value, tag)?),
        TypeTag::Bool => encode_bool(buf, value.is_truthy()),
        TypeTag::Char => encode_char(buf, value)?,
        TypeTag::String => match value {
            Value::String(s) => buf.put_slice(s.as_bytes()),
            Value::Char(c) => {
                let mut utf8 = [0u8; 4];
                buf.put_slice(c.encode_utf8(&mut utf8).as_bytes());
            }
            other => return Err(incompatible(other, tag)),
        },
        TypeTag::Bytes => match value {
            Value::Bytes(b) => buf.put_slice(b),
            other => return Err(incompatible(other, tag)),
        },
    }
    Ok(())
}

pub fn encode_bool(buf: &mut BytesMut, value: bool) {
    buf.put_u8(u8::from(value));
}

/// Writes the first UTF-8 byte of a character or string.
///
/// Later bytes are dropped. An empty string writes `0x00` so the encoding
/// still occupies the declared width.
fn encode_char(buf: &mut BytesMut, value: &Value) -> Result<(), CodecError> {
    let mut utf8 = [0u8; 4];
    let bytes = match value {
        Value::Char(c) => c.encode_utf8(&mut utf8).as_bytes(),
        Value::String(s) => s.as_bytes(),
        other => return Err(incompatible(other, TypeTag::Char)),
    };
    if bytes.len() > 1 {
        tracing::trace!(dropped = bytes.len() - 1, "CHAR keeps only the first UTF-8 byte");
    }
    buf.put_u8(bytes.first().copied().unwrap_or(0));
    Ok(())
}

/// Writes an integer as big-endian at the width of `tag`.
fn put_int(buf: &mut BytesMut, negative: bool, magnitude: u128, tag: TypeTag) {
    let Some(width) = tag.fixed_width() else {
        return;
    };
    let signed = tag.is_signed_int();
    if !fits_width(negative, magnitude, signed, width) {
        tracing::trace!(%tag, negative, magnitude, "integer wrapped to declared width");
    }
    let pattern = wrap_to_width(negative, magnitude, signed, width);
    buf.put_slice(&pattern.to_be_bytes()[16 - width..]);
}

/// Sign and magnitude of a value destined for an integer tag. Floats are
/// truncated toward zero; booleans count as 0 and 1.
fn int_parts(value: &Value, tag: TypeTag) -> Result<(bool, u128), CodecError> {
    match value {
        Value::Int(i) => Ok(split_sign(*i)),
        Value::UInt(u) => Ok((false, *u)),
        Value::Bool(b) => Ok((false, u128::from(*b))),
        Value::F32(f) => Ok(float_parts(f64::from(*f))),
        Value::F64(f) => Ok(float_parts(*f)),
        other => Err(incompatible(other, tag)),
    }
}

// Saturating: NaN becomes 0 and infinities clamp to u128::MAX.
fn float_parts(f: f64) -> (bool, u128) {
    let t = f.trunc();
    (t < 0.0, t.abs() as u128)
}

fn float_value(value: &Value, tag: TypeTag) -> Result<f64, CodecError> {
    match value {
        Value::F64(f) => Ok(*f),
        Value::F32(f) => Ok(f64::from(*f)),
        Value::Int(i) => Ok(*i as f64),
        Value::UInt(u) => Ok(*u as f64),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        other => Err(incompatible(other, tag)),
    }
}

fn incompatible(value: &Value, tag: TypeTag) -> CodecError {
    CodecError::Incompatible {
        tag,
        kind: value.kind(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn natural(value: impl Into<Value>) -> Vec<u8> {
        let mut buf = BytesMut::new();
        encode_natural(&mut buf, &value.into());
        buf.to_vec()
    }

    fn typed(value: impl Into<Value>, tag: TypeTag) -> Vec<u8> {
        let mut buf = BytesMut::new();
        encode_as(&mut buf, &value.into(), tag).expect("encode failed");
        buf.to_vec()
    }

    #[test]
    fn infer_tags() {
        assert_eq!(infer_tag(&Value::Int(-100)), TypeTag::I64);
        assert_eq!(infer_tag(&Value::UInt(7)), TypeTag::I64);
        assert_eq!(infer_tag(&Value::F64(1.23)), TypeTag::F64);
        assert_eq!(infer_tag(&Value::F32(1.5)), TypeTag::F64);
        assert_eq!(infer_tag(&Value::Bool(true)), TypeTag::Bool);
        assert_eq!(infer_tag(&Value::from("a")), TypeTag::Char);
        assert_eq!(infer_tag(&Value::from("é")), TypeTag::Char);
        assert_eq!(infer_tag(&Value::Char('a')), TypeTag::Char);
        assert_eq!(infer_tag(&Value::from("abc")), TypeTag::String);
        assert_eq!(infer_tag(&Value::from("")), TypeTag::String);
        assert_eq!(infer_tag(&Value::Bytes(vec![1])), TypeTag::Bytes);
        assert_eq!(infer_tag(&Value::Null), TypeTag::Null);
    }

    #[test]
    fn natural_integers() {
        assert_eq!(natural(-1000i64), [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFC, 0x18]);
        assert_eq!(natural(1000i64), [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xE8]);
        // Beyond i64 the magnitude wraps modulo 2^63.
        assert_eq!(natural(i128::from(i64::MAX) + 2), 1i64.to_be_bytes());
        assert_eq!(natural(u64::MAX), i64::MAX.to_be_bytes());
    }

    #[test]
    fn natural_float() {
        assert_eq!(natural(0.123f64), [0x3F, 0xBF, 0x7C, 0xED, 0x91, 0x68, 0x72, 0xB0]);
        assert_eq!(natural(0.5f32), 0.5f64.to_be_bytes());
    }

    #[test]
    fn natural_other_scalars() {
        assert_eq!(natural(true), [0x01]);
        assert_eq!(natural(false), [0x00]);
        assert_eq!(natural("z"), [0x7A]);
        assert_eq!(natural("xyz"), [0x78, 0x79, 0x7A]);
        assert_eq!(natural('é'), [0xC3, 0xA9]);
        assert_eq!(natural(vec![0x00u8, 0xFF]), [0x00, 0xFF]);
        assert_eq!(natural(Value::Null), Vec::<u8>::new());
    }

    #[test]
    fn typed_signed_widths() {
        assert_eq!(typed(-1000i64, TypeTag::I64), [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFC, 0x18]);
        assert_eq!(typed(-1000i64, TypeTag::I32), [0xFF, 0xFF, 0xFC, 0x18]);
        assert_eq!(typed(-1000i64, TypeTag::I16), [0xFC, 0x18]);
        assert_eq!(typed(-1i64, TypeTag::I8), [0xFF]);
        assert_eq!(typed(-1i64, TypeTag::I128), [0xFF; 16]);
    }

    #[test]
    fn typed_signed_wraps() {
        assert_eq!(typed(200i64, TypeTag::I8), [72]);
        assert_eq!(typed(-200i64, TypeTag::I8), [(-72i8) as u8]);
        // 40000 mod 32768 = 7232
        assert_eq!(typed(40000i64, TypeTag::I16), [0x1C, 0x40]);
    }

    #[test]
    fn typed_unsigned_widths() {
        assert_eq!(typed(-1000i64, TypeTag::U16), [0xFC, 0x18]);
        assert_eq!(typed(256i64, TypeTag::U8), [0x00]);
        assert_eq!(typed(u128::MAX, TypeTag::U64), [0xFF; 8]);
        assert_eq!(typed(1u8, TypeTag::U32), [0, 0, 0, 1]);
    }

    #[test]
    fn typed_floats() {
        assert_eq!(typed(0.123f64, TypeTag::F64), [0x3F, 0xBF, 0x7C, 0xED, 0x91, 0x68, 0x72, 0xB0]);
        assert_eq!(typed(0.123f64, TypeTag::F32), [0x3D, 0xFB, 0xE7, 0x6D]);
        assert_eq!(typed(1000i64, TypeTag::F32), [0x44, 0x7A, 0x00, 0x00]);
    }

    #[test]
    fn typed_float_to_int_truncates() {
        assert_eq!(typed(-2.9f64, TypeTag::I8), [0xFE]);
        assert_eq!(typed(f64::NAN, TypeTag::U8), [0x00]);
    }

    #[test]
    fn typed_bool_is_truthiness() {
        assert_eq!(typed(true, TypeTag::Bool), [0x01]);
        assert_eq!(typed(false, TypeTag::Bool), [0x00]);
        assert_eq!(typed(0i64, TypeTag::Bool), [0x00]);
        assert_eq!(typed(100i64, TypeTag::Bool), [0x01]);
        assert_eq!(typed(Value::Null, TypeTag::Bool), [0x00]);
    }

    #[test]
    fn typed_char_keeps_first_byte() {
        assert_eq!(typed("z", TypeTag::Char), [0x7A]);
        assert_eq!(typed("xyz", TypeTag::Char), [0x78]);
        assert_eq!(typed('é', TypeTag::Char), [0xC3]);
        assert_eq!(typed("", TypeTag::Char), [0x00]);
    }

    #[test]
    fn typed_variable_and_null() {
        assert_eq!(typed("xyz", TypeTag::String), [0x78, 0x79, 0x7A]);
        assert_eq!(typed('z', TypeTag::String), [0x7A]);
        assert_eq!(typed(vec![1u8, 2], TypeTag::Bytes), [1, 2]);
        assert_eq!(typed(Value::Null, TypeTag::Null), Vec::<u8>::new());
        assert_eq!(typed(12345i64, TypeTag::Null), Vec::<u8>::new());
    }

    #[test]
    fn typed_incompatible() {
        let mut buf = BytesMut::new();
        assert_eq!(
            encode_as(&mut buf, &Value::Bytes(vec![1]), TypeTag::I32),
            Err(CodecError::Incompatible {
                tag: TypeTag::I32,
                kind: "bytes"
            })
        );
        assert!(encode_as(&mut buf, &Value::Null, TypeTag::F64).is_err());
        assert!(encode_as(&mut buf, &Value::Int(1), TypeTag::String).is_err());
        assert!(encode_as(&mut buf, &Value::from("ab"), TypeTag::Bytes).is_err());
        assert!(buf.is_empty());
    }
}
