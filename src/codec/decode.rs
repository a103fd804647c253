//! Scalar decoding: bytes → `Value`.

use bytes::Buf;

use crate::config::{DecodeOptions, Utf8Policy};
use crate::error::CodecError;
use crate::types::{TypeTag, Value};

/// Decodes one value with the default options.
pub fn decode(buf: &[u8], tag: TypeTag) -> Result<Value, CodecError> {
    decode_with(buf, tag, &DecodeOptions::default())
}

/// Decodes one value.
///
/// Fixed-width numeric tags read the *last* `width` bytes of `buf`, so a
/// longer buffer is accepted and its leading bytes ignored. BOOL is true if
/// any byte is nonzero. CHAR reads the first byte. NULL ignores `buf`.
pub fn decode_with(buf: &[u8], tag: TypeTag, options: &DecodeOptions) -> Result<Value, CodecError> {
    match tag {
        TypeTag::Null => Ok(Value::Null),
        TypeTag::I8 => Ok(Value::Int(i128::from(tail(buf, tag)?.get_i8()))),
        TypeTag::I16 => Ok(Value::Int(i128::from(tail(buf, tag)?.get_i16()))),
        TypeTag::I32 => Ok(Value::Int(i128::from(tail(buf, tag)?.get_i32()))),
        TypeTag::I64 => Ok(Value::Int(i128::from(tail(buf, tag)?.get_i64()))),
        TypeTag::I128 => Ok(Value::Int(tail(buf, tag)?.get_i128())),
        TypeTag::U8 => Ok(Value::UInt(u128::from(tail(buf, tag)?.get_u8()))),
        TypeTag::U16 => Ok(Value::UInt(u128::from(tail(buf, tag)?.get_u16()))),
        TypeTag::U32 => Ok(Value::UInt(u128::from(tail(buf, tag)?.get_u32()))),
        TypeTag::U64 => Ok(Value::UInt(u128::from(tail(buf, tag)?.get_u64()))),
        TypeTag::U128 => Ok(Value::UInt(tail(buf, tag)?.get_u128())),
        TypeTag::F32 => Ok(Value::F32(tail(buf, tag)?.get_f32())),
        TypeTag::F64 => Ok(Value::F64(tail(buf, tag)?.get_f64())),
        TypeTag::Bool => {
            ensure_remaining(buf, tag, 1)?;
            Ok(Value::Bool(buf.iter().any(|&b| b != 0)))
        }
        TypeTag::Char => {
            ensure_remaining(buf, tag, 1)?;
            decode_char(buf[0], options.utf8)
        }
        TypeTag::String => decode_string(buf, options.utf8),
        TypeTag::Bytes => Ok(Value::Bytes(buf.to_vec())),
    }
}

fn ensure_remaining(buf: &[u8], tag: TypeTag, needed: usize) -> Result<(), CodecError> {
    if buf.len() < needed {
        Err(CodecError::TruncatedInput {
            tag,
            needed,
            available: buf.len(),
        })
    } else {
        Ok(())
    }
}

/// Right-aligned window of the declared width.
fn tail(buf: &[u8], tag: TypeTag) -> Result<&[u8], CodecError> {
    let width = tag.fixed_width().unwrap_or(0);
    ensure_remaining(buf, tag, width)?;
    Ok(&buf[buf.len() - width..])
}

fn decode_char(byte: u8, policy: Utf8Policy) -> Result<Value, CodecError> {
    if byte.is_ascii() {
        return Ok(Value::Char(char::from(byte)));
    }
    // A lone byte above 0x7F is never a complete UTF-8 sequence.
    match policy {
        Utf8Policy::Strict => Err(CodecError::InvalidUtf8 {
            tag: TypeTag::Char,
            reason: format!("byte 0x{byte:02X} is not a single-byte character"),
        }),
        Utf8Policy::Lossy => Ok(Value::Char(char::REPLACEMENT_CHARACTER)),
    }
}

fn decode_string(buf: &[u8], policy: Utf8Policy) -> Result<Value, CodecError> {
    match policy {
        Utf8Policy::Strict => std::str::from_utf8(buf)
            .map(|s| Value::String(s.to_owned()))
            .map_err(|e| CodecError::InvalidUtf8 {
                tag: TypeTag::String,
                reason: e.to_string(),
            }),
        Utf8Policy::Lossy => Ok(Value::String(String::from_utf8_lossy(buf).into_owned())),
    }
}
