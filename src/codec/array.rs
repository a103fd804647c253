//! Array framing: an ordered list of values in one buffer.
//!
//! Fixed-width elements are concatenated with no framing. STRING and BYTES
//! elements are preceded by a single length byte holding `len % 256`; there
//! is no escape for longer payloads, so those do not survive a round trip.
//! The tag list travels next to the buffer and is not written into it.

use bytes::{BufMut, BytesMut};

use super::decode::decode_with;
use super::encode::{encode_as, encode_natural, infer_tag};
use crate::config::DecodeOptions;
use crate::error::CodecError;
use crate::types::{TypeTag, Value, Width};

/// Encodes values with inferred tags and returns those tags.
pub fn encode_array(buf: &mut BytesMut, values: &[Value]) -> Vec<TypeTag> {
    values
        .iter()
        .map(|value| {
            let tag = infer_tag(value);
            if tag.is_variable() {
                put_framed(buf, |buf| encode_natural(buf, value));
            } else {
                encode_natural(buf, value);
            }
            tag
        })
        .collect()
}

/// Encodes values under a parallel list of caller-supplied tags.
///
/// On error the buffer is left as it was before the call.
pub fn encode_array_as(
    buf: &mut BytesMut,
    values: &[Value],
    tags: &[TypeTag],
) -> Result<(), CodecError> {
    if values.len() != tags.len() {
        return Err(CodecError::LengthMismatch {
            values: values.len(),
            tags: tags.len(),
        });
    }
    let start = buf.len();
    let result = values.iter().zip(tags).try_for_each(|(value, &tag)| {
        if tag.is_variable() {
            let mut element = BytesMut::new();
            encode_as(&mut element, value, tag)?;
            put_framed(buf, |buf| buf.put_slice(&element));
            Ok(())
        } else {
            encode_as(buf, value, tag)
        }
    });
    if result.is_err() {
        buf.truncate(start);
    }
    result
}

/// Decodes an array buffer with the default options.
pub fn decode_array(buf: &[u8], tags: &[TypeTag]) -> Result<Vec<Value>, CodecError> {
    decode_array_with(buf, tags, &DecodeOptions::default())
}

/// Decodes an array buffer, one element per tag.
///
/// Stops at the first element the remaining bytes cannot cover and returns
/// what was decoded up to that point. A missing length byte is read as a
/// length of one. Only element decode errors (invalid UTF-8 under the strict
/// policy) are returned as errors.
pub fn decode_array_with(
    buf: &[u8],
    tags: &[TypeTag],
    options: &DecodeOptions,
) -> Result<Vec<Value>, CodecError> {
    let limit = options.max_array_len.unwrap_or(usize::MAX);
    let mut values = Vec::with_capacity(tags.len().min(limit));
    let mut cursor = 0;

    for &tag in tags {
        if values.len() >= limit {
            tracing::debug!(limit, "array decode reached element limit");
            break;
        }
        let size = match tag.width() {
            Width::Fixed(n) => n,
            Width::Variable => match buf.get(cursor) {
                Some(&len) => {
                    cursor += 1;
                    usize::from(len)
                }
                None => 1,
            },
        };
        let remaining = buf.len() - cursor;
        if size > remaining {
            tracing::debug!(
                %tag,
                needed = size,
                remaining,
                decoded = values.len(),
                "array buffer ended mid-element"
            );
            break;
        }
        values.push(decode_with(&buf[cursor..cursor + size], tag, options)?);
        cursor += size;
    }

    Ok(values)
}

/// Reserves a length byte, writes the element, then fills in the length.
fn put_framed(buf: &mut BytesMut, write: impl FnOnce(&mut BytesMut)) {
    let at = buf.len();
    buf.put_u8(0);
    write(buf);
    let len = buf.len() - at - 1;
    if len > usize::from(u8::MAX) {
        tracing::debug!(len, prefix = len % 256, "length prefix wrapped");
    }
    buf[at] = (len % 256) as u8;
}
