//! The `Transport` trait: the boundary to whatever RPC layer carries encoded
//! values.
//!
//! A transport only moves [`WireArray`]s; it never looks inside the payload.

use crate::config::Codec;
use crate::error::CodecError;
use crate::types::{TypeTag, Value};
use crate::wire::WireArray;

/// Carries encoded values to a remote method and returns its reply.
#[async_trait::async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Invokes `method` with `request`. The codes and payload must arrive
    /// unmodified on the other side.
    async fn call(&self, method: &str, request: WireArray) -> Result<WireArray, CodecError>;
}

/// Encodes `values` under `tags`, calls `method`, and decodes the reply with
/// the tags the reply carries.
pub async fn call_values<T: Transport + ?Sized>(
    transport: &T,
    codec: &Codec,
    method: &str,
    values: &[Value],
    tags: &[TypeTag],
) -> Result<Vec<Value>, CodecError> {
    let request = codec.encode_array_as(values, tags)?;
    tracing::trace!(
        method,
        elements = request.len(),
        bytes = request.payload.len(),
        "sending values"
    );
    let reply = transport.call(method, request).await?;
    codec.decode_wire(&reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    /// Returns every request unchanged.
    struct Echo;

    #[async_trait::async_trait]
    impl Transport for Echo {
        async fn call(&self, _method: &str, request: WireArray) -> Result<WireArray, CodecError> {
            Ok(request)
        }
    }

    /// Drops the last byte of every payload.
    struct Lossy;

    #[async_trait::async_trait]
    impl Transport for Lossy {
        async fn call(&self, _method: &str, request: WireArray) -> Result<WireArray, CodecError> {
            let cut = request.payload.len().saturating_sub(1);
            Ok(WireArray {
                codes: request.codes,
                payload: request.payload.slice(..cut),
            })
        }
    }

    struct Down;

    #[async_trait::async_trait]
    impl Transport for Down {
        async fn call(&self, method: &str, _request: WireArray) -> Result<WireArray, CodecError> {
            Err(CodecError::transport(format!("{method}: channel closed")))
        }
    }

    #[tokio::test]
    async fn echo_round_trip() {
        let values = [Value::UInt(42), Value::F32(1.5), Value::from("ok")];
        let tags = [TypeTag::U8, TypeTag::F32, TypeTag::String];
        let reply = call_values(&Echo, &Codec::default(), "write_data", &values, &tags)
            .await
            .unwrap();
        assert_eq!(reply, values);
    }

    #[tokio::test]
    async fn short_reply_yields_prefix() {
        let values = [Value::UInt(7), Value::UInt(65535)];
        let tags = [TypeTag::U8, TypeTag::U16];
        let reply = call_values(&Lossy, &Codec::default(), "read_data", &values, &tags)
            .await
            .unwrap();
        assert_eq!(reply, [Value::UInt(7)]);
    }

    #[tokio::test]
    async fn transport_error_propagates() {
        let err = call_values(&Down, &Codec::default(), "read_data", &[], &[])
            .await
            .unwrap_err();
        assert_eq!(err, CodecError::Transport("read_data: channel closed".into()));
    }

    #[tokio::test]
    async fn encode_error_skips_call() {
        let values = [Value::Null];
        let tags = [TypeTag::F64];
        let err = call_values(&Down, &Codec::default(), "read_data", &values, &tags)
            .await
            .unwrap_err();
        assert!(matches!(err, CodecError::Incompatible { .. }));
    }

    #[tokio::test]
    async fn usable_as_trait_object() {
        let transport: Box<dyn Transport> = Box::new(Echo);
        let wire = WireArray {
            codes: vec![TypeTag::Bytes.code()],
            payload: Bytes::from_static(&[2, 0xAB, 0xCD]),
        };
        let reply = transport.call("echo", wire.clone()).await.unwrap();
        assert_eq!(reply, wire);
        assert_eq!(reply.decode(), Ok(vec![Value::Bytes(vec![0xAB, 0xCD])]));
    }
}
