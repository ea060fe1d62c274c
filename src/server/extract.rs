use crate::error::PantryError;
use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use futures::StreamExt;
use serde::de::DeserializeOwned;

/// Hard cap on inbound request payloads (64 KiB).
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Buffers `body` up to `limit` bytes.
///
/// Going over the limit fails with `PayloadTooLarge` as soon as the offending
/// chunk arrives; nothing is truncated. Any transport error fails with
/// `BodyRead`. The stream is dropped on every return path.
///
/// Trailing NUL bytes are trimmed from the buffered payload.
pub async fn read_body(body: Body, limit: usize) -> Result<Bytes, PantryError> {
    let mut stream = body.into_data_stream();
    let mut buf: Vec<u8> = Vec::new();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(PantryError::BodyRead)?;
        if buf.len() + chunk.len() > limit {
            return Err(PantryError::PayloadTooLarge { limit });
        }
        buf.extend_from_slice(&chunk);
    }

    while buf.last() == Some(&0) {
        buf.pop();
    }

    Ok(Bytes::from(buf))
}

/// JSON request body read through [`read_body`] with [`MAX_BODY_BYTES`].
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = PantryError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let bytes = read_body(req.into_body(), MAX_BODY_BYTES).await?;
        let value = serde_json::from_slice(&bytes)?;
        Ok(Self(value))
    }
}

/// Integer id taken from the single `{id}` path parameter of item routes.
///
/// Rejects with `InvalidId` (400 "Bad id") before the handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemId(pub i64);

impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = PantryError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| PantryError::InvalidId(e.body_text()))?;
        parse_item_id(&raw).map(Self)
    }
}

pub fn parse_item_id(raw: &str) -> Result<i64, PantryError> {
    raw.parse::<i64>()
        .map_err(|_| PantryError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[tokio::test]
    async fn reads_body_up_to_the_limit() {
        let payload = vec![b'a'; MAX_BODY_BYTES];
        let bytes = read_body(Body::from(payload.clone()), MAX_BODY_BYTES)
            .await
            .expect("body at the limit should be accepted");
        assert_eq!(bytes.len(), MAX_BODY_BYTES);
        assert_eq!(&bytes[..], &payload[..]);
    }

    #[tokio::test]
    async fn rejects_body_over_the_limit() {
        let payload = vec![b'a'; MAX_BODY_BYTES + 1];
        let err = read_body(Body::from(payload), MAX_BODY_BYTES)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            PantryError::PayloadTooLarge {
                limit: MAX_BODY_BYTES
            }
        ));
    }

    #[tokio::test]
    async fn rejects_over_limit_across_chunks() {
        let chunks: Vec<Result<Bytes, io::Error>> = vec![
            Ok(Bytes::from_static(b"0123")),
            Ok(Bytes::from_static(b"4567")),
            Ok(Bytes::from_static(b"89")),
        ];
        let body = Body::from_stream(futures::stream::iter(chunks));
        let err = read_body(body, 9).await.unwrap_err();
        assert!(matches!(err, PantryError::PayloadTooLarge { limit: 9 }));
    }

    #[tokio::test]
    async fn stream_errors_surface_as_read_failures() {
        let chunks: Vec<Result<Bytes, io::Error>> = vec![
            Ok(Bytes::from_static(b"{\"na")),
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "peer went away")),
        ];
        let body = Body::from_stream(futures::stream::iter(chunks));
        let err = read_body(body, MAX_BODY_BYTES).await.unwrap_err();
        assert!(matches!(err, PantryError::BodyRead(_)));
    }

    #[tokio::test]
    async fn trims_trailing_nul_bytes() {
        let bytes = read_body(Body::from(&b"a\0b\0\0"[..]), MAX_BODY_BYTES)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"a\0b");

        let bytes = read_body(Body::from(&b"\0\0"[..]), MAX_BODY_BYTES)
            .await
            .unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn parses_signed_integer_ids_only() {
        assert_eq!(parse_item_id("42").unwrap(), 42);
        assert_eq!(parse_item_id("-3").unwrap(), -3);
        assert!(matches!(
            parse_item_id("abc"),
            Err(PantryError::InvalidId(raw)) if raw == "abc"
        ));
        assert!(parse_item_id("").is_err());
        assert!(parse_item_id("1.5").is_err());
    }
}
