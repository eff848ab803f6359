//! Streaming POST for chunked text responses.

use std::pin::Pin;

use bytes::Bytes;
use futures::{Stream, StreamExt, TryStreamExt};
use reqwest::Method;
use serde::Serialize;

use crate::client::ServiceClient;
use crate::error::ApiError;

/// Body chunks of a streamed response, in arrival order.
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<Bytes, ApiError>> + Send>>;

impl ServiceClient {
    /// `POST path` with a JSON body and stream the response body back.
    ///
    /// Headers and interceptors are the same as for [`ServiceClient::post`],
    /// so a streamed 401 invalidates the session too. The stream ends when the
    /// server closes the body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not a
    /// success. Errors after the first chunk surface as
    /// [`ApiError::Stream`] items.
    pub async fn post_stream<B>(&self, path: &str, body: &B) -> Result<ChunkStream, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let builder = self.request(&Method::POST, path).json(body);
        let response = self.dispatch(&Method::POST, path, builder).await?;
        let service = self.kind();
        let chunks = response
            .bytes_stream()
            .map_err(move |e| ApiError::Stream {
                service,
                message: e.to_string(),
            })
            .filter(|chunk| {
                let keep = !matches!(chunk, Ok(bytes) if bytes.is_empty());
                futures::future::ready(keep)
            });
        Ok(Box::pin(chunks))
    }
}

/// Drive `stream` to completion, decoding each chunk as UTF-8 (lossily) and
/// passing it to `on_chunk`. Returns the concatenated text.
///
/// # Errors
///
/// Returns the first error the stream yields; text delivered before it has
/// already reached `on_chunk`.
pub async fn collect_text<F>(mut stream: ChunkStream, mut on_chunk: F) -> Result<String, ApiError>
where
    F: FnMut(&str),
{
    let mut full = String::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        let text = String::from_utf8_lossy(&chunk);
        on_chunk(&text);
        full.push_str(&text);
    }
    Ok(full)
}
