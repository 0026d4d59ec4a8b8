//! Line-delimited JSON transport
//!
//! Each input line is a request `{"code": "..."}`; each output line is the
//! descriptor or `{"error": "..."}`. Requests are independent and answered
//! in the order they arrive.

use std::io;

use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::error::{DistillError, Result};
use crate::extract::extract_source;
use crate::schema::ComponentDescriptor;

/// One extraction request
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractRequest {
    /// Full component source text
    pub code: String,
}

/// Answer to one request: the descriptor, or an error and nothing else
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ExtractResponse {
    Success(ComponentDescriptor),
    Failure { error: String },
}

impl ExtractResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Decode one request line and run extraction on it
pub fn handle_request(line: &str) -> ExtractResponse {
    let outcome = serde_json::from_str::<ExtractRequest>(line)
        .map_err(|e| DistillError::InvalidRequest {
            message: e.to_string(),
        })
        .and_then(|request| {
            tracing::debug!(bytes = request.code.len(), "handling extraction request");
            extract_source(&request.code)
        });

    match outcome {
        Ok(descriptor) => ExtractResponse::Success(descriptor),
        Err(e) => {
            tracing::warn!(error = %e, "extraction request failed");
            ExtractResponse::Failure { error: e.to_string() }
        }
    }
}

/// Serve requests from `reader` until end of input.
///
/// Returns the number of requests answered. Blank lines are skipped.
pub async fn serve<R, W>(reader: R, mut writer: W) -> Result<usize>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    let mut answered = 0;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        // Extraction is CPU-bound; keep it off the reactor
        let response = tokio::task::spawn_blocking(move || handle_request(&line))
            .await
            .map_err(|e| DistillError::Io(io::Error::other(e)))?;

        let mut encoded = serde_json::to_string(&response)?;
        encoded.push('\n');
        writer.write_all(encoded.as_bytes()).await?;
        writer.flush().await?;
        answered += 1;
    }

    tracing::debug!(answered, "input closed");
    Ok(answered)
}

/// Serve on the process's stdin and stdout
pub async fn serve_stdio() -> Result<usize> {
    serve(tokio::io::stdin(), tokio::io::stdout()).await
}
