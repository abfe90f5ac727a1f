// Request body decoding for schema uploads
use axum::{
    body::Bytes,
    extract::rejection::{BytesRejection, FailedToBufferBody},
    http::{header::CONTENT_TYPE, HeaderMap},
};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Why a request body could not be turned into a value
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("request body exceeds {limit} bytes")]
    TooLarge { limit: usize },

    #[error("request body is empty")]
    Empty,

    #[error("failed to read request body: {0}")]
    Read(String),

    #[error("invalid YAML body: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),
}

/// Wire format of a request body, picked from its `Content-Type`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    Json,
    Yaml,
}

impl BodyFormat {
    /// JSON for `application/json` and `+json` types; YAML for everything else,
    /// including a missing header (JSON documents are valid YAML anyway).
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        let essence = content_type
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();

        if essence == "application/json" || essence.ends_with("+json") {
            BodyFormat::Json
        } else {
            BodyFormat::Yaml
        }
    }
}

/// Reads and deserializes request bodies with a byte limit
#[derive(Debug, Clone, Copy)]
pub struct BodyDecoder {
    limit: usize,
}

impl BodyDecoder {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Decode a buffered body as `T`.
    ///
    /// `body` comes from the `Bytes` extractor under a `DefaultBodyLimit`
    /// of `limit()` bytes, so an oversized body arrives as a rejection.
    /// Unknown fields are tolerated: `T` decides what it accepts.
    pub fn decode<T: DeserializeOwned>(
        &self,
        headers: &HeaderMap,
        body: Result<Bytes, BytesRejection>,
    ) -> Result<T, DecodeError> {
        let bytes = body.map_err(|rejection| self.rejection_error(rejection))?;

        self.decode_bytes(BodyFormat::from_headers(headers), &bytes)
    }

    pub fn decode_bytes<T: DeserializeOwned>(
        &self,
        format: BodyFormat,
        bytes: &[u8],
    ) -> Result<T, DecodeError> {
        if bytes.len() > self.limit {
            return Err(DecodeError::TooLarge { limit: self.limit });
        }
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(DecodeError::Empty);
        }

        match format {
            BodyFormat::Json => Ok(serde_json::from_slice(bytes)?),
            BodyFormat::Yaml => Ok(serde_yaml::from_slice(bytes)?),
        }
    }

    fn rejection_error(&self, rejection: BytesRejection) -> DecodeError {
        match rejection {
            BytesRejection::FailedToBufferBody(FailedToBufferBody::LengthLimitError(_)) => {
                DecodeError::TooLarge { limit: self.limit }
            }
            other => DecodeError::Read(other.body_text()),
        }
    }
}
