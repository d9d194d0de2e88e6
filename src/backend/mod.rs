//! HTTP client for the remote FlashFood backend.
//!
//! The backend is a black box exposing one read (`GET`) and one write (`POST`)
//! endpoint per entity kind, all answering with the `{EC, EM, data}` envelope
//! described in [`crate::model::envelope`]. The client takes its base URL from
//! configuration so tests can point it at a mockito server.

pub mod paths;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::backend::BackendError;
use crate::model::envelope::ResponseEnvelope;

#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Creates a client for the backend at `base_url` (no trailing slash required).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Reads the full list of records behind an entity's read endpoint.
    ///
    /// Succeeds only when the envelope code is the success sentinel and `data` is
    /// an array whose items all deserialize; everything else is an error for the
    /// caller to absorb.
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, BackendError> {
        let envelope = self.get_envelope(path).await?;

        if !envelope.is_success() {
            return Err(BackendError::Envelope {
                path: path.to_string(),
                code: envelope.error_code,
                message: envelope.message(),
            });
        }

        envelope.as_list().ok_or_else(|| BackendError::MalformedData {
            path: path.to_string(),
            reason: "expected an array in the data field".to_string(),
        })
    }

    /// Reads a single record (wallet lookups).
    pub async fn get_one<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let envelope = self.get_envelope(path).await?;

        if !envelope.is_success() {
            return Err(BackendError::Envelope {
                path: path.to_string(),
                code: envelope.error_code,
                message: envelope.message(),
            });
        }

        envelope
            .as_record()
            .ok_or_else(|| BackendError::MalformedData {
                path: path.to_string(),
                reason: "expected a record in the data field".to_string(),
            })
    }

    /// Submits a synthesized record to an entity's write endpoint.
    ///
    /// The request carries a `generated=true` query flag so the backend can tell
    /// seeded records from organic ones. A creation only counts when the envelope
    /// code is the success sentinel and `data` holds the created record.
    pub async fn create<P, T>(&self, path: &str, payload: &P) -> Result<T, BackendError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.post_envelope(path, payload, &[("generated", "true")])
            .await
    }

    /// Registers an account through the auth endpoints (no generated flag).
    pub async fn register<P, T>(&self, path: &str, payload: &P) -> Result<T, BackendError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.post_envelope(path, payload, &[]).await
    }

    async fn get_envelope(&self, path: &str) -> Result<ResponseEnvelope, BackendError> {
        let url = format!("{}{}", self.base_url, path);

        let response =
            self.http
                .get(&url)
                .send()
                .await
                .map_err(|source| BackendError::Transport {
                    path: path.to_string(),
                    source,
                })?;

        response
            .json()
            .await
            .map_err(|source| BackendError::Transport {
                path: path.to_string(),
                source,
            })
    }

    async fn post_envelope<P, T>(
        &self,
        path: &str,
        payload: &P,
        query: &[(&str, &str)],
    ) -> Result<T, BackendError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.http.post(&url).json(payload);
        if !query.is_empty() {
            request = request.query(query);
        }

        let envelope: ResponseEnvelope = request
            .send()
            .await
            .map_err(|source| BackendError::Transport {
                path: path.to_string(),
                source,
            })?
            .json()
            .await
            .map_err(|source| BackendError::Transport {
                path: path.to_string(),
                source,
            })?;

        if !envelope.is_success() {
            return Err(BackendError::Envelope {
                path: path.to_string(),
                code: envelope.error_code,
                message: envelope.message(),
            });
        }

        envelope
            .as_record()
            .ok_or_else(|| BackendError::MalformedData {
                path: path.to_string(),
                reason: "creation response carried no data".to_string(),
            })
    }
}
