use std::sync::{Arc, LazyLock};

use anyhow::Context;
use tracing::{debug, warn};
use url::Url;
use vernan_extern_contracts::contact::{ContactApiResponse, ContactApiService};
use vernan_models::contact::ContactRequest;

use crate::http::HttpClient;

const CONTACT_ENDPOINT: &str = "https://vernanbackend.ezlab.in/api/contact-us/";

static DEFAULT_ENDPOINT: LazyLock<Url> = LazyLock::new(|| CONTACT_ENDPOINT.parse().unwrap());

#[derive(Debug, Clone)]
pub struct ContactApiServiceImpl {
    config: ContactApiServiceConfig,
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct ContactApiServiceConfig {
    endpoint: Arc<Url>,
}

impl ContactApiServiceConfig {
    pub fn new(endpoint_override: Option<Url>) -> Self {
        Self {
            endpoint: endpoint_override
                .unwrap_or_else(|| DEFAULT_ENDPOINT.clone())
                .into(),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ContactApiServiceImpl {
    pub fn new(config: ContactApiServiceConfig) -> anyhow::Result<Self> {
        Ok(Self {
            config,
            http: HttpClient::new()?,
        })
    }
}

impl ContactApiService for ContactApiServiceImpl {
    async fn submit(&self, request: ContactRequest) -> anyhow::Result<ContactApiResponse> {
        let response = self
            .http
            .post((*self.config.endpoint).clone())
            .json(&request)
            .send()
            .await
            .context("Failed to send contact request")?;

        let status = response.status();
        if status.is_success() {
            debug!(%status, "contact request accepted");
            return Ok(ContactApiResponse::Accepted);
        }

        // An unreadable body is still a rejection, just without a message.
        let message = match response.bytes().await {
            Ok(body) => rejection_message(&body),
            Err(err) => {
                warn!("Failed to read contact rejection body: {err}");
                None
            }
        };

        warn!(%status, ?message, "contact request rejected");
        Ok(ContactApiResponse::Rejected { message })
    }
}

/// Extracts a displayable `message` from a rejection body. Strings, non-zero
/// numbers and `true` are shown as text; anything else, including an empty
/// string, yields `None`.
fn rejection_message(body: &[u8]) -> Option<String> {
    let body = serde_json::from_slice::<serde_json::Value>(body).ok()?;
    match body.get("message")? {
        serde_json::Value::String(message) if !message.is_empty() => Some(message.clone()),
        serde_json::Value::Number(number) if number.as_f64() != Some(0.0) => {
            Some(number.to_string())
        }
        serde_json::Value::Bool(true) => Some("true".into()),
        _ => None,
    }
}
