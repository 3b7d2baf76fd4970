//! Inventory service client implementation using reqwest.

use std::path::Path;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::multipart::Form;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{
    AppError, Item, ItemPatch, ItemSubmission, LoadError, MutationError, StoreApiConfig,
};
use crate::ports::{AuthClient, InventoryClient};

/// HTTP transport for the inventory service.
///
/// Performs a single request per call. Reload sequencing after writes
/// lives in the mutation coordinator, not here.
#[derive(Clone)]
pub struct HttpStoreClient {
    base_url: Url,
    token: Option<String>,
    client: Client,
}

impl std::fmt::Debug for HttpStoreClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpStoreClient")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl HttpStoreClient {
    /// Create a client for the configured endpoint, attaching `token`
    /// as a bearer credential when present.
    pub fn new(config: &StoreApiConfig, token: Option<String>) -> Result<Self, AppError> {
        let base_url = Url::parse(&config.api_url).map_err(|e| {
            AppError::config_error(format!("Invalid API URL '{}': {}", config.api_url, e))
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { base_url, token, client })
    }

    /// Resolve a path against the service base URL.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn send_mutation(&self, request: RequestBuilder) -> Result<Response, MutationError> {
        let response = self
            .authorized(request)
            .send()
            .map_err(|e| MutationError::TransportFailure(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(MutationError::NotFound);
        }

        let body = response.text().unwrap_or_default();
        let reason = extract_error_detail(&body).unwrap_or_else(|| fallback_reason(status, &body));
        Err(MutationError::ServerRejected { status: status.as_u16(), reason })
    }
}

fn submission_form(submission: &ItemSubmission) -> Result<Form, MutationError> {
    let mut form = Form::new()
        .text("title", submission.title.clone())
        .text("price", format!("{:.2}", submission.price))
        .text("category", submission.category.as_str());
    if let Some(path) = &submission.image {
        form = attach_image(form, path)?;
    }
    Ok(form)
}

fn patch_form(patch: &ItemPatch) -> Result<Form, MutationError> {
    let mut form = Form::new();
    if let Some(title) = &patch.title {
        form = form.text("title", title.clone());
    }
    if let Some(price) = patch.price {
        form = form.text("price", format!("{:.2}", price));
    }
    if let Some(category) = patch.category {
        form = form.text("category", category.as_str());
    }
    if let Some(sold) = patch.sold {
        form = form.text("sold", sold.to_string());
    }
    if let Some(path) = &patch.image {
        form = attach_image(form, path)?;
    }
    Ok(form)
}

fn attach_image(form: Form, path: &Path) -> Result<Form, MutationError> {
    form.file("image", path).map_err(|e| {
        MutationError::TransportFailure(format!("Failed to read image {}: {}", path.display(), e))
    })
}

fn decode_item(response: Response) -> Result<Item, MutationError> {
    response
        .json::<Item>()
        .map_err(|e| MutationError::TransportFailure(format!("Failed to parse response: {}", e)))
}

/// Pull a human-readable message out of a service error body.
///
/// The service reports errors as `{"detail": "..."}`; a generic
/// `{"message": "..."}` is accepted as a fallback.
fn extract_error_detail(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(detail) = parsed.get("detail").and_then(|detail| detail.as_str()) {
        return Some(detail.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

fn fallback_reason(status: StatusCode, body: &str) -> String {
    if !body.trim().is_empty() {
        body.trim().to_string()
    } else if status == StatusCode::UNAUTHORIZED {
        "Unauthorized".to_string()
    } else if status.is_server_error() {
        "Server error".to_string()
    } else {
        "Inventory service request failed".to_string()
    }
}

impl InventoryClient for HttpStoreClient {
    fn list_items(&self) -> Result<Vec<Item>, LoadError> {
        let response = self
            .authorized(self.client.get(self.url("/items")))
            .send()
            .map_err(|e| LoadError::TransportFailure(e.to_string()))?;

        let status = response.status();
        let body = response.text().unwrap_or_default();

        if !status.is_success() {
            let reason =
                extract_error_detail(&body).unwrap_or_else(|| fallback_reason(status, &body));
            return Err(LoadError::TransportFailure(format!(
                "{} (status {})",
                reason,
                status.as_u16()
            )));
        }

        serde_json::from_str(&body).map_err(|e| LoadError::MalformedResponse(e.to_string()))
    }

    fn create_item(&self, submission: &ItemSubmission) -> Result<Item, MutationError> {
        let form = submission_form(submission)?;
        let response = self.send_mutation(self.client.post(self.url("/items")).multipart(form))?;
        decode_item(response)
    }

    fn update_item(&self, id: &str, patch: &ItemPatch) -> Result<Item, MutationError> {
        let form = patch_form(patch)?;
        let response = self
            .send_mutation(self.client.put(self.url(&format!("/items/{}", id))).multipart(form))?;
        decode_item(response)
    }

    fn delete_item(&self, id: &str) -> Result<(), MutationError> {
        self.send_mutation(self.client.delete(self.url(&format!("/items/{}", id))))?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl AuthClient for HttpStoreClient {
    fn login(&self, username: &str, password: &str) -> Result<String, MutationError> {
        let response = self
            .send_mutation(self.client.post(self.url("/auth/login")).json(&LoginRequest {
                username,
                password,
            }))?;

        let token: TokenResponse = response.json().map_err(|e| {
            MutationError::TransportFailure(format!("Failed to parse login response: {}", e))
        })?;
        Ok(token.access_token)
    }
}
