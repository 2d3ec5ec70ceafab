//! Remote gateway: CRUD and action verbs against the backend REST API.
//!
//! One [`Gateway`] instance serves one resource type. Every call is a
//! single network round trip; the gateway never retries and never caches,
//! so each response reflects server state at call time. Transport and HTTP
//! failures are normalized into [`GatewayError`], and the two envelope
//! shapes the backend uses (`{success, data?, message?}` and bare resource
//! JSON) both decode into the same result.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::GatewayError;
use crate::models::{Meeting, MeetingRegistration, Resource};
use crate::session::Session;
use crate::traits::{Headers, HttpClient, HttpError, Response};

pub mod routes;

pub use routes::{fill, RouteSet, Routed};

/// Response envelope some endpoints wrap their payload in.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    success: Option<bool>,
    data: Option<T>,
    #[serde(default)]
    message: Option<String>,
}

/// REST gateway for one resource type.
///
/// Cheap to clone; clones share the HTTP client and session.
pub struct Gateway<R: Resource + Routed> {
    http: Arc<dyn HttpClient>,
    config: ApiConfig,
    session: Arc<Session>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource + Routed> Clone for Gateway<R> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
            config: self.config.clone(),
            session: Arc::clone(&self.session),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource + Routed> std::fmt::Debug for Gateway<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("kind", &R::KIND)
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

impl<R: Resource + Routed> Gateway<R> {
    /// Create a gateway over the given HTTP client, config and session.
    pub fn new(http: Arc<dyn HttpClient>, config: ApiConfig, session: Arc<Session>) -> Self {
        Self {
            http,
            config,
            session,
            _resource: PhantomData,
        }
    }

    /// Fetch the full collection, optionally narrowed by status on
    /// endpoints that support the query parameter.
    pub async fn list(&self, status: Option<&str>) -> Result<Vec<R>, GatewayError> {
        let routes = R::routes();
        let mut url = self.config.endpoint(routes.list);
        if let (Some(status), true) = (status, routes.list_status_param) {
            url = format!("{}?status={}", url, urlencoding::encode(status));
        }

        debug!(kind = R::KIND, %url, "listing records");
        let response = self
            .http
            .get(&url, &self.auth_headers())
            .await
            .map_err(|e| self.transport("list", e))?;
        let response = self.ensure_success(response)?;
        Self::decode_payload::<Vec<R>>(&response)
    }

    /// Fetch a single record by id.
    pub async fn get(&self, id: &str) -> Result<R, GatewayError> {
        let template = self.route("get", R::routes().item)?;
        let url = self.config.endpoint(&fill(template, id));

        debug!(kind = R::KIND, id, "fetching record");
        let response = self
            .http
            .get(&url, &self.auth_headers())
            .await
            .map_err(|e| self.transport("get", e))?;
        let response = self.ensure_success(response)?;
        Self::decode_payload::<R>(&response)
    }

    /// Create a record.
    ///
    /// Returns the created record when the endpoint echoes one back.
    pub async fn create<P: Serialize>(&self, payload: &P) -> Result<Option<R>, GatewayError> {
        let path = self.route("create", R::routes().create)?;
        let url = self.config.endpoint(path);
        let body = serde_json::to_string(payload)?;

        debug!(kind = R::KIND, "creating record");
        let response = self
            .http
            .post(&url, &body, &self.auth_headers())
            .await
            .map_err(|e| self.transport("create", e))?;
        let response = self.ensure_success(response)?;
        Ok(Self::decode_payload::<R>(&response).ok())
    }

    /// Update a record with an edit payload.
    ///
    /// Returns the updated record when the endpoint echoes one back.
    pub async fn update<P: Serialize>(
        &self,
        id: &str,
        payload: &P,
    ) -> Result<Option<R>, GatewayError> {
        let template = self.route("update", R::routes().update)?;
        let url = self.config.endpoint(&fill(template, id));
        let body = serde_json::to_string(payload)?;

        debug!(kind = R::KIND, id, "updating record");
        let response = self
            .http
            .put(&url, &body, &self.auth_headers())
            .await
            .map_err(|e| self.transport("update", e))?;
        let response = self.ensure_success(response)?;
        Ok(Self::decode_payload::<R>(&response).ok())
    }

    /// Delete a record.
    pub async fn remove(&self, id: &str) -> Result<(), GatewayError> {
        let template = self.route("remove", R::routes().remove)?;
        let url = self.config.endpoint(&fill(template, id));

        debug!(kind = R::KIND, id, "deleting record");
        let response = self
            .http
            .delete(&url, &self.auth_headers())
            .await
            .map_err(|e| self.transport("remove", e))?;
        self.ensure_success(response)?;
        Ok(())
    }

    /// Approve a record.
    pub async fn approve(&self, id: &str) -> Result<(), GatewayError> {
        let template = self.route("approve", R::routes().approve)?;
        self.put_action(&fill(template, id), &serde_json::json!({}), id, "approving")
            .await
    }

    /// Reject a record with a reason.
    pub async fn reject(&self, id: &str, reason: &str) -> Result<(), GatewayError> {
        let template = self.route("reject", R::routes().reject)?;
        self.put_action(
            &fill(template, id),
            &serde_json::json!({ "reason": reason }),
            id,
            "rejecting",
        )
        .await
    }

    /// Change a record's status, with an optional operator note on
    /// endpoints that accept one.
    pub async fn set_status(
        &self,
        id: &str,
        status: &str,
        note: Option<&str>,
    ) -> Result<(), GatewayError> {
        let template = self.route("set_status", R::routes().set_status)?;
        let body = match note {
            Some(note) => serde_json::json!({ "status": status, "adminNote": note }),
            None => serde_json::json!({ "status": status }),
        };
        self.put_action(&fill(template, id), &body, id, "setting status")
            .await
    }

    async fn put_action(
        &self,
        path: &str,
        body: &serde_json::Value,
        id: &str,
        verb: &str,
    ) -> Result<(), GatewayError> {
        let url = self.config.endpoint(path);
        debug!(kind = R::KIND, id, "{} record", verb);
        let response = self
            .http
            .put(&url, &body.to_string(), &self.auth_headers())
            .await
            .map_err(|e| self.transport(verb, e))?;
        self.ensure_success(response)?;
        Ok(())
    }

    fn auth_headers(&self) -> Headers {
        self.session.auth_headers()
    }

    fn route(
        &self,
        operation: &str,
        template: Option<&'static str>,
    ) -> Result<&'static str, GatewayError> {
        template.ok_or_else(|| GatewayError::Unsupported {
            operation: format!("{}/{}", R::KIND, operation),
        })
    }

    fn transport(&self, operation: &str, err: HttpError) -> GatewayError {
        let err = match err {
            HttpError::Timeout(_) => GatewayError::Timeout {
                operation: format!("{} {}", R::KIND, operation),
            },
            other => GatewayError::from(other),
        };
        warn!(kind = R::KIND, operation, error = %err, "gateway call failed");
        err
    }

    /// Reject non-2xx responses and 2xx envelopes carrying
    /// `success: false`, extracting the server's message where present.
    fn ensure_success(&self, response: Response) -> Result<Response, GatewayError> {
        if !response.is_success() {
            let message = Self::server_message(&response);
            warn!(
                kind = R::KIND,
                status = response.status,
                %message,
                "server rejected request"
            );
            return Err(GatewayError::Server {
                status: response.status,
                message,
            });
        }

        if let Ok(envelope) = response.json::<Envelope<serde_json::Value>>() {
            if envelope.success == Some(false) {
                return Err(GatewayError::Server {
                    status: response.status,
                    message: envelope.message.unwrap_or_default(),
                });
            }
        }

        Ok(response)
    }

    /// Extract a human message from an error response body.
    fn server_message(response: &Response) -> String {
        if let Ok(envelope) = response.json::<Envelope<serde_json::Value>>() {
            if let Some(message) = envelope.message {
                return message;
            }
        }
        response.text().unwrap_or_default()
    }

    /// Decode either a bare payload or an enveloped one.
    fn decode_payload<T: DeserializeOwned>(response: &Response) -> Result<T, GatewayError> {
        if let Ok(value) = response.json::<T>() {
            return Ok(value);
        }
        match response.json::<Envelope<T>>() {
            Ok(Envelope { data: Some(data), .. }) => Ok(data),
            Ok(_) => Err(GatewayError::Decode {
                message: "response envelope carried no data".to_string(),
            }),
            Err(err) => Err(GatewayError::Decode {
                message: err.to_string(),
            }),
        }
    }
}

impl Gateway<Meeting> {
    /// List the registrations for one meeting. Read-only.
    pub async fn registrations(
        &self,
        id: &str,
    ) -> Result<Vec<MeetingRegistration>, GatewayError> {
        let url = self
            .config
            .endpoint(&fill("admin/meetings/{id}/registrations", id));

        debug!(kind = Meeting::KIND, id, "listing registrations");
        let response = self
            .http
            .get(&url, &self.auth_headers())
            .await
            .map_err(|e| self.transport("registrations", e))?;
        let response = self.ensure_success(response)?;
        Self::decode_payload::<Vec<MeetingRegistration>>(&response)
    }
}
