//! View controller: orchestrates store and gateway for one resource view.
//!
//! Lifecycle per view: `initialize` loads the collection, operator actions
//! mutate single records, and every successful mutation triggers a full
//! refetch so server-computed fields (recomputed statuses, denormalized
//! counts) are reflected. Mutations on different record ids may be in
//! flight concurrently; each completion only touches its own record's busy
//! flag and triggers its own refresh. A slower stale refresh can
//! transiently overwrite a newer one — accepted, since the backend is the
//! sole source of truth and the next reload converges.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

use crate::error::{ActionError, GatewayError};
use crate::gateway::{Gateway, Routed};
use crate::models::Resource;
use crate::query::{derive, DerivedPage, QuerySpec};
use crate::store::ResourceStore;

// ============================================================================
// ViewPhase
// ============================================================================

/// Coarse lifecycle of a resource view.
///
/// Per-record mutation state lives in the pending-action map, not here;
/// the view stays `Ready` and interactive while individual records are
/// busy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewPhase {
    /// Nothing loaded yet.
    #[default]
    Idle,
    /// Initial load in flight.
    Loading,
    /// Collection loaded; actions available.
    Ready,
    /// Load failed; `initialize` is the manual retry entry point.
    Error(String),
}

// ============================================================================
// ActionKind
// ============================================================================

/// An operator action on one record.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionKind {
    /// Approve the record.
    Approve,
    /// Reject the record with a reason. An empty reason fails validation
    /// locally; no call is made.
    Reject { reason: String },
    /// Change the record's status, with an optional operator note.
    SetStatus { status: String, note: Option<String> },
    /// Delete the record. Removal from the store happens only after the
    /// server confirms.
    Delete,
    /// Apply an edit payload.
    Edit { payload: Value },
}

impl ActionKind {
    /// Short verb for logging.
    fn verb(&self) -> &'static str {
        match self {
            ActionKind::Approve => "approve",
            ActionKind::Reject { .. } => "reject",
            ActionKind::SetStatus { .. } => "set_status",
            ActionKind::Delete => "delete",
            ActionKind::Edit { .. } => "edit",
        }
    }

    /// Client-side required-field checks, run before any dispatch.
    fn validate(&self) -> Result<(), ActionError> {
        match self {
            ActionKind::Reject { reason } if reason.trim().is_empty() => {
                Err(ActionError::Validation {
                    field: "reason".to_string(),
                    message: "Please enter a rejection reason.".to_string(),
                })
            }
            ActionKind::SetStatus { status, .. } if status.trim().is_empty() => {
                Err(ActionError::Validation {
                    field: "status".to_string(),
                    message: "A status value is required.".to_string(),
                })
            }
            ActionKind::Edit { payload } => match payload.as_object() {
                Some(fields) if !fields.is_empty() => Ok(()),
                _ => Err(ActionError::Validation {
                    field: "payload".to_string(),
                    message: "Nothing to save.".to_string(),
                }),
            },
            _ => Ok(()),
        }
    }
}

// ============================================================================
// EditSession
// ============================================================================

/// An open edit modal: a snapshot of the record plus the operator's draft.
///
/// On a failed submit the session stays open with the error set and the
/// draft untouched, so entered values are preserved.
#[derive(Debug, Clone)]
pub struct EditSession<R: Resource> {
    /// Id of the record being edited.
    pub record_id: String,
    /// Copy of the record when the modal opened.
    pub snapshot: R,
    /// The payload to submit, pre-filled from the snapshot.
    pub draft: Value,
    /// Error from the last failed submit, if any.
    pub error: Option<String>,
}

// ============================================================================
// ViewController
// ============================================================================

struct Inner<R: Resource> {
    store: ResourceStore<R>,
    phase: ViewPhase,
    pending: HashMap<String, ActionKind>,
}

/// Controller for one resource view.
///
/// Clones share state, so independent tasks (one per user interaction)
/// can run actions concurrently. The internal lock is never held across
/// an await.
pub struct ViewController<R: Resource + Routed> {
    gateway: Gateway<R>,
    inner: Arc<Mutex<Inner<R>>>,
}

impl<R: Resource + Routed> Clone for ViewController<R> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Resource + Routed> std::fmt::Debug for ViewController<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewController")
            .field("kind", &R::KIND)
            .finish_non_exhaustive()
    }
}

impl<R: Resource + Routed> ViewController<R> {
    /// Create a controller over a gateway, starting `Idle` with an empty
    /// store.
    pub fn new(gateway: Gateway<R>) -> Self {
        Self {
            gateway,
            inner: Arc::new(Mutex::new(Inner {
                store: ResourceStore::new(),
                phase: ViewPhase::Idle,
                pending: HashMap::new(),
            })),
        }
    }

    /// Current view phase.
    pub fn phase(&self) -> ViewPhase {
        self.inner.lock().unwrap().phase.clone()
    }

    /// Snapshot of the underlying store.
    pub fn store(&self) -> ResourceStore<R> {
        self.inner.lock().unwrap().store.clone()
    }

    /// Record ids with a mutation currently in flight.
    pub fn mutating_ids(&self) -> Vec<String> {
        self.inner.lock().unwrap().pending.keys().cloned().collect()
    }

    /// Check whether a record has a pending mutation.
    pub fn is_mutating(&self, id: &str) -> bool {
        self.inner.lock().unwrap().pending.contains_key(id)
    }

    /// Derive the visible page for rendering. Pure over current state.
    pub fn derive(&self, spec: &QuerySpec) -> DerivedPage<R> {
        derive(&self.inner.lock().unwrap().store, spec)
    }

    /// Load the collection.
    ///
    /// `Idle -> Loading -> Ready` on success, `-> Error` on failure.
    /// Also the manual retry entry point after an `Error`.
    pub async fn initialize(&self) -> Result<(), GatewayError> {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.phase = ViewPhase::Loading;
            inner.store.begin_load();
        }

        match self.gateway.list(None).await {
            Ok(records) => {
                debug!(kind = R::KIND, count = records.len(), "view initialized");
                let mut inner = self.inner.lock().unwrap();
                inner.store.replace_all(records);
                inner.phase = ViewPhase::Ready;
                Ok(())
            }
            Err(err) => {
                let mut inner = self.inner.lock().unwrap();
                inner.store.fail_load(err.user_message());
                inner.phase = ViewPhase::Error(err.user_message());
                Err(err)
            }
        }
    }

    /// Run an operator action against one record.
    ///
    /// Guarded: validation failures and duplicate actions on a record
    /// with a mutation already pending are rejected locally without any
    /// network call. On success the whole collection is refetched (full
    /// refresh, not a local patch), except for deletes, which remove the
    /// confirmed record directly. On failure the busy flag is cleared and
    /// the collection is left untouched.
    pub async fn perform_action(&self, id: &str, action: ActionKind) -> Result<(), ActionError> {
        action.validate()?;

        {
            let mut inner = self.inner.lock().unwrap();
            if inner.pending.contains_key(id) {
                return Err(ActionError::Conflict { id: id.to_string() });
            }
            inner.pending.insert(id.to_string(), action.clone());
            inner.store.mark_busy(id, true);
        }

        let verb = action.verb();
        let result = self.dispatch(id, &action).await;

        match result {
            Ok(()) => {
                let is_delete = matches!(action, ActionKind::Delete);
                {
                    let mut inner = self.inner.lock().unwrap();
                    inner.pending.remove(id);
                    inner.store.mark_busy(id, false);
                    if is_delete {
                        inner.store.remove_by_id(id);
                    }
                }
                if !is_delete {
                    self.refresh().await;
                }
                Ok(())
            }
            Err(err) => {
                warn!(kind = R::KIND, id, verb, error = %err, "action failed");
                let mut inner = self.inner.lock().unwrap();
                inner.pending.remove(id);
                inner.store.mark_busy(id, false);
                Err(ActionError::Gateway(err))
            }
        }
    }

    /// Open an edit session for a record. Returns `None` when the record
    /// is not in the store.
    pub fn begin_edit(&self, id: &str) -> Option<EditSession<R>> {
        let inner = self.inner.lock().unwrap();
        let record = inner.store.get(id)?.clone();
        let draft = serde_json::to_value(&record).unwrap_or(Value::Null);
        Some(EditSession {
            record_id: record.id().to_string(),
            snapshot: record,
            draft,
            error: None,
        })
    }

    /// Submit an edit session.
    ///
    /// On success the collection is refreshed and the caller closes the
    /// modal. On failure the session's error is set and its draft kept,
    /// so the operator's entered values survive.
    pub async fn submit_edit(&self, session: &mut EditSession<R>) -> Result<(), ActionError> {
        let action = ActionKind::Edit {
            payload: session.draft.clone(),
        };
        match self.perform_action(&session.record_id, action).await {
            Ok(()) => {
                session.error = None;
                Ok(())
            }
            Err(err) => {
                session.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    async fn dispatch(&self, id: &str, action: &ActionKind) -> Result<(), GatewayError> {
        match action {
            ActionKind::Approve => self.gateway.approve(id).await,
            ActionKind::Reject { reason } => self.gateway.reject(id, reason).await,
            ActionKind::SetStatus { status, note } => {
                self.gateway.set_status(id, status, note.as_deref()).await
            }
            ActionKind::Delete => self.gateway.remove(id).await,
            ActionKind::Edit { payload } => {
                self.gateway.update(id, payload).await.map(|_| ())
            }
        }
    }

    /// Full refetch after a successful mutation.
    ///
    /// The mutation itself already succeeded, so a failed refresh does not
    /// fail the action; it moves the view to `Error` (with the store
    /// `Failed`, so derived views render empty) and `initialize` reloads.
    async fn refresh(&self) {
        self.inner.lock().unwrap().store.begin_load();
        match self.gateway.list(None).await {
            Ok(records) => {
                let mut inner = self.inner.lock().unwrap();
                inner.store.replace_all(records);
                inner.phase = ViewPhase::Ready;
            }
            Err(err) => {
                warn!(kind = R::KIND, error = %err, "post-action refresh failed");
                let mut inner = self.inner.lock().unwrap();
                inner.store.fail_load(err.user_message());
                inner.phase = ViewPhase::Error(err.user_message());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockIdentityStore, MockResponse};
    use crate::config::ApiConfig;
    use crate::models::KycSubmission;
    use crate::session::Session;
    use crate::traits::Response;
    use bytes::Bytes;

    fn kyc_controller(http: Arc<MockHttpClient>) -> ViewController<KycSubmission> {
        let config = ApiConfig::default().with_base_url("http://test");
        let session = Session::new(Arc::new(MockIdentityStore::new()));
        ViewController::new(Gateway::new(http, config, session))
    }

    fn list_body() -> Bytes {
        Bytes::from(
            r#"[
                {"_id": "k1", "name": "Ada", "kycStatus": "pending"},
                {"_id": "k2", "name": "Bob", "kycStatus": "approved"}
            ]"#,
        )
    }

    #[tokio::test]
    async fn test_initialize_reaches_ready() {
        let http = Arc::new(MockHttpClient::new());
        http.set_response(
            "http://test/api/kyc/admin/kyc-submissions",
            MockResponse::Success(Response::new(200, list_body())),
        );

        let controller = kyc_controller(http);
        assert_eq!(controller.phase(), ViewPhase::Idle);
        controller.initialize().await.unwrap();
        assert_eq!(controller.phase(), ViewPhase::Ready);
        assert_eq!(controller.store().len(), 2);
    }

    #[tokio::test]
    async fn test_initialize_failure_surfaces_error_phase() {
        let http = Arc::new(MockHttpClient::new());
        http.set_response(
            "http://test/api/kyc/admin/kyc-submissions",
            MockResponse::Error(crate::traits::HttpError::ConnectionFailed(
                "refused".to_string(),
            )),
        );

        let controller = kyc_controller(http);
        assert!(controller.initialize().await.is_err());
        assert!(matches!(controller.phase(), ViewPhase::Error(_)));
    }

    #[tokio::test]
    async fn test_failed_refresh_after_action_moves_view_to_error() {
        let http = Arc::new(MockHttpClient::new());
        http.set_response(
            "http://test/api/kyc/admin/kyc-submissions",
            MockResponse::Success(Response::new(200, list_body())),
        );
        http.set_response(
            "http://test/api/kyc/admin/approve/k1",
            MockResponse::Success(Response::new(200, Bytes::from(r#"{"success": true}"#))),
        );

        let controller = kyc_controller(Arc::clone(&http));
        controller.initialize().await.unwrap();

        // The mutation lands, then the refetch hits a dead connection.
        http.set_response(
            "http://test/api/kyc/admin/kyc-submissions",
            MockResponse::Error(crate::traits::HttpError::ConnectionFailed(
                "refused".to_string(),
            )),
        );
        controller
            .perform_action("k1", ActionKind::Approve)
            .await
            .unwrap();

        // The action succeeded, but phase and store agree the view needs a
        // reload before anything is derivable.
        assert!(matches!(controller.phase(), ViewPhase::Error(_)));
        assert!(matches!(
            controller.store().state(),
            crate::store::LoadState::Failed(_)
        ));
        assert!(controller.derive(&QuerySpec::new()).page_items.is_empty());
    }

    #[tokio::test]
    async fn test_reject_with_empty_reason_is_local_validation_error() {
        let http = Arc::new(MockHttpClient::new());
        let controller = kyc_controller(Arc::clone(&http));

        let err = controller
            .perform_action(
                "k1",
                ActionKind::Reject {
                    reason: "   ".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(err.is_local());
        assert!(matches!(err, ActionError::Validation { .. }));
        // No gateway call was made.
        assert!(http.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_edit_with_empty_payload_is_rejected_locally() {
        let http = Arc::new(MockHttpClient::new());
        let controller = kyc_controller(Arc::clone(&http));

        let err = controller
            .perform_action(
                "k1",
                ActionKind::Edit {
                    payload: serde_json::json!({}),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ActionError::Validation { .. }));
        assert!(http.get_requests().is_empty());
    }
}
