//! Request lifecycle for calculator submissions.
//!
//! [`RequestController`] owns the single [`RequestState`] and is the only
//! writer of it:
//!
//! ```text
//! Idle ──submit(invalid)──▶ Failed
//! Idle ──submit(valid)────▶ Loading ──ok──▶ Succeeded
//!                                   └─err─▶ Failed
//! Succeeded | Failed ──submit──▶ Loading | Failed
//! ```
//!
//! A submission is split into [`RequestController::begin`] and
//! [`RequestController::complete`] so a front end can suspend while the
//! network call runs; [`RequestController::submit`] does both in one go.
//! Every submission gets a fresh, increasing id and only the latest one may
//! complete, so a slow earlier response can never overwrite a newer state.

use tracing::{debug, info, warn};

use crate::models::{FormInput, RequestState, SalaryRequest, SalaryResult};
use crate::service::{SalaryService, ServiceError};

/// Shown when the salary service could not be reached at all.
pub const CONNECTIVITY_MESSAGE: &str =
    "Cannot connect to server. Please make sure the backend server is running and reachable.";

/// Shown when a failure carries no usable text.
pub const FALLBACK_MESSAGE: &str = "Failed to calculate salary breakdown. Please try again.";

/// Monotonic submission identifier.
pub type RequestId = u64;

/// A validated submission waiting for its network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: RequestId,
    pub request: SalaryRequest,
}

/// Picks the message shown for a failed request.
///
/// Connectivity failures get [`CONNECTIVITY_MESSAGE`]. Anything else uses,
/// in order: the non-empty `error` field of the response body, the error's
/// own message, then [`FALLBACK_MESSAGE`].
pub fn classify_error(error: &ServiceError) -> String {
    if error.is_connectivity() {
        return CONNECTIVITY_MESSAGE.to_string();
    }

    if let Some(body_error) = error.body_error().filter(|text| !text.trim().is_empty()) {
        return body_error.to_string();
    }

    let own = error.to_string();
    if !own.trim().is_empty() {
        return own;
    }

    FALLBACK_MESSAGE.to_string()
}

#[derive(Debug, Default)]
pub struct RequestController {
    state: RequestState,
    last_id: RequestId,
    in_flight: Option<RequestId>,
}

impl RequestController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// True while a submission is waiting on the service. Front ends use
    /// this to disable the submit control.
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Validates `form` and, if it passes, enters `Loading`.
    ///
    /// Returns the request to send, or `None` when validation failed (the
    /// state is then `Failed` with the validation message and no request
    /// must be sent). Either way any earlier in-flight request is
    /// superseded.
    pub fn begin(
        &mut self,
        form: &FormInput,
    ) -> Option<PendingRequest> {
        self.last_id += 1;
        let id = self.last_id;

        match form.validate() {
            Err(err) => {
                debug!(id, field = err.field().as_str(), "form rejected");
                self.in_flight = None;
                self.transition(RequestState::Failed(err.to_string()));
                None
            }
            Ok(request) => {
                self.in_flight = Some(id);
                self.transition(RequestState::Loading);
                Some(PendingRequest { id, request })
            }
        }
    }

    /// Applies the outcome of request `id`.
    ///
    /// Returns `false` and leaves the state untouched when `id` is not the
    /// request currently in flight.
    pub fn complete(
        &mut self,
        id: RequestId,
        outcome: Result<SalaryResult, ServiceError>,
    ) -> bool {
        if self.in_flight != Some(id) {
            warn!(id, latest = self.last_id, "dropping stale salary response");
            return false;
        }
        self.in_flight = None;

        let next = match outcome {
            Ok(result) => RequestState::Succeeded(result),
            Err(error) => {
                warn!(id, %error, "salary request failed");
                RequestState::Failed(classify_error(&error))
            }
        };
        self.transition(next);
        true
    }

    /// Validates, calls `service` once, and records the outcome.
    pub async fn submit(
        &mut self,
        service: &dyn SalaryService,
        form: &FormInput,
    ) -> &RequestState {
        if let Some(pending) = self.begin(form) {
            debug!(id = pending.id, request = %pending.request, "calling salary service");
            let outcome = service.calculate(&pending.request).await;
            self.complete(pending.id, outcome);
        }
        &self.state
    }

    fn transition(
        &mut self,
        next: RequestState,
    ) {
        info!(from = self.state.name(), to = next.name(), "request state changed");
        self.state = next;
    }
}
