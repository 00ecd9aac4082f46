//! Lead submission handler
//!
//! Persistence must succeed before the Telegram relay is attempted; relay
//! problems are reported in the response, never raised.

use crate::{ApiError, ApiResult, AppState, CreateLeadRequest, LeadResponse};

use lead_core::{ErrorLocation, LEAD_COLLECTION, Lead};
use lead_notify::NotificationOutcome;

use std::panic::Location;

use axum::{Json, extract::State};
use log::{info, warn};

/// POST /api/lead
///
/// Validate the submission, write it to the document store, then relay the
/// alert best-effort.
pub async fn create_lead(
    State(state): State<AppState>,
    Json(request): Json<CreateLeadRequest>,
) -> ApiResult<Json<LeadResponse>> {
    let lead = Lead::from(request);
    lead.validate()?;

    // 1) Persist; any failure stops the request before notification
    let store = state.store.as_ref().ok_or_else(|| ApiError::Persistence {
        message: "database not configured".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;
    let id = store.create_document(LEAD_COLLECTION, &lead).await?;

    info!("Lead persisted: id={}", id);

    // 2) Relay best-effort; the outcome goes into the response
    let outcome = match state.notifier.as_ref() {
        Some(notifier) => match notifier.send_lead_alert(&lead).await {
            Ok(()) => NotificationOutcome::Sent,
            Err(e) => {
                warn!("Telegram delivery failed for lead {}: {}", id, e);
                NotificationOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        },
        None => NotificationOutcome::Skipped,
    };

    Ok(Json(LeadResponse::from_outcome(id, &outcome)))
}
