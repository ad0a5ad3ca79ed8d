use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use galley_application::{NewEntryInput, NewEntryOutcome};
use galley_core::AppError;
use galley_domain::{EntityKind, RecordId};
use tracing::{debug, info, warn};

use crate::dto::{EntryResponse, NewEntryRequest, NewEntryResponse};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Creates linked client records from one submission.
///
/// Every failure, including an unreadable body, is reported as `400` with the
/// error envelope. Records written before a failure are not rolled back.
pub async fn new_entry_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewEntryRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<NewEntryResponse>)> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "rejected unreadable new entry payload");
        ApiError::bad_request(AppError::Validation(rejection.body_text()))
    })?;

    let outcome = state
        .new_entry_service
        .create_entry(NewEntryInput::from(payload))
        .await
        .map_err(|error| {
            warn!(%error, "new entry failed");
            ApiError::bad_request(error)
        })?;

    log_created(&outcome);

    Ok((
        StatusCode::CREATED,
        Json(NewEntryResponse {
            success: true,
            data: outcome.into(),
        }),
    ))
}

pub async fn get_entry_handler(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> ApiResult<Json<EntryResponse>> {
    let kind = EntityKind::parse(&kind)?;
    let id = RecordId::parse(&id)?;

    let record = state.new_entry_service.find_record(kind, id).await?;

    Ok(Json(EntryResponse {
        success: true,
        kind: record.kind().as_str(),
        data: record.into(),
    }))
}

fn log_created(outcome: &NewEntryOutcome) {
    if outcome.is_empty() {
        info!("new entry carried no identity fields; nothing created");
        return;
    }

    if let Some(group) = &outcome.group {
        debug!(group_id = %group.id(), "created group");
    }
    if let Some(chain) = &outcome.chain {
        debug!(chain_id = %chain.id(), "created chain");
    }
    if let Some(site) = &outcome.site {
        debug!(site_id = %site.id(), "created site");
    }
    if let Some(contact) = &outcome.contact {
        debug!(contact_id = %contact.id(), "created contact");
    }
    if let Some(supplier) = &outcome.supplier {
        debug!(supplier_id = %supplier.id(), "created supplier");
    }
}

#[cfg(test)]
mod tests;
