//! HTTP request handlers, one per DHPO operation.
//!
//! Handlers bind and validate input, borrow the shared client and hand
//! the decoded record straight back as JSON. No handler inspects result
//! codes: interpreting them belongs to the caller.

use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Multipart, Query, State};
use axum::Json;
use dhpo_core::{
    CheckNewPriorAuthorizationsResponse, Direction, DownloadTransactionFileResponse,
    NewPriorAuthorizationsResponse, NewTransactionsResponse, SearchQuery,
    SearchTransactionsResponse, SetTransactionDownloadedResponse, TransactionStatus,
    TransactionType, UploadTransactionResponse,
};
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;
use crate::state::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check endpoint, no backend call involved
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /get-new-transactions
pub async fn get_new_transactions(
    State(state): State<AppState>,
) -> Result<Json<NewTransactionsResponse>, GatewayError> {
    let client = state.client.get().await?;
    Ok(Json(client.get_new_transactions().await?))
}

/// GET /get-new-prior-auth
pub async fn get_new_prior_authorizations(
    State(state): State<AppState>,
) -> Result<Json<NewPriorAuthorizationsResponse>, GatewayError> {
    let client = state.client.get().await?;
    Ok(Json(client.get_new_prior_authorizations().await?))
}

/// POST /upload-transaction, multipart body with one `file` part
pub async fn upload_transaction(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadTransactionResponse>, GatewayError> {
    let mut multipart =
        multipart.map_err(|rejection| GatewayError::Parse(rejection.body_text()))?;

    let mut file: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| GatewayError::Parse(err.body_text()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| GatewayError::Upload("file part carries no filename".to_string()))?;
        let content = field
            .bytes()
            .await
            .map_err(|err| GatewayError::Parse(err.body_text()))?;
        file = Some((file_name, content.to_vec()));
        break;
    }

    let (file_name, content) = file.ok_or_else(|| {
        GatewayError::Upload("multipart field 'file' is required".to_string())
    })?;

    tracing::info!(file_name, size = content.len(), "uploading transaction file");

    let client = state.client.get().await?;
    Ok(Json(client.upload_transaction(&content, &file_name).await?))
}

#[derive(Debug, Deserialize)]
pub struct FileIdParams {
    pub file_id: String,
}

/// GET /download-transaction-file
pub async fn download_transaction_file(
    State(state): State<AppState>,
    query: Result<Query<FileIdParams>, QueryRejection>,
) -> Result<Json<DownloadTransactionFileResponse>, GatewayError> {
    let Query(params) = query.map_err(|rejection| GatewayError::Parse(rejection.body_text()))?;
    let client = state.client.get().await?;
    Ok(Json(client.download_transaction_file(&params.file_id).await?))
}

/// POST /set-transaction-downloaded
///
/// The HTTP parameter is `file_id`; its wire counterpart is the
/// service's misspelled `fieldId`. The translation happens in the
/// client, callers never see the misspelling.
pub async fn set_transaction_downloaded(
    State(state): State<AppState>,
    query: Result<Query<FileIdParams>, QueryRejection>,
) -> Result<Json<SetTransactionDownloadedResponse>, GatewayError> {
    let Query(params) = query.map_err(|rejection| GatewayError::Parse(rejection.body_text()))?;
    let client = state.client.get().await?;
    Ok(Json(client.set_transaction_downloaded(&params.file_id).await?))
}

/// GET /check-new-prior-auth
pub async fn check_new_prior_authorizations(
    State(state): State<AppState>,
) -> Result<Json<CheckNewPriorAuthorizationsResponse>, GatewayError> {
    let client = state.client.get().await?;
    Ok(Json(client.check_new_prior_authorizations().await?))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub direction: i32,
    pub transaction_id: i32,
    pub transaction_status: i32,
    pub min_record_count: i32,
    pub max_record_count: i32,
    pub caller_license: Option<String>,
    pub e_partner: Option<String>,
    pub transaction_file_name: Option<String>,
    pub transaction_from_date: Option<String>,
    pub transaction_to_date: Option<String>,
}

/// GET /search-transactions
///
/// The three enumerated parameters are checked against their closed
/// domains before anything leaves the process. Free-text and date
/// filters pass through unvalidated; their format belongs to DHPO.
pub async fn search_transactions(
    State(state): State<AppState>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchTransactionsResponse>, GatewayError> {
    let Query(params) = query.map_err(|rejection| GatewayError::Parse(rejection.body_text()))?;

    let query = SearchQuery {
        direction: Direction::try_from(params.direction)?,
        transaction_type: TransactionType::try_from(params.transaction_id)?,
        status: TransactionStatus::try_from(params.transaction_status)?,
        min_record_count: params.min_record_count,
        max_record_count: params.max_record_count,
        caller_license: params.caller_license,
        e_partner: params.e_partner,
        transaction_file_name: params.transaction_file_name,
        transaction_from_date: params.transaction_from_date,
        transaction_to_date: params.transaction_to_date,
    };

    let client = state.client.get().await?;
    Ok(Json(client.search_transactions(&query).await?))
}
