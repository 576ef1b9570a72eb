use axum::{
    extract::{Form, State},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::{error, info};

use crate::{AppError, db::NewResponse, export, router::AppState, view};

/// Render the current listing.
pub async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let responses = state.store.list_all().await?;
    Ok(Html(view::render_index(&responses)))
}

/// Accept a submission and bounce back to the listing. The redirect happens
/// whether or not the insert succeeded; a failure is only logged.
pub async fn submit_handler(
    State(state): State<AppState>,
    Form(new): Form<NewResponse>,
) -> Redirect {
    match state.store.insert(new).await {
        Ok(resp) => info!(id = resp.id, "stored survey response"),
        Err(e) => error!(error = %e, "failed to store survey response"),
    }
    Redirect::to("/")
}

/// Stream every response back as an `.xlsx` attachment.
pub async fn download_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let responses = state.store.list_all().await?;
    let bytes = export::workbook_bytes(&responses)?;

    let headers = [
        (header::CONTENT_TYPE, export::XLSX_MIME),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"user_data.xlsx\"",
        ),
    ];
    Ok((headers, bytes).into_response())
}

/// Delete every response, then bounce back to the listing. Destructive,
/// irreversible, and reachable by a plain GET.
pub async fn clear_handler(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let removed = state.store.delete_all().await?;
    info!(removed, "cleared all survey responses");
    Ok(Redirect::to("/"))
}
