use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use service::macro_indicator_service;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

/// Shared body for POST and PUT. The PUT is a full replacement, so an
/// omitted category resets the stored value to null instead of keeping it.
#[derive(Debug, Deserialize)]
pub struct MacroIndicatorInput {
    pub indicator_name: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[utoipa::path(
    get, path = "/macro_indicators", tag = "macro_indicators",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::macro_indicator::Model>>, JsonApiError> {
    let list = macro_indicator_service::list_macro_indicators(&state.db).await?;
    info!(count = list.len(), "list macro indicators");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/macro_indicators", tag = "macro_indicators",
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Conflict")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<MacroIndicatorInput>,
) -> Result<Json<models::macro_indicator::Model>, JsonApiError> {
    let made = macro_indicator_service::create_macro_indicator(
        &state.db,
        &input.indicator_name,
        input.category.as_deref(),
    )
    .await?;
    info!(id = %made.id, name = %made.indicator_name, "created macro indicator");
    Ok(Json(made))
}

#[utoipa::path(
    put, path = "/macro_indicators/{id}", tag = "macro_indicators",
    params(("id" = Uuid, Path, description = "Macro indicator ID")),
    responses(
        (status = 200, description = "Replaced"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Conflict")
    )
)]
pub async fn replace(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<MacroIndicatorInput>,
) -> Result<Json<models::macro_indicator::Model>, JsonApiError> {
    let replaced = macro_indicator_service::replace_macro_indicator(
        &state.db,
        id,
        &input.indicator_name,
        input.category.as_deref(),
    )
    .await?;
    info!(id = %replaced.id, "replaced macro indicator");
    Ok(Json(replaced))
}

#[utoipa::path(
    delete, path = "/macro_indicators/{id}", tag = "macro_indicators",
    params(("id" = Uuid, Path, description = "Macro indicator ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, JsonApiError> {
    if macro_indicator_service::delete_macro_indicator(&state.db, id).await? {
        info!(id = %id, "deleted macro indicator");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::new(
            StatusCode::NOT_FOUND,
            "Not Found",
            Some("macro indicator not found".into()),
        ))
    }
}
