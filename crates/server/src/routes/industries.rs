use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use common::patch::double_option;
use service::industry_service;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize)]
pub struct CreateIndustryInput {
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
    #[serde(default)]
    pub description: Option<String>,
}

/// PATCH body. Nullable fields use the double-option helper so an absent
/// field is left untouched while an explicit `null` clears it.
#[derive(Debug, Deserialize)]
pub struct UpdateIndustryInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub parent_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

#[utoipa::path(
    get, path = "/industries/", tag = "industries",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::industry::Model>>, JsonApiError> {
    let list = industry_service::list_industries(&state.db).await?;
    info!(count = list.len(), "list industries");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/industries/", tag = "industries",
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Conflict")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateIndustryInput>,
) -> Result<Json<models::industry::Model>, JsonApiError> {
    let made = industry_service::create_industry(
        &state.db,
        &input.name,
        input.parent_id,
        input.description.as_deref(),
    )
    .await?;
    info!(id = %made.id, name = %made.name, "created industry");
    Ok(Json(made))
}

#[utoipa::path(
    patch, path = "/industries/{id}", tag = "industries",
    params(("id" = Uuid, Path, description = "Industry ID")),
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateIndustryInput>,
) -> Result<Json<models::industry::Model>, JsonApiError> {
    let updated = industry_service::update_industry(
        &state.db,
        id,
        input.name.as_deref(),
        input.parent_id,
        input.description,
    )
    .await?;
    info!(id = %updated.id, "updated industry");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/industries/{id}", tag = "industries",
    params(("id" = Uuid, Path, description = "Industry ID")),
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
    if industry_service::delete_industry(&state.db, id).await? {
        info!(id = %id, "deleted industry");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::new(
            StatusCode::NOT_FOUND,
            "Not Found",
            Some("industry not found".into()),
        ))
    }
}
