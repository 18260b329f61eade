use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use common::patch::double_option;
use service::company_service;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListQuery {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCompanyInput {
    pub ticker: String,
    pub company_name: String,
    #[serde(default)]
    pub base_industry_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCompanyInput {
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub base_industry_id: Option<Option<Uuid>>,
}

#[utoipa::path(
    get, path = "/companies/", tag = "companies",
    params(ListQuery),
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<models::company::Model>>, JsonApiError> {
    let skip = q.skip.unwrap_or(0);
    let limit = q.limit.unwrap_or(company_service::DEFAULT_LIST_LIMIT);
    let list = company_service::list_companies(&state.db, skip, limit).await?;
    info!(count = list.len(), skip, limit, "list companies");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/companies/", tag = "companies",
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Conflict")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateCompanyInput>,
) -> Result<Json<models::company::Model>, JsonApiError> {
    let made = company_service::create_company(
        &state.db,
        &input.ticker,
        &input.company_name,
        input.base_industry_id,
    )
    .await?;
    info!(id = %made.id, ticker = %made.ticker, "created company");
    Ok(Json(made))
}

#[utoipa::path(
    get, path = "/companies/{id}", tag = "companies",
    params(("id" = Uuid, Path, description = "Company ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<models::company::Model>, JsonApiError> {
    match company_service::get_company(&state.db, id).await? {
        Some(m) => Ok(Json(m)),
        None => Err(JsonApiError::new(
            StatusCode::NOT_FOUND,
            "Not Found",
            Some("company not found".into()),
        )),
    }
}

#[utoipa::path(
    patch, path = "/companies/{id}", tag = "companies",
    params(("id" = Uuid, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Conflict")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateCompanyInput>,
) -> Result<Json<models::company::Model>, JsonApiError> {
    let updated = company_service::update_company(
        &state.db,
        id,
        input.ticker.as_deref(),
        input.company_name.as_deref(),
        input.base_industry_id,
    )
    .await?;
    info!(id = %updated.id, "updated company");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/companies/{id}", tag = "companies",
    params(("id" = Uuid, Path, description = "Company ID")),
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
    if company_service::delete_company(&state.db, id).await? {
        info!(id = %id, "deleted company");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::new(
            StatusCode::NOT_FOUND,
            "Not Found",
            Some("company not found".into()),
        ))
    }
}
