use axum::{extract::State, Json};
use tracing::info;

use service::news_service::{self, NewNewsEvent, NewsWithTags};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[utoipa::path(
    get, path = "/news/", tag = "news",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<NewsWithTags>>, JsonApiError> {
    let list = news_service::list_news_events(&state.db).await?;
    info!(count = list.len(), "list news events");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/news/", tag = "news",
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewNewsEvent>,
) -> Result<Json<NewsWithTags>, JsonApiError> {
    let made = news_service::create_news_event(&state.db, input).await?;
    info!(
        id = %made.event.id,
        industries = made.industries.len(),
        companies = made.companies.len(),
        macros = made.macros.len(),
        "created news event"
    );
    Ok(Json(made))
}
