use axum::{
    routing::{get, put},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;

pub mod companies;
pub mod industries;
pub mod macro_indicators;
pub mod news;

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: resource routes, health, API docs,
/// CORS and request tracing.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/industries/", get(industries::list).post(industries::create))
        .route(
            "/industries/:id",
            axum::routing::patch(industries::update).delete(industries::delete),
        )
        .route("/companies/", get(companies::list).post(companies::create))
        .route(
            "/companies/:id",
            get(companies::get_one)
                .patch(companies::update)
                .delete(companies::delete),
        )
        .route("/news/", get(news::list).post(news::create))
        .route(
            "/macro_indicators",
            get(macro_indicators::list).post(macro_indicators::create),
        )
        .route(
            "/macro_indicators/:id",
            put(macro_indicators::replace).delete(macro_indicators::delete),
        );

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
