use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "EquiTrack API", description = "Equity, industry, macro indicator and news tracking"),
    paths(
        crate::routes::industries::list,
        crate::routes::industries::create,
        crate::routes::industries::update,
        crate::routes::industries::delete,
        crate::routes::companies::list,
        crate::routes::companies::create,
        crate::routes::companies::get_one,
        crate::routes::companies::update,
        crate::routes::companies::delete,
        crate::routes::news::list,
        crate::routes::news::create,
        crate::routes::macro_indicators::list,
        crate::routes::macro_indicators::create,
        crate::routes::macro_indicators::replace,
        crate::routes::macro_indicators::delete,
    ),
    tags(
        (name = "industries", description = "Industry hierarchy"),
        (name = "companies", description = "Tracked equities"),
        (name = "news", description = "Append-only news events with tag sets"),
        (name = "macro_indicators", description = "Macroeconomic indicators")
    )
)]
pub struct ApiDoc;
