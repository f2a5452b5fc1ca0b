use crate::{
    controller::{health_check_controller, weather_forecast_controller},
    middleware::https_redirect::redirect_to_https,
    AppState,
};
use axum::{middleware::from_fn_with_state, routing::get, Router};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

pub(crate) const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
pub(crate) const RAPIDOC_PATH: &str = "/rapidoc";

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Weather Forecast Stream API"
        ),
        paths(
            weather_forecast_controller::index,
            health_check_controller::health_check,
        ),
        components(
            schemas(
                domain::Forecast,
                domain::Summary,
            )
        ),
        tags(
            (name = "weather_stream", description = "Synthetic weather forecasts over server-sent events")
        )
    )]
pub(crate) struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    let router = Router::new()
        .merge(health_routes())
        .merge(weather_forecast_routes(app_state.clone()));

    // The API description is a development aid only
    let router = if app_state.config.is_development() {
        router.merge(openapi_routes())
    } else {
        router
    };

    router.layer(from_fn_with_state(app_state, redirect_to_https))
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}

fn weather_forecast_routes(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/weatherforecast",
            get(weather_forecast_controller::index),
        )
        .with_state(app_state)
}

fn openapi_routes() -> Router {
    Router::new()
        .merge(RapiDoc::with_openapi(OPENAPI_JSON_PATH, ApiDoc::openapi()).path(RAPIDOC_PATH))
}
