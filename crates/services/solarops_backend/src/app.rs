// --- File: crates/services/solarops_backend/src/app.rs ---
use crate::app_state::AppState;
use axum::{routing::get, Json, Router};
use http::HeaderValue;
use serde_json::{json, Value};
use solarops_config::ServerConfig;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

pub const WELCOME_MESSAGE: &str = "Welcome to the Solar Detailing Customer API";

async fn welcome_handler() -> Json<Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Assembles the full application: welcome route, feature routers under
/// `/api`, optional Swagger UI, CORS and request tracing.
pub fn build_app(state: &AppState) -> Router {
    #[allow(unused_mut)] // only mutated when features are enabled
    let mut app = Router::new().route("/", get(welcome_handler));

    #[cfg(feature = "calendar")]
    {
        let calendar_router =
            solarops_calendar::routes::routes(state.config.clone(), state.calendar.clone());
        app = app.nest("/api", calendar_router);
    }

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        #[cfg(feature = "calendar")]
        use solarops_calendar::doc::CalendarApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Solar Detailing API",
                version = "0.1.0",
                description = "Customer-facing booking API",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            servers((url = "/api", description = "Main API Prefix"))
        )]
        struct ApiDoc;

        #[allow(unused_mut)]
        let mut openapi_doc = ApiDoc::openapi();
        #[cfg(feature = "calendar")]
        openapi_doc.merge(CalendarApiDoc::openapi());

        tracing::info!("Adding Swagger UI at /api/docs");
        app = app.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc));
    }

    app.layer(cors_layer(&state.config.server))
        .layer(TraceLayer::new_for_http())
}
