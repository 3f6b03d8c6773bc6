use async_session::MemoryStore;
use axum::middleware;
use axum::{Router, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::models::quiz::{QUESTIONS, QuizQuestion};
use crate::routes::session::extract_session;
use crate::routes::{index, quiz, weather};
use crate::weather::WeatherService;

// Anything that goes in here must be a handle or pointer that can be cloned.
// The underlying state itself should be shared.
#[derive(Clone)]
pub struct AppState {
    pub store: MemoryStore,
    pub weather: WeatherService,
    pub questions: &'static [QuizQuestion],
}

impl AppState {
    pub fn new() -> AppState {
        AppState {
            store: MemoryStore::new(),
            weather: WeatherService::new(),
            questions: &QUESTIONS,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new()
    }
}

pub fn create_app(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/", get(index::get_index))
        .nest("/weather", weather::routes(state.clone()))
        .nest("/quiz", quiz::routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .route_layer(middleware::from_fn_with_state(state, extract_session));

    let assets_path = "assets";
    log::debug!("serving assets from {}", assets_path);
    let assets_service = ServeDir::new(assets_path);
    app = app.fallback_service(assets_service);
    app
}
