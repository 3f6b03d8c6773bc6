use askama::Template;
use axum::http::HeaderMap;
use axum::response::Response;
use axum::{Form, Router, extract::State, routing::get};
use serde::Deserialize;

use crate::app::AppState;
use crate::models::weather::WeatherView;
use crate::routes::index::page_response;
use crate::weather::WeatherError;

pub const EMPTY_CITY_MESSAGE: &str = "Please enter a city name.";
pub const LOOKUP_FAILED_MESSAGE: &str = "Could not find weather for that city. Try another one.";

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(get_weather).post(check_weather))
        .with_state(state)
}

#[derive(Template)]
#[template(path = "weather.html")]
struct WeatherTemplate {
    city_input: String,
    view: Option<WeatherView>,
    error: Option<String>,
}

pub fn render_weather_section(
    city_input: String,
    view: Option<WeatherView>,
    error: Option<String>,
) -> String {
    WeatherTemplate {
        city_input,
        view,
        error,
    }
    .render()
    .expect("Template rendering should always succeed")
}

async fn get_weather(headers: HeaderMap) -> Response {
    page_response(&headers, render_weather_section(String::new(), None, None))
}

#[derive(Deserialize, Debug)]
struct WeatherForm {
    city: String,
}

async fn check_weather(
    headers: HeaderMap,
    State(state): State<AppState>,
    Form(form): Form<WeatherForm>,
) -> Response {
    let (view, error) = match state.weather.get_weather_view(&form.city).await {
        Ok(view) => (Some(view), None),
        Err(WeatherError::EmptyCity) => (None, Some(EMPTY_CITY_MESSAGE.to_string())),
        // NotFound and Unavailable read the same to the user, the
        // distinction only shows up in the logs.
        Err(err) => {
            log::debug!("weather lookup failed: {err}");
            (None, Some(LOOKUP_FAILED_MESSAGE.to_string()))
        }
    };
    page_response(&headers, render_weather_section(form.city, view, error))
}
