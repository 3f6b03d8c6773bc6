use askama::Template;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};

use crate::routes::weather::render_weather_section;

#[derive(Template)]
#[template(path = "index.html", escape = "none")]
struct IndexTemplate {
    content: String,
}

/// Full page with the weather section as the default tab content.
pub async fn get_index() -> Response {
    Html(render_main(render_weather_section(
        String::new(),
        None,
        None,
    )))
    .into_response()
}

pub fn render_main(content: String) -> String {
    IndexTemplate { content }
        .render()
        .expect("Template should always succeed")
}

/// htmx requests get the bare section, everything else the whole page.
pub fn page_response(headers: &HeaderMap, content: String) -> Response {
    let content = if headers.get("hx-request").is_some() {
        content
    } else {
        render_main(content)
    };
    Html(content).into_response()
}
