//! GET / — embedded single-page front end.

use axum::response::Html;

/// Serves the bundled HTML page. The page talks to `POST /ask` directly.
pub async fn frontend() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}
