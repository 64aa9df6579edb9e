//! Dashboard page
//!
//! - GET / - The single HTML page. It fetches the layout and charts from the
//!   JSON endpoints and renders them with plotly.js.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../../assets/index.html");

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
