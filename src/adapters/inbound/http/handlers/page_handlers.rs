use axum::response::Html;

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Serve the lookup page
pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}
