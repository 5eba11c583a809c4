use axum::response::Html;

// ═══════════════════════════════════════════════════════════════
//  Static pages (compiled in, no templating)
// ═══════════════════════════════════════════════════════════════

const INDEX: &str = include_str!("../views/index.html");
const INSERT: &str = include_str!("../views/insert.html");
const UPDATE: &str = include_str!("../views/update.html");
const DELETE: &str = include_str!("../views/delete.html");
const DISPLAY: &str = include_str!("../views/display.html");

pub(crate) async fn index() -> Html<&'static str> {
    Html(INDEX)
}

pub(crate) async fn insert() -> Html<&'static str> {
    Html(INSERT)
}

pub(crate) async fn update() -> Html<&'static str> {
    Html(UPDATE)
}

pub(crate) async fn delete() -> Html<&'static str> {
    Html(DELETE)
}

pub(crate) async fn display() -> Html<&'static str> {
    Html(DISPLAY)
}
