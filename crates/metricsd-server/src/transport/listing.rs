//! `GET /`: every stored metric as an HTML list.

use std::fmt::Write;

use axum::{extract::State, response::Html};

use crate::app_state::AppState;
use crate::store::MetricEntry;

fn escape_html(v: &str) -> String {
    v.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render one `<li>name (kind): value</li>` per entry.
pub fn render(entries: &[MetricEntry]) -> String {
    let mut out = String::from("<html><body><h1>Metrics</h1><ul>");
    for e in entries {
        let _ = write!(
            out,
            "<li>{} ({}): {}</li>",
            escape_html(&e.name),
            e.kind(),
            e.value
        );
    }
    out.push_str("</ul></body></html>");
    out
}

pub async fn index(State(app): State<AppState>) -> Html<String> {
    Html(render(&app.store().list_all()))
}
