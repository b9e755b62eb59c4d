//! HTML page handlers
//!
//! Pages are plain files read from the templates directory on every
//! request; there is no template engine and no caching.

use axum::extract::State;
use axum::response::Html;

use crate::state::AppState;

/// GET /
pub async fn home(State(state): State<AppState>) -> Html<String> {
    read_template(&state, "index.html").await
}

/// GET /signup
pub async fn signup_page(State(state): State<AppState>) -> Html<String> {
    read_template(&state, "signup.html").await
}

/// GET /login
pub async fn login_page(State(state): State<AppState>) -> Html<String> {
    read_template(&state, "login.html").await
}

async fn read_template(state: &AppState, name: &str) -> Html<String> {
    let path = state.config.templates_dir.join(name);
    match tokio::fs::read_to_string(&path).await {
        Ok(contents) => Html(contents),
        Err(e) => {
            tracing::warn!(template = name, error = %e, "Template not readable");
            Html(format!("<h1>Template {name} not found</h1>"))
        }
    }
}
