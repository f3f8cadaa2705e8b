use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

#[derive(Default)]
pub struct TemplateGlobals {
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
}

/// Globals shared by every page; a store error surfaces as a flash message.
pub fn build_template_globals(error_message: Option<String>) -> TemplateGlobals {
    let flash_messages: Vec<String> = error_message.into_iter().collect();
    let has_flash_messages = !flash_messages.is_empty();
    TemplateGlobals {
        flash_messages,
        has_flash_messages,
    }
}

pub fn plain_html<S: AsRef<str>>(status: StatusCode, s: S) -> Response {
    (
        status,
        Html(format!("<!DOCTYPE html><html><body><p>{}</p></body></html>", s.as_ref())),
    )
        .into_response()
}

pub fn render_template<T: askama::Template>(status: StatusCode, t: T) -> Response {
    match t.render() {
        Ok(body) => (status, Html(body)).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
