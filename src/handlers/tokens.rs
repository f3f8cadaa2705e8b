use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::form::{validate, FormMode, TokenEditForm};
use crate::models::{AppState, FieldError, Token, TokenFormValues};
use crate::templates::TokenUpdateTemplate;
use crate::utils::parse_id;

use super::helpers::{build_template_globals, plain_html, render_template, TemplateGlobals};

fn render_form(form: &TokenEditForm, status: StatusCode, draft: Option<Token>, errors: Vec<FieldError>) -> Response {
    let mut view = form.view(draft, errors);
    let TemplateGlobals {
        flash_messages,
        has_flash_messages,
    } = build_template_globals(view.error_message.take());
    render_template(
        status,
        TokenUpdateTemplate {
            flash_messages,
            has_flash_messages,
            view,
        },
    )
}

fn edit_mode(raw_id: &str) -> Result<FormMode, Response> {
    match parse_id(raw_id) {
        Some(id) => Ok(FormMode::Edit(id)),
        None => Err(plain_html(StatusCode::BAD_REQUEST, "Invalid token id")),
    }
}

async fn show_form(state: &AppState, mode: FormMode) -> Response {
    let form = state.token_form(mode);
    form.mount().await;
    render_form(&form, StatusCode::OK, None, Vec::new())
}

async fn submit_form(state: &AppState, mode: FormMode, values: TokenFormValues) -> Response {
    let mut form = state.token_form(mode);
    form.mount().await;

    let errors = validate(&values);
    let submitted = form.save_entity(&values, &errors).await;

    if let Some(path) = form.poll_navigation() {
        return Redirect::to(path).into_response();
    }

    let status = if !submitted {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::BAD_GATEWAY
    };
    let draft = form.merge(&values);
    render_form(&form, status, Some(draft), errors)
}

pub async fn token_new_get(State(state): State<AppState>) -> impl IntoResponse {
    show_form(&state, FormMode::Create).await
}

pub async fn token_edit_get(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match edit_mode(&id) {
        Ok(mode) => show_form(&state, mode).await,
        Err(r) => r,
    }
}

pub async fn token_create_post(
    State(state): State<AppState>,
    Form(values): Form<TokenFormValues>,
) -> impl IntoResponse {
    submit_form(&state, FormMode::Create, values).await
}

pub async fn token_update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(values): Form<TokenFormValues>,
) -> impl IntoResponse {
    match edit_mode(&id) {
        Ok(mode) => submit_form(&state, mode, values).await,
        Err(r) => r,
    }
}
