//! Submission form page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::domain::entities::Role;

/// Template for the submission form.
///
/// Renders `templates/form.html` with the role enumeration so the select
/// options stay in lockstep with [`Role`].
#[derive(Template, WebTemplate)]
#[template(path = "form.html")]
pub struct FormTemplate {
    pub roles: &'static [Role],
}

/// Renders the submission form.
///
/// # Endpoint
///
/// `GET /form`
pub async fn form_handler() -> impl IntoResponse {
    FormTemplate { roles: &Role::ALL }
}
