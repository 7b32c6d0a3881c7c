//! Handlers for the `/forms` resource.
//!
//! Each endpoint checks one form submission and reports per-field
//! messages. Account creation, sessions and persistence live behind the
//! external auth provider and are not invoked here.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::Json;
use dreampic_core::validation::{email, equal, max, min, password, required, Fields, Validator};
use dreampic_core::{field_sink, field_source, rules};
use serde::{Deserialize, Serialize};

use crate::response::DataResponse;

/// Result of checking one form submission.
#[derive(Debug, Serialize)]
pub struct FormOutcome<E: Serialize> {
    pub accepted: bool,
    pub errors: E,
}

/// `200` with an empty error object, or `422` with the populated one.
pub type FormResponse<E> = (StatusCode, Json<DataResponse<FormOutcome<E>>>);

fn respond<E: Serialize>(accepted: bool, errors: E) -> FormResponse<E> {
    let status = if accepted {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    (
        status,
        Json(DataResponse {
            data: FormOutcome { accepted, errors },
        }),
    )
}

// ── Signup ───────────────────────────────────────────────────────────

/// Signup form body. Missing fields decode as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignupParams {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

field_source!(SignupParams {
    "Email" => email,
    "Password" => password,
    "ConfirmPassword" => confirm_password,
});

/// Per-field signup messages, rendered back to the form.
#[derive(Debug, Default, Serialize)]
pub struct SignupErrors {
    #[serde(rename = "Email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "ConfirmPassword", skip_serializing_if = "Option::is_none")]
    pub confirm_password: Option<String>,
}

field_sink!(SignupErrors {
    "Email" => email,
    "Password" => password,
    "ConfirmPassword" => confirm_password,
});

/// Rules for a signup submission. The confirmation must match the
/// submitted password, so the table is built per request.
pub fn signup_fields(params: &SignupParams) -> Fields {
    Fields::new()
        .with("Email", rules![email])
        .with("Password", rules![password])
        .with(
            "ConfirmPassword",
            rules![required, equal(params.password.as_str())],
        )
}

/// POST /api/v1/forms/signup
pub async fn signup(Json(params): Json<SignupParams>) -> FormResponse<SignupErrors> {
    let fields = signup_fields(&params);
    let mut errors = SignupErrors::default();
    let accepted = Validator::new(&params, &fields).validate(&mut errors);
    tracing::debug!(accepted, "Signup form checked");
    respond(accepted, errors)
}

// ── Login ────────────────────────────────────────────────────────────

/// Login form body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

field_source!(LoginParams {
    "Email" => email,
    "Password" => password,
});

pub fn login_fields() -> Fields {
    Fields::new()
        .with("Email", rules![email])
        .with("Password", rules![required])
}

/// POST /api/v1/forms/login
pub async fn login(Json(params): Json<LoginParams>) -> FormResponse<BTreeMap<String, String>> {
    let fields = login_fields();
    let mut errors = BTreeMap::new();
    let accepted = Validator::new(&params, &fields).validate(&mut errors);
    tracing::debug!(accepted, "Login form checked");
    respond(accepted, errors)
}

// ── Account settings ─────────────────────────────────────────────────

/// Account settings form body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AccountParams {
    pub username: String,
}

field_source!(AccountParams { "Username" => username });

pub fn account_fields() -> Fields {
    Fields::new().with("Username", rules![min(2), max(40)])
}

/// POST /api/v1/forms/account
pub async fn account(Json(params): Json<AccountParams>) -> FormResponse<BTreeMap<String, String>> {
    let fields = account_fields();
    let mut errors = BTreeMap::new();
    let accepted = Validator::new(&params, &fields).validate(&mut errors);
    tracing::debug!(accepted, "Account form checked");
    respond(accepted, errors)
}
