//! Handlers for the `/validation` resource.
//!
//! Lets a client inspect the rule catalog and dry-run an arbitrary field
//! table against an arbitrary JSON record.

use std::collections::BTreeMap;

use axum::Json;
use dreampic_core::validation::{Fields, RuleKind, ValidationReport, Validator};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;

/// GET /api/v1/validation/rule-types
///
/// List every rule name a field table may use.
pub async fn list_rule_types() -> Json<DataResponse<Vec<&'static str>>> {
    Json(DataResponse {
        data: RuleKind::ALL.iter().map(|kind| kind.as_str()).collect(),
    })
}

/// Request body for the dry-run endpoint.
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub record: Value,
    pub fields: Fields,
}

/// Dry-run result: the full report plus the collapsed per-field messages.
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    #[serde(flatten)]
    pub report: ValidationReport,
    pub errors: BTreeMap<String, String>,
}

/// POST /api/v1/validation/validate
///
/// Run `fields` against `record` without side effects. The record must be
/// a JSON object.
pub async fn validate(
    Json(input): Json<ValidateRequest>,
) -> AppResult<Json<DataResponse<ValidateResponse>>> {
    let Value::Object(record) = input.record else {
        return Err(AppError::BadRequest(
            "record must be a JSON object".to_string(),
        ));
    };

    let report = Validator::new(&record, &input.fields).report();
    let errors = report.messages();
    tracing::debug!(
        field_count = input.fields.len(),
        is_valid = report.is_valid,
        "Dry-run validation"
    );

    Ok(Json(DataResponse {
        data: ValidateResponse { report, errors },
    }))
}
