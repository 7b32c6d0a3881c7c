/// Structural errors raised at the field accessor boundary.
///
/// These never escape [`crate::validation::Validator`]; it logs and skips
/// them. They surface only when a sink is driven directly.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown field: {field}")]
    UnknownField { field: String },

    #[error("Invalid output target: {0}")]
    InvalidTarget(String),
}
