use serde::{Deserialize, Serialize};
use validator::Validate;

/// Longest accepted text for either field, as in the `length` checks below
pub const MAX_INPUT_LEN: u64 = 256;

/// Request to compute a BMI from the two text fields
///
/// Fields are kept as raw text; numeric parsing is part of the computation so
/// that empty or non-numeric input yields a validation notice instead of a
/// JSON error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ComputeBmiRequest {
    #[validate(length(max = 256))]
    #[serde(alias = "height_cm", rename = "heightCm", default)]
    pub height_cm: String,
    #[validate(length(max = 256))]
    #[serde(alias = "weight_kg", rename = "weightKg", default)]
    pub weight_kg: String,
}
