use crate::core::classify::classify;
use crate::models::{BmiResult, Locale, Measurement};
use thiserror::Error;

/// Centimeters per meter
const CM_PER_METER: f64 = 100.0;

/// Why an input pair was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    HeightNotNumeric,
    WeightNotNumeric,
    HeightNotPositive,
}

impl InvalidReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidReason::HeightNotNumeric => "height_not_numeric",
            InvalidReason::WeightNotNumeric => "weight_not_numeric",
            InvalidReason::HeightNotPositive => "height_not_positive",
        }
    }
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Height/weight input that cannot produce a BMI
///
/// Every reason carries the same user-facing message; `reason()` is for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Please enter height and weight!!")]
pub struct ValidationError {
    reason: InvalidReason,
}

impl ValidationError {
    pub fn new(reason: InvalidReason) -> Self {
        Self { reason }
    }

    pub fn reason(&self) -> InvalidReason {
        self.reason
    }

    /// User-facing message in the given locale
    pub fn message(&self, locale: Locale) -> &'static str {
        input_message(locale)
    }
}

/// Message shown whenever height/weight input is rejected
pub fn input_message(locale: Locale) -> &'static str {
    match locale {
        Locale::Ko => "키와 몸무게를 입력하세요!!",
        Locale::En => "Please enter height and weight!!",
    }
}

/// Raw formula: weight (kg) over height (m) squared
#[inline]
pub fn bmi_from_metric(height_cm: f64, weight_kg: f64) -> f64 {
    let meters = height_cm / CM_PER_METER;
    weight_kg / (meters * meters)
}

/// Validate the two text fields and compute the BMI with its category
///
/// Height must be a positive decimal. Weight only has to parse; zero or
/// negative weight is accepted.
pub fn compute(height_cm: &str, weight_kg: &str) -> Result<BmiResult, ValidationError> {
    compute_measurement(&Measurement::parse(height_cm, weight_kg))
}

/// Same as [`compute`] for already-parsed input
pub fn compute_measurement(measurement: &Measurement) -> Result<BmiResult, ValidationError> {
    let height = measurement
        .height_cm
        .ok_or(ValidationError::new(InvalidReason::HeightNotNumeric))?;
    let weight = measurement
        .weight_kg
        .ok_or(ValidationError::new(InvalidReason::WeightNotNumeric))?;

    if height <= 0.0 {
        return Err(ValidationError::new(InvalidReason::HeightNotPositive));
    }

    let bmi = bmi_from_metric(height, weight);

    Ok(BmiResult {
        bmi,
        category: classify(bmi),
    })
}
