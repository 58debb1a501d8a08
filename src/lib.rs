//! BMI Calc - body-mass index calculation and classification
//!
//! The core is a pure function that validates height/weight text, computes
//! the BMI and maps it to one of four categories. The HTTP layer on top keeps
//! the latest outcome and shows transient notices for rejected input.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{classify, compute, compute_measurement, InvalidReason, ValidationError};
pub use crate::models::{BmiCategory, BmiResult, Locale, Measurement};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let result = compute("170", "65").unwrap();
        assert_eq!(result.category, BmiCategory::Normal);
        assert_eq!(classify(result.bmi), BmiCategory::Normal);
    }
}
