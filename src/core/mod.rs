// Core algorithm exports
pub mod calculator;
pub mod classify;

pub use calculator::{bmi_from_metric, compute, compute_measurement, input_message, InvalidReason, ValidationError};
pub use classify::{bands, classify, CategoryBand};
