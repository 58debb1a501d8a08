use serde::{Deserialize, Serialize};
use crate::core::classify::CategoryBand;
use crate::models::domain::{BmiCategory, BmiResult, Locale, Notice, ProfileCard};

/// Response for a successful BMI computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiResponse {
    pub bmi: f64,
    #[serde(rename = "bmiDisplay")]
    pub bmi_display: String,
    pub category: BmiCategory,
    pub label: String,
    pub summary: String,
}

impl BmiResponse {
    pub fn from_result(result: &BmiResult, locale: Locale, decimal_places: usize) -> Self {
        Self {
            bmi: result.bmi,
            bmi_display: result.format_bmi(decimal_places),
            category: result.category,
            label: result.category.label(locale).to_string(),
            summary: result.summary(locale, decimal_places),
        }
    }
}

/// Latest outcome, tagged by kind
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LatestResponse {
    Computed(BmiResponse),
    Rejected(Notice),
}

/// Classification table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub category: BmiCategory,
    pub label: String,
    /// Inclusive lower bound, absent for the first band
    pub min: Option<f64>,
    /// Exclusive upper bound, absent for the last band
    pub max: Option<f64>,
}

impl CategoryEntry {
    pub fn from_band(band: &CategoryBand, locale: Locale) -> Self {
        Self {
            category: band.category,
            label: band.category.label(locale).to_string(),
            min: band.min,
            max: band.max,
        }
    }
}

/// Active notices
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticesResponse {
    pub notices: Vec<Notice>,
    pub count: usize,
}

/// Profile card response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub profile: ProfileCard,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice_id: Option<String>,
}
