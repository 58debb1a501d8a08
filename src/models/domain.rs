use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Language used for user-facing labels and messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ko,
    En,
}

/// Raw height/weight input after parsing
///
/// Either value is `None` when the user text did not parse as a finite decimal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurement {
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
}

impl Measurement {
    /// Parse the two text fields as entered by the user
    pub fn parse(height_cm: &str, weight_kg: &str) -> Self {
        Self {
            height_cm: parse_decimal(height_cm),
            weight_kg: parse_decimal(weight_kg),
        }
    }
}

/// Parse user text as a finite decimal, ignoring surrounding whitespace
pub fn parse_decimal(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Most decimals a BMI is ever displayed with
pub const MAX_DECIMAL_PLACES: usize = 6;

/// BMI classification bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    pub fn label(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Ko, BmiCategory::Underweight) => "저체중",
            (Locale::Ko, BmiCategory::Normal) => "정상",
            (Locale::Ko, BmiCategory::Overweight) => "과체중",
            (Locale::Ko, BmiCategory::Obese) => "비만",
            (Locale::En, BmiCategory::Underweight) => "Underweight",
            (Locale::En, BmiCategory::Normal) => "Normal",
            (Locale::En, BmiCategory::Overweight) => "Overweight",
            (Locale::En, BmiCategory::Obese) => "Obese",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label(Locale::En))
    }
}

/// Computed body-mass index and its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
}

impl BmiResult {
    /// BMI rounded half away from zero to `places` decimals
    ///
    /// `places` is capped at [`MAX_DECIMAL_PLACES`].
    pub fn rounded(&self, places: usize) -> f64 {
        let factor = 10f64.powi(places.min(MAX_DECIMAL_PLACES) as i32);
        (self.bmi * factor).round() / factor
    }

    /// BMI formatted for display, e.g. `22.49`
    pub fn format_bmi(&self, places: usize) -> String {
        let places = places.min(MAX_DECIMAL_PLACES);
        format!("{:.*}", places, self.rounded(places))
    }

    /// Two-line result text as shown under the calculate button
    pub fn summary(&self, locale: Locale, places: usize) -> String {
        let verdict = match locale {
            Locale::Ko => "판정결과",
            Locale::En => "Result",
        };
        format!(
            "BMI : {}\n{} : {}",
            self.format_bmi(places),
            verdict,
            self.category.label(locale)
        )
    }
}

/// Transient user-facing message, alive for `expires_in_secs` after creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub id: Uuid,
    pub message: String,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "expiresInSecs")]
    pub expires_in_secs: u64,
}

impl Notice {
    pub fn new(message: impl Into<String>, expires_in_secs: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            created_at: chrono::Utc::now(),
            expires_in_secs,
        }
    }
}

/// Result of the most recent compute request
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Computed(BmiResult),
    Rejected(Notice),
}

/// Static profile shown on the profile screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileCard {
    pub name: String,
    pub caption: String,
    pub image: String,
}

impl Default for ProfileCard {
    fn default() -> Self {
        Self {
            name: "손민석".to_string(),
            caption: "강아지 사진".to_string(),
            image: "dog".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("170"), Some(170.0));
        assert_eq!(parse_decimal(" 65.5 "), Some(65.5));
        assert_eq!(parse_decimal("-5"), Some(-5.0));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("inf"), None);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(BmiCategory::Normal.label(Locale::Ko), "정상");
        assert_eq!(BmiCategory::Obese.label(Locale::En), "Obese");
        assert_eq!(BmiCategory::Underweight.to_string(), "Underweight");
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&BmiCategory::Overweight).unwrap();
        assert_eq!(json, "\"overweight\"");
    }

    #[test]
    fn test_summary() {
        let result = BmiResult {
            bmi: 22.491349480968857,
            category: BmiCategory::Normal,
        };

        assert_eq!(result.format_bmi(2), "22.49");
        assert_eq!(result.summary(Locale::Ko, 2), "BMI : 22.49\n판정결과 : 정상");
        assert_eq!(result.summary(Locale::En, 1), "BMI : 22.5\nResult : Normal");
    }

    #[test]
    fn test_decimal_places_capped() {
        let result = BmiResult {
            bmi: 22.491349480968857,
            category: BmiCategory::Normal,
        };

        assert_eq!(result.format_bmi(400), "22.491349");
        assert_eq!(result.format_bmi(usize::MAX), "22.491349");
        assert_eq!(result.rounded(1000), 22.491349);
    }

    #[test]
    fn test_default_profile() {
        let profile = ProfileCard::default();
        assert_eq!(profile.name, "손민석");
        assert_eq!(profile.image, "dog");
    }
}
