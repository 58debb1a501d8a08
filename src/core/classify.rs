use crate::models::BmiCategory;

/// BMI below this is underweight
pub const UNDERWEIGHT_BELOW: f64 = 18.5;
/// BMI below this (and not underweight) is normal
pub const NORMAL_BELOW: f64 = 23.0;
/// BMI below this (and not normal) is overweight; anything else is obese
pub const OVERWEIGHT_BELOW: f64 = 25.0;

/// One row of the classification table: `min <= bmi < max`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryBand {
    pub category: BmiCategory,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Map a BMI value to its category
///
/// Bands are half-open and checked in ascending order, so a value sitting
/// exactly on a threshold belongs to the higher band.
#[inline]
pub fn classify(bmi: f64) -> BmiCategory {
    if bmi < UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if bmi < NORMAL_BELOW {
        BmiCategory::Normal
    } else if bmi < OVERWEIGHT_BELOW {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// The full classification table in evaluation order
pub fn bands() -> [CategoryBand; 4] {
    [
        CategoryBand {
            category: BmiCategory::Underweight,
            min: None,
            max: Some(UNDERWEIGHT_BELOW),
        },
        CategoryBand {
            category: BmiCategory::Normal,
            min: Some(UNDERWEIGHT_BELOW),
            max: Some(NORMAL_BELOW),
        },
        CategoryBand {
            category: BmiCategory::Overweight,
            min: Some(NORMAL_BELOW),
            max: Some(OVERWEIGHT_BELOW),
        },
        CategoryBand {
            category: BmiCategory::Obese,
            min: Some(OVERWEIGHT_BELOW),
            max: None,
        },
    ]
}
