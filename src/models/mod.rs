// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{BmiCategory, BmiResult, Locale, Measurement, Notice, Outcome, ProfileCard};
pub use requests::ComputeBmiRequest;
pub use responses::{
    BmiResponse, CategoriesResponse, CategoryEntry, ErrorResponse, HealthResponse,
    LatestResponse, NoticesResponse, ProfileResponse,
};
