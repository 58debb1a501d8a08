use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{bands, compute, input_message};
use crate::models::{
    BmiResponse, CategoriesResponse, CategoryEntry, ComputeBmiRequest, ErrorResponse,
    HealthResponse, LatestResponse, Locale, NoticesResponse, Outcome,
};
use crate::routes::{ApiError, AppState};

/// Configure all BMI-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/bmi/compute", web::post().to(compute_bmi))
        .route("/bmi/latest", web::get().to(latest_bmi))
        .route("/bmi/categories", web::get().to(list_categories))
        .route("/notices", web::get().to(list_notices));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Compute BMI endpoint
///
/// POST /api/v1/bmi/compute
///
/// Request body:
/// ```json
/// {
///   "heightCm": "170",
///   "weightKg": "65"
/// }
/// ```
///
/// Invalid input answers 422 and posts a notice that expires on its own.
/// Fields longer than [`crate::models::requests::MAX_INPUT_LEN`] are
/// rejected the same way without being parsed.
async fn compute_bmi(
    state: web::Data<AppState>,
    req: web::Json<ComputeBmiRequest>,
) -> impl Responder {
    let locale = state.presentation.locale;
    let places = state.presentation.decimal_places;

    if let Err(errors) = req.validate() {
        tracing::warn!("Rejected oversized BMI input: field_errors={:?}", errors);
        return reject(&state, locale).await;
    }

    match compute(&req.height_cm, &req.weight_kg) {
        Ok(result) => {
            tracing::info!(
                "Computed BMI {} ({}) for height={:?}, weight={:?}",
                result.format_bmi(places),
                result.category,
                req.height_cm,
                req.weight_kg
            );
            state.display.record_result(result).await;
            HttpResponse::Ok().json(BmiResponse::from_result(&result, locale, places))
        }
        Err(err) => {
            tracing::warn!(
                "Rejected BMI input: reason={}, height={:?}, weight={:?}",
                err.reason(),
                req.height_cm,
                req.weight_kg
            );
            reject(&state, locale).await
        }
    }
}

/// Replace the latest outcome with a rejection and answer 422 with its notice
async fn reject(state: &AppState, locale: Locale) -> HttpResponse {
    let notice = state.display.record_failure(input_message(locale)).await;
    HttpResponse::UnprocessableEntity().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: notice.message,
        status_code: 422,
        notice_id: Some(notice.id.to_string()),
    })
}

/// Latest outcome endpoint
///
/// GET /api/v1/bmi/latest
async fn latest_bmi(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let latest = state
        .display
        .latest()
        .await
        .ok_or_else(|| ApiError::NotFound("No BMI has been computed yet".to_string()))?;

    let body = match latest {
        Outcome::Computed(result) => LatestResponse::Computed(BmiResponse::from_result(
            &result,
            state.presentation.locale,
            state.presentation.decimal_places,
        )),
        Outcome::Rejected(notice) => LatestResponse::Rejected(notice),
    };

    Ok(HttpResponse::Ok().json(body))
}

/// Classification table endpoint
///
/// GET /api/v1/bmi/categories?locale=en
async fn list_categories(
    state: web::Data<AppState>,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let locale = match query.get("locale").map(String::as_str) {
        Some("en") => Locale::En,
        Some("ko") => Locale::Ko,
        _ => state.presentation.locale,
    };

    let categories = bands()
        .iter()
        .map(|band| CategoryEntry::from_band(band, locale))
        .collect();

    HttpResponse::Ok().json(CategoriesResponse { categories })
}

/// Active notices endpoint
///
/// GET /api/v1/notices
async fn list_notices(state: web::Data<AppState>) -> impl Responder {
    let notices = state.display.active_notices();
    let count = notices.len();
    HttpResponse::Ok().json(NoticesResponse { notices, count })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
