use actix_web::{web, HttpResponse, Responder};

use crate::models::ProfileResponse;
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/profile", web::get().to(get_profile));
}

/// Static profile card
///
/// GET /api/v1/profile
async fn get_profile(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(ProfileResponse {
        profile: state.profile.clone(),
    })
}
