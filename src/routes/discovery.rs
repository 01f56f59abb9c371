use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::DiscoveryController;
use crate::models::{ErrorResponse, HealthResponse, PriceRequest, RatingRequest, SearchRequest, SelectTutorRequest, SessionCreatedResponse, ToggleSubjectRequest};
use crate::services::{CatalogClient, CatalogSource, SessionStore};
use std::sync::Arc;
use uuid::Uuid;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogClient>,
    pub sessions: Arc<SessionStore>,
}

/// Configure all discovery routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/discovery/sessions", web::post().to(create_session))
        .route("/discovery/sessions/{id}", web::get().to(get_session))
        .route("/discovery/sessions/{id}", web::delete().to(delete_session))
        .route("/discovery/sessions/{id}/search", web::put().to(set_search_term))
        .route("/discovery/sessions/{id}/panel/open", web::post().to(open_panel))
        .route("/discovery/sessions/{id}/panel/dismiss", web::post().to(dismiss_panel))
        .route("/discovery/sessions/{id}/draft/subjects", web::post().to(toggle_subject))
        .route("/discovery/sessions/{id}/draft/rating", web::put().to(set_rating))
        .route("/discovery/sessions/{id}/draft/price", web::put().to(set_price))
        .route("/discovery/sessions/{id}/draft/reset", web::post().to(reset_draft))
        .route("/discovery/sessions/{id}/apply", web::post().to(apply_filters))
        .route("/discovery/sessions/{id}/select", web::post().to(select_tutor));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let stats = state.sessions.stats().await;

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        active_sessions: stats.active_sessions,
    })
}

fn session_not_found(id: &Uuid) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "Session not found",
        format!("No discovery session with id {}", id),
        404,
    ))
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(
        "Validation failed",
        errors.to_string(),
        400,
    ))
}

/// Run an operation against a session's controller and respond with the updated view
async fn update_session<F>(state: &AppState, id: Uuid, op: F) -> HttpResponse
where
    F: FnOnce(&mut DiscoveryController) -> Result<(), ErrorResponse>,
{
    let Some(controller) = state.sessions.get(&id).await else {
        return session_not_found(&id);
    };
    let mut controller = controller.lock().await;

    match op(&mut controller) {
        Ok(()) => HttpResponse::Ok().json(controller.view()),
        Err(error) => {
            tracing::info!("Rejected update on session {}: {}", id, error.message);
            HttpResponse::BadRequest().json(error)
        }
    }
}

/// Create a discovery session
///
/// POST /api/v1/discovery/sessions
///
/// Starts the session's one catalog fetch in the background and returns
/// immediately with a loading view.
async fn create_session(state: web::Data<AppState>) -> impl Responder {
    let (session_id, controller) = state.sessions.create().await;

    let catalog = state.catalog.clone();
    let fetch_target = controller.clone();
    actix_web::rt::spawn(async move {
        let result = catalog.fetch_catalog().await;
        fetch_target.lock().await.finish_loading(result);
    });

    tracing::info!("Created discovery session {}", session_id);

    let view = controller.lock().await.view();
    HttpResponse::Created().json(SessionCreatedResponse { session_id, view })
}

/// GET /api/v1/discovery/sessions/{id}
async fn get_session(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    update_session(&state, path.into_inner(), |_| Ok(())).await
}

/// DELETE /api/v1/discovery/sessions/{id}
async fn delete_session(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();
    if state.sessions.remove(&id).await {
        HttpResponse::NoContent().finish()
    } else {
        session_not_found(&id)
    }
}

/// Change the search term
///
/// PUT /api/v1/discovery/sessions/{id}/search
///
/// Request body:
/// ```json
/// { "term": "string" }
/// ```
async fn set_search_term(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<SearchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }
    let term = req.into_inner().term;

    update_session(&state, path.into_inner(), move |controller| {
        controller.set_search_term(term);
        Ok(())
    })
    .await
}

/// POST /api/v1/discovery/sessions/{id}/panel/open
async fn open_panel(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    update_session(&state, path.into_inner(), |controller| {
        controller.open_panel();
        Ok(())
    })
    .await
}

/// POST /api/v1/discovery/sessions/{id}/panel/dismiss
async fn dismiss_panel(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    update_session(&state, path.into_inner(), |controller| {
        controller.dismiss_panel();
        Ok(())
    })
    .await
}

/// Toggle a subject in the draft filters
///
/// POST /api/v1/discovery/sessions/{id}/draft/subjects
///
/// Request body:
/// ```json
/// { "subject": "string" }
/// ```
async fn toggle_subject(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<ToggleSubjectRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    update_session(&state, path.into_inner(), |controller| {
        controller.toggle_subject(&req.subject);
        Ok(())
    })
    .await
}

/// Set the draft minimum rating
///
/// PUT /api/v1/discovery/sessions/{id}/draft/rating
///
/// Request body:
/// ```json
/// { "rating": 4 }
/// ```
async fn set_rating(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<RatingRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    update_session(&state, path.into_inner(), |controller| {
        controller
            .set_rating(req.rating)
            .map_err(|e| ErrorResponse::new("Invalid rating", e.to_string(), 400))
    })
    .await
}

/// Move the draft price thumbs
///
/// PUT /api/v1/discovery/sessions/{id}/draft/price
///
/// Request body:
/// ```json
/// { "min": 20, "max": 80 }
/// ```
async fn set_price(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<PriceRequest>,
) -> impl Responder {
    update_session(&state, path.into_inner(), |controller| {
        controller
            .set_price(req.min, req.max)
            .map_err(|e| ErrorResponse::new("Invalid price", e.to_string(), 400))
    })
    .await
}

/// POST /api/v1/discovery/sessions/{id}/draft/reset
async fn reset_draft(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    update_session(&state, path.into_inner(), |controller| {
        controller.reset_draft();
        Ok(())
    })
    .await
}

/// POST /api/v1/discovery/sessions/{id}/apply
async fn apply_filters(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    update_session(&state, path.into_inner(), |controller| {
        controller.apply();
        Ok(())
    })
    .await
}

/// Select a tutor to view
///
/// POST /api/v1/discovery/sessions/{id}/select
///
/// Request body:
/// ```json
/// { "tutorId": "string" }
/// ```
///
/// Responds with the navigation intent; the client performs the navigation.
async fn select_tutor(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<SelectTutorRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let id = path.into_inner();
    let Some(controller) = state.sessions.get(&id).await else {
        return session_not_found(&id);
    };
    let intent = controller.lock().await.select_tutor(&req.tutor_id);

    match intent {
        Some(intent) => HttpResponse::Ok().json(intent),
        None => HttpResponse::NotFound().json(ErrorResponse::new(
            "Tutor not found",
            format!("No tutor with id {} in this session's catalog", req.tutor_id),
            404,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_shape() {
        let response = ErrorResponse::new("Session not found", "missing", 404);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["statusCode"], 404);
        assert_eq!(json["error"], "Session not found");
    }
}
