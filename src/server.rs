//! HTTP transport for the classification service.
//!
//! A single endpoint, `POST /api/predict`, accepting
//! `{"message": "<text>"}` and returning either a classification result or
//! a structured error object. Requests with a missing `message` field are
//! rejected before the core pipeline runs; classification failures are
//! logged and surfaced as a server error without taking the process down.

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, web};
use serde::{Deserialize, Serialize};

use crate::detector::SpamDetector;

/// Request payload for the predict endpoint.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    /// The message to classify. Validated by the handler so its absence
    /// produces the contract's error body rather than a generic
    /// deserialization failure.
    pub message: Option<String>,
}

/// Structured error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Handle a classification request.
pub async fn predict(
    detector: web::Data<SpamDetector>,
    payload: web::Json<PredictRequest>,
) -> HttpResponse {
    let Some(message) = payload.message.as_deref() else {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "No message provided".to_string(),
        });
    };

    match detector.classify(message) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => {
            log::error!("classification failed: {e}");
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}

/// Register the service routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/predict").route(web::post().to(predict)));
}

/// Run the HTTP server until shutdown.
///
/// The detector is fully initialized before the listener binds, so every
/// request observes the same immutable fitted artifacts.
pub async fn serve(detector: SpamDetector, host: &str, port: u16) -> std::io::Result<()> {
    let detector = web::Data::new(detector);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .app_data(detector.clone())
            .configure(configure)
    })
    .bind((host, port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test, web};
    use serde_json::json;

    use super::*;
    use crate::model::store::ModelStore;

    fn detector_data() -> web::Data<SpamDetector> {
        web::Data::new(SpamDetector::new(ModelStore::fit_bootstrap().unwrap()))
    }

    #[actix_web::test]
    async fn test_predict_spam() {
        let app =
            test::init_service(App::new().app_data(detector_data()).configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/api/predict")
            .set_json(json!({"message": "Free money waiting for you"}))
            .to_request();

        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["classification"], "Spam");
        assert!(body["similarity_score"].as_f64().unwrap() > 0.5);
    }

    #[actix_web::test]
    async fn test_predict_ham() {
        let app =
            test::init_service(App::new().app_data(detector_data()).configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/api/predict")
            .set_json(json!({"message": "Meeting at 3pm tomorrow"}))
            .to_request();

        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["classification"], "Ham");
        assert!(body["similarity_score"].as_f64().unwrap() > 0.5);
    }

    #[actix_web::test]
    async fn test_missing_message_rejected() {
        let app =
            test::init_service(App::new().app_data(detector_data()).configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/api/predict")
            .set_json(json!({}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "No message provided");
    }

    #[actix_web::test]
    async fn test_empty_message_still_classified() {
        let app =
            test::init_service(App::new().app_data(detector_data()).configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/api/predict")
            .set_json(json!({"message": ""}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["classification"].is_string());
        let score = body["similarity_score"].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&score));
    }
}
