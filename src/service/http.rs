use crate::config::ServerSettings;
use crate::service::{PredictError, PredictRequest, PredictorService};
use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, post, web};

#[post("/predict")]
async fn predict(
    service: web::Data<PredictorService>,
    body: web::Json<PredictRequest>,
) -> HttpResponse {
    HttpResponse::Ok().json(service.predict(&body))
}

/// Malformed, incomplete or wrongly typed bodies become a 400 with a JSON
/// `error` message.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| PredictError::InvalidPayload(err.to_string()).into())
}

/// Any origin, method and header.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
}

/// Registers the prediction route and its body extractor settings.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(predict);
}

/// Serves until shutdown.
pub async fn run(settings: &ServerSettings, service: PredictorService) -> std::io::Result<()> {
    let data = web::Data::new(service);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .app_data(data.clone())
            .configure(configure)
    })
    .bind((settings.host.as_str(), settings.port))?;

    log::info!("listening on {}:{}", settings.host, settings.port);
    server.run().await
}
