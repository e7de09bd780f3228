//! Basic usage example for the remote logging SDK
//!
//! Run with:
//! ```bash
//! REMOTE_LOGGING_URL=http://localhost:9000/api/ \
//! REMOTE_LOGGING_TOKEN=demo_token_123 \
//! REMOTE_LOGGING_DONT_REPORT="HttpError(404)" \
//! RUST_LOG=remote_logging_actix=debug \
//! cargo run --example basic_usage
//! ```

use actix_web::{error, web, App, HttpResponse, HttpServer};
use remote_logging_actix::prelude::*;
use tracing_subscriber::EnvFilter;

async fn index() -> HttpResponse {
    HttpResponse::Ok().body("Hello!")
}

async fn missing() -> Result<HttpResponse, actix_web::Error> {
    // Excluded through REMOTE_LOGGING_DONT_REPORT
    Err(error::ErrorNotFound("nothing here"))
}

async fn broken() -> Result<HttpResponse, actix_web::Error> {
    Err(error::ErrorInternalServerError("database unavailable"))
}

/// Pretend a queue worker gave up on a job
async fn fail_job(reporter: web::Data<ExceptionReporter>) -> HttpResponse {
    let failure = CapturedException::new("JobTimeout", "job exceeded 60s").with_code(504);
    let payload = serde_json::json!({ "job": "SendInvoice", "attempts": 3 });

    match FailedJob::new("redis", "emails", &payload, &failure) {
        Ok(job) => {
            reporter.send_failed_job(&job).await;
            HttpResponse::Accepted().finish()
        }
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env().map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let reporter = ExceptionReporter::new(config);

    println!("Starting example server on http://0.0.0.0:8080");
    println!("  GET  http://localhost:8080/          -> 200");
    println!("  GET  http://localhost:8080/missing   -> 404 (not reported)");
    println!("  GET  http://localhost:8080/broken    -> 500 (reported)");
    println!("  POST http://localhost:8080/fail-job  -> failed job sent");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(reporter.clone()))
            .wrap(RemoteLoggingMiddleware::with_reporter(reporter.clone()))
            .service(web::resource("/").route(web::get().to(index)))
            .service(web::resource("/missing").route(web::get().to(missing)))
            .service(web::resource("/broken").route(web::get().to(broken)))
            .service(web::resource("/fail-job").route(web::post().to(fail_job)))
    })
    .bind("0.0.0.0:8080")?
    .run()
    .await
}
