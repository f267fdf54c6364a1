//! HTTP intake service: a thin transport wrapper around the scan pipeline.
//!
//! Serves the static upload page at `/` and accepts multipart image
//! uploads at `/process-image`. All pipeline work happens in the library;
//! this layer only validates the upload and shapes the JSON response.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use colored::Colorize;
use serde::Serialize;

use mindscan::{Error, Mindscan};

/// Maximum accepted upload size.
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Embedded single-page upload UI.
const INDEX_HTML: &str = include_str!("../assets/index.html");

#[derive(Serialize)]
struct ProcessResponse {
    success: bool,
    extracted_text: String,
    mind_map: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

/// HTTP status for a failure inside the scan pipeline. A readable image
/// that yields no text is the uploader's problem; everything past upload
/// validation is a processing failure on our side.
fn scan_error_status(error: &Error) -> StatusCode {
    match error {
        Error::NoTextDetected => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            success: false,
            error: message.into(),
        }),
    )
        .into_response()
}

/// Start the service and block until it exits.
pub fn run(host: IpAddr, port: u16, lang: &str) -> Result<(), Box<dyn std::error::Error>> {
    let scanner = Arc::new(Mindscan::new().with_language(lang));
    let addr = SocketAddr::new(host, port);

    let app = Router::new()
        .route("/", get(serve_index))
        .route("/process-image", post(process_image))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(scanner);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        println!(
            "{} http://{}",
            "Listening on".green().bold(),
            listener.local_addr()?
        );
        axum::serve(listener, app).await?;
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}

async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn process_image(
    State(scanner): State<Arc<Mindscan>>,
    mut multipart: Multipart,
) -> Response {
    let mut upload: Option<(String, Vec<u8>)> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Error processing request: {}", e),
                );
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        match field.bytes().await {
            Ok(bytes) => upload = Some((filename, bytes.to_vec())),
            Err(e) => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Error reading upload: {}", e),
                );
            }
        }
        break;
    }

    let Some((filename, data)) = upload else {
        return error_response(StatusCode::BAD_REQUEST, "No file provided");
    };

    if filename.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No file selected");
    }

    if let Err(e) = mindscan::detect::validate_extension(&filename) {
        return error_response(StatusCode::BAD_REQUEST, e.to_string());
    }

    // OCR is CPU-bound; keep it off the async workers.
    let scan = tokio::task::spawn_blocking(move || scanner.scan_bytes(&data)).await;

    let result = match scan {
        Ok(result) => result,
        Err(e) => {
            log::error!("Scan task failed: {}", e);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error processing request",
            );
        }
    };

    match result {
        Ok(result) => {
            if result.map.is_degraded() {
                log::warn!("Upload {} produced a fallback mind map", filename);
            }
            Json(ProcessResponse {
                success: true,
                extracted_text: result.text.clone(),
                mind_map: result.outline(),
            })
            .into_response()
        }
        Err(Error::NoTextDetected) => error_response(
            StatusCode::BAD_REQUEST,
            "No text could be extracted from the image. Please ensure the image \
             contains clear, readable text.",
        ),
        Err(e) => {
            log::error!("Image processing error: {}", e);
            error_response(scan_error_status(&e), e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_shape() {
        let body = serde_json::to_string(&ErrorResponse {
            success: false,
            error: "No file provided".into(),
        })
        .unwrap();
        assert_eq!(body, r#"{"success":false,"error":"No file provided"}"#);
    }

    #[test]
    fn test_process_response_shape() {
        let body = serde_json::to_string(&ProcessResponse {
            success: true,
            extracted_text: "Cats are great pets.".into(),
            mind_map: "- Cats are great pets".into(),
        })
        .unwrap();
        assert!(body.contains("\"success\":true"));
        assert!(body.contains("\"extracted_text\""));
        assert!(body.contains("\"mind_map\""));
    }

    #[test]
    fn test_scan_failures_after_validation_are_server_errors() {
        assert_eq!(
            scan_error_status(&Error::NoTextDetected),
            StatusCode::BAD_REQUEST
        );
        // Decode failures happen past upload validation and report as 500.
        assert_eq!(
            scan_error_status(&Error::UnknownFormat),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            scan_error_status(&Error::ImageDecode("truncated".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            scan_error_status(&Error::Ocr("engine failure".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_index_page_embeds_upload_form() {
        assert!(INDEX_HTML.contains("process-image"));
        assert!(INDEX_HTML.contains("file"));
    }
}
