use axum::{extract::Multipart, http::StatusCode, Json};
use serde_json::json;

use crate::domain::a001_sales_summary;
use contracts::domain::a001_sales_summary::aggregate::SalesSummary;

/// POST /api/upload-sales-data
///
/// Accepts a multipart form whose `file` part carries the sales CSV.
/// Returns the stored summary on success, 400 with an error message when
/// the body or the CSV is rejected.
pub async fn upload_sales_data(
    mut multipart: Multipart,
) -> Result<Json<SalesSummary>, (StatusCode, Json<serde_json::Value>)> {
    let mut file_name = None;
    let mut csv_text = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        file_name = field.file_name().map(|s| s.to_string());
        let text = field
            .text()
            .await
            .map_err(|e| bad_request(format!("Failed to read uploaded file: {e}")))?;
        csv_text = Some(text);
        break;
    }

    let Some(text) = csv_text else {
        return Err(bad_request(
            "Missing \"file\" part in multipart body".to_string(),
        ));
    };
    let file_name = file_name.unwrap_or_else(|| "upload.csv".to_string());

    match a001_sales_summary::service::import_csv(&file_name, &text).await {
        Ok(summary) => Ok(Json(summary)),
        Err(e) => {
            tracing::error!("Sales upload {} rejected: {}", file_name, e);
            Err(bad_request(format!("{e}")))
        }
    }
}

/// GET /api/sales-summaries
pub async fn list_summaries() -> Result<Json<Vec<SalesSummary>>, StatusCode> {
    match a001_sales_summary::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list sales summaries: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

fn bad_request(message: String) -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}
