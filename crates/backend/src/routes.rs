use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers;

/// Конфигурация всех роутов приложения
///
/// CORS и middleware логирования запросов навешиваются в main.
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/upload-sales-data",
            post(handlers::a001_sales_summary::upload_sales_data),
        )
        .route(
            "/api/sales-summaries",
            get(handlers::a001_sales_summary::list_summaries),
        )
        // Собранный frontend (вывод trunk) отдается как корень сайта
        .fallback_service(ServeDir::new("dist"))
}
