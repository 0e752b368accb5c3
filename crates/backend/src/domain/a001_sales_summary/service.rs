use super::{csv_import, repository};
use contracts::domain::a001_sales_summary::aggregate::SalesSummary;

/// Parse an uploaded sales CSV, store its summary and return it.
pub async fn import_csv(file_name: &str, csv_text: &str) -> anyhow::Result<SalesSummary> {
    let details = csv_import::parse_sales_csv(csv_text)?;
    let summary = SalesSummary::from_details(file_name.to_string(), details);

    repository::store().insert(summary.clone());

    tracing::info!(
        "Stored sales summary {} for {}: {} records, {} units, revenue {:.2}",
        summary.id,
        summary.file_name,
        summary.total_records,
        summary.total_quantity,
        summary.total_revenue
    );

    Ok(summary)
}

/// All stored summaries in upload order.
pub async fn list_all() -> anyhow::Result<Vec<SalesSummary>> {
    Ok(repository::store().list_all())
}
