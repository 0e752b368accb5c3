use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Одна строка продаж из загруженного файла
///
/// `revenue` вычисляется при создании и дальше не пересчитывается.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleDetail {
    pub product: String,
    pub quantity: i32,
    /// Цена за единицу
    pub price: f64,
    pub revenue: f64,
}

impl SaleDetail {
    pub fn new(product: String, quantity: i32, price: f64) -> Self {
        let revenue = f64::from(quantity) * price;
        Self {
            product,
            quantity,
            price,
            revenue,
        }
    }
}

/// Итог одной загрузки CSV (агрегат)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    pub id: Uuid,

    /// Момент обработки загрузки (UTC)
    pub timestamp: DateTime<Utc>,

    #[serde(rename = "totalRecords")]
    pub total_records: i32,

    #[serde(rename = "totalQuantity")]
    pub total_quantity: i32,

    #[serde(rename = "totalRevenue")]
    pub total_revenue: f64,

    #[serde(rename = "fileName")]
    pub file_name: String,

    /// Строки по товарам в порядке строк исходного файла
    pub details: Vec<SaleDetail>,
}

impl SalesSummary {
    /// Собирает итог свежей загрузки. Суммы выводятся из `details`,
    /// чтобы они не могли разойтись со строками.
    pub fn from_details(file_name: String, details: Vec<SaleDetail>) -> Self {
        let total_records = details.len() as i32;
        let total_quantity = details.iter().map(|d| d.quantity).sum();
        let total_revenue = details.iter().map(|d| d.revenue).sum();
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            total_records,
            total_quantity,
            total_revenue,
            file_name,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_revenue_is_quantity_times_price() {
        let detail = SaleDetail::new("Widget".to_string(), 3, 19.99);
        assert!((detail.revenue - 59.97).abs() < 1e-9);
    }

    #[test]
    fn summary_totals_derive_from_details() {
        let details = vec![
            SaleDetail::new("Widget".to_string(), 2, 10.0),
            SaleDetail::new("Gadget".to_string(), 5, 4.0),
        ];
        let summary = SalesSummary::from_details("sales.csv".to_string(), details);
        assert_eq!(summary.total_records, 2);
        assert_eq!(summary.total_quantity, 7);
        assert!((summary.total_revenue - 40.0).abs() < 1e-9);
        assert_eq!(summary.file_name, "sales.csv");
        assert_eq!(summary.details[0].product, "Widget");
        assert_eq!(summary.details[1].product, "Gadget");
    }

    #[test]
    fn empty_upload_has_zero_totals() {
        let summary = SalesSummary::from_details("empty.csv".to_string(), Vec::new());
        assert_eq!(summary.total_records, 0);
        assert_eq!(summary.total_quantity, 0);
        assert_eq!(summary.total_revenue, 0.0);
        assert!(summary.details.is_empty());
    }

    #[test]
    fn summary_serializes_with_api_field_names() {
        let summary = SalesSummary::from_details(
            "sales.csv".to_string(),
            vec![SaleDetail::new("Widget".to_string(), 1, 2.5)],
        );
        let json = serde_json::to_value(&summary).expect("serialize");
        assert!(json.get("totalRecords").is_some());
        assert!(json.get("totalQuantity").is_some());
        assert!(json.get("totalRevenue").is_some());
        assert!(json.get("fileName").is_some());
        assert_eq!(json["details"][0]["product"], "Widget");
        assert_eq!(json["details"][0]["revenue"], 2.5);
    }
}
