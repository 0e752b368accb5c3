//! Форматирование значений для дашборда

use chrono::{DateTime, Utc};

/// Форматирует сумму с разделителями тысяч (запятыми) и двумя знаками
/// после точки, с округлением до цента
///
/// # Примеры
/// ```
/// use frontend::shared::format::format_money;
/// assert_eq!(format_money(1234567.891), "1,234,567.89");
/// assert_eq!(format_money(42.5), "42.50");
/// assert_eq!(format_money(0.0), "0.00");
/// ```
pub fn format_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::new();
    for (i, ch) in whole.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{frac:02}")
}

/// Короткий id загрузки для таблицы: первые 8 символов плюс многоточие
pub fn short_id(id: &str) -> String {
    let prefix: String = id.chars().take(8).collect();
    format!("{prefix}...")
}

/// Размер файла в килобайтах с одним знаком, например "12.3 KB"
pub fn format_kb(bytes: f64) -> String {
    format!("{:.1} KB", bytes / 1024.0)
}

/// Момент загрузки, как он показан в таблице итогов (UTC)
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Дата загрузки для диалога деталей (UTC)
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(42.5), "42.50");
        assert_eq!(format_money(999.999), "1,000.00");
        assert_eq!(format_money(1234.0), "1,234.00");
        assert_eq!(format_money(1234567.891), "1,234,567.89");
        assert_eq!(format_money(-12.3), "-12.30");
    }

    #[test]
    fn test_short_id() {
        assert_eq!(
            short_id("a7cf07b1-9b5f-4d3e-8a21-1c2d3e4f5a6b"),
            "a7cf07b1..."
        );
        assert_eq!(short_id("abc"), "abc...");
    }

    #[test]
    fn test_format_kb() {
        assert_eq!(format_kb(1024.0), "1.0 KB");
        assert_eq!(format_kb(12595.2), "12.3 KB");
    }

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 7, 14, 30, 5).unwrap();
        assert_eq!(format_timestamp(&ts), "2024-03-07 14:30:05");
        assert_eq!(format_date(&ts), "2024-03-07");
    }
}
