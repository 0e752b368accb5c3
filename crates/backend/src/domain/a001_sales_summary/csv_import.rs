use contracts::domain::a001_sales_summary::aggregate::SaleDetail;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvImportError {
    #[error("Missing required headers: product_name, quantity, price_per_unit")]
    MissingHeaders,
    #[error("Failed to read CSV: {0}")]
    Read(#[from] csv::Error),
    #[error("Line {line}: {message}")]
    Row { line: usize, message: String },
}

/// Parse sales CSV text into detail lines, one per data row.
///
/// Header names are matched trimmed and case-insensitively; columns beyond
/// the required three are ignored. Any unreadable record or unparsable cell
/// rejects the whole file, so partial imports are never stored.
pub fn parse_sales_csv(text: &str) -> Result<Vec<SaleDetail>, CsvImportError> {
    // Strip UTF-8 BOM if present
    let text = text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let position_of = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));

    let (Some(product_idx), Some(quantity_idx), Some(price_idx)) = (
        position_of("product_name"),
        position_of("quantity"),
        position_of("price_per_unit"),
    ) else {
        return Err(CsvImportError::MissingHeaders);
    };

    tracing::debug!(
        "Sales CSV headers: {:?}",
        headers.iter().collect::<Vec<_>>()
    );

    let mut details = Vec::new();
    for (i, result) in reader.records().enumerate() {
        // The header row occupies line 1
        let line = i + 2;
        let record = result.map_err(|e| CsvImportError::Row {
            line,
            message: format!("{e}"),
        })?;

        let cell = |idx: usize, header: &str| {
            record.get(idx).ok_or_else(|| CsvImportError::Row {
                line,
                message: format!("missing \"{header}\" value"),
            })
        };

        let product = cell(product_idx, "product_name")?.to_string();

        let quantity_raw = cell(quantity_idx, "quantity")?;
        let quantity: i32 = quantity_raw.parse().map_err(|_| CsvImportError::Row {
            line,
            message: format!("invalid quantity {quantity_raw:?}"),
        })?;

        let price_raw = cell(price_idx, "price_per_unit")?;
        let price: f64 = price_raw.parse().map_err(|_| CsvImportError::Row {
            line,
            message: format!("invalid price_per_unit {price_raw:?}"),
        })?;

        details.push(SaleDetail::new(product, quantity, price));
    }

    Ok(details)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_in_file_order() {
        let csv = "product_name,quantity,price_per_unit\n\
                   Widget,2,10.50\n\
                   Gadget,5,4.00\n";
        let details = parse_sales_csv(csv).expect("valid csv");
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].product, "Widget");
        assert_eq!(details[0].quantity, 2);
        assert!((details[0].revenue - 21.0).abs() < 1e-9);
        assert_eq!(details[1].product, "Gadget");
        assert!((details[1].revenue - 20.0).abs() < 1e-9);
    }

    #[test]
    fn headers_match_case_insensitively_with_extra_columns() {
        let csv = "Region,PRODUCT_NAME,Quantity,Price_Per_Unit\n\
                   EU,Widget,1,2.5\n";
        let details = parse_sales_csv(csv).expect("valid csv");
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].product, "Widget");
        assert!((details[0].price - 2.5).abs() < 1e-9);
    }

    #[test]
    fn cells_are_trimmed() {
        let csv = "product_name, quantity , price_per_unit\n\
                   \u{20}Widget , 3 , 1.5 \n";
        let details = parse_sales_csv(csv).expect("valid csv");
        assert_eq!(details[0].product, "Widget");
        assert_eq!(details[0].quantity, 3);
    }

    #[test]
    fn missing_required_header_is_rejected() {
        let csv = "product_name,quantity\nWidget,2\n";
        let err = parse_sales_csv(csv).expect_err("missing price header");
        assert!(matches!(err, CsvImportError::MissingHeaders));
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = parse_sales_csv("").expect_err("no headers");
        assert!(matches!(err, CsvImportError::MissingHeaders));
    }

    #[test]
    fn header_only_file_yields_no_details() {
        let csv = "product_name,quantity,price_per_unit\n";
        let details = parse_sales_csv(csv).expect("header only");
        assert!(details.is_empty());
    }

    #[test]
    fn invalid_quantity_reports_line_number() {
        let csv = "product_name,quantity,price_per_unit\n\
                   Widget,2,10.0\n\
                   Gadget,many,4.0\n";
        let err = parse_sales_csv(csv).expect_err("bad quantity");
        match err {
            CsvImportError::Row { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("quantity"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_price_is_rejected() {
        let csv = "product_name,quantity,price_per_unit\n\
                   Widget,2,free\n";
        let err = parse_sales_csv(csv).expect_err("bad price");
        assert!(matches!(err, CsvImportError::Row { line: 2, .. }));
    }

    #[test]
    fn ragged_row_is_rejected() {
        let csv = "product_name,quantity,price_per_unit\n\
                   Widget,2\n";
        let err = parse_sales_csv(csv).expect_err("short row");
        assert!(matches!(err, CsvImportError::Row { line: 2, .. }));
    }

    #[test]
    fn bom_is_stripped() {
        let csv = "\u{FEFF}product_name,quantity,price_per_unit\n\
                   Widget,1,9.99\n";
        let details = parse_sales_csv(csv).expect("bom csv");
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].product, "Widget");
    }
}
