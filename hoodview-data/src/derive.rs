//! Sale-history columns derived from the raw listing fields.

use chrono::{Datelike, NaiveDate};

use crate::error::DataError;
use crate::fields::{
    DELTA_VALUE, DELTA_VALUE_PER_YEAR, LAST_SOLD_DATE, LAST_SOLD_PRICE, PERCENT_CHANGE,
    SALE_AMOUNT,
};
use crate::record::{FieldValue, Record};

const SOLD_DATE_FORMAT: &str = "%d/%m/%y";

/// Parse a `dd/mm/yy` sold date
pub fn parse_sold_date(value: &str) -> Result<NaiveDate, DataError> {
    NaiveDate::parse_from_str(value.trim(), SOLD_DATE_FORMAT).map_err(|e| {
        DataError::InvalidDate {
            value: value.to_string(),
            message: e.to_string(),
        }
    })
}

/// Normalize `Last Sold Date` to a date and add the `Delta Value`,
/// `Delta Value per Year` and `Percent Change in Value` columns.
///
/// Records without a last sold date get `Null` in all three columns. A
/// column whose inputs are missing, or whose divisor is zero, is `Null` too.
pub fn with_sale_history(
    records: Vec<Record>,
    current_year: i32,
) -> Result<Vec<Record>, DataError> {
    records
        .into_iter()
        .map(|record| add_sale_history(record, current_year))
        .collect()
}

fn add_sale_history(mut record: Record, current_year: i32) -> Result<Record, DataError> {
    let sold_date = match record.get(LAST_SOLD_DATE) {
        Some(FieldValue::Date(date)) => Some(*date),
        Some(FieldValue::Text(text)) if !text.trim().is_empty() => Some(parse_sold_date(text)?),
        _ => None,
    };

    let Some(sold_date) = sold_date else {
        record.insert(DELTA_VALUE, FieldValue::Null);
        record.insert(DELTA_VALUE_PER_YEAR, FieldValue::Null);
        record.insert(PERCENT_CHANGE, FieldValue::Null);
        return Ok(record);
    };
    record.insert(LAST_SOLD_DATE, sold_date);

    let sale = record.number(SALE_AMOUNT);
    let last_price = record.number(LAST_SOLD_PRICE);
    let delta = sale.zip(last_price).map(|(sale, last)| sale - last);

    let years = current_year - sold_date.year();
    let delta_per_year = delta.filter(|_| years > 0).map(|d| d / years as f64);

    let percent = sale
        .zip(last_price.filter(|last| *last != 0.0))
        .map(|(sale, last)| sale / last * 100.0);

    record.insert(DELTA_VALUE, delta);
    record.insert(DELTA_VALUE_PER_YEAR, delta_per_year);
    record.insert(PERCENT_CHANGE, percent);
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sold_date() {
        assert_eq!(
            parse_sold_date("15/06/14").unwrap(),
            NaiveDate::from_ymd_opt(2014, 6, 15).unwrap()
        );
        assert!(matches!(
            parse_sold_date("2014-06-15"),
            Err(DataError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_sale_history_columns() {
        let records = vec![Record::new()
            .with(SALE_AMOUNT, 300_000.0)
            .with(LAST_SOLD_PRICE, 200_000.0)
            .with(LAST_SOLD_DATE, "01/01/14")];

        let derived = with_sale_history(records, 2024).unwrap();
        let record = &derived[0];
        assert_eq!(
            record.date(LAST_SOLD_DATE),
            NaiveDate::from_ymd_opt(2014, 1, 1)
        );
        assert_eq!(record.number(DELTA_VALUE), Some(100_000.0));
        assert_eq!(record.number(DELTA_VALUE_PER_YEAR), Some(10_000.0));
        assert_eq!(record.number(PERCENT_CHANGE), Some(150.0));
    }

    #[test]
    fn test_sale_history_without_sold_date() {
        let records = vec![
            Record::new().with(SALE_AMOUNT, 300_000.0),
            Record::new()
                .with(SALE_AMOUNT, 300_000.0)
                .with(LAST_SOLD_DATE, ""),
        ];
        for record in with_sale_history(records, 2024).unwrap() {
            for field in [DELTA_VALUE, DELTA_VALUE_PER_YEAR, PERCENT_CHANGE] {
                assert!(record.get(field).is_some_and(FieldValue::is_null));
            }
        }
    }

    #[test]
    fn test_sale_history_zero_divisors() {
        let records = vec![Record::new()
            .with(SALE_AMOUNT, 10.0)
            .with(LAST_SOLD_PRICE, 0.0)
            .with(LAST_SOLD_DATE, "03/02/24")];
        let record = &with_sale_history(records, 2024).unwrap()[0];
        assert_eq!(record.number(DELTA_VALUE), Some(10.0));
        assert_eq!(record.number(DELTA_VALUE_PER_YEAR), None);
        assert_eq!(record.number(PERCENT_CHANGE), None);
    }

    #[test]
    fn test_sale_history_bad_date_fails() {
        let records = vec![Record::new().with(LAST_SOLD_DATE, "yesterday")];
        assert!(with_sale_history(records, 2024).is_err());
    }
}
