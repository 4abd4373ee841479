//! Date picker fields.
//!
//! Every picker writes `YYYY-MM-DD` into its field unless given another
//! format. A [`DateRange`] pairs a start and end picker.

use crate::error::FormError;
use chrono::NaiveDate;
use rcd_utils::dates::{format_date_with, is_date_format};
use serde::Serialize;

pub const PICKER_FORMAT: &str = "%Y-%m-%d";

/// New value for a form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldUpdate {
    pub field_id: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePicker {
    field_id: String,
    format: String,
}

impl DatePicker {
    pub fn new(field_id: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            format: PICKER_FORMAT.to_string(),
        }
    }

    /// Use another strftime format; refused when it cannot render a date.
    pub fn with_format(mut self, format: impl Into<String>) -> Result<Self, FormError> {
        let format = format.into();
        if !is_date_format(&format) {
            return Err(FormError::InvalidFormat(format));
        }
        self.format = format;
        Ok(self)
    }

    pub fn field_id(&self) -> &str {
        &self.field_id
    }

    /// The update written to the field when a date is picked.
    pub fn select(&self, date: NaiveDate) -> Result<FieldUpdate, FormError> {
        let value = format_date_with(&date, &self.format)
            .ok_or_else(|| FormError::InvalidFormat(self.format.clone()))?;
        Ok(FieldUpdate {
            field_id: self.field_id.clone(),
            value,
        })
    }

    /// Read back a value typed or picked into the field.
    pub fn parse(&self, value: &str) -> Result<NaiveDate, FormError> {
        NaiveDate::parse_from_str(value.trim(), &self.format).map_err(|_| FormError::InvalidDate {
            value: value.to_string(),
            format: self.format.clone(),
        })
    }
}

/// Start and end pickers filtering a dashboard by date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: DatePicker,
    pub end: DatePicker,
}

impl DateRange {
    pub fn new(start_field: impl Into<String>, end_field: impl Into<String>) -> Self {
        Self {
            start: DatePicker::new(start_field),
            end: DatePicker::new(end_field),
        }
    }

    /// Parse both fields; the range is inclusive and may be a single day.
    pub fn parse(&self, start: &str, end: &str) -> Result<(NaiveDate, NaiveDate), FormError> {
        let s = self.start.parse(start)?;
        let e = self.end.parse(end)?;
        if s > e {
            return Err(FormError::InvertedRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok((s, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_select_writes_iso_date() {
        let picker = DatePicker::new("id_start_date");
        assert_eq!(
            picker.select(day(2023, 3, 7)).unwrap(),
            FieldUpdate {
                field_id: "id_start_date".to_string(),
                value: "2023-03-07".to_string()
            }
        );
    }

    #[test]
    fn test_custom_format() {
        let picker = DatePicker::new("d").with_format("%d/%m/%Y").unwrap();
        assert_eq!(picker.select(day(2023, 3, 7)).unwrap().value, "07/03/2023");
        assert_eq!(picker.parse("07/03/2023").unwrap(), day(2023, 3, 7));
    }

    #[test]
    fn test_unusable_format_refused() {
        assert_eq!(
            DatePicker::new("d").with_format("%Q"),
            Err(FormError::InvalidFormat("%Q".to_string()))
        );
        assert_eq!(
            DatePicker::new("d").with_format("%Y-%m-%d %H:%M"),
            Err(FormError::InvalidFormat("%Y-%m-%d %H:%M".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let picker = DatePicker::new("d");
        assert!(matches!(picker.parse("March 7"), Err(FormError::InvalidDate { .. })));
    }

    #[test]
    fn test_range() {
        let range = DateRange::new("start", "end");
        assert_eq!(
            range.parse("2023-01-01", "2023-01-01").unwrap(),
            (day(2023, 1, 1), day(2023, 1, 1))
        );
        assert!(matches!(
            range.parse("2023-02-01", "2023-01-01"),
            Err(FormError::InvertedRange { .. })
        ));
    }
}
