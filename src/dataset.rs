use std::fmt;

use log::warn;

use crate::error::VizError;

/// A single cell, numeric when it parses as one.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Number(f64),
    Text(String),
}

impl Field {
    /// Blank cells count as zero.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Field::Number(0.);
        }

        match trimmed.parse::<f64>() {
            Ok(v) => Field::Number(v),
            Err(_) => Field::Text(trimmed.to_owned()),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Number(v) => write!(f, "{v}"),
            Field::Text(s) => f.write_str(s),
        }
    }
}

/// Header row plus data rows of a delimited text resource.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub columns: Vec<Field>,
    pub rows: Vec<Vec<Field>>,
}

impl Table {
    /// Splits `text` into records; the first record is taken as the header.
    /// Rows may have any number of fields.
    pub fn parse(text: &str, delimiter: u8) -> Result<Table, VizError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .delimiter(delimiter)
            .from_reader(text.as_bytes());

        let mut records = reader.records();

        let columns = match records.next() {
            Some(header) => header?.iter().map(Field::parse).collect(),
            None => return Ok(Table::default()),
        };

        let rows = records
            .map(|record| Ok(record?.iter().map(Field::parse).collect()))
            .collect::<Result<Vec<Vec<Field>>, VizError>>()?;

        Ok(Table { columns, rows })
    }

    /// Values of column `index`. Text or missing cells become NaN.
    pub fn numeric_column(&self, index: usize) -> Vec<f64> {
        self.rows
            .iter()
            .enumerate()
            .map(|(row, fields)| match fields.get(index) {
                Some(Field::Number(v)) => *v,
                Some(Field::Text(s)) => {
                    warn!("row {row}, column {index}: {s:?} is not numeric");
                    f64::NAN
                }
                None => {
                    warn!("row {row} has no column {index}");
                    f64::NAN
                }
            })
            .collect()
    }

    pub fn column_name(&self, index: usize) -> Option<String> {
        self.columns.get(index).map(|f| f.to_string())
    }
}
