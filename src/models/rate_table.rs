use std::path::Path;

use anyhow::{ Context, Result };
use serde::{ Deserialize, Serialize };

use super::{ currency::Currency, rate_model::{ RateModel, RateSource } };

/// Serialized form of a rate model as supplied by external tooling:
///
/// ```json
/// { "base": "SHELL", "rates": [[1.0, 1.45, 0.52, 0.72], ...] }
/// ```
///
/// Rows and columns follow `Currency` declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub base: Currency,
    pub rates: Vec<Vec<f64>>,
}

impl RateTable {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse rate table JSON")
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs
            ::read_to_string(path)
            .with_context(|| format!("Failed to read rate table from {}", path.display()))?;
        Self::from_json_str(&raw).with_context(|| format!("Invalid rate table in {}", path.display()))
    }

    /// Validate the table into a model
    pub fn into_model(self) -> crate::error::Result<RateModel> {
        Ok(RateModel::new(self.rates, self.base)?)
    }
}

impl From<&RateModel> for RateTable {
    fn from(model: &RateModel) -> Self {
        Self {
            base: model.base(),
            rates: model.rows(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ ArbError, InvalidModelError };
    use std::io::Write;

    const REFERENCE_JSON: &str =
        r#"{
        "base": "SHELL",
        "rates": [
            [1.0, 1.45, 0.52, 0.72],
            [0.7, 1.0, 0.31, 0.48],
            [1.95, 3.1, 1.0, 1.49],
            [1.34, 1.98, 0.64, 1.0]
        ]
    }"#;

    #[test]
    fn test_parse_reference_table() {
        let model = RateTable::from_json_str(REFERENCE_JSON).unwrap().into_model().unwrap();
        assert_eq!(model, RateModel::reference());
    }

    #[test]
    fn test_invalid_table_surfaces_model_error() {
        let mut table = RateTable::from(&RateModel::reference());
        table.rates[0][0] = 0.9;

        assert_eq!(
            table.into_model(),
            Err(
                ArbError::InvalidModel(InvalidModelError::BadDiagonal {
                    currency: Currency::Snowball,
                    rate: 0.9,
                })
            )
        );
    }

    #[test]
    fn test_unknown_currency_is_rejected() {
        let json = REFERENCE_JSON.replace("\"SHELL\"", "\"SEASHELL\"");
        assert!(RateTable::from_json_str(&json).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(REFERENCE_JSON.as_bytes()).unwrap();

        let table = RateTable::from_json_file(file.path()).unwrap();
        assert_eq!(table.base, Currency::Shell);
        assert_eq!(table, RateTable::from(&RateModel::reference()));
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = RateTable::from_json_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
