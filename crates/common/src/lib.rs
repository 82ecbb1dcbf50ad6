use thiserror::Error;

pub mod types;
pub mod utils;
pub mod env;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
}

pub mod prices {
    use super::*;
    use crate::types::PriceEntry;

    /// Fetch the raw price list from the upstream feed.
    ///
    /// The feed is a flat JSON array of `{currency, date, price}` entries;
    /// duplicate currencies (same symbol, different dates) are passed through
    /// untouched, lookup policy belongs to the caller.
    pub async fn fetch_prices(url: &str) -> Result<Vec<PriceEntry>, CoreError> {
        let resp = reqwest::get(url)
            .await
            .map_err(|e| CoreError::Network(e.to_string()))?;
        let entries = resp
            .json::<Vec<PriceEntry>>()
            .await
            .map_err(|e| CoreError::Parse(e.to_string()))?;
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn price_entry_deserializes_feed_shape() {
        let raw = r#"[{"currency":"ETH","date":"2023-08-29T07:10:52.000Z","price":1645.93},
                      {"currency":"USDC","date":"2023-08-29T07:10:40.000Z","price":1.0}]"#;
        let entries: Vec<types::PriceEntry> = serde_json::from_str(raw).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].currency, "ETH");
        assert!((entries[1].price - 1.0).abs() < f64::EPSILON);
    }
}
