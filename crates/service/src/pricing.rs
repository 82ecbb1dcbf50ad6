use std::sync::Arc;

use serde::Serialize;

use common::types::PriceEntry;

use crate::errors::ServiceError;

/// Result of a conversion between two token symbols.
#[derive(Clone, Debug, Serialize)]
pub struct Conversion {
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub result: f64,
}

/// Pure conversion over an already-fetched price list.
///
/// `result = amount * price[to] / price[from]`, the exact ratio direction of
/// the original form. The feed may list a symbol more than once (different
/// dates); the first entry wins.
pub fn convert_amount(
    prices: &[PriceEntry],
    amount: f64,
    from: &str,
    to: &str,
) -> Result<f64, ServiceError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ServiceError::Validation("Amount should be greater than 0".into()));
    }
    let price_from = lookup(prices, from)?;
    let price_to = lookup(prices, to)?;
    if price_from == 0.0 {
        return Err(ServiceError::Validation(format!("price for {from} is zero")));
    }
    Ok(amount * price_to / price_from)
}

fn lookup(prices: &[PriceEntry], symbol: &str) -> Result<f64, ServiceError> {
    prices
        .iter()
        .find(|p| p.currency == symbol)
        .map(|p| p.price)
        .ok_or_else(|| ServiceError::Validation(format!("unknown currency: {symbol}")))
}

/// Converter fetching the price feed per request.
///
/// Mirrors the catalog store's discipline: no cached feed state between
/// requests, each conversion sees a fresh price list.
pub struct Converter {
    feed_url: String,
}

impl Converter {
    pub fn new<S: Into<String>>(feed_url: S) -> Arc<Self> {
        Arc::new(Self { feed_url: feed_url.into() })
    }

    pub async fn convert(
        &self,
        amount: f64,
        from: &str,
        to: &str,
    ) -> Result<Conversion, ServiceError> {
        let prices = common::prices::fetch_prices(&self.feed_url)
            .await
            .map_err(|e| ServiceError::Upstream(e.to_string()))?;
        let result = convert_amount(&prices, amount, from, to)?;
        Ok(Conversion { amount, from: from.to_string(), to: to.to_string(), result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(currency: &str, price: f64) -> PriceEntry {
        PriceEntry { currency: currency.into(), date: "2023-08-29T07:10:52.000Z".into(), price }
    }

    #[test]
    fn ratio_direction_matches_the_source_formula() {
        let prices = vec![entry("USDC", 1.0), entry("ETH", 2000.0)];
        // 2 USDC -> ETH: 2 * price[ETH] / price[USDC]
        let result = convert_amount(&prices, 2.0, "USDC", "ETH").unwrap();
        assert!((result - 4000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn inverse_direction_divides() {
        let prices = vec![entry("USDC", 1.0), entry("ETH", 2000.0)];
        let result = convert_amount(&prices, 2000.0, "ETH", "USDC").unwrap();
        assert!((result - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn first_feed_entry_wins_for_duplicate_symbols() {
        let prices = vec![entry("ATOM", 10.0), entry("ATOM", 99.0), entry("USDC", 1.0)];
        let result = convert_amount(&prices, 1.0, "USDC", "ATOM").unwrap();
        assert!((result - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_currency_is_rejected_not_propagated() {
        let prices = vec![entry("USDC", 1.0)];
        let err = convert_amount(&prices, 1.0, "USDC", "DOGE").unwrap_err();
        assert_eq!(err.to_string(), "unknown currency: DOGE");
        let err = convert_amount(&prices, 1.0, "DOGE", "USDC").unwrap_err();
        assert_eq!(err.to_string(), "unknown currency: DOGE");
    }

    #[test]
    fn non_positive_amount_is_rejected() {
        let prices = vec![entry("USDC", 1.0), entry("ETH", 2000.0)];
        assert!(convert_amount(&prices, 0.0, "USDC", "ETH").is_err());
        assert!(convert_amount(&prices, -1.0, "USDC", "ETH").is_err());
        assert!(convert_amount(&prices, f64::NAN, "USDC", "ETH").is_err());
    }

    #[test]
    fn zero_base_price_is_rejected() {
        let prices = vec![entry("DEAD", 0.0), entry("ETH", 2000.0)];
        assert!(convert_amount(&prices, 1.0, "DEAD", "ETH").is_err());
    }
}
