use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// One entry of the upstream price feed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PriceEntry {
    pub currency: String,
    pub date: String,
    pub price: f64,
}
