use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use service::pricing::Conversion;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize)]
pub struct ConvertParams {
    pub amount: f64,
    pub from: String,
    pub to: String,
}

/// 金额换算：按最新抓取的价格表计算 `amount * price[to] / price[from]`
pub async fn convert(
    State(state): State<ServerState>,
    Query(params): Query<ConvertParams>,
) -> Result<Json<Conversion>, JsonApiError> {
    let conversion = state
        .converter
        .convert(params.amount, &params.from, &params.to)
        .await?;
    Ok(Json(conversion))
}
