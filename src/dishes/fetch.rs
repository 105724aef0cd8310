use anyhow::{Context, Result};
use bytes::Bytes;

use crate::api::Api;
use super::types::{NewDish, RawDish};

// Single-attempt GET; transport errors and non-2xx responses bubble up to
// the caller, which decides whether the failure is fatal.
pub async fn fetch_dishes(api: &Api) -> Result<Vec<RawDish>> {
    let body: Bytes = api
        .http
        .get(api.endpoint.clone())
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    let raw: Vec<RawDish> = serde_json::from_slice(&body).context("parse dish list")?;
    Ok(raw)
}

// Fire-and-forget: the sheet script always answers with an opaque text
// body, so the response is logged at debug and never parsed for success.
pub async fn post_dish(api: &Api, dish: &NewDish) -> Result<()> {
    let text = api
        .http
        .post(api.endpoint.clone())
        .json(dish)
        .send()
        .await?
        .text()
        .await?;
    tracing::debug!("API response: {}", text);
    Ok(())
}
