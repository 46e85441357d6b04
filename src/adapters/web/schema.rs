use serde::Deserialize;
use serde_json::{Map, Value};

use crate::adapters::web::errors::ApiError;

#[derive(Debug, Deserialize)]
pub struct CreateReaderRequest {
	#[serde(default)]
	pub pairing_code: String,
	#[serde(default)]
	pub name:         String,
}

/// Pulls `amount` out of an untyped JSON object body.
///
/// Anything that is not a JSON object is rejected as invalid json; an
/// absent or non-numeric `amount` is treated as not-a-number and fails the
/// positivity check, so both surface as the same validation error.
pub fn parse_amount(body: &[u8]) -> Result<f64, ApiError> {
	let payload: Map<String, Value> =
		serde_json::from_slice(body).map_err(|_| ApiError::InvalidJson)?;

	let amount = payload
		.get("amount")
		.and_then(Value::as_f64)
		.unwrap_or(f64::NAN);

	if !amount.is_finite() || amount <= 0.0 {
		return Err(ApiError::InvalidAmount);
	}

	Ok(amount)
}
