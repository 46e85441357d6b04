use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
	#[serde(rename = "EUR")]
	Eur,
}

/// A checkout to be created on the provider side, in its wire format.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CheckoutDraft {
	pub checkout_reference: String,
	pub amount:             f32,
	pub currency:           Currency,
	pub merchant_code:      String,
}
