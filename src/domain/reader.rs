use serde::{Deserialize, Serialize};

use crate::domain::checkout::Currency;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReaderDraft {
	pub pairing_code: String,
	pub name:         String,
}

/// An amount expressed in minor units, as the reader API expects it.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Money {
	pub currency:   Currency,
	pub minor_unit: u8,
	pub value:      i64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReaderCheckoutDraft {
	pub description:  String,
	pub total_amount: Money,
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn test_reader_checkout_draft_wire_format() {
		let draft = ReaderCheckoutDraft {
			description:  "Card reader checkout".to_string(),
			total_amount: Money {
				currency:   Currency::Eur,
				minor_unit: 2,
				value:      1234,
			},
		};

		let serialized = serde_json::to_value(&draft).unwrap();

		assert_eq!(
			serialized,
			json!({
				"description": "Card reader checkout",
				"total_amount": {
					"currency": "EUR",
					"minor_unit": 2,
					"value": 1234,
				},
			})
		);
	}
}
