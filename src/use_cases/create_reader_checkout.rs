use serde_json::Value;

use crate::domain::checkout::Currency;
use crate::domain::provider::ReaderProvider;
use crate::domain::reader::{Money, ReaderCheckoutDraft};
use crate::use_cases::dto::CreateReaderCheckoutCommand;

const READER_CHECKOUT_DESCRIPTION: &str = "Card reader checkout";
/// The reader API takes amounts in minor units; EUR has two decimal places.
const EUR_MINOR_UNIT: u8 = 2;

#[derive(Clone)]
pub struct CreateReaderCheckoutUseCase<P: ReaderProvider> {
	provider:      P,
	merchant_code: String,
}

impl<P: ReaderProvider> CreateReaderCheckoutUseCase<P> {
	pub fn new(provider: P, merchant_code: String) -> Self {
		Self {
			provider,
			merchant_code,
		}
	}

	pub async fn execute(
		&self,
		command: CreateReaderCheckoutCommand,
	) -> Result<Value, Box<dyn std::error::Error + Send>> {
		let draft = ReaderCheckoutDraft {
			description:  READER_CHECKOUT_DESCRIPTION.to_string(),
			total_amount: Money {
				currency:   Currency::Eur,
				minor_unit: EUR_MINOR_UNIT,
				value:      to_minor_units(command.amount),
			},
		};

		self.provider
			.create_reader_checkout(&self.merchant_code, &command.reader_id, draft)
			.await
	}
}

fn to_minor_units(amount: f64) -> i64 {
	(amount * 100.0).round() as i64
}
