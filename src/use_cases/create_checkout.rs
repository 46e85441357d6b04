use serde_json::Value;
use uuid::Uuid;

use crate::domain::checkout::{CheckoutDraft, Currency};
use crate::domain::provider::CheckoutProvider;
use crate::use_cases::dto::CreateCheckoutCommand;

/// Prefix of the reference generated for every checkout sent upstream.
const CHECKOUT_REFERENCE_PREFIX: &str = "checkout";

#[derive(Clone)]
pub struct CreateCheckoutUseCase<P: CheckoutProvider> {
	provider:      P,
	merchant_code: String,
}

impl<P: CheckoutProvider> CreateCheckoutUseCase<P> {
	pub fn new(provider: P, merchant_code: String) -> Self {
		Self {
			provider,
			merchant_code,
		}
	}

	pub async fn execute(
		&self,
		command: CreateCheckoutCommand,
	) -> Result<Value, Box<dyn std::error::Error + Send>> {
		let draft = CheckoutDraft {
			checkout_reference: format!(
				"{}-{}",
				CHECKOUT_REFERENCE_PREFIX,
				Uuid::new_v4()
			),
			amount:             command.amount as f32,
			currency:           Currency::Eur,
			merchant_code:      self.merchant_code.clone(),
		};

		self.provider.create_checkout(draft).await
	}
}
