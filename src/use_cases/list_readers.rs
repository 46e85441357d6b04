use serde_json::Value;

use crate::domain::provider::ReaderProvider;

#[derive(Clone)]
pub struct ListReadersUseCase<P: ReaderProvider> {
	provider:      P,
	merchant_code: String,
}

impl<P: ReaderProvider> ListReadersUseCase<P> {
	pub fn new(provider: P, merchant_code: String) -> Self {
		Self {
			provider,
			merchant_code,
		}
	}

	pub async fn execute(
		&self,
	) -> Result<Value, Box<dyn std::error::Error + Send>> {
		self.provider.list_readers(&self.merchant_code).await
	}
}
