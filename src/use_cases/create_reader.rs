use serde_json::Value;

use crate::domain::provider::ReaderProvider;
use crate::domain::reader::ReaderDraft;
use crate::use_cases::dto::CreateReaderCommand;

#[derive(Clone)]
pub struct CreateReaderUseCase<P: ReaderProvider> {
	provider:      P,
	merchant_code: String,
}

impl<P: ReaderProvider> CreateReaderUseCase<P> {
	pub fn new(provider: P, merchant_code: String) -> Self {
		Self {
			provider,
			merchant_code,
		}
	}

	pub async fn execute(
		&self,
		command: CreateReaderCommand,
	) -> Result<Value, Box<dyn std::error::Error + Send>> {
		let draft = ReaderDraft {
			pairing_code: command.pairing_code,
			name:         command.name,
		};

		self.provider.create_reader(&self.merchant_code, draft).await
	}
}
