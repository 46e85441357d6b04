use async_trait::async_trait;
use serde_json::Value;

use crate::domain::checkout::CheckoutDraft;
use crate::domain::reader::{ReaderCheckoutDraft, ReaderDraft};

// Provider responses are relayed to callers verbatim, so both ports hand
// back the raw JSON value instead of typed models.

#[async_trait]
pub trait CheckoutProvider: Send + Sync + 'static {
	async fn create_checkout(
		&self,
		draft: CheckoutDraft,
	) -> Result<Value, Box<dyn std::error::Error + Send>>;
}

#[async_trait]
pub trait ReaderProvider: Send + Sync + 'static {
	async fn list_readers(
		&self,
		merchant_code: &str,
	) -> Result<Value, Box<dyn std::error::Error + Send>>;

	async fn create_reader(
		&self,
		merchant_code: &str,
		draft: ReaderDraft,
	) -> Result<Value, Box<dyn std::error::Error + Send>>;

	async fn create_reader_checkout(
		&self,
		merchant_code: &str,
		reader_id: &str,
		draft: ReaderCheckoutDraft,
	) -> Result<Value, Box<dyn std::error::Error + Send>>;
}
