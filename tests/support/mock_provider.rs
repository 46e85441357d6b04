use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use checkout_gateway::domain::checkout::CheckoutDraft;
use checkout_gateway::domain::provider::{CheckoutProvider, ReaderProvider};
use checkout_gateway::domain::reader::{ReaderCheckoutDraft, ReaderDraft};
use checkout_gateway::infrastructure::provider::sumup_client::ProviderError;
use serde_json::{Value, json};

/// In-process stand-in for the SumUp API. Records every draft it is handed
/// so tests can assert on what would have gone over the wire.
#[derive(Clone, Default)]
pub struct RecordingProvider {
	fail:                 bool,
	pub checkouts:        Arc<Mutex<Vec<CheckoutDraft>>>,
	pub readers:          Arc<Mutex<Vec<ReaderDraft>>>,
	pub reader_checkouts:
		Arc<Mutex<Vec<(String, String, ReaderCheckoutDraft)>>>,
}

impl RecordingProvider {
	pub fn succeeding() -> Self {
		Self::default()
	}

	pub fn failing() -> Self {
		Self {
			fail: true,
			..Self::default()
		}
	}

	fn relay(
		&self,
		payload: Value,
	) -> Result<Value, Box<dyn std::error::Error + Send>> {
		if self.fail {
			Err(Box::new(ProviderError("provider unavailable".to_string())))
		} else {
			Ok(payload)
		}
	}
}

#[async_trait]
impl CheckoutProvider for RecordingProvider {
	async fn create_checkout(
		&self,
		draft: CheckoutDraft,
	) -> Result<Value, Box<dyn std::error::Error + Send>> {
		let payload = json!({
			"id": "chk_0001",
			"checkout_reference": draft.checkout_reference,
			"amount": draft.amount,
			"currency": "EUR",
			"merchant_code": draft.merchant_code,
			"status": "PENDING",
		});

		self.checkouts.lock().unwrap().push(draft);
		self.relay(payload)
	}
}

#[async_trait]
impl ReaderProvider for RecordingProvider {
	async fn list_readers(
		&self,
		_merchant_code: &str,
	) -> Result<Value, Box<dyn std::error::Error + Send>> {
		self.relay(json!({
			"items": [{"id": "rdr_0001", "name": "Front desk"}],
		}))
	}

	async fn create_reader(
		&self,
		_merchant_code: &str,
		draft: ReaderDraft,
	) -> Result<Value, Box<dyn std::error::Error + Send>> {
		let payload = json!({
			"id": "rdr_0002",
			"name": draft.name,
			"status": "paired",
		});

		self.readers.lock().unwrap().push(draft);
		self.relay(payload)
	}

	async fn create_reader_checkout(
		&self,
		merchant_code: &str,
		reader_id: &str,
		draft: ReaderCheckoutDraft,
	) -> Result<Value, Box<dyn std::error::Error + Send>> {
		let payload = json!({
			"data": {"client_transaction_id": "ctx_0001"},
		});

		self.reader_checkouts.lock().unwrap().push((
			merchant_code.to_string(),
			reader_id.to_string(),
			draft,
		));
		self.relay(payload)
	}
}
