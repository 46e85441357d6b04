use std::error::Error;
use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::domain::checkout::CheckoutDraft;
use crate::domain::provider::{CheckoutProvider, ReaderProvider};
use crate::domain::reader::{ReaderCheckoutDraft, ReaderDraft};

const SUMUP_PRODUCTION_BASE_URL: &str = "https://api.sumup.com";

#[derive(Debug)]
pub struct ProviderError(pub String);

impl fmt::Display for ProviderError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Provider error: {}", self.0)
	}
}

impl Error for ProviderError {}

/// Thin client over the SumUp REST API. Holds the access credential for
/// the process lifetime; cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct SumUpClient {
	http_client: Client,
	base_url:    String,
	api_key:     String,
}

impl SumUpClient {
	pub fn new(api_key: String) -> Self {
		Self::with_base_url(api_key, SUMUP_PRODUCTION_BASE_URL.to_string())
	}

	pub fn with_base_url(api_key: String, base_url: String) -> Self {
		Self {
			http_client: Client::new(),
			base_url,
			api_key,
		}
	}

	fn base_url(&self) -> &str {
		self.base_url.trim_end_matches('/')
	}

	async fn post_json<B: Serialize + Sync>(
		&self,
		url: String,
		body: &B,
	) -> Result<Value, Box<dyn Error + Send>> {
		let response = self
			.http_client
			.post(url)
			.bearer_auth(&self.api_key)
			.json(body)
			.send()
			.await
			.map_err(|e| Box::new(e) as Box<dyn Error + Send>)?;

		relay_json(response).await
	}
}

async fn relay_json(
	response: reqwest::Response,
) -> Result<Value, Box<dyn Error + Send>> {
	let status = response.status();

	if !status.is_success() {
		let body = response.text().await.unwrap_or_default();
		return Err(Box::new(ProviderError(format!(
			"unexpected status {status}: {body}"
		))));
	}

	response
		.json::<Value>()
		.await
		.map_err(|e| Box::new(e) as Box<dyn Error + Send>)
}

#[async_trait]
impl CheckoutProvider for SumUpClient {
	async fn create_checkout(
		&self,
		draft: CheckoutDraft,
	) -> Result<Value, Box<dyn Error + Send>> {
		let url = format!("{}/v0.1/checkouts", self.base_url());
		self.post_json(url, &draft).await
	}
}

#[async_trait]
impl ReaderProvider for SumUpClient {
	async fn list_readers(
		&self,
		merchant_code: &str,
	) -> Result<Value, Box<dyn Error + Send>> {
		let url = format!(
			"{}/v0.1/merchants/{merchant_code}/readers",
			self.base_url()
		);

		let response = self
			.http_client
			.get(url)
			.bearer_auth(&self.api_key)
			.send()
			.await
			.map_err(|e| Box::new(e) as Box<dyn Error + Send>)?;

		relay_json(response).await
	}

	async fn create_reader(
		&self,
		merchant_code: &str,
		draft: ReaderDraft,
	) -> Result<Value, Box<dyn Error + Send>> {
		let url = format!(
			"{}/v0.1/merchants/{merchant_code}/readers",
			self.base_url()
		);
		self.post_json(url, &draft).await
	}

	async fn create_reader_checkout(
		&self,
		merchant_code: &str,
		reader_id: &str,
		draft: ReaderCheckoutDraft,
	) -> Result<Value, Box<dyn Error + Send>> {
		let url = format!(
			"{}/v0.1/merchants/{merchant_code}/readers/{reader_id}/checkout",
			self.base_url()
		);
		self.post_json(url, &draft).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_base_url_trailing_slash_is_stripped() {
		let client = SumUpClient::with_base_url(
			"key".to_string(),
			"http://localhost:8081/".to_string(),
		);
		assert_eq!(client.base_url(), "http://localhost:8081");
	}
}
