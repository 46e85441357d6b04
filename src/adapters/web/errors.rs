use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, error};
use derive_more::derive::{Display, Error};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorResponse {
	error: String,
}

// Display strings double as the wire-level error messages, so changing one
// changes the public contract of the endpoint that returns it.
#[derive(Debug, Display, Error)]
pub enum ApiError {
	#[display("invalid json")]
	InvalidJson,
	#[display("amount must be a positive number")]
	InvalidAmount,
	#[display("pairing_code and name are required")]
	MissingReaderFields,
	#[display("failed to create checkout")]
	CheckoutFailed,
	#[display("failed to list readers")]
	ListReadersFailed,
	#[display("failed to create reader")]
	CreateReaderFailed,
	#[display("failed to create reader checkout")]
	ReaderCheckoutFailed,
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code())
			.content_type(ContentType::json())
			.json(ErrorResponse {
				error: self.to_string(),
			})
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::InvalidJson |
			ApiError::InvalidAmount |
			ApiError::MissingReaderFields => StatusCode::BAD_REQUEST,
			ApiError::CheckoutFailed |
			ApiError::ListReadersFailed |
			ApiError::CreateReaderFailed |
			ApiError::ReaderCheckoutFailed => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

#[cfg(test)]
mod tests {
	use actix_web::error::ResponseError;

	use super::*;

	#[test]
	fn test_invalid_json_error() {
		let error = ApiError::InvalidJson;
		assert_eq!(error.to_string(), "invalid json");
		assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);

		let resp = error.error_response();
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	}

	#[test]
	fn test_invalid_amount_error() {
		let error = ApiError::InvalidAmount;
		assert_eq!(error.to_string(), "amount must be a positive number");
		assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
	}

	#[test]
	fn test_upstream_errors_map_to_500() {
		for error in [
			ApiError::CheckoutFailed,
			ApiError::ListReadersFailed,
			ApiError::CreateReaderFailed,
			ApiError::ReaderCheckoutFailed,
		] {
			assert_eq!(
				error.status_code(),
				StatusCode::INTERNAL_SERVER_ERROR
			);
		}
	}
}
