use actix_web::error::ResponseError;
use actix_web::{HttpResponse, web};
use log::{error, info};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::{CreateReaderRequest, parse_amount};
use crate::domain::provider::ReaderProvider;
use crate::use_cases::create_reader::CreateReaderUseCase;
use crate::use_cases::create_reader_checkout::CreateReaderCheckoutUseCase;
use crate::use_cases::dto::{CreateReaderCheckoutCommand, CreateReaderCommand};
use crate::use_cases::list_readers::ListReadersUseCase;

pub async fn list_readers<P: ReaderProvider>(
	list_readers_use_case: web::Data<ListReadersUseCase<P>>,
) -> HttpResponse {
	match list_readers_use_case.execute().await {
		Ok(readers) => HttpResponse::Ok().json(readers),
		Err(e) => {
			error!("Failed to list readers: {e}");
			ApiError::ListReadersFailed.error_response()
		}
	}
}

pub async fn create_reader<P: ReaderProvider>(
	body: web::Bytes,
	create_reader_use_case: web::Data<CreateReaderUseCase<P>>,
) -> HttpResponse {
	let payload: CreateReaderRequest = match serde_json::from_slice(&body) {
		Ok(payload) => payload,
		Err(_) => return ApiError::InvalidJson.error_response(),
	};

	let pairing_code = payload.pairing_code.trim();
	let name = payload.name.trim();

	if pairing_code.is_empty() || name.is_empty() {
		return ApiError::MissingReaderFields.error_response();
	}

	match create_reader_use_case
		.execute(CreateReaderCommand {
			pairing_code: pairing_code.to_string(),
			name:         name.to_string(),
		})
		.await
	{
		Ok(reader) => {
			info!("Reader '{name}' paired");
			HttpResponse::Created().json(reader)
		}
		Err(e) => {
			error!("Failed to create reader: {e}");
			ApiError::CreateReaderFailed.error_response()
		}
	}
}

pub async fn create_reader_checkout<P: ReaderProvider>(
	reader_id: web::Path<String>,
	body: web::Bytes,
	reader_checkout_use_case: web::Data<CreateReaderCheckoutUseCase<P>>,
) -> HttpResponse {
	let amount = match parse_amount(&body) {
		Ok(amount) => amount,
		Err(e) => return e.error_response(),
	};

	let reader_id = reader_id.into_inner();

	match reader_checkout_use_case
		.execute(CreateReaderCheckoutCommand { reader_id, amount })
		.await
	{
		Ok(checkout) => HttpResponse::Created().json(checkout),
		Err(e) => {
			error!("Failed to create reader checkout: {e}");
			ApiError::ReaderCheckoutFailed.error_response()
		}
	}
}
