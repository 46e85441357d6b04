use actix_web::error::ResponseError;
use actix_web::{HttpResponse, web};
use log::{error, info};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::parse_amount;
use crate::domain::provider::CheckoutProvider;
use crate::use_cases::create_checkout::CreateCheckoutUseCase;
use crate::use_cases::dto::CreateCheckoutCommand;

pub async fn create_checkout<P: CheckoutProvider>(
	body: web::Bytes,
	create_checkout_use_case: web::Data<CreateCheckoutUseCase<P>>,
) -> HttpResponse {
	let amount = match parse_amount(&body) {
		Ok(amount) => amount,
		Err(e) => return e.error_response(),
	};

	match create_checkout_use_case
		.execute(CreateCheckoutCommand { amount })
		.await
	{
		Ok(checkout) => {
			info!("Checkout created for amount {amount}");
			HttpResponse::Created().json(checkout)
		}
		Err(e) => {
			error!("Failed to create checkout: {e}");
			ApiError::CheckoutFailed.error_response()
		}
	}
}
