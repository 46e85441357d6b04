use std::sync::Arc;

use actix_web::{App, HttpResponse, HttpServer, web};
use log::info;

use crate::adapters::web::checkouts_handler::create_checkout;
use crate::adapters::web::readers_handler::{
	create_reader, create_reader_checkout, list_readers,
};
use crate::config::Config;
use crate::infrastructure::provider::sumup_client::SumUpClient;
use crate::use_cases::create_checkout::CreateCheckoutUseCase;
use crate::use_cases::create_reader::CreateReaderUseCase;
use crate::use_cases::create_reader_checkout::CreateReaderCheckoutUseCase;
use crate::use_cases::list_readers::ListReadersUseCase;

pub mod adapters;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod use_cases;

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	env_logger::init();

	let provider = SumUpClient::new(config.sumup_api_key.clone());

	let create_checkout_use_case = CreateCheckoutUseCase::new(
		provider.clone(),
		config.sumup_merchant_code.clone(),
	);
	let list_readers_use_case = ListReadersUseCase::new(
		provider.clone(),
		config.sumup_merchant_code.clone(),
	);
	let create_reader_use_case = CreateReaderUseCase::new(
		provider.clone(),
		config.sumup_merchant_code.clone(),
	);
	let reader_checkout_use_case = CreateReaderCheckoutUseCase::new(
		provider.clone(),
		config.sumup_merchant_code.clone(),
	);

	let server = HttpServer::new(move || {
		App::new()
			.app_data(web::Data::new(create_checkout_use_case.clone()))
			.app_data(web::Data::new(list_readers_use_case.clone()))
			.app_data(web::Data::new(create_reader_use_case.clone()))
			.app_data(web::Data::new(reader_checkout_use_case.clone()))
			.service(
				web::resource("/checkouts")
					.route(web::post().to(create_checkout::<SumUpClient>))
					.default_service(web::route().to(HttpResponse::NotFound)),
			)
			.service(
				web::resource("/readers")
					.route(web::get().to(list_readers::<SumUpClient>))
					.route(web::post().to(create_reader::<SumUpClient>))
					.default_service(web::route().to(HttpResponse::NotFound)),
			)
			.service(
				web::resource("/readers/{reader_id}/checkout")
					.route(
						web::post().to(create_reader_checkout::<SumUpClient>),
					)
					.default_service(web::route().to(HttpResponse::NotFound)),
			)
	})
	.bind(("0.0.0.0", config.port))?;

	info!(
		"Checkout gateway listening on http://0.0.0.0:{}...",
		config.port
	);

	server.run().await
}
