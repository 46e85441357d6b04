use std::sync::Arc;

use checkout_gateway::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	let config = Arc::new(
		checkout_gateway::config::Config::load()
			.expect("Failed to load configuration"),
	);
	run(config).await
}
