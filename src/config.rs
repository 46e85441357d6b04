use serde::Deserialize;

fn default_port() -> u16 {
	8080
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub sumup_api_key:       String,
	pub sumup_merchant_code: String,
	#[serde(default = "default_port")]
	pub port:                u16,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.add_source(config::Environment::default())
			.build()?;

		let config: Config = config_builder.try_deserialize()?;
		config.validate()?;

		Ok(config)
	}

	// The config crate rejects missing credentials on its own; blank ones
	// would only fail once the provider rejects the first call, so they are
	// rejected here instead.
	fn validate(&self) -> Result<(), config::ConfigError> {
		if self.sumup_api_key.trim().is_empty() {
			return Err(config::ConfigError::Message(
				"SUMUP_API_KEY must not be blank".to_string(),
			));
		}

		if self.sumup_merchant_code.trim().is_empty() {
			return Err(config::ConfigError::Message(
				"SUMUP_MERCHANT_CODE must not be blank".to_string(),
			));
		}

		Ok(())
	}
}
