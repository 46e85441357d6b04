use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CreateCheckoutCommand {
	pub amount: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CreateReaderCommand {
	pub pairing_code: String,
	pub name:         String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CreateReaderCheckoutCommand {
	pub reader_id: String,
	pub amount:    f64,
}
