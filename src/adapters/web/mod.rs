pub mod checkouts_handler;
pub mod errors;
pub mod readers_handler;
pub mod schema;
