pub mod sumup_client;
