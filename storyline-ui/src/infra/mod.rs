pub mod api_client;
pub mod config;
pub mod constants;
pub mod runtime_config;
pub mod services;
pub mod testing;
pub mod time;
