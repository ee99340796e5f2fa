pub mod server_service;
pub mod settings_service;
