pub mod key;
pub mod server;
pub mod settings;
