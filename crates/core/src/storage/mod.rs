pub mod backend;
pub mod codec;
#[cfg(not(target_arch = "wasm32"))]
pub mod file;
pub mod memory;
