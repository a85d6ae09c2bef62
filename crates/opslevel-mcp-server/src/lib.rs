pub mod errors;
pub mod server;
pub mod server_handler;
pub mod tools;
