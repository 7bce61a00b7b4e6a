pub mod runner;
pub mod server;
