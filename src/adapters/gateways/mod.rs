//! Gateways - concrete token sources

pub mod file_token_gateway;

pub use file_token_gateway::FileTokenGateway;
