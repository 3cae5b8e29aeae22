/// Authentication context and credential selection
pub mod auth;
/// PlayFab client and call dispatch
pub mod client;
/// Application configuration module
pub mod config;
/// API traits, one per PlayFab module
pub mod interfaces;
/// Rate limiter module for client side request throttling
pub mod rate_limiter;
/// Implementations of the API traits for the client
pub mod services;
