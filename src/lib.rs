//! Resource server for the lesson frontend.
//!
//! Every protected request carries an HMAC-signed bearer JWT from the hosted auth
//! provider. `services::auth::Authenticator` verifies it locally and the access
//! middleware hands the resulting identity to handlers.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
