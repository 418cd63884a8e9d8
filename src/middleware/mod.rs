/*
 * Responsibility
 * - Middleware entry points, applied from app.rs
 */
pub mod auth;
pub mod cors;
pub mod http;
pub mod security_headers;
