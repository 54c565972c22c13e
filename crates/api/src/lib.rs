//! HTTP API: routing, access guard, and request/response mapping.

pub mod app;
pub mod config;
pub mod guard;
