//! # Toolbox API
//!
//! actix-web adapters over the core token toolbox: request views, envelope
//! rendering, payload validation and token authentication middleware.

pub mod app;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod request;
pub mod validation;
