//! REST API implementation using Actix Web.

pub mod errors;
pub mod handlers;
pub mod rest;
pub mod routes;
