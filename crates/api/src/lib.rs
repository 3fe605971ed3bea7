//! HTTP layer: envelope responses, request extraction, public and
//! administrative handlers, and the router with its middleware stack.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
