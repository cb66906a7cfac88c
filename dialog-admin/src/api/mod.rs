//! HTTP API handlers for dialog-admin

pub mod auth;
pub mod auto_responder;
pub mod health;

pub use auth::auth_middleware;
pub use auto_responder::auto_responder_routes;
pub use health::health_routes;
