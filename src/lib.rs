//! WebOS per-app backend host.
//!
//! Library modules: domain types for the app backend contract, the built-in
//! app backends, the HTTP host surface, and server wiring.

pub mod apps;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use middleware::Trace;
