//! Domain types for the app backend contract.
//!
//! Purpose: define the invocation context handed to each app backend, the
//! tagged reply/error shapes serialised into the response envelope, and the
//! ports for outbound effects. Keep these types free of HTTP concerns; the
//! inbound adapter owns the mapping to actix responses.

pub mod context;
pub mod error;
pub mod ports;
pub mod reply;
pub mod user;

pub use self::context::{DEFAULT_USERNAME, Invocation, SessionInfo};
pub use self::error::BackendError;
pub use self::ports::RomStorage;
pub use self::reply::Reply;
pub use self::user::{UserDirectory, UserRecord};
