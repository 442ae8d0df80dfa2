//! HTTP inbound adapter: the host surface that invokes app backends.

pub mod dispatch;
pub mod health;
pub mod session;
#[cfg(test)]
pub mod test_utils;
