//! Outbound adapters for side-effecting dependencies.

pub mod storage;
