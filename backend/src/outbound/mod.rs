//! Outbound adapters implementing the driven ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel ORM.
//! - **memory**: in-process repositories for local runs and tests.
//!
//! Adapters translate between domain records and storage representations.
//! They contain no business logic.

pub mod memory;
pub mod persistence;
