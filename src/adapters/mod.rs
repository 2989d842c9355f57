//! Concrete implementations of the [`DriveApi`](crate::traits::DriveApi) seam.
//!
//! # Adapters
//!
//! - [`RestDriveClient`] - production client backed by reqwest
//! - [`mock::InMemoryDrive`] - fixed in-memory file graph for tests

pub mod mock;
pub mod rest;

pub use mock::InMemoryDrive;
pub use rest::RestDriveClient;
