//! Trait abstractions for injected collaborators.

pub mod drive;

pub use drive::DriveApi;
