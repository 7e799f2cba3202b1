// lakebase/mod.rs

//! # Lakebase Module
//!
//! Everything that talks to the workspace: the payload models, the
//! `PostgresApi` capability, its HTTP implementation and the project
//! ensurer built on top of it.

pub mod api;
pub mod client;
pub mod models;
pub mod project;

pub use api::{ApiError, PostgresApi};
pub use client::WorkspaceClient;
pub use project::{ensure_project, EnsureOutcome};
