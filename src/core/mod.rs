// core/mod.rs

//! # Core Module
//!
//! Runtime configuration shared by the commands. `env` discovers the
//! workspace connection settings.

pub mod env;
