//! curvesound CLI library.
//!
//! This crate provides the core functionality for the curvesound CLI,
//! including request loading, system playback, and the command
//! implementations.

pub mod commands;
pub mod input;
pub mod playback;
