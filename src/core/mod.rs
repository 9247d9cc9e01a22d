//! Core application module
//!
//! This module contains:
//! - Application entry point and the line-driven event loop

pub mod app;
