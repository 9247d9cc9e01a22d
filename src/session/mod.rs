//! Fence session management module
//!
//! This module contains:
//! - Session state and message handling
//! - Message types for pointer and fence interactions
//! - Text command parsing into messages

pub mod messages;
pub mod shortcuts;
pub mod state;
