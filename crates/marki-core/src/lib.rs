//! Marki Core
//!
//! This crate provides core types, block state, and error definitions
//! for the marki markdown to HTML converter.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`ParseState`], [`PendingBlock`] - Per-conversion state and the open block
//! - [`BlockSignal`], [`InlineSign`], [`BlockKind`], [`Phase`] - State enums
//! - [`MarkiError`] - Error types

pub mod enums;
pub mod error;
pub mod state;

pub use enums::{BlockKind, BlockSignal, InlineSign, Phase};
pub use error::{MarkiError, Result};
pub use state::{ParseState, PendingBlock};
