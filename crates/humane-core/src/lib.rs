//! # humane-core
//!
//! Core types, date handling, and error types for Humane.
//!
//! This crate provides the foundational types shared across all Humane crates:
//! - Entity structs for habits and logged entries, keyed the way the tracker's
//!   backup export writes them
//! - Habit type and week-start enums
//! - Local-day date parsing used by every completion and weekly aggregate
//! - Cross-cutting error types
//! - CLI response types

pub mod dates;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
