//! # Domain Models
//!
//! This crate contains pure site types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no DOM access, no I/O, no behavior. Just the markers the page
//! is annotated with, the behavior switches and the tunables that drive them.

pub mod behaviors;
pub mod config;
pub mod constants;
