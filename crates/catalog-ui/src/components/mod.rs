//! Reusable rendering pieces.

pub mod header;
