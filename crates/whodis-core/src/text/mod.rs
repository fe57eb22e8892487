//! Text utilities for the transport boundary.

pub mod chunker;
