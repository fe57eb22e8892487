//! Name handling: canonicalization, guess resolution, roster sampling.

pub mod matcher;
pub mod normalizer;
pub mod sampler;
