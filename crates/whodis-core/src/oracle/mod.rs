//! The inference collaborator seam.
//!
//! [`Oracle`] is the trait the game service calls to get a free-text
//! verdict about the secret person; [`parse_answer`] reduces that text to
//! a short label. The two are deliberately separate so the label mapping
//! can be unit-tested against fixed strings, with no network in sight.

pub mod parse;
pub mod provider;

pub use parse::parse_answer;
pub use provider::Oracle;
