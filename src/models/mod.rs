//! Data models for the Pokédex backend.
//!
//! These models are the canonical shapes handed to the presentation layer; raw
//! upstream payloads never leave the `upstream` module.

mod display;
mod selection;
mod species;

pub use display::*;
pub use selection::*;
pub use species::*;
