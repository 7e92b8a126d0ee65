//! Component E: report assemblers.
//!
//! Each module here drives one of the two explicit state machines spec §4.5
//! describes, turning a raw report string into a fully decoded
//! [`crate::model::Report`]. Header parsing is a fixed sequence of direct
//! regex matches (not a registry scan — header element order is a strict
//! grammar, not a repeating token stream); everything after the header runs
//! through [`crate::engine::run`] against the matching registry.

pub(crate) mod metar;
pub(crate) mod taf;
