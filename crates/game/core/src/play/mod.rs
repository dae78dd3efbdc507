//! Play resolution: from dice to a play and its base/out deltas.
//!
//! Everything here is pure. Randomness arrives through [`crate::env::RngOracle`]
//! seeds, and flavor text is produced by a [`Narrator`] after the play has
//! been decided.
mod advance;
mod narrative;
mod resolve;
mod result;
mod roll;

pub use advance::{PlayEffect, advance_runners, apply_play, record_out};
pub use narrative::{BroadcastNarrator, Narrator};
pub use resolve::{
    AtBatContext, AtBatOutcome, PlayRecord, ResolvedPlay, resolve_at_bat, resolve_roll,
};
pub use result::{PlayClass, PlayResult};
pub use roll::Roll;
