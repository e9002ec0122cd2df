//! Application services composed from domain components

mod effectiveness;

pub use effectiveness::EffectivenessEngine;
