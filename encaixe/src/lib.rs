//! Core library for rectangular marker making: packing garment pattern pieces
//! onto a fixed-width roll of material.
//!
//! The placement strategy is a deterministic greedy first-fit: pieces are
//! expanded from their demanded quantities, sorted by area (largest first) and
//! placed one by one at the first feasible position scanned bottom-to-top,
//! left-to-right. Placements are never revisited. The result is a compact, but
//! not provably optimal, layout together with the total roll length consumed.

pub mod entities;
pub mod errors;
pub mod geometry;
pub mod io;
pub mod pack;
pub mod util;
