//! Material definitions for Niwa
//!
//! This crate provides the cell material tags of the two sandbox variants:
//! - Granular/liquid physics (GranularMaterial)
//! - Plant ecology (EcologyMaterial)
//! - The shared Material trait (name, glyph, display color)

mod materials;

pub use materials::{EcologyMaterial, GranularMaterial, Material};
