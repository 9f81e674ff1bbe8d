//! Material definitions for both rule sets

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Common behaviour of a cell material tag
///
/// A grid cell carries nothing but one of these tags. The display color and
/// glyph are the fixed material → appearance mapping used by renderers and
/// text dumps; they never feed back into the simulation.
pub trait Material: Copy + Eq + Default + Debug + 'static {
    /// The "nothing here" material (also the `Default`)
    const EMPTY: Self;

    /// Every material of this family, in declaration order
    const ALL: &'static [Self];

    /// Lowercase identifier used in configs and on the command line
    fn name(self) -> &'static str;

    /// Single-character representation for text dumps
    fn glyph(self) -> char;

    /// Display color (RGBA)
    fn color(self) -> [u8; 4];

    /// Look up a material by name (case-insensitive)
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }

    fn is_empty(self) -> bool {
        self == Self::EMPTY
    }
}

/// Materials of the granular/liquid physics sandbox
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GranularMaterial {
    #[default]
    Empty,
    Sand,
    Water,
    SoilDry,
    SoilWet,
    Seed,
    Grass,
}

impl GranularMaterial {
    /// Soil in either moisture state
    pub fn is_soil(self) -> bool {
        matches!(self, Self::SoilDry | Self::SoilWet)
    }
}

impl Material for GranularMaterial {
    const EMPTY: Self = Self::Empty;

    const ALL: &'static [Self] = &[
        Self::Empty,
        Self::Sand,
        Self::Water,
        Self::SoilDry,
        Self::SoilWet,
        Self::Seed,
        Self::Grass,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Sand => "sand",
            Self::Water => "water",
            Self::SoilDry => "soil_dry",
            Self::SoilWet => "soil_wet",
            Self::Seed => "seed",
            Self::Grass => "grass",
        }
    }

    fn glyph(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Sand => ':',
            Self::Water => '~',
            Self::SoilDry => '=',
            Self::SoilWet => '#',
            Self::Seed => '.',
            Self::Grass => 'w',
        }
    }

    fn color(self) -> [u8; 4] {
        match self {
            Self::Empty => [0, 0, 0, 255],
            Self::Sand => [255, 255, 0, 255],
            Self::Water => [0, 0, 255, 255],
            Self::SoilDry => [139, 69, 19, 255],
            Self::SoilWet => [101, 67, 33, 255],
            Self::Seed => [255, 255, 255, 255],
            Self::Grass => [34, 139, 34, 255],
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        // "soil" is what the toolbar calls freshly placed (dry) soil
        if name.eq_ignore_ascii_case("soil") {
            return Some(Self::SoilDry);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }
}

/// Materials of the plant ecology sandbox
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EcologyMaterial {
    #[default]
    Empty,
    Soil,
    Water,
    PlantFast,
    PlantSlow,
    PlantParasitic,
    Seed,
}

impl EcologyMaterial {
    /// Plants with a finite lifespan (fast and slow growers)
    pub fn is_mortal_plant(self) -> bool {
        matches!(self, Self::PlantFast | Self::PlantSlow)
    }

    /// Any plant, including parasites
    pub fn is_plant(self) -> bool {
        self.is_mortal_plant() || self == Self::PlantParasitic
    }
}

impl Material for EcologyMaterial {
    const EMPTY: Self = Self::Empty;

    const ALL: &'static [Self] = &[
        Self::Empty,
        Self::Soil,
        Self::Water,
        Self::PlantFast,
        Self::PlantSlow,
        Self::PlantParasitic,
        Self::Seed,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Soil => "soil",
            Self::Water => "water",
            Self::PlantFast => "plant_fast",
            Self::PlantSlow => "plant_slow",
            Self::PlantParasitic => "parasite",
            Self::Seed => "seed",
        }
    }

    fn glyph(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Soil => '.',
            Self::Water => '~',
            Self::PlantFast => 'F',
            Self::PlantSlow => 's',
            Self::PlantParasitic => 'P',
            Self::Seed => 'o',
        }
    }

    fn color(self) -> [u8; 4] {
        match self {
            Self::Empty => [30, 30, 30, 255],
            Self::Soil => [150, 111, 51, 255],
            Self::Water => [100, 149, 237, 255],
            Self::PlantFast => [50, 205, 50, 255],
            Self::PlantSlow => [34, 139, 34, 255],
            Self::PlantParasitic => [186, 85, 211, 255],
            Self::Seed => [255, 215, 0, 255],
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "fast" => Some(Self::PlantFast),
            "slow" => Some(Self::PlantSlow),
            "plant_parasitic" => Some(Self::PlantParasitic),
            other => Self::ALL.iter().copied().find(|m| m.name() == other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default() {
        assert_eq!(GranularMaterial::default(), GranularMaterial::EMPTY);
        assert_eq!(EcologyMaterial::default(), EcologyMaterial::EMPTY);
        assert!(GranularMaterial::Empty.is_empty());
        assert!(!EcologyMaterial::Soil.is_empty());
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(
            GranularMaterial::from_name("SAND"),
            Some(GranularMaterial::Sand)
        );
        assert_eq!(
            GranularMaterial::from_name("soil"),
            Some(GranularMaterial::SoilDry)
        );
        assert_eq!(
            GranularMaterial::from_name("soil_wet"),
            Some(GranularMaterial::SoilWet)
        );
        assert_eq!(
            EcologyMaterial::from_name("fast"),
            Some(EcologyMaterial::PlantFast)
        );
        assert_eq!(
            EcologyMaterial::from_name("Parasite"),
            Some(EcologyMaterial::PlantParasitic)
        );
        assert_eq!(EcologyMaterial::from_name("lava"), None);
    }

    #[test]
    fn test_names_round_trip() {
        for &m in GranularMaterial::ALL {
            assert_eq!(GranularMaterial::from_name(m.name()), Some(m));
        }
        for &m in EcologyMaterial::ALL {
            assert_eq!(EcologyMaterial::from_name(m.name()), Some(m));
        }
    }

    #[test]
    fn test_glyphs_are_distinct() {
        let mut glyphs: Vec<char> = EcologyMaterial::ALL.iter().map(|m| m.glyph()).collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), EcologyMaterial::ALL.len());
    }

    #[test]
    fn test_plant_classification() {
        assert!(EcologyMaterial::PlantFast.is_mortal_plant());
        assert!(EcologyMaterial::PlantSlow.is_mortal_plant());
        assert!(!EcologyMaterial::PlantParasitic.is_mortal_plant());
        assert!(EcologyMaterial::PlantParasitic.is_plant());
        assert!(!EcologyMaterial::Seed.is_plant());
        assert!(GranularMaterial::SoilWet.is_soil());
        assert!(!GranularMaterial::Sand.is_soil());
    }

    #[test]
    fn test_ron_names() {
        let serialized = ron::to_string(&EcologyMaterial::PlantParasitic).unwrap();
        assert_eq!(serialized, "plant_parasitic");
        let parsed: GranularMaterial = ron::from_str("soil_wet").unwrap();
        assert_eq!(parsed, GranularMaterial::SoilWet);
    }
}
