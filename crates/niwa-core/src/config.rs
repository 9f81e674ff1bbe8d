//! Simulation configuration - serializable parameters for both rule sets
//!
//! Every tunable constant of the rules lives here so it can be overridden
//! from a RON file instead of being hardcoded. Defaults reproduce the
//! behaviour of the classic sandbox and garden programs.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Complete simulation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Granular/liquid physics parameters
    pub granular: GranularConfig,
    /// Plant ecology parameters
    pub ecology: EcologyConfig,
}

impl SimConfig {
    /// Parse and validate a RON document
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_ron_str(&source)?;
        log::info!("Loaded simulation config from {}", path.display());
        Ok(config)
    }

    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.granular.validate()?;
        self.ecology.validate()
    }
}

/// Viewport and cell size that determine grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Viewport width in pixels
    pub viewport_width: u32,
    /// Viewport height in pixels
    pub viewport_height: u32,
    /// Edge length of one cell in pixels
    pub cell_size: u32,
}

impl GridConfig {
    /// 600x400 viewport at 5px per cell (80 rows x 120 cols)
    pub fn granular() -> Self {
        Self {
            viewport_width: 600,
            viewport_height: 400,
            cell_size: 5,
        }
    }

    /// 1000x800 viewport at 10px per cell (80 rows x 100 cols)
    pub fn ecology() -> Self {
        Self {
            viewport_width: 1000,
            viewport_height: 800,
            cell_size: 10,
        }
    }

    /// Grid with exactly `rows` x `cols` cells of one pixel each
    pub fn cells(rows: usize, cols: usize) -> Self {
        Self {
            viewport_width: cols as u32,
            viewport_height: rows as u32,
            cell_size: 1,
        }
    }

    pub fn rows(&self) -> usize {
        self.viewport_height.checked_div(self.cell_size).unwrap_or(0) as usize
    }

    pub fn cols(&self) -> usize {
        self.viewport_width.checked_div(self.cell_size).unwrap_or(0) as usize
    }

    /// Map a viewport pixel to the cell under it
    pub fn cell_at(&self, px: i32, py: i32) -> Option<(i32, i32)> {
        if self.cell_size == 0 || px < 0 || py < 0 {
            return None;
        }
        let (x, y) = (px / self.cell_size as i32, py / self.cell_size as i32);
        (x < self.cols() as i32 && y < self.rows() as i32).then_some((x, y))
    }

    /// Map a viewport pixel to cell coordinates without bounds checks
    ///
    /// Pixels left of or above the viewport map to negative cells.
    pub fn pixel_to_cell(&self, px: i32, py: i32) -> (i32, i32) {
        let size = self.cell_size.max(1) as i32;
        (px.div_euclid(size), py.div_euclid(size))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::Invalid("cell_size must be positive".into()));
        }
        if self.rows() == 0 || self.cols() == 0 {
            return Err(ConfigError::Invalid(format!(
                "viewport {}x{} holds no {}px cells",
                self.viewport_width, self.viewport_height, self.cell_size
            )));
        }
        Ok(())
    }
}

/// Granular/liquid physics parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GranularConfig {
    pub grid: GridConfig,
    /// Water passes per tick (liquids move faster than solids, default: 2)
    pub water_passes: u32,
}

impl Default for GranularConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::granular(),
            water_passes: 2,
        }
    }
}

impl GranularConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()?;
        if self.water_passes == 0 {
            return Err(ConfigError::Invalid("water_passes must be at least 1".into()));
        }
        Ok(())
    }
}

/// Growth parameters of one mortal plant type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlantParams {
    /// Chance per tick to claim each neighboring soil cell
    pub spread_chance: f32,
    /// Ticks a new plant of this type lives
    pub lifespan: i32,
}

/// Plant ecology parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EcologyConfig {
    pub grid: GridConfig,
    /// Chance per tick for a seed to germinate (default: 0.3)
    pub germination_chance: f32,
    /// Chance a dying plant leaves a seed instead of soil (default: 0.5)
    pub death_seed_chance: f32,
    /// Fast grower (default: 0.5 spread, 200 ticks)
    pub fast: PlantParams,
    /// Slow grower (default: 0.2 spread, 100 ticks)
    pub slow: PlantParams,
    /// Fraction of water in a fresh grid, the rest is soil (default: 0.2)
    pub initial_water_fraction: f32,
}

impl Default for EcologyConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::ecology(),
            germination_chance: 0.3,
            death_seed_chance: 0.5,
            fast: PlantParams {
                spread_chance: 0.5,
                lifespan: 200,
            },
            slow: PlantParams {
                spread_chance: 0.2,
                lifespan: 100,
            },
            initial_water_fraction: 0.2,
        }
    }
}

impl EcologyConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()?;
        for (name, p) in [
            ("germination_chance", self.germination_chance),
            ("death_seed_chance", self.death_seed_chance),
            ("fast.spread_chance", self.fast.spread_chance),
            ("slow.spread_chance", self.slow.spread_chance),
            ("initial_water_fraction", self.initial_water_fraction),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::Invalid(format!(
                    "{name} = {p} is not a probability"
                )));
            }
        }
        for (name, ticks) in [("fast", self.fast.lifespan), ("slow", self.slow.lifespan)] {
            if ticks <= 0 {
                return Err(ConfigError::Invalid(format!(
                    "{name}.lifespan must be positive, got {ticks}"
                )));
            }
        }
        Ok(())
    }
}
