// Mon Oct 12 2026 - Alex

//! Scoring table for the chart validator.
//!
//! Every threshold, weight and sampling stride the analyzers use lives here.
//! The defaults are the canonical "green/red ratio" profile: candle colors are
//! classified by channel dominance and both colors must cover more than 0.5%
//! of the sampled candle band; a chart passes at 60 points.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gates: GateConfig,
    pub dark_theme: DarkThemeConfig,
    pub candles: CandleConfig,
    pub grid: GridConfig,
    pub edges: EdgeConfig,
    pub platform: PlatformConfig,
    pub ticker: TickerConfig,
    pub pass_threshold: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    pub min_aspect_ratio: f64,
    pub max_aspect_ratio: f64,
    pub min_width: u32,
    pub min_height: u32,
    pub aspect_weight: u32,
    pub resolution_weight: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DarkThemeConfig {
    /// Every Nth pixel in flat buffer order is sampled.
    pub sample_stride: usize,
    pub darkness_threshold: f64,
    pub min_dark_ratio: f64,
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandleConfig {
    pub sample_stride: usize,
    /// Vertical band scanned for candle bodies, as fractions of the height.
    pub band_top: f64,
    pub band_bottom: f64,
    /// Floor for the dominant channel.
    pub min_intensity: u8,
    /// Lead of the dominant channel over the opposing one (green vs red).
    pub primary_margin: u8,
    /// Lead of the dominant channel over blue.
    pub secondary_margin: u8,
    pub min_ratio: f64,
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Scanlines are spaced `dimension / scanline_divisions` apart.
    pub scanline_divisions: u32,
    pub pixel_stride: usize,
    pub channel_tolerance: u8,
    pub gray_min: u8,
    pub gray_max: u8,
    pub row_band: (f64, f64),
    pub column_band: (f64, f64),
    /// A scanline is a grid line when its gray count exceeds `length / line_divisor`.
    pub line_divisor: u32,
    pub weight: u32,
    pub partial_weight: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeConfig {
    pub sample_stride: usize,
    /// Difference of summed RGB (max 765) that marks an edge.
    pub intensity_threshold: u32,
    pub high_density: f64,
    pub moderate_density: f64,
    pub high_weight: u32,
    pub moderate_weight: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformSignature {
    pub name: String,
    pub colors: Vec<[u8; 3]>,
    pub tolerance: u8,
}

impl PlatformSignature {
    pub fn new(name: &str, colors: &[[u8; 3]], tolerance: u8) -> Self {
        Self {
            name: name.to_string(),
            colors: colors.to_vec(),
            tolerance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    pub sample_stride: usize,
    pub banner_height: u32,
    pub watermark_height: u32,
    pub watermark_width: u32,
    pub min_matches: usize,
    pub weight: u32,
    /// Checked in order; the first signature over `min_matches` wins.
    pub signatures: Vec<PlatformSignature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerConfig {
    pub region_width: u32,
    pub region_height: u32,
    pub sample_stride: usize,
    pub brightness_floor: u8,
    pub min_ratio: f64,
    pub weight: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gates: GateConfig::default(),
            dark_theme: DarkThemeConfig::default(),
            candles: CandleConfig::default(),
            grid: GridConfig::default(),
            edges: EdgeConfig::default(),
            platform: PlatformConfig::default(),
            ticker: TickerConfig::default(),
            pass_threshold: 60,
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            min_aspect_ratio: 1.0,
            max_aspect_ratio: 4.0,
            min_width: 600,
            min_height: 300,
            aspect_weight: 15,
            resolution_weight: 10,
        }
    }
}

impl Default for DarkThemeConfig {
    fn default() -> Self {
        Self {
            sample_stride: 10,
            darkness_threshold: 80.0,
            min_dark_ratio: 0.25,
            weight: 10,
        }
    }
}

impl Default for CandleConfig {
    fn default() -> Self {
        Self {
            sample_stride: 5,
            band_top: 0.2,
            band_bottom: 0.7,
            min_intensity: 100,
            primary_margin: 80,
            secondary_margin: 10,
            min_ratio: 0.005,
            weight: 25,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            scanline_divisions: 15,
            pixel_stride: 3,
            channel_tolerance: 20,
            gray_min: 30,
            gray_max: 120,
            row_band: (0.2, 0.9),
            column_band: (0.1, 0.9),
            line_divisor: 15,
            weight: 10,
            partial_weight: 5,
        }
    }
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            sample_stride: 8,
            intensity_threshold: 80,
            high_density: 0.12,
            moderate_density: 0.08,
            high_weight: 15,
            moderate_weight: 10,
        }
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            sample_stride: 4,
            banner_height: 80,
            watermark_height: 100,
            watermark_width: 200,
            min_matches: 15,
            weight: 15,
            signatures: vec![
                PlatformSignature::new("TradingView", &[[41, 98, 255], [33, 150, 243]], 35),
                PlatformSignature::new("Binance", &[[240, 185, 11]], 30),
                PlatformSignature::new("Coinbase", &[[0, 82, 255]], 30),
            ],
        }
    }
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            region_width: 300,
            region_height: 100,
            sample_stride: 3,
            brightness_floor: 200,
            min_ratio: 0.05,
            weight: 10,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    pub fn with_pass_threshold(mut self, threshold: u32) -> Self {
        self.pass_threshold = threshold;
        self
    }

    pub fn with_gates(mut self, gates: GateConfig) -> Self {
        self.gates = gates;
        self
    }

    pub fn with_candles(mut self, candles: CandleConfig) -> Self {
        self.candles = candles;
        self
    }

    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_edges(mut self, edges: EdgeConfig) -> Self {
        self.edges = edges;
        self
    }

    pub fn with_platform(mut self, platform: PlatformConfig) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_ticker(mut self, ticker: TickerConfig) -> Self {
        self.ticker = ticker;
        self
    }

    /// Highest score the gates and core analyzers can award, saturating at `u32::MAX`.
    pub fn core_max_score(&self) -> u32 {
        [
            self.gates.aspect_weight,
            self.gates.resolution_weight,
            self.candles.weight,
            self.dark_theme.weight,
            self.grid.weight.max(self.grid.partial_weight),
            self.edges.high_weight.max(self.edges.moderate_weight),
        ]
        .into_iter()
        .fold(0, u32::saturating_add)
    }

    /// Core plus the built-in platform and ticker bonuses.
    pub fn max_score(&self) -> u32 {
        self.core_max_score()
            .saturating_add(self.platform.weight)
            .saturating_add(self.ticker.weight)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let strides = [
            ("dark_theme.sample_stride", self.dark_theme.sample_stride),
            ("candles.sample_stride", self.candles.sample_stride),
            ("grid.pixel_stride", self.grid.pixel_stride),
            ("edges.sample_stride", self.edges.sample_stride),
            ("platform.sample_stride", self.platform.sample_stride),
            ("ticker.sample_stride", self.ticker.sample_stride),
        ];
        for (name, stride) in strides {
            if stride == 0 {
                return Err(ConfigError::Invalid(format!("{} must be greater than 0", name)));
            }
        }

        if self.grid.scanline_divisions == 0 || self.grid.line_divisor == 0 {
            return Err(ConfigError::Invalid(
                "grid divisions and line_divisor must be greater than 0".to_string(),
            ));
        }

        if self.gates.min_aspect_ratio <= 0.0 || self.gates.min_aspect_ratio > self.gates.max_aspect_ratio {
            return Err(ConfigError::Invalid(format!(
                "aspect ratio band [{}, {}] is empty",
                self.gates.min_aspect_ratio, self.gates.max_aspect_ratio
            )));
        }

        let bands = [
            ("candles band", (self.candles.band_top, self.candles.band_bottom)),
            ("grid.row_band", self.grid.row_band),
            ("grid.column_band", self.grid.column_band),
        ];
        for (name, (start, end)) in bands {
            if !(0.0..=1.0).contains(&start) || !(0.0..=1.0).contains(&end) || start >= end {
                return Err(ConfigError::Invalid(format!(
                    "{} must satisfy 0 <= start < end <= 1 (got {} - {})",
                    name, start, end
                )));
            }
        }

        if self.grid.gray_min > self.grid.gray_max {
            return Err(ConfigError::Invalid("grid.gray_min exceeds grid.gray_max".to_string()));
        }

        if self.edges.moderate_density > self.edges.high_density {
            return Err(ConfigError::Invalid(
                "edges.moderate_density must not exceed edges.high_density".to_string(),
            ));
        }

        if self.platform.signatures.iter().any(|s| s.colors.is_empty()) {
            return Err(ConfigError::Invalid("platform signature without colors".to_string()));
        }

        Ok(())
    }
}
