use crate::chore::Frequency;
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    // CSS named colors
    pub const AZURE: Rgb = Rgb::new(240, 255, 255);
    pub const LEMON_CHIFFON: Rgb = Rgb::new(255, 250, 205);
    pub const LIGHT_PINK: Rgb = Rgb::new(255, 182, 193);
    pub const DARK_TURQUOISE: Rgb = Rgb::new(0, 206, 209);
    pub const DARK_SEA_GREEN: Rgb = Rgb::new(143, 188, 143);
    pub const LIGHT_GRAY: Rgb = Rgb::new(211, 211, 211);
    pub const GRAY: Rgb = Rgb::new(128, 128, 128);
    pub const DARK_GRAY: Rgb = Rgb::new(169, 169, 169);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Channels scaled to `0.0..=1.0`.
    pub fn unit(self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub daily: Rgb,
    pub weekly: Rgb,
    pub monthly: Rgb,
    pub individual: Rgb,
    /// Fill for tags that are not one of the four known frequencies.
    pub unknown: Rgb,
    pub room_header: Rgb,
    pub inapplicable: Rgb,
    pub grid_line: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            daily: Rgb::AZURE,
            weekly: Rgb::LEMON_CHIFFON,
            monthly: Rgb::LIGHT_PINK,
            individual: Rgb::DARK_TURQUOISE,
            unknown: Rgb::GRAY,
            room_header: Rgb::DARK_SEA_GREEN,
            inapplicable: Rgb::LIGHT_GRAY,
            grid_line: Rgb::DARK_GRAY,
        }
    }
}

impl Palette {
    pub fn for_frequency(&self, frequency: &Frequency) -> Rgb {
        match frequency {
            Frequency::Daily => self.daily,
            Frequency::Weekly => self.weekly,
            Frequency::Monthly => self.monthly,
            Frequency::Individual => self.individual,
            Frequency::Other(_) => self.unknown,
        }
    }
}

/// Everything that shapes a chart. The defaults are the values the chart is printed with; only
/// the paths are exposed on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub rows_per_page: usize,
    pub wrap_width: usize,
    /// Page size in inches, landscape.
    pub page_size: (f32, f32),
    pub palette: Palette,
}

pub const DEFAULT_INPUT_PATH: &str = "./chore-list.yaml";
pub const DEFAULT_OUTPUT_PATH: &str = "chore_chart.pdf";
pub const DEFAULT_ROWS_PER_PAGE: usize = 28;
pub const DEFAULT_WRAP_WIDTH: usize = 30;
pub const DEFAULT_PAGE_SIZE: (f32, f32) = (11.0, 8.5);

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            wrap_width: DEFAULT_WRAP_WIDTH,
            page_size: DEFAULT_PAGE_SIZE,
            palette: Palette::default(),
        }
    }
}

impl ChartConfig {
    pub fn with_paths(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input.into(),
            output_path: output.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.rows_per_page == 0 {
            return Err(ConfigError::Settings(
                "rows_per_page must be at least 1".into(),
            ));
        }
        if self.wrap_width == 0 {
            return Err(ConfigError::Settings("wrap_width must be at least 1".into()));
        }
        let (width, height) = self.page_size;
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::Settings(format!(
                "page size must be positive (got {width} x {height})"
            )));
        }
        Ok(())
    }
}
