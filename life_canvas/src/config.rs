// config.rs - Startup configuration, fixed for the life of the process

use std::time::Duration;

use life::{Dimensions, GridError};
use thiserror::Error;

pub const WIDTH: u32 = 800;       // Canvas width in pixels
pub const HEIGHT: u32 = 600;      // Canvas height in pixels
pub const CELL_SIZE: u32 = 10;    // Side of one cell in pixels
pub const FPS: u32 = 10;          // Generations per second

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cell size must be at least 1 pixel")]
    ZeroCellSize,

    #[error("frame rate must be at least 1 fps")]
    ZeroFps,

    #[error("frame rate {fps} fps is above 1000 fps, the tick period would be zero")]
    FpsTooHigh { fps: u32 },

    #[error("canvas {width}x{height} holds no {cell_size}px cell")]
    Grid {
        width: u32,
        height: u32,
        cell_size: u32,
        #[source]
        source: GridError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    pub fps: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            cell_size: CELL_SIZE,
            fps: FPS,
        }
    }
}

impl CanvasConfig {
    /// Grid size that fits the canvas. Leftover pixels are an unused margin.
    pub fn dimensions(&self) -> Result<Dimensions, ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        let rows = (self.height / self.cell_size) as usize;
        let cols = (self.width / self.cell_size) as usize;
        Dimensions::new(rows, cols).map_err(|source| ConfigError::Grid {
            width: self.width,
            height: self.height,
            cell_size: self.cell_size,
            source,
        })
    }

    pub fn tick_period(&self) -> Result<Duration, ConfigError> {
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        let millis = 1000 / u64::from(self.fps);
        if millis == 0 {
            return Err(ConfigError::FpsTooHigh { fps: self.fps });
        }
        Ok(Duration::from_millis(millis))
    }

    /// Checks everything needed before the window opens.
    pub fn validate(&self) -> Result<(Dimensions, Duration), ConfigError> {
        Ok((self.dimensions()?, self.tick_period()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_canvas() {
        let (dims, period) = CanvasConfig::default().validate().unwrap();
        assert_eq!((dims.rows(), dims.cols()), (60, 80));
        assert_eq!(period, Duration::from_millis(100));
    }

    #[test]
    fn remainder_pixels_are_dropped() {
        let config = CanvasConfig { width: 105, height: 37, cell_size: 10, fps: 30 };
        let dims = config.dimensions().unwrap();
        assert_eq!((dims.rows(), dims.cols()), (3, 10));
        assert_eq!(config.tick_period().unwrap(), Duration::from_millis(33));
    }

    #[test]
    fn cells_larger_than_canvas_are_rejected() {
        let config = CanvasConfig { width: 800, height: 5, cell_size: 10, fps: 10 };
        assert!(matches!(
            config.dimensions(),
            Err(ConfigError::Grid { source: GridError::InvalidDimension { rows: 0, cols: 80 }, .. })
        ));
    }

    #[test]
    fn zero_values_are_rejected() {
        let zero_cell = CanvasConfig { cell_size: 0, ..CanvasConfig::default() };
        assert!(matches!(zero_cell.validate(), Err(ConfigError::ZeroCellSize)));
        let zero_fps = CanvasConfig { fps: 0, ..CanvasConfig::default() };
        assert!(matches!(zero_fps.validate(), Err(ConfigError::ZeroFps)));
    }

    #[test]
    fn sub_millisecond_period_is_rejected() {
        let fastest = CanvasConfig { fps: 1000, ..CanvasConfig::default() };
        assert_eq!(fastest.tick_period().unwrap(), Duration::from_millis(1));

        let too_fast = CanvasConfig { fps: 1001, ..CanvasConfig::default() };
        assert!(matches!(too_fast.validate(), Err(ConfigError::FpsTooHigh { fps: 1001 })));
    }
}
