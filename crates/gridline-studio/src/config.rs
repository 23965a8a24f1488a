use gridline_engine::coords::{ColorRgba, Vec2};
use gridline_engine::logging::LoggingConfig;
use gridline_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

/// Grid of small boxes tiled under the scene.
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Bottom-left cell box: `(x1, y1, x2, y2, border)`.
    pub cell: (f32, f32, f32, f32, f32),
    pub origin: Vec2,
    pub step: Vec2,
    pub repetitions: (usize, usize),
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell: (0.005, 0.005, 0.015, 0.015, 0.002),
            origin: Vec2::new(-5.0, -5.0),
            step: Vec2::new(0.02, 0.02),
            repetitions: (500, 500),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,

    pub clear: ColorRgba,
    pub stroke: ColorRgba,

    pub grid: GridConfig,

    /// Orbit animation phase per second.
    pub orbit_speed: f64,

    pub logging: LoggingConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            title: "Gridline Studio".to_string(),
            width: 960.0,
            height: 720.0,
            clear: ColorRgba::black(),
            stroke: ColorRgba::white(),
            grid: GridConfig::default(),
            orbit_speed: 0.125,
            logging: LoggingConfig::default(),
        }
    }
}

impl StudioConfig {
    pub fn runtime(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
        }
    }
}
