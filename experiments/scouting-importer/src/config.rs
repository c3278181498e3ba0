use {barcode::Stroke, base::Vec2, std::path::PathBuf, video::CameraConfig};

/// Overrides the camera device path (default: video input index 0).
pub const CAMERA_ENV: &str = "SCOUT_CAMERA";

/// When set, log to date-named files in this directory instead of stdout.
pub const LOG_DIR_ENV: &str = "SCOUT_LOG_DIR";

/// Window and overlay settings for the display shell.
#[derive(Clone, Debug)]
pub struct ShellConfig {
    title: String,
    surface_size: Vec2<usize>,
    target_fps: usize,
    stroke: Stroke,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: "Scouting Importer".to_string(),
            surface_size: Vec2::new(800, 600),
            target_fps: 30,
            stroke: Stroke::default(),
        }
    }
}

impl ShellConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_surface_size(mut self, width: usize, height: usize) -> Self {
        self.surface_size = Vec2::new(width, height);
        self
    }

    pub fn with_target_fps(mut self, target_fps: usize) -> Self {
        self.target_fps = target_fps;
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }

    // Getters
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn surface_size(&self) -> Vec2<usize> {
        self.surface_size
    }

    pub fn target_fps(&self) -> usize {
        self.target_fps
    }

    pub fn stroke(&self) -> Stroke {
        self.stroke
    }
}

/// Camera settings for the viewfinder: 800x600 from the default input,
/// or from `device` when given.
pub fn camera_config_from(device: Option<PathBuf>) -> CameraConfig {
    let config = CameraConfig::default().with_size(800, 600);
    match device {
        Some(path) => config.with_device(path),
        None => config,
    }
}
