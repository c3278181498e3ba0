use {
    crate::{Notification, Scanner, ShellConfig, ShellError},
    barcode::Decoder,
    base::Vec2,
    image::{Image, ImageError, letterbox, to_rgb},
    minifb::{Key, Window, WindowOptions},
    tokio::sync::mpsc,
    video::FrameSource,
};

/// Window title for the current payload.
pub fn window_title(base: &str, payload: Option<&str>) -> String {
    match payload {
        Some(payload) => format!("{base} - {payload}"),
        None => base.to_string(),
    }
}

/// Surface state behind the window: the packed `0x00RRGGBB` buffer and
/// the last payload seen.
#[derive(Debug, Clone)]
pub struct Viewfinder {
    surface_size: Vec2<usize>,
    surface: Vec<u32>,
    payload: Option<String>,
}

impl Viewfinder {
    pub fn new(surface_size: Vec2<usize>) -> Self {
        Self {
            surface_size,
            surface: vec![0; surface_size.area()],
            payload: None,
        }
    }

    /// Convert `frame` to RGB, fit it into the surface and center it on black.
    pub fn update_image(&mut self, frame: &Image) -> Result<(), ImageError> {
        let rgb = to_rgb(frame)?;
        self.surface = letterbox(&rgb, self.surface_size)?;
        Ok(())
    }

    /// Record `payload`. Returns true if it differs from the previous one.
    pub fn update_text(&mut self, payload: String) -> bool {
        if self.payload.as_deref() == Some(payload.as_str()) {
            return false;
        }
        self.payload = Some(payload);
        true
    }

    /// Apply one notification. Returns true if the payload changed.
    pub fn handle(&mut self, notification: Notification) -> Result<bool, ImageError> {
        match notification {
            Notification::Text(payload) => Ok(self.update_text(payload)),
            Notification::Image(frame) => {
                self.update_image(&frame)?;
                Ok(false)
            }
        }
    }

    pub fn surface(&self) -> &[u32] {
        &self.surface
    }

    pub fn surface_size(&self) -> Vec2<usize> {
        self.surface_size
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }
}

/// The viewfinder window and the capture loop feeding it.
pub struct DisplayShell {
    config: ShellConfig,
    window: Window,
    viewfinder: Viewfinder,
    scanner: Scanner,
    receiver: mpsc::UnboundedReceiver<Notification>,
}

impl DisplayShell {
    /// Open the window, then start capturing from `source`.
    pub fn new<S, D>(config: ShellConfig, source: S, decoder: D) -> Result<Self, ShellError>
    where
        S: FrameSource + 'static,
        D: Decoder + 'static,
    {
        let size = config.surface_size();
        let mut window = Window::new(config.title(), size.x, size.y, WindowOptions::default())?;
        window.set_target_fps(config.target_fps());

        let (sender, receiver) = mpsc::unbounded_channel();
        let scanner = Scanner::start(source, decoder, config.stroke(), sender)?;
        log::info!(
            "shell: camera open at {}x{}, surface {}x{}",
            scanner.size().x,
            scanner.size().y,
            size.x,
            size.y
        );

        Ok(Self {
            viewfinder: Viewfinder::new(size),
            config,
            window,
            scanner,
            receiver,
        })
    }

    /// Run until the window closes or Escape is pressed. The camera is
    /// released before this returns.
    pub fn run(mut self) -> Result<(), ShellError> {
        let size = self.config.surface_size();
        while self.window.is_open() && !self.window.is_key_down(Key::Escape) {
            self.drain();
            self.window
                .update_with_buffer(self.viewfinder.surface(), size.x, size.y)?;
        }

        log::info!("shell: window closed");
        self.scanner.stop();
        Ok(())
    }

    fn drain(&mut self) {
        while let Ok(notification) = self.receiver.try_recv() {
            match self.viewfinder.handle(notification) {
                Ok(true) => {
                    let payload = self.viewfinder.payload();
                    log::info!("shell: decoded {}", payload.unwrap_or_default());
                    self.window
                        .set_title(&window_title(self.config.title(), payload));
                }
                Ok(false) => {}
                Err(error) => log::warn!("shell: cannot display frame: {}", error),
            }
        }
    }
}
