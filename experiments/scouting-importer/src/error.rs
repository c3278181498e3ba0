use {image::ImageError, std::fmt, video::VideoError};

#[derive(Debug)]
pub enum ShellError {
    Window(String),
    Video(VideoError),
    Image(ImageError),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Window(msg) => write!(f, "window error: {msg}"),
            ShellError::Video(err) => write!(f, "video error: {err}"),
            ShellError::Image(err) => write!(f, "image error: {err}"),
        }
    }
}

impl std::error::Error for ShellError {}

impl From<minifb::Error> for ShellError {
    fn from(err: minifb::Error) -> Self {
        ShellError::Window(err.to_string())
    }
}

impl From<VideoError> for ShellError {
    fn from(err: VideoError) -> Self {
        ShellError::Video(err)
    }
}

impl From<ImageError> for ShellError {
    fn from(err: ImageError) -> Self {
        ShellError::Image(err)
    }
}
