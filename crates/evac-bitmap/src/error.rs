use thiserror::Error;

#[derive(Debug, Error)]
pub enum BitmapError {
    /// The image decoded but cannot describe a grid.
    #[error("unreadable image: {0}")]
    Unreadable(String),

    #[error("sample layouts need a side of at least {min} cells, got {length}")]
    SampleTooSmall { length: usize, min: usize },

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type BitmapResult<T> = Result<T, BitmapError>;
