use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("index {index} out of range for {len} artworks")]
    InvalidIndex { index: usize, len: usize },

    #[error("carousel of {len} artwork(s) cannot navigate")]
    DegenerateCatalog { len: usize },

    #[error("catalog is empty")]
    EmptyCatalog,

    #[error("duplicate artwork id: {0}")]
    DuplicateId(String),

    #[error("artwork {0} has no image")]
    MissingImage(String),

    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
