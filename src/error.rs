use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors surfaced by the pixel-buffer I/O facade (see `asset_loader::img_loader`).
#[derive(Debug, Error)]
pub enum ImageIoError {
    #[error("could not read image {path:?}: {source}")]
    Unreadable { path: PathBuf, source: image::ImageError },
    #[error("unsupported channel count {channels} in {path:?}, expected 3 or 4")]
    UnsupportedChannels { path: PathBuf, channels: u32 },
    #[error("unsupported output extension {extension:?} for {path:?}")]
    UnsupportedExtension { path: PathBuf, extension: String },
    #[error("could not write image {path:?}: {source}")]
    WriteFailed { path: PathBuf, source: image::ImageError },
}

/// Fatal errors surfaced by the OBJ mesh loader.
#[derive(Debug, Error)]
pub enum MeshLoadError {
    #[error("could not read mesh {path:?}: {source}")]
    Unreadable { path: PathBuf, source: std::io::Error },
    #[error("malformed OBJ line {line}: {text:?}")]
    MalformedLine { line: usize, text: String },
    #[error("face on line {line} referenced vertex index {index}, but only {vertex_count} vertices were read")]
    DanglingVertexIndex { line: usize, index: i64, vertex_count: usize },
}

/// Fatal errors surfaced when building a hard-coded scene (e.g. an
/// out-of-range `scene_index`, or a rejected configuration value).
#[derive(Debug, Error)]
pub enum SceneBuildError {
    #[error("scene_index {0} is out of range 0..=6")]
    UnknownScene(u32),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Top-level error returned from the driver and from `main`.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    ImageIo(#[from] ImageIoError),
    #[error(transparent)]
    MeshLoad(#[from] MeshLoadError),
    #[error(transparent)]
    SceneBuild(#[from] SceneBuildError),
}
