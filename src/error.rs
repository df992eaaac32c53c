use std::fmt;
use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;

/// Everything that can go wrong while loading a dataset or drawing a frame.
#[derive(Debug)]
pub enum VizError {
    /// The dataset could not be read. Startup is aborted.
    Resource {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The delimited text could not be split into records.
    Parse(csv::Error),
    /// X and Y series differ in length. Only ever logged; the affected draw is skipped.
    ShapeMismatch { xs: usize, ys: usize },
    /// The plotting backend refused a drawing call.
    Draw(String),
    Io(std::io::Error),
}

impl fmt::Display for VizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resource { path, source } => {
                write!(f, "failed to read dataset {}: {source}", path.display())
            }
            Self::Parse(e) => write!(f, "failed to parse dataset: {e}"),
            Self::ShapeMismatch { xs, ys } => {
                write!(f, "series must have the same length (x: {xs}, y: {ys})")
            }
            Self::Draw(msg) => write!(f, "drawing failed: {msg}"),
            Self::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for VizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Resource { source, .. } => Some(source),
            Self::Parse(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VizError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<csv::Error> for VizError {
    fn from(e: csv::Error) -> Self {
        Self::Parse(e)
    }
}

impl<E> From<DrawingAreaErrorKind<E>> for VizError
where
    E: std::error::Error + Send + Sync,
{
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        Self::Draw(e.to_string())
    }
}
