use std::path::PathBuf;

use log::{debug, info, warn};
use plotters::backend::SVGBackend;
use plotters::drawing::IntoDrawingArea;

use crate::error::VizError;
use crate::mapper::SurfaceGeometry;
use crate::plots;

/// A straight segment in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

/// Everything drawn during one tick, in surface pixels.
///
/// `points` and `line` are `None` when only the static chrome is redrawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub geometry: SurfaceGeometry,
    pub x_label: String,
    pub y_label: String,
    pub point_radius: u32,
    pub points: Option<Vec<(f64, f64)>>,
    pub line: Option<Segment>,
}

impl Frame {
    pub fn chrome_only(geometry: SurfaceGeometry, x_label: &str, y_label: &str) -> Self {
        Self {
            geometry,
            x_label: x_label.to_owned(),
            y_label: y_label.to_owned(),
            point_radius: 0,
            points: None,
            line: None,
        }
    }
}

/// Where frames end up.
pub trait Surface {
    type Error: std::error::Error + Send + Sync + 'static;

    fn size(&self) -> (u32, u32);

    fn resize(&mut self, width: u32, height: u32) -> Result<(), Self::Error>;

    /// Clears the surface and draws `frame` in full.
    fn present(&mut self, frame: &Frame) -> Result<(), Self::Error>;
}

/// Renders each frame to an SVG document and keeps the latest one.
///
/// With an output path set, every `snapshot_every`-th frame is written to disk.
/// A failed write is logged and the frame still counts as presented.
#[derive(Debug)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    latest: String,
    frames: u64,
    output: Option<PathBuf>,
    snapshot_every: u64,
}

impl SvgSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            latest: String::new(),
            frames: 0,
            output: None,
            snapshot_every: 1,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>, snapshot_every: u64) -> Self {
        self.output = Some(output.into());
        self.snapshot_every = snapshot_every.max(1);
        self
    }

    pub fn latest_svg(&self) -> &str {
        &self.latest
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn write_snapshot(&self) -> Result<(), VizError> {
        if let Some(path) = &self.output {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &self.latest)?;
            debug!("frame {} written to {}", self.frames, path.display());
        }

        Ok(())
    }
}

impl Surface for SvgSurface {
    type Error = VizError;

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), VizError> {
        info!("surface resized to {width}x{height}");

        self.width = width;
        self.height = height;

        Ok(())
    }

    fn present(&mut self, frame: &Frame) -> Result<(), VizError> {
        let mut svg = String::new();

        {
            let drawing_area =
                SVGBackend::with_string(&mut svg, (self.width, self.height)).into_drawing_area();

            plots::draw_frame(frame, &drawing_area)?;

            drawing_area.present()?;
        }

        self.latest = svg;
        self.frames += 1;

        let chrome_only = frame.points.is_none() && frame.line.is_none();
        if chrome_only || self.frames % self.snapshot_every == 0 {
            if let Err(e) = self.write_snapshot() {
                warn!("snapshot skipped: {e}");
            }
        }

        Ok(())
    }
}
