use std::path::Path;

use log::info;
use rand::Rng;

use crate::clock::FrameClock;
use crate::config::FitConfig;
use crate::dataset::Table;
use crate::error::VizError;
use crate::normalize::{normalize, NormalizedSeries};
use crate::regression::RegressionParameters;
use crate::render_loop::RenderLoop;
use crate::surface::Surface;

pub const DEFAULT_DATA_PATH: &str = "data.csv";
pub const DEFAULT_X_LABEL: &str = "years of experience";
pub const DEFAULT_Y_LABEL: &str = "Salary";

/// A loaded, normalized dataset ready to be fitted.
#[derive(Debug, Clone)]
pub struct Session {
    pub xs: NormalizedSeries,
    pub ys: NormalizedSeries,
    pub x_label: String,
    pub y_label: String,
}

impl Session {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VizError> {
        Self::load_with_delimiter(path, b',')
    }

    pub fn load_with_delimiter(path: impl AsRef<Path>, delimiter: u8) -> Result<Self, VizError> {
        let path = path.as_ref();

        let text = std::fs::read_to_string(path).map_err(|source| VizError::Resource {
            path: path.to_path_buf(),
            source,
        })?;

        info!("read {} bytes from {}", text.len(), path.display());

        Self::from_text(&text, delimiter)
    }

    /// First two columns become X and Y, each normalized on its own.
    pub fn from_text(text: &str, delimiter: u8) -> Result<Self, VizError> {
        let table = Table::parse(text, delimiter)?;

        let xs = normalize(&table.numeric_column(0));
        let ys = normalize(&table.numeric_column(1));

        let x_label = table
            .column_name(0)
            .unwrap_or_else(|| DEFAULT_X_LABEL.to_owned());
        let y_label = table
            .column_name(1)
            .unwrap_or_else(|| DEFAULT_Y_LABEL.to_owned());

        Ok(Session {
            xs,
            ys,
            x_label,
            y_label,
        })
    }

    /// Seeds the fit from `rng` and hands everything to a running loop.
    pub fn start<S, C, R>(
        self,
        config: &FitConfig,
        surface: S,
        clock: C,
        rng: &mut R,
    ) -> RenderLoop<S, C>
    where
        S: Surface,
        C: FrameClock,
        R: Rng + ?Sized,
    {
        let (_, height) = surface.size();
        let params = RegressionParameters::random(rng, height as f64);

        let mut render_loop = RenderLoop::new(
            config,
            self.xs,
            self.ys,
            self.x_label,
            self.y_label,
            params,
            surface,
            clock,
        );
        render_loop.start();

        render_loop
    }
}
