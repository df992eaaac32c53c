use log::{debug, error, info};
use serde::Serialize;

use crate::clock::FrameClock;
use crate::config::FitConfig;
use crate::error::VizError;
use crate::mapper::{CoordinateMapper, SurfaceGeometry};
use crate::normalize::NormalizedSeries;
use crate::regression::{RegressionEngine, RegressionParameters};
use crate::surface::{Frame, Segment, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

/// Outcome of one tick. `mse` belongs to the parameters before the update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TickRecord {
    pub tick: u64,
    pub slope: f64,
    pub intercept: f64,
    pub mse: Option<f64>,
}

/// Alternates one descent step with one full redraw until stopped.
pub struct RenderLoop<S, C> {
    xs: NormalizedSeries,
    ys: NormalizedSeries,
    x_label: String,
    y_label: String,
    engine: RegressionEngine,
    mapper: CoordinateMapper,
    point_radius: u32,
    max_ticks: Option<u64>,
    surface: S,
    clock: C,
    state: LoopState,
    ticks: u64,
}

impl<S, C> RenderLoop<S, C>
where
    S: Surface,
    C: FrameClock,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: &FitConfig,
        xs: NormalizedSeries,
        ys: NormalizedSeries,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        params: RegressionParameters,
        surface: S,
        clock: C,
    ) -> Self {
        let (width, height) = surface.size();
        let geometry = SurfaceGeometry::new(width as f64, height as f64, config.margin);

        Self {
            xs,
            ys,
            x_label: x_label.into(),
            y_label: y_label.into(),
            engine: RegressionEngine::new(config, params),
            mapper: CoordinateMapper::new(geometry, config.amplification),
            point_radius: config.point_radius,
            max_ticks: config.max_ticks,
            surface,
            clock,
            state: LoopState::Idle,
            ticks: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn parameters(&self) -> RegressionParameters {
        self.engine.parameters()
    }

    pub fn geometry(&self) -> SurfaceGeometry {
        self.mapper.geometry()
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Idle to Running. Has no effect in any other state.
    pub fn start(&mut self) {
        if self.state == LoopState::Idle {
            info!(
                "starting fit over {} points on a {}x{} surface",
                self.xs.len(),
                self.geometry().width,
                self.geometry().height
            );
            self.state = LoopState::Running;
        }
    }

    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            info!("stopped after {} ticks", self.ticks);
        }
        self.state = LoopState::Stopped;
    }

    /// One descent step followed by a full redraw of the surface.
    pub fn tick(&mut self) -> Result<TickRecord, S::Error> {
        let params = self.engine.step(&self.xs, &self.ys, &self.mapper);

        let frame = self.compose_frame();
        self.surface.present(&frame)?;

        self.ticks += 1;

        let record = TickRecord {
            tick: self.ticks,
            slope: params.slope,
            intercept: params.intercept,
            mse: self.engine.last_mse(),
        };
        debug!("{record:?}");

        Ok(record)
    }

    /// Ticks until stopped, handing every record to `observer`.
    ///
    /// Surface errors end the loop and are returned to the caller.
    pub fn run(&mut self, mut observer: impl FnMut(&TickRecord)) -> Result<(), S::Error> {
        self.start();

        while self.is_running() {
            let record = self.tick()?;
            observer(&record);

            if self.max_ticks.is_some_and(|max| self.ticks >= max) {
                self.stop();
                break;
            }

            self.clock.wait_for_next_frame();
        }

        Ok(())
    }

    /// New surface size. Redraws the chrome only; the fit carries on untouched.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), S::Error> {
        self.surface.resize(width, height)?;

        let margin = self.mapper.geometry().margin;
        self.mapper
            .set_geometry(SurfaceGeometry::new(width as f64, height as f64, margin));

        let frame = Frame::chrome_only(self.mapper.geometry(), &self.x_label, &self.y_label);
        self.surface.present(&frame)
    }

    /// Display list for the current parameters.
    pub fn compose_frame(&self) -> Frame {
        Frame {
            geometry: self.mapper.geometry(),
            x_label: self.x_label.clone(),
            y_label: self.y_label.clone(),
            point_radius: self.point_radius,
            points: self.point_positions(),
            line: Some(self.fit_line()),
        }
    }

    fn point_positions(&self) -> Option<Vec<(f64, f64)>> {
        if self.xs.len() != self.ys.len() {
            error!(
                "{}",
                VizError::ShapeMismatch {
                    xs: self.xs.len(),
                    ys: self.ys.len()
                }
            );
            return None;
        }

        let points = self
            .xs
            .iter()
            .zip(self.ys.iter())
            .map(|(x, y)| (self.mapper.to_surface_x(x), self.mapper.to_surface_y(y)))
            .filter(|(px, py)| px.is_finite() && py.is_finite())
            .collect();

        Some(points)
    }

    fn fit_line(&self) -> Segment {
        let params = self.engine.parameters();

        let endpoint = |x: f64| {
            let scaled = params.predict(self.mapper.scale_x(x));
            (
                self.mapper.to_surface_x(x),
                self.mapper.scaled_to_surface_y(scaled),
            )
        };

        Segment {
            from: endpoint(0.),
            to: endpoint(1.),
        }
    }
}
