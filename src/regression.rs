use log::{error, trace};
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::config::FitConfig;
use crate::error::VizError;
use crate::mapper::CoordinateMapper;
use crate::normalize::NormalizedSeries;

/// Slope and intercept of the fitted line, in scaled space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionParameters {
    pub slope: f64,
    pub intercept: f64,
}

impl RegressionParameters {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Draws a slope from `[0, 1)` and an intercept from `[0, surface_height)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, surface_height: f64) -> Self {
        let slope = Uniform::new(0., 1.).sample(rng);
        let intercept = Uniform::new(0., surface_height.max(f64::EPSILON)).sample(rng);

        Self { slope, intercept }
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Full-batch gradient descent on the mean squared error of a line fit.
#[derive(Debug, Clone)]
pub struct RegressionEngine {
    params: RegressionParameters,
    slope_learning_rate: f64,
    intercept_learning_rate: f64,
    last_mse: Option<f64>,
}

impl RegressionEngine {
    pub fn new(config: &FitConfig, params: RegressionParameters) -> Self {
        Self {
            params,
            slope_learning_rate: config.slope_learning_rate,
            intercept_learning_rate: config.intercept_learning_rate,
            last_mse: None,
        }
    }

    pub fn parameters(&self) -> RegressionParameters {
        self.params
    }

    /// Error of the parameters as they were before the latest step.
    pub fn last_mse(&self) -> Option<f64> {
        self.last_mse
    }

    /// Performs one descent update over the whole dataset.
    ///
    /// Empty or mismatched series leave the parameters untouched.
    pub fn step(
        &mut self,
        xs: &NormalizedSeries,
        ys: &NormalizedSeries,
        mapper: &CoordinateMapper,
    ) -> RegressionParameters {
        if xs.len() != ys.len() {
            error!(
                "{}",
                VizError::ShapeMismatch {
                    xs: xs.len(),
                    ys: ys.len()
                }
            );
            return self.params;
        }

        let n = xs.len();
        if n == 0 {
            self.last_mse = None;
            return self.params;
        }

        let mut grad_slope = 0.;
        let mut grad_intercept = 0.;
        let mut squared = 0.;

        for (x, y) in xs.iter().zip(ys.iter()) {
            let xi = mapper.scale_x(x);
            let yi = mapper.scale_y(y);

            let err = self.params.predict(xi) - yi;

            grad_slope += err * xi;
            grad_intercept += err;
            squared += err * err;
        }

        let n = n as f64;
        grad_slope *= 2. / n;
        grad_intercept *= 2. / n;

        self.params.slope -= self.slope_learning_rate * grad_slope;
        self.params.intercept -= self.intercept_learning_rate * grad_intercept;
        self.last_mse = Some(squared / n);

        trace!("intercept: {}", self.params.intercept);

        self.params
    }

    /// Mean squared error of the current parameters in scaled space.
    pub fn mean_squared_error(
        &self,
        xs: &NormalizedSeries,
        ys: &NormalizedSeries,
        mapper: &CoordinateMapper,
    ) -> Option<f64> {
        if xs.is_empty() || xs.len() != ys.len() {
            return None;
        }

        let sum: f64 = xs
            .iter()
            .zip(ys.iter())
            .map(|(x, y)| {
                let err = self.params.predict(mapper.scale_x(x)) - mapper.scale_y(y);
                err * err
            })
            .sum();

        Some(sum / xs.len() as f64)
    }
}
