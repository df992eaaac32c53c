use std::time::Duration;

pub const DEFAULT_MARGIN: f64 = 30.;
pub const DEFAULT_AMPLIFICATION: f64 = 500.;
pub const DEFAULT_POINT_RADIUS: u32 = 2;
pub const DEFAULT_SLOPE_LEARNING_RATE: f64 = 5e-8;
pub const DEFAULT_INTERCEPT_LEARNING_RATE: f64 = 5e-8 * 5e5;

/// Tunables for one fitting session. Immutable once a session is started.
///
/// The learning rates are tuned against `amplification`: scaled coordinates
/// grow linearly with it, so the slope gradient grows with its square while
/// the intercept gradient and the intercept itself grow linearly. Change the
/// amplification through [`FitConfig::with_amplification`], which rescales the
/// slope rate to match, otherwise the descent silently diverges.
#[derive(Debug, Clone, PartialEq)]
pub struct FitConfig {
    /// Border kept free on every side of the surface, in pixels.
    pub margin: f64,
    /// Display-amplification constant shared by points, line and regression.
    pub amplification: f64,
    pub point_radius: u32,
    pub slope_learning_rate: f64,
    pub intercept_learning_rate: f64,
    /// Lower bound on the pause between two ticks.
    pub min_tick_delay: Duration,
    /// Period of the frame clock the loop synchronizes to.
    pub frame_interval: Duration,
    /// Stop the loop after this many ticks. `None` runs until stopped.
    pub max_ticks: Option<u64>,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            amplification: DEFAULT_AMPLIFICATION,
            point_radius: DEFAULT_POINT_RADIUS,
            slope_learning_rate: DEFAULT_SLOPE_LEARNING_RATE,
            intercept_learning_rate: DEFAULT_INTERCEPT_LEARNING_RATE,
            min_tick_delay: Duration::from_millis(1),
            frame_interval: Duration::from_micros(16_667),
            max_ticks: None,
        }
    }
}

impl FitConfig {
    /// Returns a copy using `amplification`, with the slope learning rate
    /// scaled by `(old / new)^2` so the descent keeps its step size.
    pub fn with_amplification(&self, amplification: f64) -> Self {
        let ratio = self.amplification / amplification;

        Self {
            amplification,
            slope_learning_rate: self.slope_learning_rate * ratio * ratio,
            ..self.clone()
        }
    }

    pub fn with_max_ticks(self, max_ticks: Option<u64>) -> Self {
        Self { max_ticks, ..self }
    }
}
