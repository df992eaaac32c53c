//! Fits a straight line to a two-column dataset with plain gradient descent
//! and redraws the evolving fit once per frame.

pub mod clock;
pub mod config;
pub mod dataset;
pub mod error;
pub mod mapper;
pub mod normalize;
pub mod plots;
pub mod regression;
pub mod render_loop;
pub mod session;
pub mod surface;

pub use clock::{FrameClock, ImmediateClock, IntervalClock};
pub use config::FitConfig;
pub use error::VizError;
pub use mapper::{CoordinateMapper, SurfaceGeometry};
pub use normalize::{normalize, NormalizedSeries};
pub use regression::{RegressionEngine, RegressionParameters};
pub use render_loop::{LoopState, RenderLoop, TickRecord};
pub use session::Session;
pub use surface::{Frame, Segment, Surface, SvgSurface};
