use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use live_lin_reg::clock::{FrameClock, ImmediateClock, IntervalClock};
use live_lin_reg::config::{self, FitConfig};
use live_lin_reg::session::{Session, DEFAULT_DATA_PATH};
use live_lin_reg::surface::SvgSurface;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long, default_value = DEFAULT_DATA_PATH)]
    data_path: PathBuf,

    #[clap(short, long, default_value = "plots/live_fit.svg")]
    output_path: PathBuf,

    #[clap(long, default_value_t = ',')]
    delimiter: char,

    #[clap(long, default_value_t = 1280)]
    width: u32,

    #[clap(long, default_value_t = 720)]
    height: u32,

    /// Seed for the initial slope and intercept.
    #[clap(short, long)]
    seed: Option<u64>,

    /// Stop after this many ticks instead of running until killed.
    #[clap(short, long)]
    max_ticks: Option<u64>,

    /// Write the current frame to the output path every this many ticks.
    #[clap(long, default_value_t = 60)]
    snapshot_every: u64,

    /// CSV file receiving slope, intercept and error of every tick.
    #[clap(short, long)]
    trace_path: Option<PathBuf>,

    #[clap(long, default_value_t = config::DEFAULT_MARGIN)]
    margin: f64,

    /// Slope learning rate is rescaled along with it.
    #[clap(long, default_value_t = config::DEFAULT_AMPLIFICATION)]
    amplification: f64,

    #[clap(long, default_value_t = config::DEFAULT_POINT_RADIUS)]
    point_radius: u32,

    #[clap(long)]
    slope_lr: Option<f64>,

    #[clap(long)]
    intercept_lr: Option<f64>,

    #[clap(long, default_value_t = 16.667)]
    frame_ms: f64,

    #[clap(long, default_value_t = 1.)]
    min_delay_ms: f64,

    /// Tick as fast as possible.
    #[clap(long)]
    no_frame_sync: bool,
}

impl Args {
    fn fit_config(&self) -> FitConfig {
        let defaults = FitConfig::default().with_amplification(self.amplification);

        FitConfig {
            margin: self.margin,
            point_radius: self.point_radius,
            slope_learning_rate: self.slope_lr.unwrap_or(defaults.slope_learning_rate),
            intercept_learning_rate: self
                .intercept_lr
                .unwrap_or(defaults.intercept_learning_rate),
            min_tick_delay: Duration::from_secs_f64(self.min_delay_ms.max(0.) / 1e3),
            frame_interval: Duration::from_secs_f64(self.frame_ms.max(0.) / 1e3),
            max_ticks: self.max_ticks,
            ..defaults
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let config = args.fit_config();

    let delimiter = u8::try_from(args.delimiter)?;

    let session = match Session::load_with_delimiter(&args.data_path, delimiter) {
        Ok(session) => session,
        Err(e) => {
            error!("{e}");
            return Err(e.into());
        }
    };

    info!(
        "fitting {:?} against {:?} over {} rows",
        session.y_label,
        session.x_label,
        session.xs.len()
    );

    let surface = SvgSurface::new(args.width, args.height)
        .with_output(&args.output_path, args.snapshot_every);

    let clock: Box<dyn FrameClock> = if args.no_frame_sync {
        Box::new(ImmediateClock)
    } else {
        Box::new(IntervalClock::new(
            config.frame_interval,
            config.min_tick_delay,
        ))
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut render_loop = session.start(&config, surface, clock, &mut rng);

    let mut trace = args
        .trace_path
        .as_ref()
        .map(csv::Writer::from_path)
        .transpose()?;

    let snapshot_every = args.snapshot_every.max(1);

    render_loop.run(|record| {
        if let Some(Err(e)) = trace.as_mut().map(|writer| writer.serialize(record)) {
            warn!("trace disabled: {e}");
            trace = None;
        }

        if record.tick % snapshot_every == 0 {
            info!(
                "tick {}: slope {:.6e}, intercept {:.3}, mse {:?}",
                record.tick, record.slope, record.intercept, record.mse
            );
        }
    })?;

    if let Some(mut writer) = trace {
        writer.flush()?;
    }

    render_loop.surface().write_snapshot()?;

    Ok(())
}
