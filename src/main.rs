//! `orbital`: replay recorded drag gestures through an orbit controller.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glam::Vec3;
use orbital::input::{load_trace, PointerDispatcher};
use orbital::options::Options;
use orbital::orbit::OrbitController;
use orbital::transform::{Transform, TransformSink};

/// Drag-to-orbit controller tools
#[derive(Parser)]
#[command(name = "orbital")]
#[command(about = "Replay pointer gestures through an orbit controller")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Feed a JSON gesture trace through a controller and log each rotation
    Replay {
        /// TOML options file (defaults apply when omitted)
        #[arg(long)]
        options: Option<PathBuf>,
        /// JSON array of pointer events
        #[arg(long)]
        trace: PathBuf,
        /// Pivot position as `x,y,z`
        #[arg(long, value_parser = parse_vec3, default_value = "0,0,0")]
        pivot: Vec3,
        /// Initial target position as `x,y,z`
        #[arg(long, value_parser = parse_vec3, default_value = "0,0,1")]
        target: Vec3,
    },
    /// Write the options JSON schema
    Schema {
        /// Output path
        #[arg(long)]
        out: PathBuf,
    },
}

/// Transform that logs every rotation it receives.
struct LoggedTransform {
    inner: Transform,
    rotations: usize,
}

impl TransformSink for LoggedTransform {
    fn rotate_around(&mut self, pivot: Vec3, axis: Vec3, degrees: f32) {
        self.rotations += 1;
        self.inner.rotate_around(pivot, axis, degrees);
        log::info!(
            "rotate #{}: {degrees:.3} deg about {axis} through {pivot} -> {}",
            self.rotations,
            self.inner.translation
        );
    }

    fn set_position(&mut self, position: Vec3) {
        self.inner.translation = position;
        log::info!("starting position {position}");
    }
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid component in '{s}': {e}"))?;
    match parts.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(format!("expected x,y,z, got '{s}'")),
    }
}

fn replay(
    options: Option<&Path>,
    trace: &Path,
    pivot: Vec3,
    target: Vec3,
) -> Result<()> {
    let options = match options {
        Some(path) => Options::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Options::default(),
    };
    let events = load_trace(trace)
        .with_context(|| format!("loading {}", trace.display()))?;

    let target = LoggedTransform {
        inner: Transform::from_translation(target),
        rotations: 0,
    };
    let mut dispatcher = PointerDispatcher::new();
    let controller = OrbitController::new(options.orbit, pivot, target)?
        .attach(&mut dispatcher);

    let delivered = dispatcher.dispatch_all(&events);

    let controller = controller.borrow();
    let target = controller.target();
    log::info!(
        "{delivered} events, {} rotations, final angle {:.3} deg",
        target.rotations,
        controller.current_angle()
    );
    log::info!(
        "final transform: translation {} rotation {}",
        target.inner.translation,
        target.inner.rotation
    );
    Ok(())
}

fn write_schema(out: &Path) -> Result<()> {
    let schema = serde_json::to_string_pretty(&Options::json_schema())?;
    std::fs::write(out, schema)
        .with_context(|| format!("writing {}", out.display()))?;
    log::info!("wrote options schema to {}", out.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Replay {
            options,
            trace,
            pivot,
            target,
        } => replay(options.as_deref(), &trace, pivot, target),
        Commands::Schema { out } => write_schema(&out),
    }
}
