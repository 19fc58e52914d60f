//! mnawave - waveform inspection tool
//!
//! Samples a source waveform on a uniform time grid and prints it as CSV,
//! or prints the netlist clause the waveform serializes to.
//!
//! # Usage
//!
//! ```bash
//! mnawave --stop 20m --points 401 pulse 0 5 1m 10u 10u 4m 10m > pulse.csv
//! mnawave --netlist sin 0 1 1k --phase 90
//! ```

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mna_devices::{
    error::Result,
    units::parse_value,
    waveforms::{Sine, Waveform, WaveformKind},
};

/// Source waveform sampler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    shape: Shape,

    /// First sample time in seconds
    #[arg(long, default_value = "0", value_parser = parse_si, allow_negative_numbers = true)]
    start: f64,

    /// Last sample time in seconds
    #[arg(long, default_value = "1", value_parser = parse_si)]
    stop: f64,

    /// Number of samples, including both end points
    #[arg(long, default_value_t = 101, value_parser = clap::value_parser!(u32).range(2..))]
    points: u32,

    /// Print the netlist clause instead of samples
    #[arg(long)]
    netlist: bool,

    /// Label levels for a current source (i1=, io=, ...) in the netlist clause
    #[arg(long)]
    current: bool,
}

#[derive(Subcommand, Debug)]
enum Shape {
    /// PULSE(V1 V2 TD TR TF PW PER)
    Pulse {
        #[arg(value_parser = parse_si, num_args = 1..=7, allow_negative_numbers = true)]
        args: Vec<f64>,
    },
    /// SIN(VO VA FREQ TD THETA)
    Sin {
        #[arg(value_parser = parse_si, num_args = 1..=5, allow_negative_numbers = true)]
        args: Vec<f64>,

        /// Phase in degrees
        #[arg(long, default_value = "0", value_parser = parse_si, allow_negative_numbers = true)]
        phase: f64,
    },
    /// EXP(V1 V2 TD1 TAU1 TD2 TAU2)
    Exp {
        #[arg(value_parser = parse_si, num_args = 1..=6, allow_negative_numbers = true)]
        args: Vec<f64>,
    },
}

fn parse_si(s: &str) -> std::result::Result<f64, String> {
    parse_value(s).ok_or_else(|| format!("'{s}' is not a number"))
}

fn build_waveform(shape: &Shape) -> Result<Waveform> {
    let positional = |args: &[f64]| args.iter().copied().map(Some).collect::<Vec<_>>();
    match shape {
        Shape::Pulse { args } => Waveform::from_args(WaveformKind::Pulse, &positional(args)),
        Shape::Exp { args } => Waveform::from_args(WaveformKind::Exponential, &positional(args)),
        Shape::Sin { args, phase } => {
            // The positional form carries no phase; rebuild with it
            match Waveform::from_args(WaveformKind::Sine, &positional(args))? {
                Waveform::Sine(s) => Ok(Waveform::Sine(Sine::full(
                    s.vo(),
                    s.va(),
                    s.freq(),
                    s.td(),
                    s.theta(),
                    *phase,
                ))),
                other => Ok(other),
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let waveform = build_waveform(&args.shape)?;

    if args.netlist {
        let prefix = if args.current { 'i' } else { 'v' };
        println!("{}", waveform.netlist_clause(prefix));
        return Ok(());
    }

    info!(
        kind = %waveform.kind(),
        start = args.start,
        stop = args.stop,
        points = args.points,
        "sampling waveform"
    );

    let last = f64::from(args.points - 1);
    println!("time,value");
    for i in 0..args.points {
        let t = args.start + (args.stop - args.start) * f64::from(i) / last;
        println!("{:e},{:e}", t, waveform.value(t));
    }

    Ok(())
}
