//! Time-domain waveforms for independent sources.
//!
//! Every waveform is an immutable parameter record with a pure
//! `value(time)`. The transient integrator may call it at any time point,
//! in any order, including points it later rejects during step control.
//!
//! - [`Pulse`] - periodic trapezoid
//! - [`Sine`] - damped sinusoid with delay and phase
//! - [`Exponential`] - rise then superposed fall
//!
//! [`WaveformKind::schema`] describes the positional arguments of each
//! kind, and [`Waveform::from_args`] builds a waveform from them.

mod exponential;
mod pulse;
mod schema;
mod sine;

pub use exponential::Exponential;
pub use pulse::Pulse;
pub use schema::{WaveformArg, WaveformKind};
pub use sine::Sine;

use std::collections::HashMap;

use crate::error::{DeviceError, Result};

/// A waveform attached to a time-dependent source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Waveform {
    Pulse(Pulse),
    Sine(Sine),
    Exponential(Exponential),
}

impl Waveform {
    /// Build a waveform from positional arguments.
    ///
    /// `args[i]` fills the argument at position `i` of `kind.schema()`;
    /// `None` or a missing tail falls back to the schema default.
    pub fn from_args(kind: WaveformKind, args: &[Option<f64>]) -> Result<Self> {
        Self::resolve(kind, |arg| args.get(arg.position).copied().flatten())
    }

    /// Build a waveform from `label=value` arguments (labels are case-insensitive).
    pub fn from_named(kind: WaveformKind, args: &HashMap<String, f64>) -> Result<Self> {
        Self::resolve(kind, |arg| {
            args.iter()
                .find(|(label, _)| label.eq_ignore_ascii_case(arg.label))
                .map(|(_, &value)| value)
        })
    }

    fn resolve(kind: WaveformKind, lookup: impl Fn(&WaveformArg) -> Option<f64>) -> Result<Self> {
        let mut values = [0.0; 7];
        for arg in kind.schema() {
            let value = lookup(arg).or(arg.default);
            values[arg.position] = value.ok_or_else(|| DeviceError::MissingArgument {
                kind: kind.to_string(),
                param: arg.label.to_string(),
            })?;
        }

        let waveform = match kind {
            WaveformKind::Pulse => {
                let [v1, v2, td, tr, tf, pw, per] = values;
                Waveform::Pulse(Pulse::new(v1, v2, td, tr, tf, pw, per)?)
            }
            WaveformKind::Sine => {
                let [vo, va, freq, td, theta, ..] = values;
                Waveform::Sine(Sine::full(vo, va, freq, td, theta, 0.0))
            }
            WaveformKind::Exponential => {
                let [v1, v2, td1, tau1, td2, tau2, _] = values;
                Waveform::Exponential(Exponential::new(v1, v2, td1, tau1, td2, tau2)?)
            }
        };
        Ok(waveform)
    }

    pub fn kind(&self) -> WaveformKind {
        match self {
            Waveform::Pulse(_) => WaveformKind::Pulse,
            Waveform::Sine(_) => WaveformKind::Sine,
            Waveform::Exponential(_) => WaveformKind::Exponential,
        }
    }

    /// Evaluate the waveform at `time`.
    pub fn value(&self, time: f64) -> f64 {
        match self {
            Waveform::Pulse(p) => p.value(time),
            Waveform::Sine(s) => s.value(time),
            Waveform::Exponential(e) => e.value(time),
        }
    }
}

impl From<Pulse> for Waveform {
    fn from(p: Pulse) -> Self {
        Waveform::Pulse(p)
    }
}

impl From<Sine> for Waveform {
    fn from(s: Sine) -> Self {
        Waveform::Sine(s)
    }
}

impl From<Exponential> for Waveform {
    fn from(e: Exponential) -> Self {
        Waveform::Exponential(e)
    }
}
