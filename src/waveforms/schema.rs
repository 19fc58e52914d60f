//! Argument layout of each waveform kind, as the netlist grammar expects it.

use std::fmt;

/// One positional argument of a waveform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformArg {
    /// Keyword used in `key=value` form
    pub label: &'static str,
    /// Zero-based position in the positional form
    pub position: usize,
    pub required: bool,
    /// Value used when an optional argument is omitted
    pub default: Option<f64>,
}

const fn required(label: &'static str, position: usize) -> WaveformArg {
    WaveformArg {
        label,
        position,
        required: true,
        default: None,
    }
}

const fn optional(label: &'static str, position: usize, default: f64) -> WaveformArg {
    WaveformArg {
        label,
        position,
        required: false,
        default: Some(default),
    }
}

// PULSE(V1 V2 TD TR TF PW PER)
static PULSE_ARGS: [WaveformArg; 7] = [
    required("v1", 0),
    required("v2", 1),
    optional("td", 2, 0.0),
    required("tr", 3),
    required("tf", 4),
    required("pw", 5),
    required("per", 6),
];

// SIN(VO VA FREQ TD THETA)
static SINE_ARGS: [WaveformArg; 5] = [
    required("vo", 0),
    required("va", 1),
    required("freq", 2),
    optional("td", 3, 0.0),
    optional("theta", 4, 0.0),
];

// EXP(V1 V2 TD1 TAU1 TD2 TAU2)
static EXP_ARGS: [WaveformArg; 6] = [
    required("v1", 0),
    required("v2", 1),
    optional("td1", 2, 0.0),
    required("tau1", 3),
    optional("td2", 4, f64::INFINITY),
    optional("tau2", 5, f64::INFINITY),
];

/// The waveform shapes a time-dependent source can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaveformKind {
    Pulse,
    Sine,
    Exponential,
}

impl WaveformKind {
    /// All kinds, in netlist keyword order.
    pub const ALL: [WaveformKind; 3] = [Self::Pulse, Self::Sine, Self::Exponential];

    /// The `type=` keyword of this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Pulse => "pulse",
            Self::Sine => "sin",
            Self::Exponential => "exp",
        }
    }

    /// Parse a `type=` keyword (case-insensitive).
    pub fn from_keyword(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.keyword().eq_ignore_ascii_case(s))
    }

    /// Arguments accepted by this kind, ordered by position.
    pub fn schema(self) -> &'static [WaveformArg] {
        match self {
            Self::Pulse => &PULSE_ARGS,
            Self::Sine => &SINE_ARGS,
            Self::Exponential => &EXP_ARGS,
        }
    }

    /// Look up an argument by its keyword (case-insensitive).
    pub fn arg(self, label: &str) -> Option<&'static WaveformArg> {
        self.schema()
            .iter()
            .find(|arg| arg.label.eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for WaveformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
