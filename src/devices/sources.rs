//! Independent voltage and current sources.
//!
//! A source carries an optional DC value, an optional AC phasor and an
//! optional waveform. Time dependence is a separate flag so that a source
//! can keep a waveform attached while being evaluated as DC.

use num_complex::Complex64;

use crate::circuit::NodeId;
use crate::error::{DeviceError, Result};
use crate::waveforms::Waveform;

/// Whether the source forces a voltage or a current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Voltage,
    Current,
}

impl SourceKind {
    /// Letter used for level labels in netlist clauses (`v1=`, `io=`, ...).
    pub fn level_prefix(self) -> char {
        match self {
            SourceKind::Voltage => 'v',
            SourceKind::Current => 'i',
        }
    }

    /// DC `type=` keyword.
    pub fn dc_keyword(self) -> &'static str {
        match self {
            SourceKind::Voltage => "vdc",
            SourceKind::Current => "idc",
        }
    }
}

/// Magnitude/phase form of an AC amplitude. Phase is in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phasor {
    pub magnitude: f64,
    pub phase: f64,
}

impl From<Complex64> for Phasor {
    fn from(c: Complex64) -> Self {
        Self {
            magnitude: c.norm(),
            phase: c.arg(),
        }
    }
}

/// An ideal independent source.
///
/// Positive current flows into `nodes[0]` through the source and out of
/// `nodes[1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct IndependentSource {
    pub name: String,
    pub nodes: [NodeId; 2], // [positive, negative]
    pub kind: SourceKind,
    pub is_symbolic: bool,
    dc_value: Option<f64>,
    ac: Option<Phasor>,
    is_timedependent: bool,
    waveform: Option<Waveform>,
}

impl IndependentSource {
    /// Create a new source.
    ///
    /// The AC amplitude is decomposed into magnitude and phase here, once.
    /// `None` stays absent and is distinct from a zero amplitude.
    pub fn new(
        kind: SourceKind,
        name: impl Into<String>,
        nodes: [NodeId; 2],
        dc_value: Option<f64>,
        ac_value: Option<Complex64>,
    ) -> Self {
        Self {
            name: name.into(),
            nodes,
            kind,
            is_symbolic: true,
            dc_value,
            ac: ac_value.map(Phasor::from),
            is_timedependent: false,
            waveform: None,
        }
    }

    /// Create a new voltage source.
    pub fn voltage(
        name: impl Into<String>,
        nodes: [NodeId; 2],
        dc_value: Option<f64>,
        ac_value: Option<Complex64>,
    ) -> Self {
        Self::new(SourceKind::Voltage, name, nodes, dc_value, ac_value)
    }

    /// Create a new current source.
    pub fn current(
        name: impl Into<String>,
        nodes: [NodeId; 2],
        dc_value: Option<f64>,
        ac_value: Option<Complex64>,
    ) -> Self {
        Self::new(SourceKind::Current, name, nodes, dc_value, ac_value)
    }

    /// Attach a waveform and mark the source time-dependent.
    pub fn with_waveform(mut self, waveform: impl Into<Waveform>) -> Self {
        self.waveform = Some(waveform.into());
        self.is_timedependent = true;
        self
    }

    pub fn set_time_dependent(&mut self, is_timedependent: bool) {
        self.is_timedependent = is_timedependent;
    }

    pub fn is_time_dependent(&self) -> bool {
        self.is_timedependent
    }

    pub fn dc_value(&self) -> Option<f64> {
        self.dc_value
    }

    pub fn ac(&self) -> Option<Phasor> {
        self.ac
    }

    pub fn ac_magnitude(&self) -> Option<f64> {
        self.ac.map(|p| p.magnitude)
    }

    /// AC phase in radians.
    pub fn ac_phase(&self) -> Option<f64> {
        self.ac.map(|p| p.phase)
    }

    pub fn waveform(&self) -> Option<&Waveform> {
        self.waveform.as_ref()
    }

    /// Source value (volts or amperes) at `time`.
    ///
    /// A DC source, or one without a waveform, always yields its DC value.
    /// With no `time` the DC value wins even for a time-dependent source,
    /// so an operating point can seed a later transient run. Otherwise the
    /// waveform is evaluated.
    pub fn value(&self, time: Option<f64>) -> Result<f64> {
        let waveform = match &self.waveform {
            Some(w) if self.is_timedependent => w,
            _ => return self.require_dc(),
        };
        match time {
            Some(t) => Ok(waveform.value(t)),
            None => self.require_dc(),
        }
    }

    fn require_dc(&self) -> Result<f64> {
        self.dc_value
            .ok_or_else(|| DeviceError::missing_value(&self.name, "DC value"))
    }

    /// Recommended starting values for operating-point analyses.
    pub fn dc_guess(&self) -> Option<Vec<f64>> {
        match self.kind {
            SourceKind::Voltage => self.dc_value.map(|v| vec![v]),
            SourceKind::Current => None,
        }
    }
}
