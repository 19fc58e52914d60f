//! Damped sinusoid.

use std::f64::consts::PI;

/// SIN(VO VA FREQ TD THETA) with an optional phase in degrees.
///
/// ```text
/// t <  td:  vo + va * sin(pi * phi / 180)
/// t >= td:  vo + va * exp(-(t - td) * theta) * sin(2 * pi * freq * (t - td) + pi * phi / 180)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sine {
    vo: f64,
    va: f64,
    freq: f64,
    td: f64,
    theta: f64,
    phi: f64,
}

impl Sine {
    /// Create an undamped, undelayed sinusoid with zero phase.
    pub fn new(vo: f64, va: f64, freq: f64) -> Self {
        Self::full(vo, va, freq, 0.0, 0.0, 0.0)
    }

    /// Create a sinusoid with every parameter given.
    ///
    /// # Arguments
    /// * `vo` - Offset
    /// * `va` - Amplitude
    /// * `freq` - Frequency in Hz
    /// * `td` - Delay before the oscillation starts
    /// * `theta` - Damping factor in 1/s
    /// * `phi` - Phase in degrees
    pub fn full(vo: f64, va: f64, freq: f64, td: f64, theta: f64, phi: f64) -> Self {
        Self {
            vo,
            va,
            freq,
            td,
            theta,
            phi,
        }
    }

    pub fn vo(&self) -> f64 {
        self.vo
    }

    pub fn va(&self) -> f64 {
        self.va
    }

    pub fn freq(&self) -> f64 {
        self.freq
    }

    pub fn td(&self) -> f64 {
        self.td
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Phase in degrees.
    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// Evaluate the sinusoid at `time`.
    pub fn value(&self, time: f64) -> f64 {
        let phase = PI * self.phi / 180.0;
        if time < self.td {
            return self.vo + self.va * phase.sin();
        }

        let t = time - self.td;
        self.vo + self.va * (-t * self.theta).exp() * (2.0 * PI * self.freq * t + phase).sin()
    }
}
