//! Two-stage exponential.

use crate::error::{DeviceError, Result};

/// EXP(V1 V2 TD1 TAU1 TD2 TAU2)
///
/// The fall term is added on top of the rise term once `td2` is reached;
/// the rise term keeps evolving underneath it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    v1: f64,
    v2: f64,
    td1: f64,
    tau1: f64,
    td2: f64,
    tau2: f64,
}

impl Exponential {
    /// Create an exponential waveform.
    ///
    /// Both time constants must be positive; `td2` and `tau2` may be
    /// infinite, which disables the fall stage.
    pub fn new(v1: f64, v2: f64, td1: f64, tau1: f64, td2: f64, tau2: f64) -> Result<Self> {
        for (param, tau) in [("tau1", tau1), ("tau2", tau2)] {
            if !(tau > 0.0) {
                return Err(DeviceError::invalid_parameter(
                    "exp",
                    param,
                    format!("time constant must be positive, got {tau}"),
                ));
            }
        }
        Ok(Self {
            v1,
            v2,
            td1,
            tau1,
            td2,
            tau2,
        })
    }

    pub fn v1(&self) -> f64 {
        self.v1
    }

    pub fn v2(&self) -> f64 {
        self.v2
    }

    pub fn td1(&self) -> f64 {
        self.td1
    }

    pub fn tau1(&self) -> f64 {
        self.tau1
    }

    pub fn td2(&self) -> f64 {
        self.td2
    }

    pub fn tau2(&self) -> f64 {
        self.tau2
    }

    /// Evaluate the waveform at `time`.
    pub fn value(&self, time: f64) -> f64 {
        if time < self.td1 {
            return self.v1;
        }

        let rise = self.v1 + (self.v2 - self.v1) * (1.0 - (-(time - self.td1) / self.tau1).exp());
        if time < self.td2 {
            rise
        } else {
            rise + (self.v1 - self.v2) * (1.0 - (-(time - self.td2) / self.tau2).exp())
        }
    }
}
