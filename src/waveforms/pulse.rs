//! Periodic trapezoidal pulse.
//!
//! Within each period the waveform passes through five segments:
//!
//! ```text
//!          ___pw___
//!         /        \
//!   _td__/tr      tf\______
//!   v1              v2 -> v1
//! ```

use tracing::debug;

use crate::error::{DeviceError, Result};

/// PULSE(V1 V2 TD TR TF PW PER)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    v1: f64,
    v2: f64,
    td: f64,
    tr: f64,
    tf: f64,
    pw: f64,
    per: f64,
}

impl Pulse {
    /// Create a pulse waveform.
    ///
    /// # Arguments
    /// * `v1` - Low value
    /// * `v2` - High value
    /// * `td` - Delay to the first ramp within each period; negative values are clamped to zero
    /// * `tr` - Rise time from `v1` to `v2`
    /// * `tf` - Fall time from `v2` to `v1`
    /// * `pw` - Plateau width at `v2`
    /// * `per` - Period, must be positive and finite
    pub fn new(v1: f64, v2: f64, td: f64, tr: f64, tf: f64, pw: f64, per: f64) -> Result<Self> {
        if !(per.is_finite() && per > 0.0) {
            return Err(DeviceError::invalid_parameter(
                "pulse",
                "per",
                format!("period must be positive and finite, got {per}"),
            ));
        }
        if td < 0.0 {
            debug!(td, "negative pulse delay clamped to zero");
        }
        Ok(Self {
            v1,
            v2,
            td: td.max(0.0),
            tr,
            tf,
            pw,
            per,
        })
    }

    pub fn v1(&self) -> f64 {
        self.v1
    }

    pub fn v2(&self) -> f64 {
        self.v2
    }

    pub fn td(&self) -> f64 {
        self.td
    }

    pub fn tr(&self) -> f64 {
        self.tr
    }

    pub fn tf(&self) -> f64 {
        self.tf
    }

    pub fn pw(&self) -> f64 {
        self.pw
    }

    pub fn per(&self) -> f64 {
        self.per
    }

    /// Evaluate the pulse at `time`.
    pub fn value(&self, time: f64) -> f64 {
        // Fold into [0, per)
        let t = time - self.per * (time / self.per).floor();

        let rise_end = self.td + self.tr;
        let high_end = rise_end + self.pw;
        let fall_end = high_end + self.tf;

        if t < self.td {
            self.v1
        } else if t < rise_end {
            self.v1 + (self.v2 - self.v1) / self.tr * (t - self.td)
        } else if t < high_end {
            self.v2
        } else if t < fall_end {
            self.v2 + (self.v1 - self.v2) / self.tf * (t - high_end)
        } else {
            self.v1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn reference_pulse() -> Pulse {
        Pulse::new(0.0, 5.0, 0.0, 1.0, 1.0, 2.0, 10.0).unwrap()
    }

    #[test]
    fn test_pulse_segments() {
        let p = reference_pulse();
        assert_abs_diff_eq!(p.value(0.0), 0.0);
        assert_abs_diff_eq!(p.value(0.5), 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(p.value(1.5), 5.0);
        assert_abs_diff_eq!(p.value(3.0), 5.0);
        assert_abs_diff_eq!(p.value(3.5), 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(p.value(4.5), 0.0);
        assert_abs_diff_eq!(p.value(9.99), 0.0);
    }

    #[test]
    fn test_pulse_is_periodic() {
        let p = reference_pulse();
        assert_abs_diff_eq!(p.value(11.0), p.value(1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(p.value(20.5), p.value(0.5), epsilon = 1e-12);
        // Negative times wrap into the period as well
        assert_abs_diff_eq!(p.value(-9.5), p.value(0.5), epsilon = 1e-12);
    }

    #[test]
    fn test_pulse_delay() {
        let p = Pulse::new(1.0, 3.0, 2.0, 1.0, 1.0, 1.0, 10.0).unwrap();
        assert_abs_diff_eq!(p.value(1.0), 1.0);
        assert_abs_diff_eq!(p.value(2.5), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.value(3.5), 3.0);
        assert_abs_diff_eq!(p.value(4.5), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.value(6.0), 1.0);
    }

    #[test]
    fn test_negative_delay_clamped() {
        let p = Pulse::new(0.0, 1.0, -3.0, 1.0, 1.0, 1.0, 10.0).unwrap();
        assert_eq!(p.td(), 0.0);
        assert_abs_diff_eq!(p.value(0.5), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_period_rejected() {
        for per in [0.0, -1.0, f64::INFINITY, f64::NAN] {
            let err = Pulse::new(0.0, 1.0, 0.0, 1.0, 1.0, 1.0, per).unwrap_err();
            assert!(matches!(err, DeviceError::InvalidParameter { ref param, .. } if param == "per"));
        }
    }
}
