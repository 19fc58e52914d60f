//! Linear controlled sources: VCVS (E), VCCS (G), CCCS (F), CCVS (H).
//!
//! The output port is always `nodes`. Voltage-controlled variants sense a
//! second port, `sense`, which draws no current. Current-controlled variants
//! name the branch whose current they follow; the branch is resolved through
//! the circuit registry.

use tracing::warn;

use crate::circuit::{NodeId, Port};
use crate::error::{DeviceError, Result};

use super::stamp::Resistive;

/// Voltage-controlled voltage source.
///
/// V(out+, out-) = alpha * V(sense+, sense-)
#[derive(Debug, Clone, PartialEq)]
pub struct Vcvs {
    pub name: String,
    pub nodes: [NodeId; 2],
    pub sense: [NodeId; 2],
    pub alpha: f64,
    pub is_symbolic: bool,
}

impl Vcvs {
    pub fn new(name: impl Into<String>, nodes: [NodeId; 2], sense: [NodeId; 2], alpha: f64) -> Self {
        Self {
            name: name.into(),
            nodes,
            sense,
            alpha,
            is_symbolic: true,
        }
    }

    /// Output and sense ports, in that order.
    pub fn ports(&self) -> Vec<Port> {
        vec![self.nodes.into(), self.sense.into()]
    }

    /// Voltage forced across the output port.
    pub fn output_voltage(&self, sense_voltage: f64) -> f64 {
        self.alpha * sense_voltage
    }

    /// The sense port is an open circuit.
    pub fn sense_current(&self) -> f64 {
        0.0
    }
}

/// Voltage-controlled current source.
///
/// I(out) = alpha * V(sense+, sense-), entering out+ and leaving out-.
#[derive(Debug, Clone, PartialEq)]
pub struct Vccs {
    pub name: String,
    pub nodes: [NodeId; 2],
    pub sense: [NodeId; 2],
    pub alpha: f64,
    pub is_symbolic: bool,
}

impl Vccs {
    pub fn new(name: impl Into<String>, nodes: [NodeId; 2], sense: [NodeId; 2], alpha: f64) -> Self {
        Self {
            name: name.into(),
            nodes,
            sense,
            alpha,
            is_symbolic: true,
        }
    }

    /// Output and sense ports, in that order.
    pub fn ports(&self) -> Vec<Port> {
        vec![self.nodes.into(), self.sense.into()]
    }

    /// The sense port is an open circuit.
    pub fn sense_current(&self) -> f64 {
        0.0
    }
}

impl Resistive for Vccs {
    /// `voltages` holds the output then the sense port voltage. A slice
    /// without the sense entry is a caller bug; release builds read it as 0.
    fn current(&self, voltages: &[f64], _time: f64) -> f64 {
        debug_assert!(
            voltages.len() >= 2,
            "{}: sense voltage missing, got {} port voltages",
            self.name,
            voltages.len()
        );
        self.alpha * voltages.get(1).copied().unwrap_or(0.0)
    }

    fn conductance(&self, _voltages: &[f64], port: usize, _time: f64) -> f64 {
        if port == 1 {
            self.alpha
        } else {
            0.0
        }
    }
}

/// Current-controlled current source.
///
/// I(out) = alpha * I(source_id). The sensing branch is a short circuit.
#[derive(Debug, Clone, PartialEq)]
pub struct Cccs {
    pub name: String,
    pub nodes: [NodeId; 2],
    /// Identifier of the device whose branch current is sensed
    pub source_id: String,
    pub alpha: f64,
    pub is_symbolic: bool,
}

impl Cccs {
    pub fn new(name: impl Into<String>, nodes: [NodeId; 2], source_id: impl Into<String>, alpha: f64) -> Self {
        Self {
            name: name.into(),
            nodes,
            source_id: source_id.into(),
            alpha,
            is_symbolic: true,
        }
    }

    pub fn ports(&self) -> Vec<Port> {
        vec![self.nodes.into()]
    }

    /// Output current given the current of the referenced branch.
    pub fn output_current(&self, reference_current: f64) -> f64 {
        self.alpha * reference_current
    }

    /// The sensing branch drops no voltage.
    pub fn sense_voltage(&self) -> f64 {
        0.0
    }
}

/// Current-controlled voltage source.
///
/// Declared so netlists can name it; it cannot be simulated. Every
/// simulation or serialization operation (ports, stamps, output voltage,
/// netlist line) returns [`DeviceError::Unsupported`]. Only the identity
/// accessors (name, terminals) and the symbolic flag work, and
/// `dc_guess` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ccvs {
    pub name: String,
    pub nodes: [NodeId; 2],
    pub source_id: String,
    pub alpha: f64,
    pub is_symbolic: bool,
}

impl Ccvs {
    pub fn new(name: impl Into<String>, nodes: [NodeId; 2], source_id: impl Into<String>, alpha: f64) -> Self {
        let name = name.into();
        warn!(device = %name, "current-controlled voltage sources are not implemented");
        Self {
            name,
            nodes,
            source_id: source_id.into(),
            alpha,
            is_symbolic: true,
        }
    }

    pub(crate) fn unsupported(&self, operation: &str) -> DeviceError {
        DeviceError::unsupported(&self.name, operation)
    }

    pub fn ports(&self) -> Result<Vec<Port>> {
        Err(self.unsupported("ports"))
    }

    pub fn output_voltage(&self, _reference_current: f64) -> Result<f64> {
        Err(self.unsupported("output_voltage"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn out() -> [NodeId; 2] {
        [NodeId(1), NodeId(0)]
    }

    fn sense() -> [NodeId; 2] {
        [NodeId(2), NodeId(3)]
    }

    #[test]
    fn test_vcvs() {
        let e = Vcvs::new("E1", out(), sense(), 10.0);
        assert_eq!(e.output_voltage(0.25), 2.5);
        assert_eq!(e.sense_current(), 0.0);
        assert_eq!(
            e.ports(),
            vec![Port::new(NodeId(1), NodeId(0)), Port::new(NodeId(2), NodeId(3))]
        );
    }

    #[test]
    fn test_vccs_stamps() {
        let g = Vccs::new("G1", out(), sense(), 2e-3);
        let v = [7.0, 1.5];
        assert_abs_diff_eq!(g.current(&v, 0.0), 3e-3, epsilon = 1e-15);
        assert_eq!(g.conductance(&v, 0, 0.0), 0.0);
        assert_eq!(g.conductance(&v, 1, 0.0), 2e-3);
        assert_eq!(g.sense_current(), 0.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "sense voltage missing")]
    fn test_vccs_requires_sense_voltage() {
        let g = Vccs::new("G1", out(), sense(), 2e-3);
        g.current(&[3.0], 0.0);
    }

    #[test]
    fn test_cccs() {
        let f = Cccs::new("F1", out(), "V1", 3.0);
        assert_eq!(f.output_current(0.5), 1.5);
        assert_eq!(f.sense_voltage(), 0.0);
        assert_eq!(f.ports().len(), 1);
        assert_eq!(f.source_id, "V1");
    }

    #[test]
    fn test_ccvs_is_unsupported() {
        let h = Ccvs::new("H1", out(), "V1", 1.0);
        assert!(matches!(h.ports(), Err(DeviceError::Unsupported { .. })));
        assert!(matches!(
            h.output_voltage(1.0),
            Err(DeviceError::Unsupported { .. })
        ));
    }
}
