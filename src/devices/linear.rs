//! Linear passive components: Resistor, Capacitor, Inductor.

use std::fmt;

use crate::circuit::NodeId;
use crate::error::{DeviceError, Result};

use super::stamp::{Reactive, Resistive};

/// One quantity of an operating-point report.
#[derive(Debug, Clone, PartialEq)]
pub struct OpEntry {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

/// Operating-point summary of a single device, printable as one report row.
#[derive(Debug, Clone, PartialEq)]
pub struct OpInfo {
    pub name: String,
    pub entries: Vec<OpEntry>,
}

impl fmt::Display for OpInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name.to_uppercase())?;
        for entry in &self.entries {
            write!(f, "  {} {:e} [{}]", entry.label, entry.value, entry.unit)?;
        }
        Ok(())
    }
}

/// A resistor component.
///
/// Resistance is the single stored quantity; conductance is derived on
/// every read, so the two can never drift apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Resistor {
    pub name: String,
    pub nodes: [NodeId; 2], // [positive, negative]
    pub is_symbolic: bool,
    value: f64,
}

impl Resistor {
    /// Create a new resistor. A zero or non-finite resistance is rejected.
    pub fn new(name: impl Into<String>, nodes: [NodeId; 2], value: f64) -> Result<Self> {
        let name = name.into();
        check_resistance(&name, "value", value)?;
        Ok(Self {
            name,
            nodes,
            is_symbolic: true,
            value,
        })
    }

    /// Resistance in ohms.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Conductance (1/R) in siemens.
    pub fn conductance(&self) -> f64 {
        1.0 / self.value
    }

    /// Set the resistance.
    pub fn set_value(&mut self, value: f64) -> Result<()> {
        check_resistance(&self.name, "value", value)?;
        self.value = value;
        Ok(())
    }

    /// Set the conductance; the resistance becomes `1/g`.
    pub fn set_conductance(&mut self, g: f64) -> Result<()> {
        if g == 0.0 || !g.is_finite() {
            return Err(DeviceError::invalid_parameter(
                &self.name,
                "conductance",
                format!("conductance must be non-zero and finite, got {g}"),
            ));
        }
        self.value = 1.0 / g;
        Ok(())
    }

    /// Report voltage, current and dissipated power for `voltage` across the resistor.
    pub fn op_info(&self, voltage: f64) -> OpInfo {
        OpInfo {
            name: self.name.clone(),
            entries: vec![
                OpEntry { label: "V(n1-n2):", value: voltage, unit: "V" },
                OpEntry { label: "I(n2-n1):", value: voltage / self.value, unit: "A" },
                OpEntry { label: "P:", value: voltage * voltage / self.value, unit: "W" },
            ],
        }
    }
}

fn check_resistance(name: &str, param: &str, value: f64) -> Result<()> {
    if value == 0.0 || !value.is_finite() {
        return Err(DeviceError::invalid_parameter(
            name,
            param,
            format!("resistance must be non-zero and finite, got {value}"),
        ));
    }
    Ok(())
}

impl Resistive for Resistor {
    // Pure conductances never appear on the right-hand side.
    fn current(&self, _voltages: &[f64], _time: f64) -> f64 {
        0.0
    }

    // Single port; other ports have no partial derivative
    fn conductance(&self, _voltages: &[f64], port: usize, _time: f64) -> f64 {
        if port == 0 {
            Resistor::conductance(self)
        } else {
            0.0
        }
    }
}

/// A linear capacitor.
///
/// Contributes nothing resistively. The transient integrator builds its
/// companion model from [`Reactive::charge_derivative`] and
/// `initial_condition`.
#[derive(Debug, Clone, PartialEq)]
pub struct Capacitor {
    pub name: String,
    pub nodes: [NodeId; 2],
    /// Capacitance in farads
    pub value: f64,
    /// Initial voltage across the capacitor
    pub initial_condition: f64,
    pub is_symbolic: bool,
}

impl Capacitor {
    /// Create a new capacitor with a zero initial condition.
    pub fn new(name: impl Into<String>, nodes: [NodeId; 2], value: f64) -> Self {
        Self {
            name: name.into(),
            nodes,
            value,
            initial_condition: 0.0,
            is_symbolic: true,
        }
    }

    /// Set the initial voltage.
    pub fn with_initial_condition(mut self, ic: f64) -> Self {
        self.initial_condition = ic;
        self
    }

    /// Report voltage, stored charge and stored energy for `voltage` across the capacitor.
    pub fn op_info(&self, voltage: f64) -> OpInfo {
        OpInfo {
            name: self.name.clone(),
            entries: vec![
                OpEntry { label: "V(n1-n2):", value: voltage, unit: "V" },
                OpEntry { label: "Q:", value: voltage * self.value, unit: "C" },
                OpEntry { label: "E:", value: 0.5 * voltage * voltage * self.value, unit: "J" },
            ],
        }
    }
}

impl Resistive for Capacitor {
    fn current(&self, _voltages: &[f64], _time: f64) -> f64 {
        0.0
    }

    fn conductance(&self, _voltages: &[f64], _port: usize, _time: f64) -> f64 {
        0.0
    }
}

impl Reactive for Capacitor {
    fn charge_derivative(&self, _voltages: &[f64], _time: f64) -> f64 {
        self.value
    }
}

/// A linear inductor.
///
/// Holds data only: the integrator reads `value` and `initial_condition`
/// and owns the companion model. `couplings` lists the identifiers of the
/// mutual-inductance relations this inductor takes part in; they are
/// resolved through the circuit registry, never owned here.
#[derive(Debug, Clone, PartialEq)]
pub struct Inductor {
    pub name: String,
    pub nodes: [NodeId; 2],
    /// Inductance in henries
    pub value: f64,
    /// Initial current through the inductor
    pub initial_condition: f64,
    pub couplings: Vec<String>,
    pub is_symbolic: bool,
}

impl Inductor {
    /// Create a new inductor with a zero initial condition.
    pub fn new(name: impl Into<String>, nodes: [NodeId; 2], value: f64) -> Self {
        Self {
            name: name.into(),
            nodes,
            value,
            initial_condition: 0.0,
            couplings: Vec::new(),
            is_symbolic: true,
        }
    }

    /// Set the initial current.
    pub fn with_initial_condition(mut self, ic: f64) -> Self {
        self.initial_condition = ic;
        self
    }

    /// Record that the coupling `coupling_id` references this inductor.
    pub fn add_coupling(&mut self, coupling_id: impl Into<String>) {
        self.couplings.push(coupling_id.into());
    }
}
