//! Device models and the capability contract the solver consumes.
//!
//! This module provides models for all supported devices:
//! - Linear: Resistor, Capacitor, Inductor
//! - Coupling: mutual inductance between two inductors
//! - Independent sources: voltage and current, with optional waveforms
//! - Controlled sources: VCVS, VCCS, CCCS (and the inert CCVS)
//!
//! [`Device`] is the closed set of variants. Each variant exposes only the
//! stamp operators it supports; the solver asks for them through
//! [`Device::resistive`] and [`Device::reactive`].

mod controlled;
mod coupling;
mod linear;
mod sources;
mod stamp;

pub use controlled::{Ccvs, Cccs, Vccs, Vcvs};
pub use coupling::InductorCoupling;
pub use linear::{Capacitor, Inductor, OpEntry, OpInfo, Resistor};
pub use sources::{IndependentSource, Phasor, SourceKind};
pub use stamp::{Reactive, Resistive};

use crate::circuit::{NodeId, NodeNames, Port};
use crate::error::Result;
use crate::netlist::ToNetlist;

/// A circuit device.
#[derive(Debug, Clone, PartialEq)]
pub enum Device {
    Resistor(Resistor),
    Capacitor(Capacitor),
    Inductor(Inductor),
    InductorCoupling(InductorCoupling),
    Source(IndependentSource),
    Vcvs(Vcvs),
    Vccs(Vccs),
    Cccs(Cccs),
    Ccvs(Ccvs),
}

impl Device {
    /// Get the device identifier.
    pub fn name(&self) -> &str {
        match self {
            Device::Resistor(r) => &r.name,
            Device::Capacitor(c) => &c.name,
            Device::Inductor(l) => &l.name,
            Device::InductorCoupling(k) => &k.name,
            Device::Source(s) => &s.name,
            Device::Vcvs(e) => &e.name,
            Device::Vccs(g) => &g.name,
            Device::Cccs(f) => &f.name,
            Device::Ccvs(h) => &h.name,
        }
    }

    /// The two primary terminals. A coupling has none of its own.
    pub fn terminals(&self) -> Option<[NodeId; 2]> {
        match self {
            Device::Resistor(r) => Some(r.nodes),
            Device::Capacitor(c) => Some(c.nodes),
            Device::Inductor(l) => Some(l.nodes),
            Device::InductorCoupling(_) => None,
            Device::Source(s) => Some(s.nodes),
            Device::Vcvs(e) => Some(e.nodes),
            Device::Vccs(g) => Some(g.nodes),
            Device::Cccs(f) => Some(f.nodes),
            Device::Ccvs(h) => Some(h.nodes),
        }
    }

    /// Ports whose voltages the stamp operators take, output port first.
    pub fn ports(&self) -> Result<Vec<Port>> {
        let ports = match self {
            Device::Resistor(r) => vec![r.nodes.into()],
            Device::Capacitor(c) => vec![c.nodes.into()],
            Device::Inductor(l) => vec![l.nodes.into()],
            Device::InductorCoupling(_) => Vec::new(),
            Device::Source(s) => vec![s.nodes.into()],
            Device::Vcvs(e) => e.ports(),
            Device::Vccs(g) => g.ports(),
            Device::Cccs(f) => f.ports(),
            Device::Ccvs(h) => h.ports()?,
        };
        Ok(ports)
    }

    /// Current/conductance operator, if this variant has one.
    pub fn resistive(&self) -> Result<Option<&dyn Resistive>> {
        match self {
            Device::Resistor(r) => Ok(Some(r as &dyn Resistive)),
            Device::Capacitor(c) => Ok(Some(c as &dyn Resistive)),
            Device::Vccs(g) => Ok(Some(g as &dyn Resistive)),
            Device::Ccvs(h) => Err(h.unsupported("resistive")),
            _ => Ok(None),
        }
    }

    /// Charge-derivative operator, if this variant has one.
    pub fn reactive(&self) -> Result<Option<&dyn Reactive>> {
        match self {
            Device::Capacitor(c) => Ok(Some(c as &dyn Reactive)),
            Device::Ccvs(h) => Err(h.unsupported("reactive")),
            _ => Ok(None),
        }
    }

    /// Check if this device is nonlinear (requires Newton-Raphson re-evaluation).
    pub fn is_nonlinear(&self) -> bool {
        match self {
            Device::Resistor(_)
            | Device::Capacitor(_)
            | Device::Inductor(_)
            | Device::InductorCoupling(_)
            | Device::Source(_)
            | Device::Vcvs(_)
            | Device::Vccs(_)
            | Device::Cccs(_)
            | Device::Ccvs(_) => false,
        }
    }

    /// Whether a symbolic analysis treats this device's value as a free parameter.
    pub fn is_symbolic(&self) -> bool {
        match self {
            Device::Resistor(r) => r.is_symbolic,
            Device::Capacitor(c) => c.is_symbolic,
            Device::Inductor(l) => l.is_symbolic,
            Device::InductorCoupling(k) => k.is_symbolic,
            Device::Source(s) => s.is_symbolic,
            Device::Vcvs(e) => e.is_symbolic,
            Device::Vccs(g) => g.is_symbolic,
            Device::Cccs(f) => f.is_symbolic,
            Device::Ccvs(h) => h.is_symbolic,
        }
    }

    pub fn set_symbolic(&mut self, symbolic: bool) {
        let flag = match self {
            Device::Resistor(r) => &mut r.is_symbolic,
            Device::Capacitor(c) => &mut c.is_symbolic,
            Device::Inductor(l) => &mut l.is_symbolic,
            Device::InductorCoupling(k) => &mut k.is_symbolic,
            Device::Source(s) => &mut s.is_symbolic,
            Device::Vcvs(e) => &mut e.is_symbolic,
            Device::Vccs(g) => &mut g.is_symbolic,
            Device::Cccs(f) => &mut f.is_symbolic,
            Device::Ccvs(h) => &mut h.is_symbolic,
        };
        *flag = symbolic;
    }

    /// Recommended port voltages to start an operating-point iteration from.
    pub fn dc_guess(&self) -> Option<Vec<f64>> {
        match self {
            Device::Source(s) => s.dc_guess(),
            _ => None,
        }
    }

    /// Netlist line that reconstructs this device.
    pub fn netlist_line(&self, names: &dyn NodeNames) -> Result<String> {
        match self {
            Device::Resistor(r) => r.netlist_line(names),
            Device::Capacitor(c) => c.netlist_line(names),
            Device::Inductor(l) => l.netlist_line(names),
            Device::InductorCoupling(k) => k.netlist_line(names),
            Device::Source(s) => s.netlist_line(names),
            Device::Vcvs(e) => e.netlist_line(names),
            Device::Vccs(g) => g.netlist_line(names),
            Device::Cccs(f) => f.netlist_line(names),
            Device::Ccvs(h) => h.netlist_line(names),
        }
    }
}

macro_rules! impl_from_variant {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Device {
                fn from(d: $ty) -> Self {
                    Device::$variant(d)
                }
            }
        )*
    };
}

impl_from_variant! {
    Resistor => Resistor,
    Capacitor => Capacitor,
    Inductor => Inductor,
    InductorCoupling => InductorCoupling,
    IndependentSource => Source,
    Vcvs => Vcvs,
    Vccs => Vccs,
    Cccs => Cccs,
    Ccvs => Ccvs,
}
