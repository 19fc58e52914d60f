//! Stamp operators a device may expose to the solver.
//!
//! `voltages[k]` is always `V(pos) - V(neg)` of the device's k-th port, in
//! the order returned by [`Device::ports`](super::Device::ports).

/// Resistive contribution: a current and its derivatives w.r.t. port voltages.
pub trait Resistive {
    /// Current flowing into the first terminal of the output port.
    fn current(&self, voltages: &[f64], time: f64) -> f64;

    /// `d current / d voltages[port]` at the given operating point.
    fn conductance(&self, voltages: &[f64], port: usize, time: f64) -> f64;
}

/// Charge-storage contribution, consumed by the transient integrator.
pub trait Reactive {
    /// `dQ/dV` at the given operating point.
    fn charge_derivative(&self, voltages: &[f64], time: f64) -> f64;
}
