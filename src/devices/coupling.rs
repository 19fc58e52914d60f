//! Mutual inductance between two inductors.
//!
//! The coupling names its inductors by identifier only. Inductors are looked
//! up through the circuit registry when needed, which keeps the coupling and
//! the inductors free of ownership cycles.

use tracing::error;

use crate::error::{DeviceError, Result};

use super::linear::Inductor;

/// K element: `K1 L1 L2 k`.
#[derive(Debug, Clone, PartialEq)]
pub struct InductorCoupling {
    pub name: String,
    /// Identifier of the first inductor
    pub l1: String,
    /// Identifier of the second inductor
    pub l2: String,
    /// Coupling coefficient
    pub k: f64,
    /// Mutual inductance, `sqrt(L1 * L2) * k`, computed by whoever resolved the inductors
    pub m: f64,
    pub is_symbolic: bool,
}

impl InductorCoupling {
    /// Create a coupling with an already computed mutual inductance.
    pub fn new(
        name: impl Into<String>,
        l1: impl Into<String>,
        l2: impl Into<String>,
        k: f64,
        m: f64,
    ) -> Self {
        Self {
            name: name.into(),
            l1: l1.into(),
            l2: l2.into(),
            k,
            m,
            is_symbolic: true,
        }
    }

    /// Create a coupling between two resolved inductors, computing `M`.
    ///
    /// The inductors are only read; registering the coupling on them with
    /// [`Inductor::add_coupling`] is left to the registry that owns them.
    pub fn from_inductors(name: impl Into<String>, l1: &Inductor, l2: &Inductor, k: f64) -> Self {
        let m = (l1.value * l2.value).sqrt() * k;
        Self::new(name, l1.name.clone(), l2.name.clone(), k, m)
    }

    /// Given one of the coupled inductors, return the identifier of the other.
    ///
    /// Matching is case-insensitive. An identifier that matches neither
    /// inductor means the topology was built inconsistently; the returned
    /// error is fatal and must not be recovered from.
    pub fn other_inductor(&self, selected: &str) -> Result<&str> {
        if selected.eq_ignore_ascii_case(&self.l1) {
            Ok(self.l2.as_str())
        } else if selected.eq_ignore_ascii_case(&self.l2) {
            Ok(self.l1.as_str())
        } else {
            error!(
                coupling = %self.name,
                selected,
                l1 = %self.l1,
                l2 = %self.l2,
                "coupling queried with an inductor it does not reference"
            );
            Err(DeviceError::internal(format!(
                "mutual inductors bug: '{}' is not coupled by '{}' ({} / {})",
                selected, self.name, self.l1, self.l2
            )))
        }
    }
}
