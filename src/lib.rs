//! # MNA Devices
//!
//! Device models and source waveforms for a modified-nodal-analysis
//! circuit solver.
//!
//! This library provides:
//! - A closed set of device variants with the stamp operators the solver
//!   needs (current, conductance, charge derivative)
//! - Linear elements (R, C, L), mutual inductance, independent sources and
//!   linear controlled sources
//! - Pulse, sine and exponential waveforms for time-dependent sources
//! - Netlist line output that parses back into the same device
//!
//! ## Architecture
//!
//! - [`circuit`] - Terminal handles and the node-name lookup
//! - [`devices`] - Device models and the [`Device`] capability contract
//! - [`waveforms`] - Time functions and their argument schema
//! - [`netlist`] - Netlist line formatting
//! - [`units`] - SI-suffixed number parsing
//!
//! ## Evaluation model
//!
//! The solver owns the matrix, the Newton-Raphson loop and the time
//! stepping. It asks each device for its ports, builds the vector of port
//! voltages, and evaluates:
//!
//! 1. [`Resistive::current`] and [`Resistive::conductance`] for resistive stamps
//! 2. [`Reactive::charge_derivative`] for charge-storage companion models
//! 3. [`IndependentSource::value`] for source forcing terms
//!
//! All evaluations are pure functions of their inputs and may run
//! concurrently on shared devices.
//!
//! ```
//! use mna_devices::circuit::NodeId;
//! use mna_devices::devices::{Device, IndependentSource};
//! use mna_devices::waveforms::Pulse;
//!
//! let pulse = Pulse::new(0.0, 5.0, 0.0, 1.0, 1.0, 2.0, 10.0).unwrap();
//! let v1 = IndependentSource::voltage("V1", [NodeId(1), NodeId::GROUND], Some(0.0), None)
//!     .with_waveform(pulse);
//! assert_eq!(v1.value(Some(0.5)).unwrap(), 2.5);
//! assert_eq!(v1.value(None).unwrap(), 0.0);
//!
//! let names = vec!["0".to_string(), "in".to_string()];
//! let line = Device::from(v1).netlist_line(&names).unwrap();
//! assert!(line.starts_with("V1 in 0 type=vdc value=0 type=pulse"));
//! ```

pub mod circuit;
pub mod devices;
pub mod error;
pub mod netlist;
pub mod units;
pub mod waveforms;

// Re-export main types for convenience
pub use circuit::{NodeId, NodeNames, Port};
pub use devices::{Device, IndependentSource, Reactive, Resistive};
pub use error::{DeviceError, Result};
pub use netlist::ToNetlist;
pub use waveforms::{Waveform, WaveformKind};
