//! Terminal handles and node-name lookup.
//!
//! The topology resolver owns the nodes. This layer only holds [`NodeId`]
//! handles and asks a [`NodeNames`] implementation for display names when a
//! netlist line is written.

mod types;

pub use types::*;
