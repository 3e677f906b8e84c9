//! Device-check probe implementations.

pub mod simulated;

pub use simulated::SimulatedProbe;
