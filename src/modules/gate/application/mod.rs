pub mod access_gate;
pub mod ports;

pub use access_gate::{AccessGate, GateError};
