//! Request observation hook

pub mod ports;
