//! Offset-based traversal of find-style endpoints

pub mod ports;
pub mod service;
