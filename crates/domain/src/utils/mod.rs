//! Pure helpers with no I/O

pub mod selector_parser;
