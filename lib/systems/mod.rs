//! Collection of pre-defined systems.

pub mod snv117;
