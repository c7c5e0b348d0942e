#![allow(dead_code, non_snake_case, non_upper_case_globals)]

pub mod utils;
pub mod spin;
pub mod hilbert;
pub mod dynamics;
pub mod config;
pub mod systems;
