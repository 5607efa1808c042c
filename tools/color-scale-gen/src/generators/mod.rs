//! Output generators

pub mod rust;
