//! Shared helpers: modular arithmetic and letter/index conversion.

pub mod alphabet;
pub(crate) mod modular;
