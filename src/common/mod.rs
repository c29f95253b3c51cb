//! Format-independent helpers.
pub mod xml;
