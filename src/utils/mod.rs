//! Utility modules for bizrules

pub mod timing;
