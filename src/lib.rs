//! Decimal Equivalent Calculator Library
//!
//! Fractional inch, decimal inch and millimeter conversions, the common
//! fractions reference table, and the tools that drive them.

pub mod build_info;
pub mod convert;
pub mod settings;
pub mod tools;
