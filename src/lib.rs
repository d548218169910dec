//! algebraic-type - runtime algebraic (tagged-union) data types
//!
//! Build a union from declarative variant schemas, then construct, test and
//! validate tagged values against it.

pub mod cli;
pub mod observability;
pub mod schema;
pub mod union;
