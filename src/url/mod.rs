//! URL and host decomposition.
//!
//! This module contains the parsing pipeline:
//! - Separating the port from the host (`host`)
//! - Splitting a bare host around its effective TLD (`decompose`)
//! - Parsing full URLs and bare hosts into a `ParsedUrl` (`parser`)

pub mod decompose;
pub mod host;
pub mod parser;

pub use decompose::{decompose, Decomposition};
pub use host::split_host;
pub use parser::TldParser;
