//! Utils Module - Shared Constants & Encoding Helpers
//!
//! Tabel kata, default konfigurasi, dan encoder XML.

pub mod constants;
pub mod xml;

pub use constants::*;
pub use xml::to_xml;
