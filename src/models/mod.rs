//! Models Module - Data Structures & Configuration
//!
//! Single source of truth untuk tipe data, error, dan konfigurasi.

pub mod config;
pub mod errors;
pub mod types;

pub use config::*;
pub use errors::*;
pub use types::*;
