//! File I/O operations for state persistence.
//!
//! This module handles:
//! - Saving state files with atomic writes
//! - Loading state files with version validation

mod load;
mod save;

pub use load::load_state_file;
pub use save::save_state_file;
