//! Output renderers for the hub depth calculator.

pub mod sweep;
pub mod svg;

pub use svg::{SvgOptions, render_svg};
pub use sweep::{SweepRow, sweep_csv, sweep_rows};
