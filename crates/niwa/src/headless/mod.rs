//! Headless runs - paint commands, tick loop and text output

mod paint;
mod report;
mod runner;

pub use paint::PaintSpec;
pub use report::{census, write_census, write_dump};
pub use runner::{RunOptions, run};
