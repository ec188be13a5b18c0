#[macro_use]
extern crate stump;

#[macro_use]
extern crate lazy_static;

pub mod grid;
pub mod logmetrics;
pub mod paths;
pub mod preview;
pub mod profile;
pub mod report;
pub mod stats;
