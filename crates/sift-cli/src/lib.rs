//! Command-line front end for the table extraction pipeline.

pub mod cli;
pub mod logging;
pub mod pipeline;
pub mod summary;
