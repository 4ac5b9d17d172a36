//! CLI library components for the FeatWS rule review admin tool.

pub mod logging;
