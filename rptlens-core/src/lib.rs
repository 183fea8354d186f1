pub mod analysis;
pub mod cli;
pub mod error;
pub mod issues;
pub mod lines;
pub mod logging;
pub mod mission;
pub mod performance;
pub mod selection;
pub mod settings;
