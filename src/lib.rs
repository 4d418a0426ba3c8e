pub mod cli;
pub mod config;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod records;
pub mod recover;
pub mod report;
pub mod restrictions;
pub mod util;
