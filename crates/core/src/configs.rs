//! Configuration parsing for target files

pub mod tasks;
