pub mod collision;
pub mod config;
pub mod generator;
