pub mod compile;
pub mod config_loader;
pub mod resources;

#[cfg(test)]
mod config_loader_tests;
