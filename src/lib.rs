pub mod app;
pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod grid;
pub mod loader;
pub mod logging;
pub mod model;
pub mod output;
pub mod render;

#[cfg(test)]
mod tests;
