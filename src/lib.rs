pub mod config;
pub mod consts;
pub mod demos;
pub mod error;
pub mod gui;
pub mod math;
pub mod model;
pub mod runner;
