// src/lib.rs

#[macro_use]
pub mod macros;
pub mod log;

pub mod config;
pub mod error;

pub mod analysis;
pub mod data;
pub mod validate;

pub mod file;
pub mod render;
pub mod store;

pub mod cli;
pub mod gui;
pub mod progress;
pub mod runner;
