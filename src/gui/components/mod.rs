// src/gui/components/mod.rs
pub mod action_bar;
pub mod data_table;
