// src/config/mod.rs

pub mod page;
