// spellmask-core/src/engines/mod.rs
//! This module contains masking engine implementations.
//!
//! Each engine is a separate file within this directory and implements the
//! `MaskingEngine` trait. This modular design allows for easy addition of
//! new engine types.
//!
//! To add a new engine, create a new file, define its logic, and declare it
//! here using `pub mod <engine_name>;`.

pub mod pipeline_engine;
