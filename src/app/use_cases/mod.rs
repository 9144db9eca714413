//! Use-Cases der Application-Layer-Orchestrierung.

pub mod algorithms;
pub mod editing;
pub mod layout;
pub mod mode;
pub mod viewport;
pub mod weight_entry;
