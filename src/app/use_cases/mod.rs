//! Use-Cases der Application-Layer-Orchestrierung.

pub mod drag;
pub mod simulation;
pub mod track;
