//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod frame_rate;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Simulation, Drag, Caches).
pub mod state;
pub mod use_cases;

pub use crate::core::{DragTarget, SimulationSpeed};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use frame_rate::FrameRateMeter;
pub use render_scene::build as build_render_scene;
pub use state::{AppState, CurveSampleCache};
