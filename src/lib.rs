//! Energy Skate Track Library.
//! Skater-Physik auf einer editierbaren Spline-Strecke, als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, FrameRateMeter};
pub use core::{
    AttachmentDetector, Body, BodyMode, BoundaryPolicy, Bounds, CurveError, DragSession,
    DragTarget, EnergyReadout, Simulation, SimulationConfig, SimulationEvent, SimulationSpeed,
    Track, TrackSpline,
};
pub use shared::{RenderScene, SimulationOptions};
