//! Core-Domänentypen: Strecke, Spline, Skater-Körper, Detektor und Simulationstreiber.

pub mod body;
pub mod boundary;
pub mod clock;
pub mod crossing;
pub mod drag;
pub mod energy;
pub mod error;
pub mod simulation;
/// Natürliche kubische Splines
///
/// - CubicSpline: eindimensionale Spline über gleichverteilten Knoten
/// - TrackSpline: 2D-Kurve aus zwei Splines (x(s), y(s))
pub mod spline;
pub mod track;

pub use body::{AttachedStep, Body, BodyMode};
pub use boundary::{BoundaryPolicy, Bounds, FloorContact, SimulationSpeed};
pub use clock::{DriverState, SimulationClock};
pub use crossing::{AttachmentDetector, Crossing};
pub use drag::{DragSession, DragTarget};
pub use energy::EnergyReadout;
pub use error::CurveError;
pub use simulation::{Simulation, SimulationConfig, SimulationEvent};
pub use spline::{CrossingSide, CubicSpline, TrackSpline};
pub use track::Track;
