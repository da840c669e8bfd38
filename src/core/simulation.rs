//! Fester-Schritt-Treiber: verbindet Strecke, Körper, Detektor und Randbedingungen.

use super::boundary::{BoundaryPolicy, Bounds, SimulationSpeed};
use super::body::{AttachedStep, Body, BodyMode};
use super::clock::SimulationClock;
use super::crossing::{AttachmentDetector, ROOT_TOLERANCE};
use super::drag::{DragSession, DragTarget};
use super::energy::EnergyReadout;
use super::track::SIDE_TEST_DELTA;
use super::{CurveError, Track};
use glam::DVec2;

/// Standard-Schwerebeschleunigung in Welteinheiten/s² (+y = nach unten).
pub const DEFAULT_GRAVITY: f64 = 1250.0;
/// Basis-Zeitschritt eines Ticks in Sekunden.
pub const DEFAULT_BASE_STEP: f64 = 0.02;
/// Parameter-Fortschritt pro Tick im angehafteten Modus.
pub const DEFAULT_ATTACHMENT_INCREMENT: f64 = 0.007;
/// Boden-Linie (maximales y).
pub const DEFAULT_FLOOR_Y: f64 = 450.0;

/// Physikalische Konstanten, fest ab Konstruktion.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub gravity: f64,
    pub floor_y: f64,
    pub base_step: f64,
    /// Teilschritte pro Tick (mindestens 1)
    pub subdivisions: u32,
    pub attachment_increment: f64,
    pub root_tolerance: f64,
    pub side_test_delta: f64,
    pub control_point_bounds: Option<Bounds>,
    pub body_mass: f64,
    pub initial_body_position: DVec2,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            floor_y: DEFAULT_FLOOR_Y,
            base_step: DEFAULT_BASE_STEP,
            subdivisions: 1,
            attachment_increment: DEFAULT_ATTACHMENT_INCREMENT,
            root_tolerance: ROOT_TOLERANCE,
            side_test_delta: SIDE_TEST_DELTA,
            control_point_bounds: Some(Bounds::new(
                DVec2::ZERO,
                DVec2::new(1024.0, DEFAULT_FLOOR_Y),
            )),
            body_mass: 1.0,
            initial_body_position: DVec2::new(150.0, 0.0),
        }
    }
}

impl SimulationConfig {
    /// Schwerkraft als Vektor.
    pub fn gravity_vector(&self) -> DVec2 {
        DVec2::new(0.0, self.gravity)
    }
}

/// Moduswechsel, die während eines Ticks auftreten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimulationEvent {
    /// Freier Körper hat die Kurve durchquert und haftet bei `parameter`
    Attached { parameter: f64 },
    /// Parameter hat [0, 1] verlassen
    Detached { exit_parameter: f64 },
    /// Kurvenpunkt lag unter dem Boden, Körper wurde freigegeben
    ReleasedAtFloor { parameter: f64 },
}

/// Die komplette Skater-Simulation.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    track: Track,
    body: Body,
    clock: SimulationClock,
    policy: BoundaryPolicy,
    detector: AttachmentDetector,
}

impl Simulation {
    /// Erstellt die Simulation mit der Strecke durch `control_points`.
    pub fn new(config: SimulationConfig, control_points: Vec<DVec2>) -> Self {
        let policy = BoundaryPolicy::new(config.floor_y, config.control_point_bounds);
        let detector = AttachmentDetector::new(config.root_tolerance, config.side_test_delta);
        let body = Body::at_rest(policy.clamp_to_floor(config.initial_body_position).position);
        log::info!(
            "Simulation erstellt: {} Kontrollpunkte, dt={}, {} Teilschritt(e)",
            control_points.len(),
            config.base_step,
            config.subdivisions
        );
        Self {
            config,
            track: Track::new(control_points),
            body,
            clock: SimulationClock::default(),
            policy,
            detector,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn policy(&self) -> &BoundaryPolicy {
        &self.policy
    }

    /// `true` wenn pausiert.
    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    /// Aktuelle Geschwindigkeitsstufe.
    pub fn speed(&self) -> SimulationSpeed {
        self.clock.speed
    }

    /// Energien des Körpers relativ zum Boden.
    pub fn energy(&self) -> EnergyReadout {
        EnergyReadout::measure(
            &self.body,
            self.config.body_mass,
            self.config.gravity,
            self.config.floor_y,
        )
    }

    /// Rückt die Simulation um einen festen Schritt vor.
    ///
    /// `wall_dt` (gemessene Bildzeit) fließt nicht in die Physik ein; der
    /// Schritt ist immer `base_step * speed`. Pausiert ist der Aufruf
    /// wirkungslos.
    pub fn tick(&mut self, wall_dt: f64) -> Vec<SimulationEvent> {
        let mut events = Vec::new();
        if self.clock.is_paused() {
            return events;
        }

        let dt = self.clock.tick_dt(self.config.base_step);
        let subdivisions = self.config.subdivisions.max(1);
        let sub_dt = dt / f64::from(subdivisions);
        let sub_increment = self.config.attachment_increment / f64::from(subdivisions);

        let mut detached_this_tick = false;
        for _ in 0..subdivisions {
            if let Some(event) = self.sub_step(sub_dt, sub_increment, detached_this_tick) {
                detached_this_tick |= !matches!(event, SimulationEvent::Attached { .. });
                events.push(event);
            }
        }
        self.clock.advance(dt);

        log::trace!(
            "Tick {}: t={:.3}s, wall_dt={:.4}, pos=({:.2}, {:.2}), modus={:?}",
            self.clock.ticks,
            self.clock.time,
            wall_dt,
            self.body.position.x,
            self.body.position.y,
            self.body.mode
        );
        events
    }

    fn sub_step(
        &mut self,
        dt: f64,
        increment: f64,
        detached_this_tick: bool,
    ) -> Option<SimulationEvent> {
        if self.body.dragging {
            return None;
        }

        match self.body.mode {
            BodyMode::Attached { .. } => self.attached_sub_step(dt, increment),
            BodyMode::Free => self.free_sub_step(dt, detached_this_tick),
        }
    }

    fn attached_sub_step(&mut self, dt: f64, increment: f64) -> Option<SimulationEvent> {
        match self.body.step_attached(dt, increment, &self.track) {
            AttachedStep::Moved => self.release_below_floor(),
            AttachedStep::Detached { exit_parameter } => {
                self.apply_floor();
                log::info!("Skater verlässt die Strecke (s={:.4})", exit_parameter);
                Some(SimulationEvent::Detached { exit_parameter })
            }
            AttachedStep::NotAttached => {
                log::warn!("Strecke ohne gültige Kurve, Skater fällt frei");
                None
            }
        }
    }

    fn free_sub_step(&mut self, dt: f64, detached_this_tick: bool) -> Option<SimulationEvent> {
        let before = self.body.position;
        self.body.step_free(dt, self.config.gravity_vector());
        self.apply_floor();

        if detached_this_tick {
            return None;
        }
        let crossing = self
            .detector
            .detect(&self.track, before, self.body.position)?;
        let curve_point = self.track.evaluate(crossing.parameter).ok()?;
        self.body.attach(crossing.parameter, curve_point, dt, before);
        log::info!(
            "Skater haftet an der Strecke (s={:.4}, Seite {:+.3e} -> {:+.3e})",
            crossing.parameter,
            crossing.side_before,
            crossing.side_after
        );
        Some(SimulationEvent::Attached {
            parameter: crossing.parameter,
        })
    }

    /// Löst einen angehafteten Körper, dessen Kurvenpunkt unter dem Boden liegt.
    fn release_below_floor(&mut self) -> Option<SimulationEvent> {
        let parameter = self.body.mode.parameter()?;
        let contact = self.policy.clamp_to_floor(self.body.position);
        if contact.position == self.body.position {
            return None;
        }
        self.body.position = contact.position;
        self.body.velocity.y = 0.0;
        self.body.detach();
        log::info!("Skater am Boden von der Strecke gelöst (s={:.4})", parameter);
        Some(SimulationEvent::ReleasedAtFloor { parameter })
    }

    /// Bodenbegrenzung: Position auf den Boden, vertikale Geschwindigkeit null.
    fn apply_floor(&mut self) {
        let contact = self.policy.clamp_to_floor(self.body.position);
        if contact.clamped {
            self.body.position = contact.position;
            self.body.velocity.y = 0.0;
        }
    }

    /// Setzt den Pausenzustand (idempotent).
    pub fn set_paused(&mut self, paused: bool) {
        if self.clock.is_paused() != paused {
            log::info!("Simulation {}", if paused { "pausiert" } else { "fortgesetzt" });
        }
        self.clock.set_paused(paused);
    }

    /// Wählt die Geschwindigkeitsstufe.
    pub fn set_speed(&mut self, speed: SimulationSpeed) {
        if self.clock.speed != speed {
            log::info!("Geschwindigkeit: {:?}", speed);
        }
        self.clock.speed = speed;
    }

    /// Setzt Körper und Uhr zurück.
    ///
    /// Kontrollpunkte, Pause und Geschwindigkeit bleiben erhalten.
    pub fn reset(&mut self) {
        let start = self
            .policy
            .clamp_to_floor(self.config.initial_body_position)
            .position;
        self.body = Body::at_rest(start);
        self.clock.rewind();
        log::info!("Simulation zurückgesetzt");
    }

    /// Bindet den Körper ruhend bei `parameter` an die Strecke.
    ///
    /// Liegt der Kurvenpunkt unter dem Boden, bleibt der Körper frei auf dem Boden.
    pub fn attach_body_at(&mut self, parameter: f64) -> Result<(), CurveError> {
        let parameter = Track::check_parameter(parameter)?;
        if !self.track.supports_attachment() {
            return Err(CurveError::DegenerateCurve {
                point_count: self.track.point_count(),
            });
        }
        let point = self.track.evaluate(parameter)?;
        self.body.dragging = false;
        self.body.attach(parameter, point, 0.0, point);
        self.body.velocity = DVec2::ZERO;
        self.release_below_floor();
        Ok(())
    }

    /// Nächstes Drag-Ziel innerhalb von `radius` um `position`.
    ///
    /// Bei gleichem Abstand gewinnt der Kontrollpunkt.
    pub fn pick_target(&self, position: DVec2, radius: f64) -> Option<DragTarget> {
        let point = self
            .track
            .nearest_point(position)
            .filter(|(_, distance)| *distance <= radius);
        let body_distance = self.body.position.distance(position);

        match point {
            Some((_, distance)) if body_distance < distance => Some(DragTarget::Body),
            Some((index, _)) => Some(DragTarget::ControlPoint(index)),
            None if body_distance <= radius => Some(DragTarget::Body),
            None => None,
        }
    }

    /// Startet einen Drag; `None` bei ungültigem Kontrollpunkt-Index.
    pub fn begin_drag(&mut self, target: DragTarget, pointer: DVec2) -> Option<DragSession> {
        let target_position = match target {
            DragTarget::Body => {
                self.body.begin_drag();
                self.body.position
            }
            DragTarget::ControlPoint(index) => *self.track.points().get(index)?,
        };
        log::debug!("Drag gestartet: {:?}", target);
        Some(DragSession::new(target, target_position, pointer))
    }

    /// Bewegt das Drag-Ziel zur Zeigerposition (plus Greif-Versatz).
    pub fn drag_to(&mut self, session: &DragSession, pointer: DVec2) {
        let wanted = session.target_position(pointer);
        match session.target {
            DragTarget::Body => {
                let position = self.policy.clamp_to_floor(wanted).position;
                self.body.drag_to(position);
            }
            DragTarget::ControlPoint(index) => {
                let position = self.policy.clamp_control_point(wanted);
                if self.track.move_point(index, position) {
                    self.on_track_changed();
                }
            }
        }
    }

    /// Beendet den Drag; ein gezogener Körper startet aus der Ruhe.
    pub fn end_drag(&mut self, session: DragSession) {
        if session.target == DragTarget::Body {
            self.body.end_drag();
        }
        log::debug!("Drag beendet: {:?}", session.target);
    }

    /// Hängt einen Kontrollpunkt an (begrenzt auf den Editierbereich).
    pub fn add_control_point(&mut self, position: DVec2) -> usize {
        let index = self
            .track
            .push_point(self.policy.clamp_control_point(position));
        log::info!("Kontrollpunkt {} hinzugefügt", index);
        self.on_track_changed();
        index
    }

    /// Entfernt den Kontrollpunkt `index`.
    pub fn remove_control_point(&mut self, index: usize) -> Option<DVec2> {
        let removed = self.track.remove_point(index)?;
        log::info!("Kontrollpunkt {} entfernt", index);
        self.on_track_changed();
        Some(removed)
    }

    /// Hält einen angehafteten Körper nach einer Streckenänderung konsistent.
    fn on_track_changed(&mut self) {
        let BodyMode::Attached { parameter } = self.body.mode else {
            return;
        };
        let snapped = if self.track.supports_attachment() {
            self.track.evaluate(parameter).ok()
        } else {
            None
        };
        match snapped {
            Some(point) => {
                self.body.position = point;
                self.release_below_floor();
            }
            None => {
                self.body.detach();
                log::info!("Strecke zu kurz, Skater gelöst");
            }
        }
    }
}
