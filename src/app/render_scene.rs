//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let simulation = &state.simulation;
    let body = simulation.body();

    RenderScene {
        body_position: body.position,
        body_velocity: body.velocity,
        body_mode: body.mode,
        curve_samples: state.curve_cache.samples(),
        control_points: simulation.track().points().to_vec(),
        floor_y: simulation.config().floor_y,
        ground_height: state.options.ground_height,
        paused: simulation.is_paused(),
        speed: simulation.speed(),
        simulation_time: simulation.clock().time,
        energy: simulation.energy(),
        frames_per_second: state.frame_rate.frames_per_second(),
        drag_target: state.drag.map(|session| session.target),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::{BodyMode, DragTarget};
    use glam::DVec2;

    #[test]
    fn build_reflects_initial_state() {
        let state = AppState::new();

        let scene = build(&state);

        assert_eq!(scene.body_position, DVec2::new(150.0, 0.0));
        assert_eq!(scene.body_mode, BodyMode::Free);
        assert_eq!(scene.curve_samples.len(), 75);
        assert_eq!(scene.control_points.len(), 3);
        assert!(!scene.paused);
        assert_eq!(scene.frames_per_second, None);
        assert_eq!(scene.drag_target, None);
        assert!(scene.has_curve());
    }

    #[test]
    fn build_shares_cached_curve_samples() {
        let state = AppState::new();

        let first = build(&state);
        let second = build(&state);

        assert!(std::sync::Arc::ptr_eq(
            &first.curve_samples,
            &second.curve_samples
        ));
    }

    #[test]
    fn build_reports_drag_target() {
        let mut state = AppState::new();
        state.drag = state
            .simulation
            .begin_drag(DragTarget::ControlPoint(2), DVec2::new(300.0, 100.0));

        let scene = build(&state);

        assert_eq!(scene.drag_target, Some(DragTarget::ControlPoint(2)));
    }
}
