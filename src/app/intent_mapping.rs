//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::FrameRequested { wall_dt } => vec![AppCommand::AdvanceFrame { wall_dt }],
        AppIntent::PointerPressed { world_pos } => {
            let Some(target) = state
                .simulation
                .pick_target(world_pos, state.options.pick_radius)
            else {
                return Vec::new();
            };

            let mut commands = Vec::with_capacity(2);
            if state.drag.is_some() {
                commands.push(AppCommand::EndDrag);
            }
            commands.push(AppCommand::BeginDrag { target, world_pos });
            commands
        }
        AppIntent::DragStarted { target, world_pos } => {
            let mut commands = Vec::with_capacity(2);
            if state.drag.is_some() {
                commands.push(AppCommand::EndDrag);
            }
            commands.push(AppCommand::BeginDrag { target, world_pos });
            commands
        }
        AppIntent::DragMoved { world_pos } => {
            if state.drag.is_some() {
                vec![AppCommand::UpdateDrag { world_pos }]
            } else {
                Vec::new()
            }
        }
        AppIntent::DragEnded => {
            if state.drag.is_some() {
                vec![AppCommand::EndDrag]
            } else {
                Vec::new()
            }
        }
        AppIntent::PlayPauseToggled => vec![AppCommand::SetPaused {
            paused: !state.simulation.is_paused(),
        }],
        AppIntent::PauseChanged { paused } => vec![AppCommand::SetPaused { paused }],
        AppIntent::SpeedSelected { speed } => vec![AppCommand::SetSpeed { speed }],
        AppIntent::ResetRequested => vec![AppCommand::ResetSimulation],
        AppIntent::ControlPointAddRequested { world_pos } => {
            vec![AppCommand::AddControlPoint { world_pos }]
        }
        AppIntent::ControlPointRemoveRequested { index } => {
            vec![AppCommand::RemoveControlPoint { index }]
        }
    }
}
