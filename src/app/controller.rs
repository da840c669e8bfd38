//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert Host-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Simulation ===
            AppCommand::AdvanceFrame { wall_dt } => {
                handlers::simulation::advance_frame(state, wall_dt)
            }
            AppCommand::SetPaused { paused } => handlers::simulation::set_paused(state, paused),
            AppCommand::SetSpeed { speed } => handlers::simulation::set_speed(state, speed),
            AppCommand::ResetSimulation => handlers::simulation::reset(state),

            // === Drag ===
            AppCommand::BeginDrag { target, world_pos } => {
                handlers::drag::begin(state, target, world_pos)
            }
            AppCommand::UpdateDrag { world_pos } => handlers::drag::update(state, world_pos),
            AppCommand::EndDrag => handlers::drag::end(state),

            // === Strecke ===
            AppCommand::AddControlPoint { world_pos } => {
                handlers::track::add_control_point(state, world_pos)
            }
            AppCommand::RemoveControlPoint { index } => {
                handlers::track::remove_control_point(state, index)
            }
        }

        state.refresh_curve_cache();
        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
