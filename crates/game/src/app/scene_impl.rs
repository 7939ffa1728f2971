use engine::{DrawTarget, InputAction, InputSnapshot, Scene, SceneCommand};
use tracing::{error, info};

use super::audio::TracingAudio;
use super::gameplay::{
    self, dispatch, AudioPlayer, Direction, Session, SessionState, SimulationLoop, THEME_SOUND,
};
use super::presenter::ModalPresenter;

/// Binds one [`Session`] to the engine loop: input becomes session commands,
/// session events become sound and prompts.
pub(crate) struct RebelRunScene {
    session: Session,
    simulation: SimulationLoop,
    audio: TracingAudio,
    presenter: ModalPresenter,
}

impl RebelRunScene {
    pub(crate) fn new(session: Session, simulation: SimulationLoop) -> Self {
        Self {
            session,
            simulation,
            audio: TracingAudio::default(),
            presenter: ModalPresenter::default(),
        }
    }

    fn flush_events(&mut self) {
        for event in self.session.drain_events() {
            dispatch(event, &mut self.audio, &mut self.presenter);
        }
    }

    /// Applies one input command. Returns `false` when the session cannot go on.
    fn apply_command(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::Confirm => {
                if let Err(err) = self.session.confirm() {
                    error!(error = %err, level = self.session.level(), "level_start_failed");
                    return false;
                }
            }
            InputAction::Quit => return false,
            other => {
                if let Some(direction) = direction_for(other) {
                    self.session.handle_direction(direction);
                }
            }
        }
        true
    }
}

fn direction_for(action: InputAction) -> Option<Direction> {
    match action {
        InputAction::MoveUp => Some(Direction::Up),
        InputAction::MoveDown => Some(Direction::Down),
        InputAction::MoveLeft => Some(Direction::Left),
        InputAction::MoveRight => Some(Direction::Right),
        InputAction::Confirm | InputAction::Quit => None,
    }
}

impl Scene for RebelRunScene {
    fn sprite_manifest(&self) -> Vec<&'static str> {
        gameplay::sprite_manifest()
    }

    fn load(&mut self) {
        self.flush_events();
        info!(
            levels = self.session.total_levels(),
            player = ?self.session.highlighted(),
            "scene_load"
        );
    }

    fn update(&mut self, dt_seconds: f32, input: &InputSnapshot) -> SceneCommand {
        if input.quit_requested() {
            return SceneCommand::Quit;
        }
        if let Some(action) = input.command() {
            if !self.apply_command(action) {
                self.flush_events();
                return SceneCommand::Quit;
            }
        }

        self.simulation.update(&mut self.session, dt_seconds);
        self.flush_events();
        SceneCommand::None
    }

    fn render(&mut self, target: &mut dyn DrawTarget) {
        self.presenter.draw_board(target);
        self.simulation.render(&self.session, target);
        self.presenter.draw_overlay(&self.session, target);
    }

    fn unload(&mut self) {
        self.audio.pause(THEME_SOUND);
        info!(
            state = ?self.session.state(),
            best_score = self.session.best_score(),
            "scene_unload"
        );
    }

    fn entity_count(&self) -> usize {
        self.session.entity_count()
    }

    fn debug_title(&self) -> Option<String> {
        let state = self.session.state();
        if state == SessionState::Playing {
            let max_score = self.session.max_score();
            Some(format!(
                "Rebel Run | Level {}/{} | max {max_score}",
                self.session.level(),
                self.session.total_levels()
            ))
        } else {
            None
        }
    }
}
