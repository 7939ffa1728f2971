use tracing::trace;

use super::actor::ActorKind;
use super::collectible::CollectibleKind;

pub(crate) const THEME_SOUND: &str = "rebelTheme";
pub(crate) const WIN_LEVEL_SOUND: &str = "winLevel";
pub(crate) const WIN_GAME_SOUND: &str = "winGame";
pub(crate) const LOSE_SOUND: &str = "lose";
pub(crate) const LAST_LIFE_SOUND: &str = "lastLife";

/// What happened to the session during a tick or command, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionEvent {
    NewGame,
    PlayerHighlighted { kind: ActorKind },
    LevelStarted { level: usize },
    LevelCleared { next_level: usize },
    GameWon { perfect: bool },
    GameLost,
    Collected { kind: CollectibleKind, points: u32 },
    LowLife { lives: u32 },
}

/// Fire-and-forget sound playback. Implementations swallow their own failures.
pub(crate) trait AudioPlayer {
    fn play(&mut self, sound_id: &str);
    fn pause(&mut self, sound_id: &str);
    fn stop(&mut self, sound_id: &str);
}

/// Shows the prompt that belongs to each session state.
pub(crate) trait Presenter {
    fn new_game(&mut self);
    fn player_highlighted(&mut self, kind: ActorKind);
    fn level_started(&mut self, level: usize);
    fn level_cleared(&mut self, next_level: usize);
    fn game_won(&mut self, perfect: bool);
    fn game_lost(&mut self);
}

pub(crate) fn dispatch(
    event: SessionEvent,
    audio: &mut dyn AudioPlayer,
    presenter: &mut dyn Presenter,
) {
    match event {
        SessionEvent::NewGame => presenter.new_game(),
        SessionEvent::PlayerHighlighted { kind } => {
            audio.play(kind.sound_id());
            presenter.player_highlighted(kind);
        }
        SessionEvent::LevelStarted { level } => {
            audio.play(THEME_SOUND);
            presenter.level_started(level);
        }
        SessionEvent::LevelCleared { next_level } => {
            audio.play(WIN_LEVEL_SOUND);
            presenter.level_cleared(next_level);
        }
        SessionEvent::GameWon { perfect } => {
            audio.stop(THEME_SOUND);
            audio.play(WIN_GAME_SOUND);
            presenter.game_won(perfect);
        }
        SessionEvent::GameLost => {
            audio.stop(THEME_SOUND);
            audio.play(LOSE_SOUND);
            presenter.game_lost();
        }
        SessionEvent::Collected { kind, points } => {
            trace!(?kind, points, "collected_cue");
            audio.play(kind.cue_id());
        }
        SessionEvent::LowLife { lives } => {
            trace!(lives, "low_life_cue");
            audio.play(LAST_LIFE_SOUND);
        }
    }
}
