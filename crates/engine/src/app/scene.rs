use super::input::InputAction;
use super::rendering::DrawTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    None,
    Quit,
}

/// Input gathered since the previous tick, reduced to discrete commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    quit_requested: bool,
    command: Option<InputAction>,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(quit_requested: bool, command: Option<InputAction>) -> Self {
        Self {
            quit_requested,
            command,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn command(&self) -> Option<InputAction> {
        self.command
    }

    pub fn with_command(mut self, command: InputAction) -> Self {
        self.command = Some(command);
        self
    }

    pub fn with_quit_requested(mut self, quit_requested: bool) -> Self {
        self.quit_requested = quit_requested;
        self
    }
}

/// Screen position in canvas pixels, origin top-left, y growing downward.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

pub trait Scene {
    /// Sprite ids the resource provider must load before the first tick.
    fn sprite_manifest(&self) -> Vec<&'static str>;
    fn load(&mut self);
    fn update(&mut self, dt_seconds: f32, input: &InputSnapshot) -> SceneCommand;
    fn render(&mut self, target: &mut dyn DrawTarget);
    fn unload(&mut self);
    fn entity_count(&self) -> usize {
        0
    }
    fn debug_title(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot_has_no_command() {
        let snapshot = InputSnapshot::empty();
        assert!(!snapshot.quit_requested());
        assert_eq!(snapshot.command(), None);
    }

    #[test]
    fn builder_sets_command_and_quit() {
        let snapshot = InputSnapshot::empty()
            .with_command(InputAction::Confirm)
            .with_quit_requested(true);
        assert_eq!(snapshot.command(), Some(InputAction::Confirm));
        assert!(snapshot.quit_requested());
    }
}
