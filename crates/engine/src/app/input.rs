use winit::keyboard::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Confirm,
    Quit,
}

impl InputAction {
    pub(crate) fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::KeyW | KeyCode::ArrowUp => Some(Self::MoveUp),
            KeyCode::KeyS | KeyCode::ArrowDown => Some(Self::MoveDown),
            KeyCode::KeyA | KeyCode::ArrowLeft => Some(Self::MoveLeft),
            KeyCode::KeyD | KeyCode::ArrowRight => Some(Self::MoveRight),
            KeyCode::Enter | KeyCode::NumpadEnter | KeyCode::Space => Some(Self::Confirm),
            KeyCode::Escape => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Holds at most one command between ticks; a newer press replaces an older one.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LatestCommand {
    pending: Option<InputAction>,
}

impl LatestCommand {
    pub(crate) fn record(&mut self, action: InputAction) {
        self.pending = Some(action);
    }

    pub(crate) fn take(&mut self) -> Option<InputAction> {
        self.pending.take()
    }
}
