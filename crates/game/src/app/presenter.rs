//! Board background, HUD and the modal prompts shown between levels.

use engine::{DrawTarget, RectPx, Rgba, Vec2};

use super::gameplay::{
    ActorKind, Presenter, Session, CANVAS_HEIGHT, CANVAS_WIDTH, GRID_COLUMNS, HOME_ROW_Y,
    LANE_ROWS,
};

/// Sprites carry transparent padding above the figure; bands line up with the
/// visible part.
const SPRITE_BAND_OFFSET: f32 = 55.0;
const LANE_BAND_HEIGHT: i32 = 83;
const HUD_HEIGHT: i32 = 28;
const PANEL_MARGIN: i32 = 40;
const PANEL_TOP: i32 = 230;
const PANEL_HEIGHT: i32 = 250;
const PANEL_PADDING: i32 = 16;
const DETAIL_LINE_SPACING: i32 = 16;
const SELECTION_ROW_Y: f32 = 250.0;

const GOAL_COLOR: Rgba = [24, 52, 104, 255];
const LANE_COLORS: [Rgba; 2] = [[58, 58, 66, 255], [70, 70, 80, 255]];
const HOME_COLOR: Rgba = [36, 92, 52, 255];
const HUD_COLOR: Rgba = [0, 0, 0, 150];
const SHADE_COLOR: Rgba = [0, 0, 0, 140];
const PANEL_COLOR: Rgba = [18, 20, 32, 230];
const HIGHLIGHT_COLOR: Rgba = [255, 214, 64, 110];
const BUTTON_COLOR: Rgba = [196, 56, 48, 255];
const TEXT_COLOR: Rgba = [240, 240, 240, 255];
const ACCENT_COLOR: Rgba = [255, 214, 64, 255];

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Prompt {
    pub(crate) title: String,
    pub(crate) detail: Option<String>,
    pub(crate) button: String,
    pub(crate) choose_player: bool,
}

impl Prompt {
    fn new(title: &str, detail: Option<&str>, button: String) -> Self {
        Self {
            title: title.to_string(),
            detail: detail.map(ToString::to_string),
            button,
            choose_player: false,
        }
    }
}

/// Keeps the prompt for the current session state. No prompt is shown while
/// a level is being played.
#[derive(Debug)]
pub(crate) struct ModalPresenter {
    prompt: Option<Prompt>,
    highlighted: ActorKind,
}

impl Default for ModalPresenter {
    fn default() -> Self {
        Self {
            prompt: None,
            highlighted: ActorKind::ALL[0],
        }
    }
}

impl ModalPresenter {
    #[cfg(test)]
    pub(crate) fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    /// Goal strip, lanes and home row, drawn under every entity.
    pub(crate) fn draw_board(&self, target: &mut dyn DrawTarget) {
        let width = CANVAS_WIDTH as i32;
        let first_band_top = (LANE_ROWS[0] + SPRITE_BAND_OFFSET) as i32;
        target.fill_rect(RectPx::new(0, 0, width, first_band_top), GOAL_COLOR);
        for (index, row) in LANE_ROWS.iter().enumerate() {
            let top = (row + SPRITE_BAND_OFFSET) as i32;
            target.fill_rect(
                RectPx::new(0, top, width, LANE_BAND_HEIGHT),
                LANE_COLORS[index % LANE_COLORS.len()],
            );
        }
        let home_top = (HOME_ROW_Y + SPRITE_BAND_OFFSET) as i32;
        target.fill_rect(
            RectPx::new(0, home_top, width, CANVAS_HEIGHT as i32 - home_top),
            HOME_COLOR,
        );
    }

    /// HUD strip and, between levels, the active prompt.
    pub(crate) fn draw_overlay(&self, session: &Session, target: &mut dyn DrawTarget) {
        self.draw_hud(session, target);
        if let Some(prompt) = &self.prompt {
            self.draw_prompt(prompt, target);
        }
    }

    fn draw_hud(&self, session: &Session, target: &mut dyn DrawTarget) {
        target.fill_rect(
            RectPx::new(0, 0, CANVAS_WIDTH as i32, HUD_HEIGHT),
            HUD_COLOR,
        );
        let (lives, score) = session
            .actor()
            .map_or((0, 0), |actor| (actor.lives(), actor.score()));
        let left = format!(
            "LEVEL {}/{}  LIVES {lives}",
            session.level(),
            session.total_levels()
        );
        target.draw_text(&left, 8, 9, TEXT_COLOR);
        let right = format!("SCORE {score}  BEST {}", session.best_score());
        let right_x = CANVAS_WIDTH as i32 - 8 - target.text_width(&right);
        target.draw_text(&right, right_x, 9, ACCENT_COLOR);
    }

    fn draw_prompt(&self, prompt: &Prompt, target: &mut dyn DrawTarget) {
        let width = CANVAS_WIDTH as i32;
        target.fill_rect(
            RectPx::new(0, HUD_HEIGHT, width, CANVAS_HEIGHT as i32 - HUD_HEIGHT),
            SHADE_COLOR,
        );
        let panel = RectPx::new(
            PANEL_MARGIN,
            PANEL_TOP,
            width - 2 * PANEL_MARGIN,
            PANEL_HEIGHT,
        );
        target.fill_rect(panel, PANEL_COLOR);

        draw_centered(target, &prompt.title, panel.y + 20, ACCENT_COLOR);
        if let Some(detail) = &prompt.detail {
            let max_width = panel.width - 2 * PANEL_PADDING;
            let lines = wrap_text(detail, max_width, |text| target.text_width(text));
            for (index, line) in lines.iter().enumerate() {
                let y = panel.y + 44 + index as i32 * DETAIL_LINE_SPACING;
                draw_centered(target, line, y, TEXT_COLOR);
            }
        }
        if prompt.choose_player {
            self.draw_player_choices(target);
        }

        let button_width = target.text_width(&prompt.button) + 32;
        let button = RectPx::new(
            (width - button_width) / 2,
            panel.y + panel.height - 48,
            button_width,
            30,
        );
        target.fill_rect(button, BUTTON_COLOR);
        draw_centered(target, &prompt.button, button.y + 10, TEXT_COLOR);
    }

    fn draw_player_choices(&self, target: &mut dyn DrawTarget) {
        for (kind, x) in ActorKind::ALL.into_iter().zip(GRID_COLUMNS) {
            if kind == self.highlighted {
                target.fill_rect(
                    RectPx::new(x as i32 + 6, SELECTION_ROW_Y as i32 + 56, 89, 88),
                    HIGHLIGHT_COLOR,
                );
            }
            target.draw_sprite(kind.sprite(), Vec2::new(x, SELECTION_ROW_Y));
            let label_x = x as i32 + 50 - target.text_width(kind.label()) / 2;
            target.draw_text(kind.label(), label_x, SELECTION_ROW_Y as i32 + 150, TEXT_COLOR);
        }
    }
}

/// Greedy word wrap. A single word wider than `max_width` gets its own line.
fn wrap_text(text: &str, max_width: i32, measure: impl Fn(&str) -> i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if measure(&candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn draw_centered(target: &mut dyn DrawTarget, text: &str, y: i32, color: Rgba) {
    let x = (CANVAS_WIDTH as i32 - target.text_width(text)) / 2;
    target.draw_text(text, x, y, color);
}

impl Presenter for ModalPresenter {
    fn new_game(&mut self) {
        self.prompt = Some(Prompt {
            choose_player: true,
            ..Prompt::new("Choose a Player", None, "Start Game".to_string())
        });
    }

    fn player_highlighted(&mut self, kind: ActorKind) {
        self.highlighted = kind;
    }

    fn level_started(&mut self, _level: usize) {
        self.prompt = None;
    }

    fn level_cleared(&mut self, next_level: usize) {
        self.prompt = Some(Prompt::new(
            "You made it!",
            Some("Prepare yourself...the next mission will be harder than the last"),
            format!("Start Level {next_level}"),
        ));
    }

    fn game_won(&mut self, perfect: bool) {
        let detail = if perfect {
            "Perfect score!"
        } else {
            "Plan again and beat your best score"
        };
        self.prompt = Some(Prompt::new(
            "Mission complete!",
            Some(detail),
            "Play Again".to_string(),
        ));
    }

    fn game_lost(&mut self) {
        self.prompt = Some(Prompt::new(
            "Game over!",
            Some("You failed to complete your mission"),
            "Try Again".to_string(),
        ));
    }
}
