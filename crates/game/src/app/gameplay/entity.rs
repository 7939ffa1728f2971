use engine::{DrawTarget, Vec2};

/// Anything placed on the board and drawn each tick.
///
/// Updates differ per kind (hazards need elapsed time, collectibles need the
/// actor) so they live on the concrete types; drawing is shared.
pub(crate) trait Entity {
    fn position(&self) -> Vec2;
    fn sprite(&self) -> &'static str;

    fn render(&self, target: &mut dyn DrawTarget) {
        target.draw_sprite(self.sprite(), self.position());
    }
}
