use crate::app::Event;
use crate::ui::BrainCartApp;
use crate::ui::helpers::tinted_button;
use crate::ui::layout::{centered_panel, title};
use egui::{Context, RichText};

pub fn ui_level_complete(app: &mut BrainCartApp, ctx: &Context) {
    let hud = app.session.hud();
    let mut next = false;

    centered_panel(ctx, 360.0, 440.0, |ui| {
        ui.label(RichText::new("🏆").size(72.0));
        title(ui, "Level Complete! 🎉");
        ui.add_space(8.0);
        ui.label(RichText::new("Great job! You earned stars and coins.").size(18.0));
        ui.add_space(12.0);
        ui.label(
            RichText::new(format!("⭐ {}    🪙 {}", hud.stars, hud.coins))
                .size(24.0)
                .strong(),
        );
        ui.add_space(20.0);
        let width = ui.available_width();
        next = tinted_button(ui, "Continue 🚀", width, 56.0, [168, 85, 247]);
    });

    if next {
        app.dispatch(Event::Continue);
    }
}
