use crate::app::Event;
use crate::ui::BrainCartApp;
use crate::ui::helpers::tinted_button;
use crate::ui::layout::{centered_panel, title};
use egui::{Context, RichText};

pub fn ui_story(app: &mut BrainCartApp, ctx: &Context) {
    let mut start = false;

    centered_panel(ctx, 420.0, 480.0, |ui| {
        title(ui, "BRAINCART");
        ui.label(RichText::new("Let's Play! 🎮").size(24.0).strong());
        ui.add_space(16.0);

        ui.group(|ui| {
            ui.label(
                RichText::new("👩  Hi Ali! We need to buy groceries for the house today! 🏠")
                    .size(17.0),
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new(
                    "👦  I have the list! Help me solve riddles and find prices. Ready to be my Math Hero? 🦸",
                )
                .size(17.0),
            );
        });

        ui.add_space(20.0);
        let width = ui.available_width();
        start = tinted_button(ui, "LET'S GO! 🚀", width, 56.0, [16, 185, 129]);
    });

    if start {
        app.dispatch(Event::StartAdventure);
    }
}
