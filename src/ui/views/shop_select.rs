use crate::app::Event;
use crate::ui::BrainCartApp;
use crate::ui::helpers::tinted_button;
use crate::ui::layout::{centered_panel, title};
use egui::{Button, Context, RichText};

pub fn ui_shop_select(app: &mut BrainCartApp, ctx: &Context) {
    let cards = app.session.shop_cards();
    let level = app.session.progress().current_level.unwrap_or(1);
    let mut event = None;

    let est_height = 160.0 + 96.0 * cards.len() as f32;
    centered_panel(ctx, est_height, 480.0, |ui| {
        title(ui, "SELECT SHOP 🏪");
        ui.label(RichText::new(format!("Level {level}")).size(18.0).strong());
        ui.add_space(16.0);

        let width = ui.available_width();
        for card in &cards {
            if tinted_button(ui, &card.label(), width, 80.0, card.accent) {
                event = Some(Event::SelectShop(card.id));
            }
            ui.add_space(8.0);
        }

        ui.add_space(12.0);
        if ui
            .add_sized([width, 40.0], Button::new("← Back to Levels"))
            .clicked()
        {
            event = Some(Event::Back);
        }
    });

    if let Some(event) = event {
        app.dispatch(event);
    }
}
