use crate::app::Event;
use crate::ui::BrainCartApp;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::{centered_panel, title};
use egui::{Color32, Context, Grid, RichText};

const COLUMNS: usize = 5;

pub fn ui_level_select(app: &mut BrainCartApp, ctx: &Context) {
    let tiles = app.session.level_tiles();
    let hud = app.session.hud();
    let mut chosen = None;

    centered_panel(ctx, 420.0, 520.0, |ui| {
        title(ui, "SELECT A LEVEL");
        ui.add_space(16.0);

        let tile = 80.0;
        Grid::new("level_grid")
            .num_columns(COLUMNS)
            .spacing([12.0, 12.0])
            .show(ui, |ui| {
                for (i, info) in tiles.iter().enumerate() {
                    // Los niveles bloqueados salen deshabilitados
                    if big_list_button(ui, info.label(), tile, tile, info.unlocked) {
                        chosen = Some(info.number);
                    }
                    if (i + 1) % COLUMNS == 0 {
                        ui.end_row();
                    }
                }
            });

        ui.add_space(20.0);
        ui.label(RichText::new("Your Progress 🎯").size(20.0).strong());
        ui.label(RichText::new(hud.progress_label()).size(30.0).strong());
        if hud.is_market_master() {
            ui.label(
                RichText::new("🏆 MARKET MASTER! 🏆")
                    .size(20.0)
                    .color(Color32::GOLD),
            );
        }
    });

    if let Some(level) = chosen {
        app.dispatch(Event::SelectLevel(level));
    }
}
