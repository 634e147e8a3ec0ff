use crate::ui::BrainCartApp;
use crate::ui::layout::{centered_panel, title};
use egui::{Context, RichText};

/// Pantalla de carga. El paso a la historia lo hace el temporizador de la app.
pub fn ui_splash(_app: &mut BrainCartApp, ctx: &Context) {
    centered_panel(ctx, 260.0, 480.0, |ui| {
        ui.label(RichText::new("🛒").size(96.0));
        ui.add_space(12.0);
        title(ui, "BRAINCART");
        ui.add_space(8.0);
        ui.label(RichText::new("Loading Fun...").size(22.0).strong());
        ui.add_space(12.0);
        ui.spinner();
    });
}
