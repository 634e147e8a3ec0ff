use crate::app::Event;
use crate::ui::BrainCartApp;
use egui::{Align, Align2, CentralPanel, Color32, Context, Frame, RichText, Ui, Visuals};

pub fn top_panel(app: &mut BrainCartApp, ctx: &Context) {
    let hud = app.session.hud();
    let mut toggle = false;

    egui::TopBottomPanel::top("hud_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(RichText::new(format!("🏆 Score: {}", hud.score)).strong());
            ui.separator();
            ui.label(RichText::new(format!("⭐ {} Stars", hud.stars)).strong());
            ui.separator();
            ui.label(RichText::new(format!("🪙 {}", hud.coins)).strong());
            ui.separator();
            ui.label(RichText::new(format!("🛒 {}", hud.cart_len)).strong());

            ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                if ui
                    .button(hud.sound_label())
                    .on_hover_text("Sound on/off")
                    .clicked()
                {
                    toggle = true;
                }
            });
        });
    });

    if toggle {
        app.dispatch(Event::ToggleSound);
    }
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light mode").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Aviso flotante para instalar la app (solo web).
pub fn install_banner(app: &mut BrainCartApp, ctx: &Context) {
    let can_request = app.session.install_banner().can_request();
    let mut event = None;

    egui::Window::new("install_banner")
        .title_bar(false)
        .resizable(false)
        .anchor(Align2::CENTER_TOP, [0.0, 48.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new("🛒 Install BrainCart!").strong().size(18.0));
                    ui.label("Play anytime, anywhere!");
                });
                ui.add_space(16.0);
                if ui
                    .add_enabled(can_request, egui::Button::new("Install"))
                    .clicked()
                {
                    event = Some(Event::RequestInstall);
                }
                if ui.button("✖").clicked() {
                    event = Some(Event::DismissInstall);
                }
            });
        });

    if let Some(event) = event {
        app.dispatch(event);
    }
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .corner_radius(16.0)
                .inner_margin(egui::Margin::symmetric(24, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    ui.with_layout(egui::Layout::top_down(Align::Center), inner);
                });
        });
        ui.add_space(extra);
    });
}

pub fn title(ui: &mut Ui, text: &str) {
    ui.label(
        RichText::new(text)
            .size(34.0)
            .strong()
            .color(Color32::from_rgb(147, 51, 234)),
    );
}
