// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Botón grande con el color de la tienda o la acción.
pub fn tinted_button(ui: &mut Ui, label: &str, width: f32, height: f32, rgb: [u8; 3]) -> bool {
    let text = RichText::new(label).size(20.0).strong().color(Color32::WHITE);
    let [r, g, b] = rgb;
    ui.add(
        Button::new(text)
            .fill(Color32::from_rgb(r, g, b))
            .min_size(Vec2::new(width, height)),
    )
    .clicked()
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_sized([btn_w, 40.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 40.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}
