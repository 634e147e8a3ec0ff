use crate::app::Event;
use crate::ui::BrainCartApp;
use crate::ui::helpers::{tinted_button, two_button_row};
use crate::ui::layout::title;
use egui::{
    Align2, Button, CentralPanel, Color32, Context, Frame, Key, RichText, ScrollArea, TextEdit,
};

pub fn ui_shopping(app: &mut BrainCartApp, ctx: &Context) {
    let rows = app.session.item_rows();
    let riddle = app
        .session
        .cart()
        .pending()
        .map(|p| (p.item.riddle_text.clone(), p.answer_input.clone()));
    let riddle_open = riddle.is_some();
    let complete = app.session.is_shop_complete();
    let shop_name = app
        .session
        .current_shop()
        .map(|s| s.name.clone())
        .unwrap_or_default();
    let level = app.session.progress().current_level.unwrap_or(1);
    let carted = rows.iter().filter(|r| r.in_cart).count();

    // Se acumulan y se despachan al final, en orden
    let mut events = Vec::new();

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 620.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            ui.set_width(panel_width);
            title(ui, &shop_name);
            ui.label(RichText::new(format!("Level {level}")).strong());
            ui.add_space(8.0);
            ui.label(RichText::new("🛒 SHOPPING LIST 🛒").size(22.0).strong());
            ui.add_space(8.0);

            let list_height = ui.available_height() - 120.0;
            ScrollArea::vertical().max_height(list_height).show(ui, |ui| {
                for row in &rows {
                    let stroke = if row.in_cart {
                        egui::Stroke::new(3.0, Color32::from_rgb(74, 222, 128))
                    } else {
                        egui::Stroke::NONE
                    };
                    Frame::group(ui.style()).stroke(stroke).show(ui, |ui| {
                        ui.set_width(panel_width - 16.0);
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&row.emoji).size(48.0));
                            ui.vertical(|ui| {
                                ui.label(RichText::new(&row.name).size(22.0).strong());
                                ui.label(format!("Quantity: x{}", row.quantity));
                                match row.price_label() {
                                    Some(price) => ui.label(
                                        RichText::new(price)
                                            .strong()
                                            .color(Color32::from_rgb(22, 163, 74)),
                                    ),
                                    None => ui.label(row.reward_label()),
                                };
                            });
                            let right = egui::Layout::right_to_left(egui::Align::Center);
                            ui.with_layout(right, |ui| {
                                let enabled = !row.in_cart && !riddle_open;
                                let add = Button::new(row.button_label())
                                    .min_size([120.0, 44.0].into());
                                if ui.add_enabled(enabled, add).clicked() {
                                    events.push(Event::AddItem(row.name.clone()));
                                }
                            });
                        });
                    });
                    ui.add_space(6.0);
                }
            });

            ui.add_space(8.0);
            if complete {
                let checkout = tinted_button(ui, "Checkout 🧾", panel_width, 48.0, [234, 88, 12]);
                if checkout && !riddle_open {
                    events.push(Event::Checkout);
                }
            } else {
                ui.label(format!("{carted} / {} items in the cart", rows.len()));
            }
            ui.add_space(6.0);
            let back = Button::new("← Back to Shops").min_size([panel_width, 40.0].into());
            if ui.add_enabled(!riddle_open, back).clicked() {
                events.push(Event::Back);
            }
        });
    });

    if let Some((riddle_text, answer)) = riddle {
        riddle_window(ctx, &riddle_text, answer, &mut events);
    }

    for event in events {
        app.dispatch(event);
    }
}

fn riddle_window(ctx: &Context, riddle_text: &str, mut answer: String, events: &mut Vec<Event>) {
    egui::Window::new("Solve the Riddle 🤔")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_max_width(360.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(riddle_text).size(18.0).strong());
                ui.add_space(12.0);

                let input = ui.add(
                    TextEdit::singleline(&mut answer)
                        .hint_text("Your Answer")
                        .desired_width(200.0)
                        .font(egui::TextStyle::Heading),
                );
                if input.changed() {
                    events.push(Event::EditAnswer(answer.clone()));
                }
                let enter = input.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

                ui.add_space(12.0);
                let (submit, cancel) = two_button_row(ui, 300.0, "Submit", "Cancel");
                if submit || enter {
                    events.push(Event::SubmitAnswer);
                } else if cancel {
                    events.push(Event::CancelRiddle);
                }
            });
        });
}
