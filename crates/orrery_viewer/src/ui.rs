use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use orrery::constants::{REVOLUTION_SPEED_RANGE, ROTATION_SPEED_RANGE};

use crate::planet::CelestialBody;
use crate::Settings;

/// The debug panel: a dark-mode toggle and one collapsible section per
/// planet with its two speed sliders. The sliders clamp to the editable
/// ranges, so out-of-range values can never reach the body records.
pub fn panel(
    mut egui_context: EguiContexts,
    mut settings: ResMut<Settings>,
    mut bodies: Query<(&mut CelestialBody, &Name)>,
) {
    let ctx = egui_context.ctx_mut();

    egui::SidePanel::right("controls").show(ctx, |ui| {
        ui.heading("Solar System");
        ui.checkbox(&mut settings.dark_mode, "Dark Mode");
        ui.separator();

        for (mut body, name) in bodies.iter_mut() {
            ui.collapsing(name.as_str(), |ui| {
                ui.add(
                    egui::Slider::new(
                        &mut body.revolution_speed,
                        REVOLUTION_SPEED_RANGE,
                    )
                    .text("Orbit Speed"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut body.rotation_speed,
                        ROTATION_SPEED_RANGE,
                    )
                    .text("Planet Speed"),
                );
            });
        }
    });
}

/// Background and panel colors of one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    pub scene: Color,
    pub panel: egui::Color32,
    pub text: egui::Color32,
}

impl ThemeColors {
    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self {
                scene: Color::BLACK,
                panel: egui::Color32::from_rgb(0x11, 0x11, 0x11),
                text: egui::Color32::WHITE,
            }
        } else {
            Self {
                scene: Color::rgb_u8(0xf0, 0xf0, 0xf0),
                panel: egui::Color32::WHITE,
                text: egui::Color32::BLACK,
            }
        }
    }
}

/// Recolors the scene clear color and the panel chrome to match the
/// current theme. Runs every frame; the write is idempotent.
pub fn apply_theme(
    settings: Res<Settings>,
    mut clear_color: ResMut<ClearColor>,
    mut egui_context: EguiContexts,
) {
    let colors = ThemeColors::for_mode(settings.dark_mode);

    clear_color.0 = colors.scene;

    let mut visuals = if settings.dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    visuals.panel_fill = colors.panel;
    visuals.override_text_color = Some(colors.text);

    egui_context.ctx_mut().set_visuals(visuals);
}
