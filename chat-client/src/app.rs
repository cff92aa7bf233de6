//! eframe application shell

use surface::{Surface, Texture};

use crate::scene::{self, Assets};
use crate::state::AppState;

/// Relative path of the UI font; a missing file falls back to the
/// library defaults with a logged warning
const FONT_PATH: &str = "assets/Audiowide-Regular.ttf";

/// Relative path of the navbar avatar; a failed decode leaves the image
/// absent
const AVATAR_PATH: &str = "assets/avatar.jpg";

/// The chat window
pub struct ChatApp {
    surface: Surface,
    state: AppState,
    assets: Assets,
}

impl ChatApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        surface::install_font(&cc.egui_ctx, FONT_PATH);
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        Self {
            surface: Surface::new(),
            state: AppState::seeded(),
            assets: Assets {
                avatar: Texture::load(&cc.egui_ctx, AVATAR_PATH, 0),
            },
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Clear color behind the main window, from the prototype palette
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::from_rgb(250, 119, 110)))
            .show(ctx, |_ui| {});

        scene::draw_scene(&mut self.surface, ctx, &mut self.state, &self.assets);
    }
}
