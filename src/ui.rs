/*
 * UI Module
 *
 * The debug overlay, drawn with nannou_egui. It is read-only: the simulation
 * parameters are fixed for the run, so the panel only reports.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::world::World;

// Build this frame's egui output. The window is only shown when `visible`.
pub fn update_ui(egui: &mut Egui, visible: bool, debug_info: &DebugInfo, world: &World) {
    let ctx = egui.begin_frame();
    if !visible {
        return;
    }

    egui::Window::new("Murmuration")
        .default_pos([10.0, 10.0])
        .resizable(false)
        .show(&ctx, |ui| {
            for line in debug_info.lines(world) {
                ui.label(line);
            }
            ui.separator();
            ui.label(format!("Seed: {}", world.seed()));
            ui.label("Esc: quit   D: toggle this panel");
        });
}
