/*
 * Input Module
 *
 * Window event handlers. Quit requests are latched here and picked up at the
 * top of the next update, never in the middle of a tick.
 */

use nannou::prelude::*;

use crate::app::Model;

pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Escape => model.quit.request(),
        Key::D => {
            model.show_debug = !model.show_debug;
            log::debug!("Debug overlay {}", if model.show_debug { "shown" } else { "hidden" });
        }
        _ => {}
    }
}

pub fn window_closed(_app: &App, model: &mut Model) {
    log::info!("Window closed");
    model.quit.request();
}

// Pass raw window events through to egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
