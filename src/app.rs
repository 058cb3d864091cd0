/*
 * Application Module
 *
 * The windowed front end. nannou owns the event loop; each update polls the
 * latched quit request, advances the world once and paces to the target
 * frame rate, and each view draws the current world state.
 */

use std::sync::OnceLock;

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::debug::DebugInfo;
use crate::driver::{self, QuitFlag};
use crate::input;
use crate::pacer::FramePacer;
use crate::params::SimulationParams;
use crate::renderer::{draw_world, NannouCanvas};
use crate::ui;
use crate::world::{SimState, World};

// nannou's model callback is a plain fn pointer, so parameters are handed
// over through here.
static LAUNCH_PARAMS: OnceLock<SimulationParams> = OnceLock::new();

pub struct Model {
    pub world: World,
    pub egui: Egui,
    pub pacer: FramePacer,
    pub quit: QuitFlag,
    pub debug_info: DebugInfo,
    pub show_debug: bool,
}

/// Open the window and run until quit. Does not return until the app exits.
pub fn launch(params: SimulationParams) {
    if LAUNCH_PARAMS.set(params).is_err() {
        log::warn!("Simulation already launched; keeping the first parameters");
    }
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    let params = LAUNCH_PARAMS.get().cloned().unwrap_or_default();

    app.set_exit_on_escape(false);

    let window_id = match app
        .new_window()
        .title("Murmuration Simulation")
        .size(params.width as u32, params.height as u32)
        .resizable(false)
        .view(view)
        .key_pressed(input::key_pressed)
        .closed(input::window_closed)
        .raw_event(input::raw_window_event)
        .build()
    {
        Ok(id) => id,
        Err(e) => {
            log::error!("Failed to create window: {:?}", e);
            std::process::exit(1);
        }
    };

    let window = match app.window(window_id) {
        Some(window) => window,
        None => {
            log::error!("Window {:?} vanished right after creation", window_id);
            std::process::exit(1);
        }
    };
    let egui = Egui::from_window(&window);

    let pacer = FramePacer::new(params.fps);
    let show_debug = params.show_debug;
    let world = match World::new(params) {
        Ok(world) => world,
        Err(e) => {
            log::error!("Invalid simulation parameters: {}", e);
            std::process::exit(1);
        }
    };

    Model {
        world,
        egui,
        pacer,
        quit: QuitFlag::default(),
        debug_info: DebugInfo::default(),
        show_debug,
    }
}

fn update(app: &App, model: &mut Model, update: Update) {
    model.egui.set_elapsed_time(update.since_start);

    if driver::advance(&mut model.world, &mut model.quit, &mut model.pacer) == SimState::Stopped {
        app.quit();
        return;
    }

    model.debug_info.record(app.fps(), update.since_last, &model.world);
    ui::update_ui(&mut model.egui, model.show_debug, &model.debug_info, &model.world);
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let params = model.world.params();

    let mut canvas = NannouCanvas::new(&draw, params.width, params.height);
    draw_world(&mut canvas, &model.world);

    if let Err(e) = draw.to_frame(app, &frame) {
        log::error!("Failed to render frame: {:?}", e);
    }

    if let Err(e) = model.egui.draw_to_frame(&frame) {
        log::error!("Failed to render debug overlay: {:?}", e);
    }
}
