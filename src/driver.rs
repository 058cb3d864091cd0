/*
 * Frame Driver Module
 *
 * Runs the per-tick sequence: poll for quit, advance the world, draw,
 * present, pace. A quit request is only looked at before a tick starts, so a
 * tick that has begun always runs to completion.
 *
 * FrameDriver runs the whole loop against any surface, which is what the
 * headless runs and tests use. The nannou app owns its own event loop and
 * calls `advance` from its update callback instead.
 */

use crate::pacer::Pacer;
use crate::renderer::{draw_world, Canvas, RecordingCanvas};
use crate::world::{SimState, World};

/// Non-blocking source of quit requests.
pub trait EventSource {
    fn poll_quit(&mut self) -> bool;
}

impl<F: FnMut() -> bool> EventSource for F {
    fn poll_quit(&mut self) -> bool {
        self()
    }
}

/// A latched quit request, set by window callbacks and consumed by the next
/// poll.
#[derive(Debug, Default)]
pub struct QuitFlag {
    requested: bool,
}

impl QuitFlag {
    pub fn request(&mut self) {
        self.requested = true;
    }
}

impl EventSource for QuitFlag {
    fn poll_quit(&mut self) -> bool {
        std::mem::take(&mut self.requested)
    }
}

pub trait Surface: Canvas {
    fn present(&mut self);
}

impl Surface for RecordingCanvas {
    fn present(&mut self) {
        self.frames_presented += 1;
    }
}

/// Pacer that never waits, for headless runs and benchmarks.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unpaced;

impl Pacer for Unpaced {
    fn wait(&mut self) {}
}

/// Top of a tick: honour a pending quit, otherwise advance the world and
/// pace. Returns the world state afterwards.
pub fn advance<E, P>(world: &mut World, events: &mut E, pacer: &mut P) -> SimState
where
    E: EventSource + ?Sized,
    P: Pacer + ?Sized,
{
    if !world.is_running() {
        return world.state();
    }

    if events.poll_quit() {
        log::info!("Quit requested");
        world.stop();
        return world.state();
    }

    world.tick();
    pacer.wait();
    world.state()
}

pub struct FrameDriver<E, S, P> {
    events: E,
    surface: S,
    pacer: P,
}

impl<E: EventSource, S: Surface, P: Pacer> FrameDriver<E, S, P> {
    pub fn new(events: E, surface: S, pacer: P) -> Self {
        Self { events, surface, pacer }
    }

    /// One full frame. Returns the world state afterwards.
    pub fn step(&mut self, world: &mut World) -> SimState {
        if !world.is_running() {
            return world.state();
        }

        if self.events.poll_quit() {
            log::info!("Quit requested");
            world.stop();
            return world.state();
        }

        world.tick();
        draw_world(&mut self.surface, world);
        self.surface.present();
        self.pacer.wait();
        world.state()
    }

    /// Run until the world stops. Returns the number of ticks executed.
    pub fn run(&mut self, world: &mut World) -> u64 {
        let start = world.ticks();
        while self.step(world) == SimState::Running {}
        world.ticks() - start
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
