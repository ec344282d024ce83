//! Frame loop
//!
//! One thread, one loop: poll input, run one update tick, render one frame,
//! until the platform reports a close or a quit command arrives.

use crate::{
    core::config::{ApplicationConfig, ConfigError},
    foundation::time::Timer,
    input::{InputEvent, InputManager},
    render::{RenderSurface, SceneRenderer},
    scene::SimulationState,
};
use thiserror::Error;

/// Source of input events and the close signal
pub trait EventSource {
    /// Append every pending event to `events` without blocking
    fn poll_events(&mut self, events: &mut Vec<InputEvent>);

    /// Whether the platform asked the loop to stop
    fn should_close(&self) -> bool;
}

/// Everything the frame loop needs from the outside world
pub trait Platform: EventSource + RenderSurface {}

impl<T: EventSource + RenderSurface> Platform for T {}

/// Engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration rejected at startup
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Owns the simulation state and drives it frame by frame
pub struct Engine {
    /// Simulation state for the box and the point
    pub state: SimulationState,

    /// Input handling system
    pub input: InputManager,

    renderer: SceneRenderer,
    timer: Timer,
    stats_interval_secs: f32,
    last_stats_time: f32,
    running: bool,
    pending_events: Vec<InputEvent>,
}

impl Engine {
    /// Create a new engine from a validated configuration
    pub fn new(config: &ApplicationConfig) -> Result<Self, EngineError> {
        config.validate()?;
        log::info!(
            "Initializing scene: box at {:?}, point at {:?}, {} selected",
            config.scene.box_position,
            config.scene.point_position,
            config.scene.initial_selection
        );

        Ok(Self {
            state: SimulationState::new(&config.scene, &config.controls),
            input: InputManager::new(),
            renderer: SceneRenderer::new(config.window.aspect_ratio()),
            timer: Timer::new(),
            stats_interval_secs: config.engine.stats_interval_secs,
            last_stats_time: 0.0,
            running: true,
            pending_events: Vec::new(),
        })
    }

    /// Whether the loop should keep going
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Feed one input event
    pub fn handle_event(&mut self, event: InputEvent) {
        if let Some(command) = self.input.handle_event(event) {
            log::trace!("Applying {command:?}");
            if !self.state.apply(command) {
                log::info!("Quit requested");
                self.running = false;
            }
        }
    }

    /// One update tick: apply any drag rotation, then recompute the collision flag
    pub fn tick(&mut self) -> bool {
        if let Some((dx, dy)) = self.input.take_drag_delta() {
            self.state.rotate_selected(dx, dy);
        }
        self.state.update()
    }

    /// Render the current state
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        self.renderer.render(&self.state, surface);
    }

    /// Run a single poll / update / render iteration
    pub fn frame<P: Platform>(&mut self, platform: &mut P) {
        self.timer.update();

        let mut events = std::mem::take(&mut self.pending_events);
        platform.poll_events(&mut events);
        for event in events.drain(..) {
            self.handle_event(event);
        }
        self.pending_events = events;

        self.tick();
        self.render(platform);
        self.log_stats();
    }

    /// Run frames until the platform closes or a quit command arrives
    ///
    /// Returns the number of frames run.
    pub fn run<P: Platform>(&mut self, platform: &mut P) -> u64 {
        log::info!("Starting main loop...");
        let mut frames = 0;
        while self.running && !platform.should_close() {
            self.frame(platform);
            frames += 1;
        }
        log::info!("Main loop finished after {frames} frames");
        frames
    }

    fn log_stats(&mut self) {
        if self.stats_interval_secs <= 0.0 {
            return;
        }
        let now = self.timer.total_time();
        if now - self.last_stats_time >= self.stats_interval_secs {
            self.last_stats_time = now;
            log::debug!(
                "Frame {}: {:.1} fps average, colliding={}",
                self.timer.frame_count(),
                self.timer.average_fps(),
                self.state.is_colliding()
            );
        }
    }
}
