use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use pixels::Error as PixelsError;
use thiserror::Error;
use tracing::{debug, info, warn};
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowBuilder;

use crate::{resolve_app_paths, StartupError};

use super::input::LatestCommand;
use super::metrics::MetricsAccumulator;
use super::rendering::{CanvasSize, Renderer, Rgba};
use super::{InputAction, InputSnapshot, Scene, SceneCommand, SpriteResources};

#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub window_title: String,
    /// Canvas size in pixels; also the initial logical window size.
    pub window_width: u32,
    pub window_height: u32,
    pub metrics_log_interval: Duration,
    pub max_render_fps: Option<u32>,
    pub clear_color: Rgba,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            window_title: "Rebel Run".to_string(),
            window_width: 505,
            window_height: 750,
            metrics_log_interval: Duration::from_secs(1),
            max_render_fps: None,
            clear_color: [12, 14, 22, 255],
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Startup(#[from] StartupError),
    #[error("failed to create event loop: {0}")]
    CreateEventLoop(#[source] EventLoopError),
    #[error("failed to create application window: {0}")]
    CreateWindow(#[source] OsError),
    #[error("failed to initialize renderer: {0}")]
    CreateRenderer(#[source] PixelsError),
    #[error("event loop failed: {0}")]
    EventLoopRun(#[source] EventLoopError),
}

/// Runs `scene` until the window closes or the scene asks to quit.
///
/// Each redraw is one tick: measure elapsed time, update the scene with the
/// latest input command, then render it onto a cleared canvas.
pub fn run_app(config: LoopConfig, mut scene: Box<dyn Scene>) -> Result<(), AppError> {
    let app_paths = resolve_app_paths()?;
    info!(
        root = %app_paths.root.display(),
        image_dir = %app_paths.image_dir.display(),
        "startup"
    );

    let event_loop = EventLoop::new().map_err(AppError::CreateEventLoop)?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.window_title.clone())
            .with_inner_size(LogicalSize::new(
                config.window_width as f64,
                config.window_height as f64,
            ))
            .build(&event_loop)
            .map_err(AppError::CreateWindow)?,
    );
    let canvas = CanvasSize {
        width: config.window_width,
        height: config.window_height,
    };
    let mut renderer =
        Renderer::new(Arc::clone(&window), canvas).map_err(AppError::CreateRenderer)?;

    let mut sprites = SpriteResources::new(app_paths.image_dir.clone());
    sprites.load(&scene.sprite_manifest());
    scene.load();
    info!(
        sprites = sprites.len(),
        entity_count = scene.entity_count(),
        "scene_loaded"
    );

    event_loop.set_control_flow(ControlFlow::Poll);

    let metrics_log_interval =
        normalize_non_zero_duration(config.metrics_log_interval, Duration::from_secs(1));
    let effective_render_cap = normalize_render_fps_cap(config.max_render_fps);
    let render_frame_target = target_frame_duration(effective_render_cap);
    info!(
        canvas_width = canvas.width,
        canvas_height = canvas.height,
        metrics_log_interval_ms = metrics_log_interval.as_millis() as u64,
        render_fps_cap = %format_render_cap(effective_render_cap),
        "loop_config"
    );

    let mut input_collector = InputCollector::default();
    let mut frame_clock = FrameClock::new(Instant::now());
    let mut last_present_instant = Instant::now();
    let mut metrics_accumulator = MetricsAccumulator::new(metrics_log_interval);
    let mut last_applied_title: Option<String> = None;
    let clear_color = config.clear_color;

    event_loop
        .run(move |event, window_target| match event {
            Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    info!(reason = "window_close", "shutdown_requested");
                    window_target.exit();
                }
                WindowEvent::Resized(new_size) => {
                    if let Err(error) = renderer.resize(new_size.width, new_size.height) {
                        warn!(error = %error, "renderer_resize_failed");
                        window_target.exit();
                    }
                }
                WindowEvent::ScaleFactorChanged { .. } => {
                    let size = window.inner_size();
                    if let Err(error) = renderer.resize(size.width, size.height) {
                        warn!(error = %error, "renderer_resize_failed");
                        window_target.exit();
                    }
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    input_collector.handle_keyboard_input(&event);
                    if input_collector.quit_requested {
                        info!(reason = "escape_key", "shutdown_requested");
                        window_target.exit();
                    }
                }
                WindowEvent::RedrawRequested => {
                    let now = Instant::now();
                    let frame_dt = frame_clock.advance(now);

                    let input_snapshot = input_collector.snapshot_for_tick();
                    let command = scene.update(frame_dt.as_secs_f32(), &input_snapshot);
                    metrics_accumulator.record_update();
                    if command == SceneCommand::Quit {
                        info!(reason = "scene_quit", "shutdown_requested");
                        window_target.exit();
                        return;
                    }

                    // Single FPS cap sleep point for render pacing.
                    let elapsed_since_last_present =
                        Instant::now().saturating_duration_since(last_present_instant);
                    let cap_sleep =
                        compute_cap_sleep(elapsed_since_last_present, render_frame_target);
                    if cap_sleep > Duration::ZERO {
                        thread::sleep(cap_sleep);
                    }

                    let render_result = renderer.render_frame(&sprites, |target| {
                        target.clear(clear_color);
                        scene.render(target);
                    });
                    if let Err(error) = render_result {
                        warn!(error = %error, "renderer_draw_failed");
                        window_target.exit();
                    }
                    last_present_instant = Instant::now();

                    let next_title = scene.debug_title();
                    if next_title != last_applied_title {
                        match &next_title {
                            Some(title) => window.set_title(title),
                            None => window.set_title(&config.window_title),
                        }
                        last_applied_title = next_title;
                    }
                    metrics_accumulator.record_frame(frame_dt);

                    if let Some(snapshot) = metrics_accumulator.maybe_snapshot(now) {
                        info!(
                            fps = snapshot.fps,
                            ups = snapshot.ups,
                            frame_time_ms = snapshot.frame_time_ms,
                            entity_count = scene.entity_count(),
                            "loop_metrics"
                        );
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                window.request_redraw();
            }
            Event::LoopExiting => {
                scene.unload();
                info!("shutdown");
            }
            _ => {}
        })
        .map_err(AppError::EventLoopRun)
}

/// Measures wall time between ticks. Never negative, never clamped.
#[derive(Debug)]
struct FrameClock {
    last: Instant,
}

impl FrameClock {
    fn new(start: Instant) -> Self {
        Self { last: start }
    }

    fn advance(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last);
        if now > self.last {
            self.last = now;
        }
        elapsed
    }
}

#[derive(Debug, Default)]
struct InputCollector {
    quit_requested: bool,
    latest: LatestCommand,
}

impl InputCollector {
    fn handle_keyboard_input(&mut self, key_event: &KeyEvent) {
        let PhysicalKey::Code(code) = key_event.physical_key else {
            return;
        };
        self.handle_key(code, key_event.state, key_event.repeat);
    }

    fn handle_key(&mut self, code: KeyCode, state: ElementState, repeat: bool) {
        if state != ElementState::Pressed || repeat {
            return;
        }
        match InputAction::from_key_code(code) {
            Some(InputAction::Quit) => self.quit_requested = true,
            Some(action) => {
                debug!(action = ?action, "input_command_recorded");
                self.latest.record(action);
            }
            None => {}
        }
    }

    fn snapshot_for_tick(&mut self) -> InputSnapshot {
        InputSnapshot::new(self.quit_requested, self.latest.take())
    }
}

fn normalize_non_zero_duration(value: Duration, fallback: Duration) -> Duration {
    if value.is_zero() {
        fallback
    } else {
        value
    }
}

fn normalize_render_fps_cap(cap: Option<u32>) -> Option<u32> {
    cap.filter(|value| *value > 0)
}

fn target_frame_duration(max_render_fps: Option<u32>) -> Option<Duration> {
    max_render_fps.map(|fps| Duration::from_secs_f64(1.0 / fps as f64))
}

fn compute_cap_sleep(elapsed: Duration, target: Option<Duration>) -> Duration {
    match target {
        Some(frame_target) if elapsed < frame_target => frame_target - elapsed,
        _ => Duration::ZERO,
    }
}

fn format_render_cap(cap: Option<u32>) -> String {
    match cap {
        Some(value) => value.to_string(),
        None => "off".to_string(),
    }
}
