use anyhow::{Context, Result};
use ouroboros::self_referencing;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::winit::translate_window_event;
use crate::input::{InputFrame, InputState};
use crate::time::FrameClock;

use super::schedule::RedrawSchedule;

/// Editor window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Smallest logical size the window may be resized to.
    pub min_size: Option<LogicalSize<f64>>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "roundel".to_string(),
            initial_size: LogicalSize::new(640.0, 640.0),
            min_size: Some(LogicalSize::new(240.0, 240.0)),
        }
    }
}

/// Requests the application can make from inside a frame.
///
/// Requests are buffered and applied once `on_frame` returns.
#[derive(Debug, Default)]
pub struct RuntimeCtx {
    exit: bool,
    redraw: bool,
    redraw_at: Option<Instant>,
}

impl RuntimeCtx {
    pub fn exit(&mut self) {
        self.exit = true;
    }

    /// Asks for another frame as soon as possible.
    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    /// Asks for a frame no later than `deadline`. The earliest request wins.
    pub fn request_redraw_at(&mut self, deadline: Instant) {
        self.redraw_at = Some(self.redraw_at.map_or(deadline, |d| d.min(deadline)));
    }

    #[inline]
    pub fn redraw_requested(&self) -> bool {
        self.redraw
    }

    #[inline]
    pub fn redraw_deadline(&self) -> Option<Instant> {
        self.redraw_at
    }
}

/// Runs the single editor window until it is closed.
pub struct Runtime;

impl Runtime {
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut host = Host::new(config, gpu_init, app);

        event_loop
            .run_app(&mut host)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

#[self_referencing]
struct EditorWindow {
    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

impl EditorWindow {
    fn open(event_loop: &ActiveEventLoop, config: &RuntimeConfig, gpu_init: GpuInit) -> Result<Self> {
        let mut attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(config.initial_size);
        if let Some(min) = config.min_size {
            attrs = attrs.with_min_inner_size(min);
        }

        let window = event_loop
            .create_window(attrs)
            .context("failed to create editor window")?;
        log::debug!("editor window {:?} created", window.id());

        EditorWindowTryBuilder {
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init)).context("GPU initialization failed")
            },
        }
        .try_build()
    }

    fn id(&self) -> WindowId {
        self.with_window(|w| w.id())
    }

    fn request_redraw(&self) {
        self.with_window(|w| w.request_redraw());
    }

    fn resize_surface(&mut self) {
        let size = self.with_window(|w| w.inner_size());
        self.with_gpu_mut(|gpu| gpu.resize(size));
    }
}

/// winit handler owning the window, its GPU surface and the application.
struct Host<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    window: Option<EditorWindow>,
    schedule: RedrawSchedule,
    exit_requested: bool,
}

impl<A> Host<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            window: None,
            schedule: RedrawSchedule::new(),
            exit_requested: false,
        }
    }

    fn shut_down(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        self.window = None;
        self.schedule.clear();
        event_loop.exit();
    }

    fn draw_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.window.as_mut() else { return };

        let mut runtime = RuntimeCtx::default();
        let app = &mut self.app;

        let control = window.with_mut(|fields| {
            let id = fields.window.id();
            let mut ctx = FrameCtx {
                window: WindowCtx { id, window: fields.window },
                gpu: fields.gpu,
                input: fields.input_state,
                input_frame: fields.input_frame,
                time: fields.clock.tick(),
                runtime: &mut runtime,
            };
            let control = app.on_frame(&mut ctx);

            // Events are delivered to exactly one frame.
            fields.input_frame.clear();
            control
        });

        if control == AppControl::Exit || runtime.exit {
            self.shut_down(event_loop);
            return;
        }
        if let Some(at) = runtime.redraw_at {
            self.schedule.request_at(at);
        }
        if runtime.redraw {
            window.request_redraw();
        }
    }
}

impl<A> ApplicationHandler for Host<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.exit_requested {
            return;
        }

        match EditorWindow::open(event_loop, &self.config, self.gpu_init.clone()) {
            Ok(window) => {
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("failed to open editor window: {e:#}");
                self.shut_down(event_loop);
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if self.schedule.take_due(Instant::now()) {
            if let Some(window) = &self.window {
                log::trace!("scheduled redraw due");
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(self.schedule.control_flow());
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let app = &mut self.app;
        let Some(window) = self.window.as_mut() else { return };
        if window.id() != window_id {
            return;
        }

        let (needs_redraw, control) = window.with_mut(|fields| {
            let mut needs_redraw = false;
            let scale = fields.window.scale_factor();
            if let Some(ev) = translate_window_event(scale, fields.input_state, &event) {
                needs_redraw = ev.needs_redraw();
                fields.input_state.apply_event(fields.input_frame, ev);
            }
            (needs_redraw, app.on_window_event(window_id, &event))
        });

        if control == AppControl::Exit {
            self.shut_down(event_loop);
            return;
        }
        if needs_redraw {
            window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => {
                log::debug!("close requested for {window_id:?}");
                self.shut_down(event_loop);
            }
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                window.resize_surface();
                window.request_redraw();
            }
            WindowEvent::RedrawRequested => self.draw_frame(event_loop),
            _ => {}
        }
    }
}
