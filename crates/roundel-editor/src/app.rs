use std::time::Instant;

use winit::dpi::LogicalSize;

use roundel_engine::coords::Viewport;
use roundel_engine::core::{App as EngineApp, AppControl, FrameCtx};
use roundel_engine::device::GpuInit;
use roundel_engine::input::InputEvent;
use roundel_engine::render::SceneRenderer;
use roundel_engine::scene::DrawList;
use roundel_engine::window::{Runtime, RuntimeConfig, RuntimeCtx};

use crate::clipboard::SystemClipboard;
use crate::config::EditorConfig;
use crate::editor::RadiusEditor;
use crate::pointer::PointerSource;

// ── Application ───────────────────────────────────────────────────────────

/// Top-level application builder.
///
/// ```rust,ignore
/// Application::new()
///     .title("Roundel")
///     .size(640.0, 720.0)
///     .config(EditorConfig::new().container_fraction(0.5))
///     .run();
/// ```
pub struct Application {
    title: String,
    width: f64,
    height: f64,
    config: EditorConfig,
    gpu: GpuInit,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title: "roundel".to_string(),
            width: 640.0,
            height: 720.0,
            config: EditorConfig::default(),
            gpu: GpuInit::default(),
        }
    }

    /// Initial window title; replaced by the value string on the first frame.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn gpu(mut self, init: GpuInit) -> Self {
        self.gpu = init;
        self
    }

    /// Start the event loop. This never returns.
    pub fn run(self) -> ! {
        let config = RuntimeConfig {
            title: self.title,
            initial_size: LogicalSize::new(self.width, self.height),
            ..RuntimeConfig::default()
        };
        let state = EditorAppState::new(self.config);

        if let Err(e) = Runtime::run(config, self.gpu, state) {
            log::error!("roundel runtime error: {e:#}");
            std::process::exit(1);
        }
        std::process::exit(0);
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── EditorAppState ────────────────────────────────────────────────────────

/// Implements `roundel_engine::core::App` for one mounted editor.
struct EditorAppState {
    /// Source the editor subscribes to; must outlive the editor's listening.
    pointer: PointerSource,
    editor: RadiusEditor,
    /// State revision and notice visibility the window title was built from.
    title_key: Option<(u64, bool)>,

    draw_list: DrawList,
    scene: SceneRenderer,
}

impl EditorAppState {
    fn new(config: EditorConfig) -> Self {
        let pointer = PointerSource::new();
        let editor = RadiusEditor::mount(config, &pointer, Box::new(SystemClipboard::new()));
        Self {
            pointer,
            editor,
            title_key: None,
            draw_list: DrawList::new(),
            scene: SceneRenderer::new(),
        }
    }

    /// Feeds this frame's events to the editor and asks for a follow-up
    /// frame when any of them changed it.
    fn route_input(
        &mut self,
        events: &[InputEvent],
        viewport: Viewport,
        now: Instant,
        runtime: &mut RuntimeCtx,
    ) {
        self.editor.set_viewport(viewport);

        let mut changed = false;
        for event in events {
            changed |= self.editor.handle_input(event, now);
        }
        debug_assert!(self.pointer.has_subscribers());

        if changed {
            runtime.request_redraw();
        }
        if let Some(deadline) = self.editor.next_deadline(now) {
            runtime.request_redraw_at(deadline);
        }
    }

    /// New window title, or `None` when the shown one is still current.
    fn title_update(&mut self, now: Instant) -> Option<String> {
        let key = (self.editor.state().revision(), self.editor.notice().is_visible(now));
        if self.title_key == Some(key) {
            return None;
        }
        self.title_key = Some(key);
        Some(self.editor.title(now))
    }
}

impl EngineApp for EditorAppState {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let now = ctx.time.now;
        let viewport = ctx.window.logical_size();
        self.route_input(&ctx.input_frame.events, viewport, now, ctx.runtime);

        // ── Window chrome ─────────────────────────────────────────────────
        if let Some(title) = self.title_update(now) {
            ctx.window.set_title(&title);
        }
        ctx.window.set_cursor(self.editor.cursor());

        // ── Paint + render ────────────────────────────────────────────────
        self.draw_list.clear();
        self.editor.paint(&mut self.draw_list, now);

        let dl = &mut self.draw_list;
        let scene = &mut self.scene;
        ctx.render(self.editor.background(), |rctx, target| {
            scene.render(rctx, target, dl);
        })
    }
}
