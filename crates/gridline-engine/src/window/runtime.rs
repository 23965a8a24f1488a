use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::translate_window_event;
use crate::input::{InputFrame, InputState};
use crate::time::FrameClock;

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "gridline".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
        }
    }
}

/// Single-window winit loop driving a [`CoreApp`].
pub struct Runtime;

impl Runtime {
    /// Opens the window and runs until it is closed or the app returns
    /// [`AppControl::Exit`]. A window or GPU setup failure is returned once
    /// the loop has stopped.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: CoreApp + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut handler = Handler {
            config,
            gpu_init,
            app,
            win: None,
            fatal: None,
        };

        event_loop
            .run_app(&mut handler)
            .context("winit event loop terminated with error")?;

        handler.fatal.map_or(Ok(()), Err)
    }
}

/// Window plus the GPU surface borrowing it, with the input and clock state
/// that live exactly as long as the window does.
#[self_referencing]
struct WindowState {
    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

impl WindowState {
    fn open(event_loop: &ActiveEventLoop, config: &RuntimeConfig, init: GpuInit) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(config.initial_size);
        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        WindowStateTryBuilder {
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, init)),
        }
        .try_build()
        .context("GPU initialization failed")
    }

    fn id(&self) -> WindowId {
        self.with_window(|w| w.id())
    }

    fn request_redraw(&self) {
        self.with_window(|w| w.request_redraw());
    }

    /// Reconfigures the swapchain to the window's current physical size.
    fn fit_to_window(&mut self) {
        let size = self.with_window(|w| w.inner_size());
        self.with_gpu_mut(|gpu| gpu.resize(size));
        self.request_redraw();
    }
}

struct Handler<A> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,
    win: Option<WindowState>,
    /// Setup failure reported by `Runtime::run`.
    fatal: Option<anyhow::Error>,
}

impl<A: CoreApp> Handler<A> {
    fn frame(&mut self) -> AppControl {
        let (app, Some(win)) = (&mut self.app, self.win.as_mut()) else {
            return AppControl::Continue;
        };

        win.with_mut(|fields| {
            let mut ctx = FrameCtx {
                window: WindowCtx {
                    window: fields.window,
                },
                gpu: fields.gpu,
                input: fields.input_state,
                input_frame: fields.input_frame,
                time: fields.clock.tick(),
            };
            let control = app.on_frame(&mut ctx);

            // Wheel and click events belong to exactly one frame.
            fields.input_frame.clear();
            control
        })
    }
}

impl<A: CoreApp> ApplicationHandler for Handler<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.win.is_some() {
            return;
        }

        match WindowState::open(event_loop, &self.config, self.gpu_init.clone()) {
            Ok(win) => {
                log::debug!("window {:?} opened", win.id());
                win.request_redraw();
                self.win = Some(win);
            }
            Err(err) => {
                log::error!("{err:#}");
                self.fatal = Some(err);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        if self.app.wants_redraw() {
            if let Some(win) = &self.win {
                win.request_redraw();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(win) = self.win.as_mut() else {
            return;
        };
        if win.id() != window_id {
            return;
        }

        win.with_mut(|fields| {
            if let Some(ev) = translate_window_event(fields.window, fields.input_state, &event) {
                fields.input_state.apply_event(fields.input_frame, ev);
                fields.window.request_redraw();
            }
        });

        let mut control = self.app.on_window_event(&event);

        match event {
            WindowEvent::CloseRequested => control = AppControl::Exit,
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                win.fit_to_window();
            }
            WindowEvent::RedrawRequested => {
                if control == AppControl::Continue {
                    control = self.frame();
                }
            }
            _ => {}
        }

        if control == AppControl::Exit {
            if let Some(win) = self.win.take() {
                log::debug!("window {:?} closed", win.id());
            }
            event_loop.exit();
        }
    }
}
