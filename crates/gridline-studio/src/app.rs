use std::time::Instant;

use anyhow::{Context, Result};

use gridline_engine::attribute::Attribute;
use gridline_engine::coords::{Vec2, Viewport};
use gridline_engine::core::{App, AppControl, FrameCtx};
use gridline_engine::gesture::{GestureState, WheelGesture};
use gridline_engine::input::{InputFrame, Key};
use gridline_engine::render::{ProgramLayout, StripProgram, StripRenderer, UniformBlockLayout};
use gridline_engine::time::Animation;
use gridline_engine::uniform::{UniformKind, UniformStore};

use crate::config::StudioConfig;
use crate::scene;

const SHADER: &str = include_str!("../shaders/plain.wgsl");

/// Studio session state: the scene program, its renderer and the view
/// transform driven by wheel gestures or the orbit animation.
pub struct StudioContext {
    config: StudioConfig,
    program: StripProgram,
    renderer: StripRenderer,
    gesture: GestureState,
    animation: Animation,
    /// Geometry changed since the last upload.
    geometry_dirty: bool,
    started: Instant,
    painted: bool,
}

impl StudioContext {
    pub fn new(config: StudioConfig) -> Result<Self> {
        let started = Instant::now();

        let mut vertex = Attribute::float32("vertex", 2u32)?;
        vertex.assign_f32(&scene::build(&config.grid))?;

        let mut uniforms = UniformStore::new();
        uniforms.declare("ratio", UniformKind::Float)?;
        uniforms.declare("scale", UniformKind::Float)?;
        uniforms.declare("offset", UniformKind::Vec2)?;
        uniforms.declare("color", UniformKind::Vec4)?;
        uniforms.assign("ratio", &(config.height / config.width))?;
        uniforms.assign("color", &config.stroke.to_array())?;

        let block = UniformBlockLayout::from_store(&uniforms).context("uniform block layout")?;
        let layout = ProgramLayout::new("gridline plain", SHADER, block).with_attribute("vertex", 0)?;

        let mut studio = Self {
            animation: Animation::new(config.orbit_speed),
            config,
            program: StripProgram::new(vec![vertex], uniforms),
            renderer: StripRenderer::new(layout),
            gesture: GestureState::default(),
            geometry_dirty: true,
            started,
            painted: false,
        };
        studio.sync_transform()?;
        Ok(studio)
    }

    /// Writes the gesture transform to the `offset` / `scale` uniforms.
    fn sync_transform(&mut self) -> Result<()> {
        let (offset, scale) = self.gesture.transform();
        self.set_transform(offset, scale)
    }

    fn set_transform(&mut self, offset: Vec2, scale: f32) -> Result<()> {
        let uniforms = self.program.uniforms_mut();
        uniforms.assign("offset", &offset)?;
        uniforms.assign("scale", &scale)?;
        Ok(())
    }

    fn toggle_orbit(&mut self) {
        if self.animation.is_running() {
            self.animation.stop();
            log::info!("orbit stopped");
        } else {
            self.animation.start();
            log::info!("orbit started");
        }
    }

    /// Applies this frame's wheel, click and key input.
    fn handle_input(&mut self, input: &InputFrame, viewport: Viewport) -> Result<()> {
        if input.key_pressed(Key::Space) {
            self.toggle_orbit();
        }
        if input.key_pressed(Key::Escape) && self.animation.is_running() {
            self.animation.stop();
            log::info!("orbit stopped");
        }

        let mut moved = false;

        for wheel in &input.wheel {
            self.gesture.apply(&WheelGesture::from_input(wheel), viewport);
            moved = true;
        }

        if input.clicks.iter().any(|c| c.modifiers.command()) {
            self.gesture.reset();
            log::debug!("view reset");
            moved = true;
        }

        if moved {
            // Manual navigation takes over from the orbit.
            self.animation.stop();
            self.sync_transform()?;
        }
        Ok(())
    }

    fn step(&mut self, input: &InputFrame, viewport: Viewport, dt: f32) -> Result<()> {
        self.handle_input(input, viewport)?;

        if let Some(phase) = self.animation.tick(dt) {
            let (offset, scale) = scene::orbit(phase);
            self.set_transform(offset, scale)?;
        }

        self.program
            .uniforms_mut()
            .assign("ratio", &viewport.aspect_ratio())?;

        let full = std::mem::take(&mut self.geometry_dirty);
        let count = self.program.update(&mut self.renderer, full)?;
        if full {
            log::debug!("uploaded {count} vertices");
        }
        Ok(())
    }
}

impl App for StudioContext {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let viewport = ctx.viewport();
        if !viewport.is_valid() {
            return AppControl::Continue;
        }

        if let Err(e) = self.step(ctx.input_frame, viewport, ctx.time.dt) {
            log::error!("frame update failed: {e:#}");
            return AppControl::Exit;
        }

        let clear = self.config.clear;
        let renderer = &mut self.renderer;
        let control = ctx.render(clear, |rctx, target| renderer.render(rctx, target));

        if !self.painted {
            self.painted = true;
            log::info!("first paint ({:.1?} after start)", self.started.elapsed());
        }
        control
    }

    fn wants_redraw(&self) -> bool {
        self.animation.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridline_engine::input::{
        ButtonEvent, ButtonState, Modifiers, MouseButton, MouseWheelDelta, WheelEvent,
    };
    use gridline_engine::uniform::UniformValue;

    use crate::config::GridConfig;

    const VIEW: Viewport = Viewport::new(800.0, 600.0);

    fn studio() -> StudioContext {
        let config = StudioConfig {
            grid: GridConfig {
                repetitions: (2, 2),
                ..GridConfig::default()
            },
            ..StudioConfig::default()
        };
        StudioContext::new(config).unwrap()
    }

    fn uniform(studio: &StudioContext, name: &str) -> Option<UniformValue> {
        studio.program.uniforms().get(name).and_then(|u| u.value()).copied()
    }

    fn ctrl_wheel(y: f32) -> WheelEvent {
        WheelEvent {
            delta: MouseWheelDelta::Line { x: 0.0, y },
            modifiers: Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
            x: 400.0,
            y: 300.0,
        }
    }

    fn press(key: Key) -> InputFrame {
        let mut frame = InputFrame::default();
        frame.keys_pressed.insert(key);
        frame
    }

    #[test]
    fn starts_with_identity_transform() {
        let s = studio();
        assert_eq!(uniform(&s, "scale"), Some(UniformValue::Float(1.0)));
        assert_eq!(uniform(&s, "offset"), Some(UniformValue::Vec2([0.0, 0.0])));
        assert_eq!(uniform(&s, "color"), Some(UniformValue::Vec4([1.0; 4])));
    }

    #[test]
    fn ctrl_wheel_zooms() {
        let mut s = studio();
        let mut frame = InputFrame::default();
        frame.wheel.push(ctrl_wheel(1.0));

        s.handle_input(&frame, VIEW).unwrap();

        // One notch: raw 120 / 4000 = 0.03.
        assert!((s.gesture.scale - 0.03).abs() < 1e-12);
        let expected = s.gesture.scale_factor() as f32;
        assert_eq!(uniform(&s, "scale"), Some(UniformValue::Float(expected)));
    }

    #[test]
    fn command_click_resets_view() {
        let mut s = studio();
        s.gesture = GestureState::new(0.4, -0.2, 1.5);

        let mut frame = InputFrame::default();
        frame.clicks.push(ButtonEvent {
            button: MouseButton::Left,
            state: ButtonState::Pressed,
            x: 10.0,
            y: 10.0,
            modifiers: Modifiers {
                alt: true,
                ..Modifiers::default()
            },
        });
        s.handle_input(&frame, VIEW).unwrap();

        assert_eq!(s.gesture, GestureState::default());
        assert_eq!(uniform(&s, "offset"), Some(UniformValue::Vec2([0.0, 0.0])));
    }

    #[test]
    fn plain_click_keeps_view() {
        let mut s = studio();
        s.gesture = GestureState::new(0.4, -0.2, 1.5);

        let mut frame = InputFrame::default();
        frame.clicks.push(ButtonEvent {
            button: MouseButton::Left,
            state: ButtonState::Pressed,
            x: 10.0,
            y: 10.0,
            modifiers: Modifiers::default(),
        });
        s.handle_input(&frame, VIEW).unwrap();

        assert_eq!(s.gesture, GestureState::new(0.4, -0.2, 1.5));
    }

    #[test]
    fn space_toggles_and_escape_stops_orbit() {
        let mut s = studio();

        s.handle_input(&press(Key::Space), VIEW).unwrap();
        assert!(s.animation.is_running());
        assert!(s.wants_redraw());

        s.handle_input(&press(Key::Escape), VIEW).unwrap();
        assert!(!s.animation.is_running());

        s.handle_input(&press(Key::Space), VIEW).unwrap();
        s.handle_input(&press(Key::Space), VIEW).unwrap();
        assert!(!s.animation.is_running());
    }

    #[test]
    fn wheel_takes_over_from_orbit() {
        let mut s = studio();
        s.handle_input(&press(Key::Space), VIEW).unwrap();

        let mut frame = InputFrame::default();
        frame.wheel.push(ctrl_wheel(-1.0));
        s.handle_input(&frame, VIEW).unwrap();

        assert!(!s.animation.is_running());
    }
}
