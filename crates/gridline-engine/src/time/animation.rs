use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared stop flag for an [`Animation`].
///
/// Clones observe the same flag, so any holder can stop the animation; the
/// animation notices on its next tick.
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Frame-driven phase accumulator.
///
/// `tick` advances the phase by `speed * dt` while running. Once stopped
/// (through [`stop`](Self::stop) or any [`StopSignal`] clone) ticks are
/// no-ops until the next [`start`](Self::start). The phase is kept across
/// restarts.
#[derive(Debug)]
pub struct Animation {
    phase: f64,
    /// Phase units per second.
    speed: f64,
    signal: Option<StopSignal>,
}

impl Animation {
    pub fn new(speed: f64) -> Self {
        Self {
            phase: 0.0,
            speed,
            signal: None,
        }
    }

    /// Starts (or restarts) the animation and returns a handle that stops it.
    pub fn start(&mut self) -> StopSignal {
        if let Some(old) = self.signal.take() {
            old.stop();
        }
        let signal = StopSignal::new();
        self.signal = Some(signal.clone());
        signal
    }

    pub fn stop(&mut self) {
        if let Some(signal) = self.signal.take() {
            signal.stop();
        }
    }

    pub fn is_running(&self) -> bool {
        self.signal.as_ref().is_some_and(|s| !s.is_stopped())
    }

    /// Advances by `dt` seconds; returns the new phase, or `None` when stopped.
    pub fn tick(&mut self, dt: f32) -> Option<f64> {
        if !self.is_running() {
            self.signal = None;
            return None;
        }
        self.phase += self.speed * f64::from(dt);
        Some(self.phase)
    }

    #[inline]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }
}
