//! Aggregation of per-finger touch events into touch-list snapshots.
//!
//! Some platforms (winit) report each finger separately while the
//! controls reason about the whole active list, the way DOM touch events
//! deliver it. [`TouchTracker`] bridges the two.

use glam::Vec2;

use super::event::{InputEvent, Touches};

/// Touch event phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// A finger touched the screen.
    Started,
    /// A finger moved on the screen.
    Moved,
    /// A finger was lifted from the screen.
    Ended,
    /// The touch was cancelled by the platform.
    Cancelled,
}

/// A single active touch point.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveTouch {
    id: u64,
    position: Vec2,
}

/// Tracks active touch points in the order they started.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    touches: Vec<ActiveTouch>,
}

impl TouchTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fingers currently down.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.touches.len()
    }

    /// Forget all active touches (e.g. when the window loses focus).
    pub fn clear(&mut self) {
        self.touches.clear();
    }

    /// Record one finger's event and return the matching touch-list event.
    ///
    /// Moves and ends for fingers that were never started are ignored.
    pub fn handle(
        &mut self,
        id: u64,
        phase: TouchPhase,
        position: Vec2,
    ) -> Option<InputEvent> {
        match phase {
            TouchPhase::Started => {
                if let Some(existing) =
                    self.touches.iter_mut().find(|t| t.id == id)
                {
                    existing.position = position;
                } else {
                    self.touches.push(ActiveTouch { id, position });
                }
                Some(InputEvent::TouchStart(self.snapshot()))
            }
            TouchPhase::Moved => {
                let touch = self.touches.iter_mut().find(|t| t.id == id)?;
                touch.position = position;
                Some(InputEvent::TouchMove(self.snapshot()))
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                let index = self.touches.iter().position(|t| t.id == id)?;
                let _ = self.touches.remove(index);
                Some(InputEvent::TouchEnd(self.snapshot()))
            }
        }
    }

    /// Record a winit touch event.
    #[cfg(feature = "viewer")]
    pub fn handle_winit(
        &mut self,
        touch: &winit::event::Touch,
    ) -> Option<InputEvent> {
        let phase = match touch.phase {
            winit::event::TouchPhase::Started => TouchPhase::Started,
            winit::event::TouchPhase::Moved => TouchPhase::Moved,
            winit::event::TouchPhase::Ended => TouchPhase::Ended,
            winit::event::TouchPhase::Cancelled => TouchPhase::Cancelled,
        };
        let position =
            Vec2::new(touch.location.x as f32, touch.location.y as f32);
        self.handle(touch.id, phase, position)
    }

    fn snapshot(&self) -> Touches {
        let points: Vec<Vec2> =
            self.touches.iter().map(|t| t.position).collect();
        Touches::from_points(&points)
    }
}
