/// Input event types the engine understands.
/// Pointer coordinates are in world units of the app's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch/click began at (x, y).
    PointerDown { x: f32, y: f32 },
    /// A touch/click ended at (x, y).
    PointerUp { x: f32, y: f32 },
    /// A touch/cursor moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// Wheel scrolled; positive = toward the user (zoom in).
    Wheel { delta: f32 },
    /// The drawing surface changed size.
    Resize { width: f32, height: f32 },
    /// A selectable control was activated (planet button, list entry).
    /// Signed so that bogus host values reach the app and get rejected there.
    Select { index: i64 },
    /// The sidebar toggle control was pressed.
    TogglePanel,
    /// App-defined event; `kind` identifies it, `a`, `b`, `c` carry data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events.
/// The host pushes events as they happen; the runner hands them to the app on
/// the next fixed step and then drains the queue.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Take all pending events, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
