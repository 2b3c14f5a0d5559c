/// Input event types the engine understands.
/// Generic, no game-specific semantics. Pointer coordinates are CSS pixels
/// relative to the top-left corner of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A button was pressed at (x, y). `button` follows `MouseEvent.button`
    /// (0 = primary, 1 = middle, 2 = secondary).
    PointerDown { x: f32, y: f32, button: u32 },
    /// A button was released at (x, y).
    PointerUp { x: f32, y: f32, button: u32 },
    /// The cursor moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// Wheel scrolled; positive `delta_y` scrolls away from the user (zoom out).
    Wheel { delta_y: f32 },
    /// The canvas was resized to `width` × `height` CSS pixels.
    Resize { width: f32, height: f32 },
    /// A custom event from the UI layer (buttons, sliders, etc.).
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
