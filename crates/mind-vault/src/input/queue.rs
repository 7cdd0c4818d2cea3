use serde::Serialize;

use crate::api::types::{EntityId, SlotIndex};
use crate::input::command::Command;

/// Capability of an entity the player can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PickTag {
    ColorDial,
    FloatingShape,
    RotationCylinder,
}

impl PickTag {
    pub fn code(self) -> u32 {
        match self {
            PickTag::ColorDial => 0,
            PickTag::FloatingShape => 1,
            PickTag::RotationCylinder => 2,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(PickTag::ColorDial),
            1 => Some(PickTag::FloatingShape),
            2 => Some(PickTag::RotationCylinder),
            _ => None,
        }
    }
}

/// The renderer's raycast hit: which kind of entity, in which slot,
/// plus the dial index or shape index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickEvent {
    pub tag: PickTag,
    pub slot: SlotIndex,
    pub payload: u32,
}

impl PickEvent {
    pub fn new(tag: PickTag, slot: u32, payload: u32) -> Self {
        Self {
            tag,
            slot: SlotIndex(slot),
            payload,
        }
    }
}

/// Input event types the game understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The renderer resolved a click/tap to a tagged entity.
    Pick(PickEvent),
    /// The renderer hit an arena entity by id; resolved through the scene.
    PickEntity { id: EntityId },
    /// A custom event from the UI layer (menu buttons, settings, etc.).
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
    /// The window lost focus.
    Blur,
    /// The window regained focus.
    Focus,
}

impl InputEvent {
    /// Convenience for pushing a typed command.
    pub fn command(command: Command) -> Self {
        let (kind, a) = command.encode();
        InputEvent::Custom { kind, a, b: 0.0, c: 0.0 }
    }
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
