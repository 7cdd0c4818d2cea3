use glam::Vec3;

use crate::api::types::{EntityId, SlotIndex};
use crate::input::queue::{PickEvent, PickTag};

/// One renderable record in the arena.
/// The core only ever refers to these by id, slot and tag; the renderer
/// owns the actual meshes.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// Pick capability, `None` for decoration (target markers).
    pub tag: Option<PickTag>,
    /// Puzzle slot the entity belongs to.
    pub slot: SlotIndex,
    /// Dial index or shape index.
    pub payload: u32,
    /// Position in box space.
    pub pos: Vec3,
    /// Rotation around the entity's own axis, in degrees.
    pub rotation_deg: f32,
    /// Index into the theme palette.
    pub color: u8,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId, slot: SlotIndex) -> Self {
        Self {
            id,
            tag: None,
            slot,
            payload: 0,
            pos: Vec3::ZERO,
            rotation_deg: 0.0,
            color: 0,
            alpha: 1.0,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: PickTag, payload: u32) -> Self {
        self.tag = Some(tag);
        self.payload = payload;
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_color(mut self, color: u8) -> Self {
        self.color = color;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// The pick event this entity produces, if it is interactive.
    pub fn pick_event(&self) -> Option<PickEvent> {
        let tag = self.tag?;
        Some(PickEvent {
            tag,
            slot: self.slot,
            payload: self.payload,
        })
    }
}
