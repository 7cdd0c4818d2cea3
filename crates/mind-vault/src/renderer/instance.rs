use bytemuck::{Pod, Zeroable};

use crate::components::entity::Entity;

/// Per-entity render data read by the three.js renderer through a pointer.
/// Must match the TypeScript protocol: 10 floats = 40 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// Arena id, echoed back on pick.
    pub id: f32,
    /// `PickTag::code`, or -1 for decoration.
    pub tag: f32,
    pub slot: f32,
    /// Dial index or shape index.
    pub payload: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Rotation around the entity's own axis, in degrees.
    pub rotation_deg: f32,
    /// 0xRRGGBB, exact in an f32.
    pub color: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 10;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Flat list of entity instances for one frame.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(32),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for reads from JS memory.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the render buffer from arena entities.
/// Colors are looked up in `palette`.
pub fn build_render_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    palette: &[u32],
    buffer: &mut RenderBuffer,
) {
    buffer.clear();

    for entity in entities {
        let color = palette
            .get(entity.color as usize)
            .or_else(|| palette.first())
            .copied()
            .unwrap_or(0xFFFFFF);

        buffer.push(RenderInstance {
            id: entity.id.0 as f32,
            tag: entity.tag.map(|t| t.code() as f32).unwrap_or(-1.0),
            slot: entity.slot.0 as f32,
            payload: entity.payload as f32,
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            rotation_deg: entity.rotation_deg,
            color: color as f32,
            alpha: entity.alpha,
        });
    }
}
