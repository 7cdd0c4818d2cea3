//! Where each puzzle's entities sit on the box.
//!
//! Positions are in box space. Each slot has an anchor on one face of the
//! box; the renderer applies that face's orientation.

use std::collections::BTreeMap;
use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;

use crate::api::types::SlotIndex;
use crate::components::entity::Entity;
use crate::core::scene::Scene;
use crate::dispatch::{Dispatched, Feedback};
use crate::input::queue::PickTag;
use crate::puzzle::{PuzzleInstance, ShapeKind, DIALS};

/// Front top, right face, front bottom.
pub const SLOT_ANCHORS: [Vec3; 3] = [
    Vec3::new(0.0, 50.0, 105.0),
    Vec3::new(105.0, 0.0, 0.0),
    Vec3::new(0.0, -50.0, 105.0),
];

const DIAL_SPACING: f32 = 20.0;
const TARGET_MARKER_RAISE: f32 = 20.0;
const TARGET_MARKER_ALPHA: f32 = 0.7;
const SHAPE_ORBIT_RADIUS: f32 = 50.0;
const SHAPE_SLOT_SPACING: f32 = 25.0;
const CYLINDER_OFFSET: Vec3 = Vec3::new(0.0, 0.0, 5.0);

/// Anchor of a slot; slots past the third share the first anchor.
pub fn anchor(slot: SlotIndex) -> Vec3 {
    SLOT_ANCHORS
        .get(slot.0 as usize)
        .copied()
        .unwrap_or(SLOT_ANCHORS[0])
}

fn dial_offset(dial: usize) -> Vec3 {
    Vec3::new((dial as f32 - 1.0) * DIAL_SPACING, 0.0, 3.0)
}

/// Resting place of a floating shape before it is placed.
pub fn shape_start(slot: SlotIndex, shape: ShapeKind) -> Vec3 {
    let a = anchor(slot);
    let angle = shape.index() as f32 / 3.0 * TAU + FRAC_PI_2;
    Vec3::new(
        angle.cos() * SHAPE_ORBIT_RADIUS + a.x,
        angle.sin() * SHAPE_ORBIT_RADIUS + a.y,
        a.z + SHAPE_ORBIT_RADIUS,
    )
}

/// Where a shape snaps to once placed.
pub fn shape_target(slot: SlotIndex, shape: ShapeKind) -> Vec3 {
    let a = anchor(slot);
    Vec3::new(a.x + 3.0, a.y + (shape.index() as f32 - 1.0) * SHAPE_SLOT_SPACING, a.z)
}

/// Rebuild the arena from the current puzzle state.
pub fn populate(scene: &mut Scene, puzzles: &BTreeMap<SlotIndex, PuzzleInstance>) {
    scene.clear();
    for (&slot, puzzle) in puzzles {
        let base = anchor(slot);
        match puzzle {
            PuzzleInstance::ColorPattern(p) => {
                for dial in 0..DIALS {
                    let id = scene.next_id();
                    scene.spawn(
                        Entity::new(id, slot)
                            .with_tag(PickTag::ColorDial, dial as u32)
                            .with_pos(base + dial_offset(dial))
                            .with_color(p.current[dial]),
                    );
                    let id = scene.next_id();
                    scene.spawn(
                        Entity::new(id, slot)
                            .with_pos(base + dial_offset(dial) + Vec3::Y * TARGET_MARKER_RAISE)
                            .with_color(p.target[dial])
                            .with_alpha(TARGET_MARKER_ALPHA),
                    );
                }
            }
            PuzzleInstance::ShapeAssembly(p) => {
                for shape in ShapeKind::ALL {
                    let pos = if p.is_placed(shape) {
                        shape_target(slot, shape)
                    } else {
                        shape_start(slot, shape)
                    };
                    let id = scene.next_id();
                    scene.spawn(
                        Entity::new(id, slot)
                            .with_tag(PickTag::FloatingShape, shape.index() as u32)
                            .with_pos(pos)
                            .with_color(shape.index() as u8),
                    );
                }
            }
            PuzzleInstance::SpatialRotation(p) => {
                let id = scene.next_id();
                let mut cylinder = Entity::new(id, slot)
                    .with_tag(PickTag::RotationCylinder, 0)
                    .with_pos(base + CYLINDER_OFFSET);
                cylinder.rotation_deg = p.current as f32;
                scene.spawn(cylinder);
            }
        }
    }
}

/// Mirror an accepted interaction onto its entity.
pub fn apply(scene: &mut Scene, change: &Dispatched) {
    let slot = change.slot;
    match change.feedback {
        Feedback::Dial { dial, color } => {
            if let Some(e) = scene.find_pickable_mut(PickTag::ColorDial, slot, dial as u32) {
                e.color = color;
            }
        }
        Feedback::Shape(shape) => {
            let index = shape.index() as u32;
            if let Some(e) = scene.find_pickable_mut(PickTag::FloatingShape, slot, index) {
                e.pos = shape_target(slot, shape);
            }
        }
        Feedback::Rotation(degrees) => {
            if let Some(e) = scene.find_pickable_mut(PickTag::RotationCylinder, slot, 0) {
                e.rotation_deg = degrees as f32;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{ColorPattern, ShapeAssembly, SpatialRotation};

    fn puzzles() -> BTreeMap<SlotIndex, PuzzleInstance> {
        let mut puzzles = BTreeMap::new();
        puzzles.insert(
            SlotIndex(0),
            PuzzleInstance::ColorPattern(ColorPattern::with_target([2, 3, 4], 5)),
        );
        puzzles.insert(SlotIndex(1), PuzzleInstance::ShapeAssembly(ShapeAssembly::new()));
        puzzles.insert(
            SlotIndex(2),
            PuzzleInstance::SpatialRotation(SpatialRotation::with_target(72)),
        );
        puzzles
    }

    #[test]
    fn populate_spawns_every_part() {
        let mut scene = Scene::new();
        populate(&mut scene, &puzzles());
        // 3 dials + 3 target markers, 3 shapes, 1 cylinder
        assert_eq!(scene.len(), 10);
        assert_eq!(scene.in_slot(SlotIndex(0)).count(), 6);

        let dial = scene.find_pickable_mut(PickTag::ColorDial, SlotIndex(0), 0).unwrap();
        assert_eq!(dial.pos, Vec3::new(-20.0, 50.0, 108.0));
        assert_eq!(dial.color, 0);

        let cylinder = scene.find_pickable_mut(PickTag::RotationCylinder, SlotIndex(2), 0).unwrap();
        assert_eq!(cylinder.pos, Vec3::new(0.0, -50.0, 110.0));
    }

    #[test]
    fn shapes_float_in_front_until_placed() {
        let start = shape_start(SlotIndex(1), ShapeKind::Triangle);
        // First shape sits straight above the anchor.
        assert!((start.x - 105.0).abs() < 1e-3);
        assert!((start.y - 50.0).abs() < 1e-3);
        assert_eq!(start.z, 50.0);
        assert_eq!(shape_target(SlotIndex(1), ShapeKind::Circle), Vec3::new(108.0, 25.0, 0.0));
    }

    #[test]
    fn apply_moves_the_matching_entity() {
        let mut scene = Scene::new();
        populate(&mut scene, &puzzles());

        apply(
            &mut scene,
            &Dispatched {
                slot: SlotIndex(1),
                feedback: Feedback::Shape(ShapeKind::Square),
                just_solved: false,
            },
        );
        apply(
            &mut scene,
            &Dispatched {
                slot: SlotIndex(2),
                feedback: Feedback::Rotation(144),
                just_solved: false,
            },
        );

        let square = scene.find_pickable_mut(PickTag::FloatingShape, SlotIndex(1), 1).unwrap();
        assert_eq!(square.pos, shape_target(SlotIndex(1), ShapeKind::Square));
        let cylinder = scene.find_pickable_mut(PickTag::RotationCylinder, SlotIndex(2), 0).unwrap();
        assert_eq!(cylinder.rotation_deg, 144.0);
    }
}
