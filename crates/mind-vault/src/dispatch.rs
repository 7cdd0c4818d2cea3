//! Routes a pick to the puzzle it belongs to.
//!
//! Routing is by tag only: a `ColorDial` pick can only ever advance a color
//! panel. Picks that hit nothing valid (unknown slot, tag that does not match
//! the slot's puzzle kind, out-of-range payload, solved puzzle) are dropped.

use std::collections::BTreeMap;

use crate::api::types::{GameEvent, SlotIndex};
use crate::effects::{
    EffectSink, CLICK_DURATION, CYLINDER_HZ, DIAL_BASE_HZ, DIAL_STEP_HZ, SHAPE_BASE_HZ,
    SHAPE_STEP_HZ,
};
use crate::input::queue::{PickEvent, PickTag};
use crate::puzzle::{PuzzleInstance, PuzzleKind, ShapeKind};

/// What changed, for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Dial { dial: u8, color: u8 },
    Shape(ShapeKind),
    Rotation(u16),
}

impl Feedback {
    pub fn kind(&self) -> PuzzleKind {
        match self {
            Feedback::Dial { .. } => PuzzleKind::ColorPattern,
            Feedback::Shape(_) => PuzzleKind::ShapeAssembly,
            Feedback::Rotation(_) => PuzzleKind::SpatialRotation,
        }
    }

    fn tone(&self) -> f32 {
        match *self {
            Feedback::Dial { dial, .. } => DIAL_BASE_HZ + dial as f32 * DIAL_STEP_HZ,
            Feedback::Shape(shape) => SHAPE_BASE_HZ + shape.index() as f32 * SHAPE_STEP_HZ,
            Feedback::Rotation(_) => CYLINDER_HZ,
        }
    }

    fn event(&self, slot: SlotIndex) -> GameEvent {
        match *self {
            Feedback::Dial { dial, color } => GameEvent::DialChanged { slot, dial, color },
            Feedback::Shape(shape) => GameEvent::ShapePlaced { slot, shape },
            Feedback::Rotation(degrees) => GameEvent::CylinderRotated { slot, degrees },
        }
    }
}

/// An accepted interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatched {
    pub slot: SlotIndex,
    pub feedback: Feedback,
    /// The pick solved the puzzle in `slot`.
    pub just_solved: bool,
}

/// Apply one pick and request its effects: click tone, haptic pulse,
/// particles and the change event, plus the success chord when it solved the
/// puzzle.
pub fn dispatch(
    puzzles: &mut BTreeMap<SlotIndex, PuzzleInstance>,
    pick: PickEvent,
    fx: &mut EffectSink,
) -> Option<Dispatched> {
    let Some(puzzle) = puzzles.get_mut(&pick.slot) else {
        log::debug!("pick on empty slot {:?}", pick.slot);
        return None;
    };

    let (feedback, just_solved) = match (pick.tag, puzzle) {
        (PickTag::ColorDial, PuzzleInstance::ColorPattern(p)) => {
            let accepted = p.advance_dial(pick.payload as usize)?;
            let feedback = Feedback::Dial {
                dial: pick.payload as u8,
                color: accepted.value,
            };
            (feedback, accepted.just_solved)
        }
        (PickTag::FloatingShape, PuzzleInstance::ShapeAssembly(p)) => {
            let accepted = ShapeKind::from_index(pick.payload).and_then(|s| p.place(s))?;
            (Feedback::Shape(accepted.value), accepted.just_solved)
        }
        (PickTag::RotationCylinder, PuzzleInstance::SpatialRotation(p)) => {
            let accepted = p.rotate()?;
            (Feedback::Rotation(accepted.value), accepted.just_solved)
        }
        (tag, puzzle) => {
            log::debug!(
                "{:?} pick does not match {:?} in slot {:?}",
                tag,
                puzzle.kind(),
                pick.slot
            );
            return None;
        }
    };

    fx.tone(feedback.tone(), CLICK_DURATION);
    fx.event(feedback.event(pick.slot));
    fx.haptic(1);
    fx.particles(pick.slot);

    if just_solved {
        log::info!("puzzle in slot {} solved", pick.slot.0);
        fx.event(GameEvent::PuzzleSolved { slot: pick.slot });
        fx.success_chord();
        fx.particles(pick.slot);
    }

    Some(Dispatched {
        slot: pick.slot,
        feedback,
        just_solved,
    })
}
