//! Per-puzzle runtime state and solve rules.
//!
//! A box holds up to three `PuzzleInstance`s keyed by slot. Every mutation
//! re-checks the instance's solved predicate; the false→true edge is reported
//! exactly once through `Accepted::just_solved`, and a solved instance rejects
//! all further mutations.

mod color;
mod rotation;
mod shape;

pub use color::{ColorPattern, DIALS};
pub use rotation::{SpatialRotation, STEP_DEGREES, TARGETS};
pub use shape::{ShapeAssembly, ShapeKind};

use serde::Serialize;

use crate::catalog::ThemeDefinition;
use crate::core::rng::Rng;

/// The result of a mutation the puzzle accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accepted<T> {
    /// New value for the renderer (dial color, placed shape, angle).
    pub value: T,
    /// This mutation solved the puzzle.
    pub just_solved: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PuzzleKind {
    ColorPattern,
    ShapeAssembly,
    SpatialRotation,
}

impl PuzzleKind {
    /// Map a roster entry to a puzzle kind. Types without a mechanism of
    /// their own are played as color panels.
    pub fn from_roster(name: &str) -> Self {
        match name {
            "colorPattern" => PuzzleKind::ColorPattern,
            "shapeAssembly" => PuzzleKind::ShapeAssembly,
            "spatialRotation" => PuzzleKind::SpatialRotation,
            _ => PuzzleKind::ColorPattern,
        }
    }
}

/// Puzzle kinds for one box: the first three roster entries.
pub fn box_roster(theme: &ThemeDefinition) -> Vec<PuzzleKind> {
    theme
        .puzzle_types
        .iter()
        .take(3)
        .map(|t| PuzzleKind::from_roster(t))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PuzzleInstance {
    ColorPattern(ColorPattern),
    ShapeAssembly(ShapeAssembly),
    SpatialRotation(SpatialRotation),
}

impl PuzzleInstance {
    /// Build a fresh puzzle of `kind`, drawing its target from `rng`.
    pub fn create(kind: PuzzleKind, theme: &ThemeDefinition, rng: &mut Rng) -> Self {
        match kind {
            PuzzleKind::ColorPattern => {
                PuzzleInstance::ColorPattern(ColorPattern::new(theme.palette_len(), rng))
            }
            PuzzleKind::ShapeAssembly => PuzzleInstance::ShapeAssembly(ShapeAssembly::new()),
            PuzzleKind::SpatialRotation => {
                PuzzleInstance::SpatialRotation(SpatialRotation::new(rng))
            }
        }
    }

    pub fn kind(&self) -> PuzzleKind {
        match self {
            PuzzleInstance::ColorPattern(_) => PuzzleKind::ColorPattern,
            PuzzleInstance::ShapeAssembly(_) => PuzzleKind::ShapeAssembly,
            PuzzleInstance::SpatialRotation(_) => PuzzleKind::SpatialRotation,
        }
    }

    pub fn is_solved(&self) -> bool {
        match self {
            PuzzleInstance::ColorPattern(p) => p.solved,
            PuzzleInstance::ShapeAssembly(p) => p.solved,
            PuzzleInstance::SpatialRotation(p) => p.solved,
        }
    }

    pub fn attempts(&self) -> u32 {
        match self {
            PuzzleInstance::ColorPattern(p) => p.attempts,
            PuzzleInstance::ShapeAssembly(p) => p.attempts,
            PuzzleInstance::SpatialRotation(p) => p.attempts,
        }
    }

    /// Back to the initial state; targets are kept.
    pub fn reset(&mut self) {
        match self {
            PuzzleInstance::ColorPattern(p) => p.reset(),
            PuzzleInstance::ShapeAssembly(p) => p.reset(),
            PuzzleInstance::SpatialRotation(p) => p.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn unknown_roster_entries_become_color_panels() {
        assert_eq!(PuzzleKind::from_roster("steamValves"), PuzzleKind::ColorPattern);
        assert_eq!(PuzzleKind::from_roster("shapeAssembly"), PuzzleKind::ShapeAssembly);
    }

    #[test]
    fn tutorial_box_has_one_of_each() {
        let catalog = Catalog::builtin();
        let roster = box_roster(catalog.get("tutorial").unwrap());
        assert_eq!(
            roster,
            vec![PuzzleKind::ColorPattern, PuzzleKind::ShapeAssembly, PuzzleKind::SpatialRotation]
        );
    }

    #[test]
    fn created_instances_start_unsolved() {
        let catalog = Catalog::builtin();
        let theme = catalog.get("tutorial").unwrap();
        let mut rng = Rng::new(11);
        for kind in box_roster(theme) {
            let p = PuzzleInstance::create(kind, theme, &mut rng);
            assert_eq!(p.kind(), kind);
            assert!(!p.is_solved());
            assert_eq!(p.attempts(), 0);
        }
    }

    #[test]
    fn reset_clears_progress() {
        let mut p = PuzzleInstance::ShapeAssembly(ShapeAssembly::new());
        if let PuzzleInstance::ShapeAssembly(a) = &mut p {
            for s in ShapeKind::ALL {
                a.place(s);
            }
        }
        assert!(p.is_solved());
        p.reset();
        assert!(!p.is_solved());
        assert_eq!(p.attempts(), 0);
    }
}
