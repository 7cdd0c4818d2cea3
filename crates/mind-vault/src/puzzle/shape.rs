use serde::{Deserialize, Serialize};

use super::Accepted;

/// The three floating shapes of an assembly panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Triangle,
    Square,
    Circle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Triangle, ShapeKind::Square, ShapeKind::Circle];

    pub fn index(self) -> usize {
        match self {
            ShapeKind::Triangle => 0,
            ShapeKind::Square => 1,
            ShapeKind::Circle => 2,
        }
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}

/// Click each floating shape to drop it into its slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeAssembly {
    /// Indexed by `ShapeKind::index`.
    pub placed: [bool; 3],
    pub solved: bool,
    pub attempts: u32,
}

impl ShapeAssembly {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_placed(&self, shape: ShapeKind) -> bool {
        self.placed[shape.index()]
    }

    /// Place a shape. Rejected if the panel is solved or the shape already sits in its slot.
    pub fn place(&mut self, shape: ShapeKind) -> Option<Accepted<ShapeKind>> {
        if self.solved || self.is_placed(shape) {
            return None;
        }
        self.placed[shape.index()] = true;
        self.attempts += 1;
        Some(Accepted {
            value: shape,
            just_solved: self.refresh(),
        })
    }

    pub fn all_placed(&self) -> bool {
        self.placed.iter().all(|&p| p)
    }

    fn refresh(&mut self) -> bool {
        if !self.solved && self.all_placed() {
            self.solved = true;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_exactly_on_last_placement() {
        let mut a = ShapeAssembly::new();
        assert!(!a.place(ShapeKind::Circle).unwrap().just_solved);
        assert!(!a.place(ShapeKind::Triangle).unwrap().just_solved);
        assert!(!a.solved);
        assert!(a.place(ShapeKind::Square).unwrap().just_solved);
        assert!(a.solved);
    }

    #[test]
    fn placing_twice_is_a_no_op() {
        let mut a = ShapeAssembly::new();
        assert!(a.place(ShapeKind::Square).is_some());
        assert!(a.place(ShapeKind::Square).is_none());
        assert_eq!(a.attempts, 1);
    }

    #[test]
    fn solved_event_never_refires() {
        let mut a = ShapeAssembly::new();
        let fired: usize = ShapeKind::ALL
            .iter()
            .chain(ShapeKind::ALL.iter())
            .filter_map(|&s| a.place(s))
            .filter(|step| step.just_solved)
            .count();
        assert_eq!(fired, 1);
    }

    #[test]
    fn shape_index_round_trips() {
        for shape in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_index(shape.index() as u32), Some(shape));
        }
        assert_eq!(ShapeKind::from_index(3), None);
    }
}
