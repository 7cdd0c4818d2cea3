use serde::Serialize;

use super::Accepted;
use crate::core::rng::Rng;

/// Degrees turned per click.
pub const STEP_DEGREES: u16 = 72;
/// The five reachable orientations.
pub const TARGETS: [u16; 5] = [0, 72, 144, 216, 288];

/// Turn the cylinder until its holes line up with the target orientation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpatialRotation {
    /// Always a multiple of 72 in [0, 360).
    pub current: u16,
    pub target: u16,
    pub solved: bool,
    pub attempts: u32,
}

impl SpatialRotation {
    pub fn new(rng: &mut Rng) -> Self {
        let target = TARGETS[rng.next_int(TARGETS.len() as u32) as usize];
        Self::with_target(target)
    }

    /// Build with a fixed target, snapped down to a valid orientation.
    pub fn with_target(target: u16) -> Self {
        let target = (target % 360) / STEP_DEGREES * STEP_DEGREES;
        Self {
            current: 0,
            target,
            solved: false,
            attempts: 0,
        }
    }

    /// Turn by one step. Returns the new orientation in degrees.
    pub fn rotate(&mut self) -> Option<Accepted<u16>> {
        if self.solved {
            return None;
        }
        self.current = (self.current + STEP_DEGREES) % 360;
        self.attempts += 1;
        Some(Accepted {
            value: self.current,
            just_solved: self.refresh(),
        })
    }

    pub fn is_aligned(&self) -> bool {
        self.current == self.target
    }

    fn refresh(&mut self) -> bool {
        if !self.solved && self.is_aligned() {
            self.solved = true;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.solved = false;
        self.attempts = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_stays_on_the_grid() {
        let mut r = SpatialRotation::with_target(144);
        for _ in 0..2 {
            r.rotate();
        }
        r.reset();
        for _ in 0..20 {
            r.rotate();
            assert_eq!(r.current % STEP_DEGREES, 0);
            assert!(r.current < 360);
            if r.solved {
                break;
            }
        }
    }

    #[test]
    fn reaches_target_after_expected_turns() {
        for &target in &TARGETS[1..] {
            let mut r = SpatialRotation::with_target(target);
            let turns = (target / STEP_DEGREES) % 5;
            for i in 0..turns {
                let step = r.rotate().unwrap();
                assert_eq!(step.just_solved, i + 1 == turns);
            }
            assert!(r.solved, "target {}", target);
        }
    }

    #[test]
    fn zero_target_needs_a_full_turn() {
        let mut r = SpatialRotation::with_target(0);
        for _ in 0..4 {
            assert!(!r.rotate().unwrap().just_solved);
        }
        assert!(r.rotate().unwrap().just_solved);
        assert_eq!(r.current, 0);
    }

    #[test]
    fn solved_cylinder_is_locked() {
        let mut r = SpatialRotation::with_target(72);
        r.rotate();
        assert!(r.rotate().is_none());
        assert_eq!(r.current, 72);
    }

    #[test]
    fn random_targets_are_valid() {
        let mut rng = Rng::new(5);
        for _ in 0..50 {
            let r = SpatialRotation::new(&mut rng);
            assert!(TARGETS.contains(&r.target));
        }
    }
}
