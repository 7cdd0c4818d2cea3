use crate::core::rng::Rng;

/// How long the hint panel stays up, in seconds.
pub const HINT_SECONDS: f32 = 3.0;

pub const HINTS: [&str; 5] = [
    "Look for glowing elements - they often hold the key!",
    "Try different combinations - patience is your ally!",
    "Each puzzle has a unique pattern - observe carefully!",
    "Colors and shapes follow logical sequences!",
    "Sometimes the solution is simpler than it appears!",
];

pub const ALL_SOLVED: &str = "All puzzles solved! Great work!";

/// Index into `HINTS`, or `None` when there is nothing left to solve.
pub fn pick_hint(rng: &mut Rng, unsolved_remaining: bool) -> Option<u32> {
    unsolved_remaining.then(|| rng.next_int(HINTS.len() as u32))
}

/// Text for a hint index as returned by `pick_hint`.
pub fn hint_text(message: Option<u32>) -> &'static str {
    match message {
        Some(i) => HINTS.get(i as usize).copied().unwrap_or(HINTS[0]),
        None => ALL_SOLVED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_stay_in_table() {
        let mut rng = Rng::new(5);
        for _ in 0..50 {
            let i = pick_hint(&mut rng, true).unwrap();
            assert!((i as usize) < HINTS.len());
        }
    }

    #[test]
    fn nothing_left_reports_all_solved() {
        let mut rng = Rng::new(5);
        assert_eq!(pick_hint(&mut rng, false), None);
        assert_eq!(hint_text(None), ALL_SOLVED);
    }
}
