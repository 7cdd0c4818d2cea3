use crate::catalog::Catalog;

/// Base crystals for opening any box.
const BASE_REWARD: u32 = 5;
/// Extra crystals for finishing under a minute, and again under thirty seconds.
const SPEED_BONUS: u32 = 5;

/// Crystal shards earned for opening box `box_index` (0-based) in `elapsed_secs`.
pub fn reward(elapsed_secs: u32, box_index: u32) -> u32 {
    let mut crystals = BASE_REWARD;
    if elapsed_secs < 60 {
        crystals += SPEED_BONUS;
    }
    if elapsed_secs < 30 {
        crystals += SPEED_BONUS;
    }
    crystals + (box_index + 1) * 2
}

/// Once every box of `theme_id` is open, unlock the next theme in catalog order.
/// Returns the id of the theme that was newly unlocked.
pub fn check_theme_unlock(catalog: &mut Catalog, theme_id: &str) -> Option<String> {
    let theme = catalog.get(theme_id)?;
    if !theme.is_finished() {
        return None;
    }
    let next = catalog.next_after(theme_id)?.id.clone();
    catalog.unlock(&next).then_some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reward_bonuses() {
        assert_eq!(reward(59, 0), 12);
        assert_eq!(reward(29, 0), 17);
        assert_eq!(reward(120, 4), 15);
        assert_eq!(reward(60, 0), 7);
        assert_eq!(reward(30, 2), 16);
    }

    #[test]
    fn finishing_tutorial_unlocks_steampunk() {
        let mut catalog = Catalog::builtin();
        assert_eq!(check_theme_unlock(&mut catalog, "tutorial"), None);
        catalog.mark_box_completed("tutorial");
        assert_eq!(check_theme_unlock(&mut catalog, "tutorial"), Some("steampunk".to_string()));
        assert!(catalog.get("steampunk").unwrap().unlocked);
        // Already unlocked: nothing new to report.
        assert_eq!(check_theme_unlock(&mut catalog, "tutorial"), None);
    }

    #[test]
    fn last_theme_unlocks_nothing() {
        let mut catalog = Catalog::builtin();
        for _ in 0..5 {
            catalog.mark_box_completed("temple");
        }
        assert_eq!(check_theme_unlock(&mut catalog, "temple"), None);
    }

    #[test]
    fn partial_theme_keeps_next_locked() {
        let mut catalog = Catalog::builtin();
        catalog.unlock("steampunk");
        catalog.mark_box_completed("steampunk");
        assert_eq!(check_theme_unlock(&mut catalog, "steampunk"), None);
        assert!(!catalog.get("crystal").unwrap().unlocked);
    }
}
