use crate::progress::AnimationSpeed;

// Custom event kinds (UI shell → Rust)
pub const CUSTOM_SELECT_THEME: u32 = 1;
pub const CUSTOM_START: u32 = 2;
pub const CUSTOM_TOGGLE_PAUSE: u32 = 3;
pub const CUSTOM_RESET_PUZZLES: u32 = 4;
pub const CUSTOM_BACK_TO_MENU: u32 = 5;
pub const CUSTOM_CONTINUE: u32 = 6;
pub const CUSTOM_REPLAY: u32 = 7;
pub const CUSTOM_HINT: u32 = 8;
pub const CUSTOM_TOGGLE_AUDIO: u32 = 9;
pub const CUSTOM_SET_VOLUME: u32 = 10;
pub const CUSTOM_SET_HIGH_CONTRAST: u32 = 11;
pub const CUSTOM_SET_HAPTICS: u32 = 12;
pub const CUSTOM_SET_ANIMATION_SPEED: u32 = 13;

/// A button press or settings change from the UI shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Pick the theme at this catalog index.
    SelectTheme(usize),
    Start,
    TogglePause,
    ResetPuzzles,
    BackToMenu,
    Continue,
    Replay,
    Hint,
    ToggleAudio,
    SetVolume(f32),
    SetHighContrast(bool),
    SetHaptics(bool),
    SetAnimationSpeed(AnimationSpeed),
}

impl Command {
    /// Decode a custom UI event. Unknown kinds yield `None`.
    pub fn from_custom(kind: u32, a: f32) -> Option<Self> {
        let command = match kind {
            CUSTOM_SELECT_THEME if a >= 0.0 => Command::SelectTheme(a as usize),
            CUSTOM_START => Command::Start,
            CUSTOM_TOGGLE_PAUSE => Command::TogglePause,
            CUSTOM_RESET_PUZZLES => Command::ResetPuzzles,
            CUSTOM_BACK_TO_MENU => Command::BackToMenu,
            CUSTOM_CONTINUE => Command::Continue,
            CUSTOM_REPLAY => Command::Replay,
            CUSTOM_HINT => Command::Hint,
            CUSTOM_TOGGLE_AUDIO => Command::ToggleAudio,
            CUSTOM_SET_VOLUME => Command::SetVolume(a),
            CUSTOM_SET_HIGH_CONTRAST => Command::SetHighContrast(a != 0.0),
            CUSTOM_SET_HAPTICS => Command::SetHaptics(a != 0.0),
            CUSTOM_SET_ANIMATION_SPEED if a >= 0.0 => {
                Command::SetAnimationSpeed(AnimationSpeed::from_code(a as u32)?)
            }
            _ => return None,
        };
        Some(command)
    }

    /// The `(kind, a)` pair that `from_custom` turns back into this command.
    pub fn encode(self) -> (u32, f32) {
        match self {
            Command::SelectTheme(index) => (CUSTOM_SELECT_THEME, index as f32),
            Command::Start => (CUSTOM_START, 0.0),
            Command::TogglePause => (CUSTOM_TOGGLE_PAUSE, 0.0),
            Command::ResetPuzzles => (CUSTOM_RESET_PUZZLES, 0.0),
            Command::BackToMenu => (CUSTOM_BACK_TO_MENU, 0.0),
            Command::Continue => (CUSTOM_CONTINUE, 0.0),
            Command::Replay => (CUSTOM_REPLAY, 0.0),
            Command::Hint => (CUSTOM_HINT, 0.0),
            Command::ToggleAudio => (CUSTOM_TOGGLE_AUDIO, 0.0),
            Command::SetVolume(volume) => (CUSTOM_SET_VOLUME, volume),
            Command::SetHighContrast(on) => (CUSTOM_SET_HIGH_CONTRAST, on as u8 as f32),
            Command::SetHaptics(on) => (CUSTOM_SET_HAPTICS, on as u8 as f32),
            Command::SetAnimationSpeed(speed) => {
                let code = match speed {
                    AnimationSpeed::Slow => 0.0,
                    AnimationSpeed::Normal => 1.0,
                    AnimationSpeed::Fast => 2.0,
                };
                (CUSTOM_SET_ANIMATION_SPEED, code)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_known_kinds() {
        assert_eq!(Command::from_custom(CUSTOM_SELECT_THEME, 2.0), Some(Command::SelectTheme(2)));
        assert_eq!(Command::from_custom(CUSTOM_SET_HAPTICS, 0.0), Some(Command::SetHaptics(false)));
        assert_eq!(
            Command::from_custom(CUSTOM_SET_ANIMATION_SPEED, 2.0),
            Some(Command::SetAnimationSpeed(AnimationSpeed::Fast))
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(Command::from_custom(999, 0.0), None);
        assert_eq!(Command::from_custom(CUSTOM_SELECT_THEME, -1.0), None);
        assert_eq!(Command::from_custom(CUSTOM_SET_ANIMATION_SPEED, 7.0), None);
    }

    #[test]
    fn encode_matches_decode() {
        let commands = [
            Command::SelectTheme(3),
            Command::Start,
            Command::Hint,
            Command::SetVolume(40.0),
            Command::SetHighContrast(true),
            Command::SetAnimationSpeed(AnimationSpeed::Slow),
        ];
        for command in commands {
            let (kind, a) = command.encode();
            assert_eq!(Command::from_custom(kind, a), Some(command));
        }
    }
}
