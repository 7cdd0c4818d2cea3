//! Screen flow and the box currently being played.
//!
//! `splash → menu → preview → playing ⇄ paused; playing → victory → preview | menu`.
//! Every method that can move between screens returns the `Transition` it
//! performed, or `None` when the request is not valid from the current screen.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::api::types::SlotIndex;
use crate::catalog::Catalog;
use crate::core::rng::Rng;
use crate::core::time::SessionClock;
use crate::dispatch::{dispatch, Dispatched};
use crate::effects::EffectSink;
use crate::input::queue::PickEvent;
use crate::puzzle::{box_roster, PuzzleInstance};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Splash,
    Menu,
    Preview,
    Playing,
    Paused,
    Victory,
}

impl Screen {
    pub fn code(self) -> u32 {
        match self {
            Screen::Splash => 0,
            Screen::Menu => 1,
            Screen::Preview => 2,
            Screen::Playing => 3,
            Screen::Paused => 4,
            Screen::Victory => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
}

#[derive(Debug, Default)]
pub struct Session {
    screen: Screen,
    theme: Option<String>,
    box_index: u32,
    puzzles: BTreeMap<SlotIndex, PuzzleInstance>,
    clock: SessionClock,
    shown_second: u32,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn theme_id(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    pub fn box_index(&self) -> u32 {
        self.box_index
    }

    pub fn puzzles(&self) -> &BTreeMap<SlotIndex, PuzzleInstance> {
        &self.puzzles
    }

    /// Whole seconds played on the current box, paused time excluded.
    pub fn elapsed_secs(&self) -> u32 {
        self.clock.elapsed_secs()
    }

    /// True when the box has puzzles and every one of them is solved.
    pub fn all_solved(&self) -> bool {
        !self.puzzles.is_empty() && self.puzzles.values().all(|p| p.is_solved())
    }

    pub fn has_unsolved(&self) -> bool {
        self.puzzles.values().any(|p| !p.is_solved())
    }

    fn go(&mut self, to: Screen) -> Transition {
        let from = self.screen;
        self.screen = to;
        log::info!("screen {:?} -> {:?}", from, to);
        Transition { from, to }
    }

    pub fn finish_splash(&mut self) -> Option<Transition> {
        (self.screen == Screen::Splash).then(|| self.go(Screen::Menu))
    }

    /// Pick a theme from the menu. Locked or unknown themes are ignored.
    /// The previewed box is the next unopened one; a finished theme replays its last box.
    pub fn select_theme(&mut self, catalog: &Catalog, index: usize) -> Option<Transition> {
        if self.screen != Screen::Menu {
            return None;
        }
        let Some(theme) = catalog.by_index(index) else {
            log::debug!("no theme at index {}", index);
            return None;
        };
        if !theme.unlocked {
            log::debug!("theme {} is locked", theme.id);
            return None;
        }
        let last = theme.boxes.saturating_sub(1);
        if theme.completed > last {
            log::debug!("theme {} is finished, replaying box {}", theme.id, last);
        }
        self.box_index = theme.completed.min(last);
        self.theme = Some(theme.id.clone());
        Some(self.go(Screen::Preview))
    }

    /// Build a fresh set of puzzles for the previewed box and start the clock.
    pub fn start(&mut self, catalog: &Catalog, rng: &mut Rng) -> Option<Transition> {
        if self.screen != Screen::Preview {
            return None;
        }
        let theme = catalog.get(self.theme.as_deref()?)?;
        self.puzzles = box_roster(theme)
            .into_iter()
            .enumerate()
            .map(|(i, kind)| (SlotIndex(i as u32), PuzzleInstance::create(kind, theme, rng)))
            .collect();
        self.clock.start();
        self.shown_second = 0;
        Some(self.go(Screen::Playing))
    }

    pub fn toggle_pause(&mut self) -> Option<Transition> {
        match self.screen {
            Screen::Playing => self.pause(),
            Screen::Paused => self.resume(),
            _ => None,
        }
    }

    pub fn pause(&mut self) -> Option<Transition> {
        if self.screen != Screen::Playing {
            return None;
        }
        self.clock.pause();
        Some(self.go(Screen::Paused))
    }

    pub fn resume(&mut self) -> Option<Transition> {
        if self.screen != Screen::Paused {
            return None;
        }
        self.clock.resume();
        Some(self.go(Screen::Playing))
    }

    /// Abandon the current box. Nothing about it is kept.
    pub fn back_to_menu(&mut self) -> Option<Transition> {
        match self.screen {
            Screen::Preview | Screen::Playing | Screen::Paused | Screen::Victory => {
                self.discard();
                self.theme = None;
                Some(self.go(Screen::Menu))
            }
            Screen::Splash | Screen::Menu => None,
        }
    }

    /// Put every puzzle back to its initial state and restart the clock.
    pub fn reset_puzzles(&mut self) -> bool {
        if self.screen != Screen::Playing {
            return false;
        }
        for puzzle in self.puzzles.values_mut() {
            puzzle.reset();
        }
        self.clock.start();
        self.shown_second = 0;
        true
    }

    /// Route a pick to its puzzle. Only accepted while playing.
    pub fn pick(&mut self, pick: PickEvent, fx: &mut EffectSink) -> Option<Dispatched> {
        if self.screen != Screen::Playing {
            log::debug!("pick ignored on {:?}", self.screen);
            return None;
        }
        dispatch(&mut self.puzzles, pick, fx)
    }

    /// Open the box once everything is solved. Stops the clock.
    pub fn enter_victory(&mut self) -> Option<Transition> {
        if self.screen != Screen::Playing || !self.all_solved() {
            return None;
        }
        self.clock.pause();
        Some(self.go(Screen::Victory))
    }

    /// Move on to the next box, or back to the menu after the theme's last box.
    pub fn continue_next(&mut self, catalog: &Catalog) -> Option<Transition> {
        if self.screen != Screen::Victory {
            return None;
        }
        let boxes = catalog.get(self.theme.as_deref()?)?.boxes;
        self.discard();
        if self.box_index + 1 < boxes {
            self.box_index += 1;
            Some(self.go(Screen::Preview))
        } else {
            self.theme = None;
            Some(self.go(Screen::Menu))
        }
    }

    /// Play the same box again.
    pub fn replay(&mut self) -> Option<Transition> {
        if self.screen != Screen::Victory {
            return None;
        }
        self.discard();
        Some(self.go(Screen::Preview))
    }

    /// Advance the box clock. Returns the new whole second when it changes.
    pub fn tick(&mut self, dt: f32) -> Option<u32> {
        if self.screen != Screen::Playing {
            return None;
        }
        self.clock.advance(dt);
        let seconds = self.clock.elapsed_secs();
        if seconds != self.shown_second {
            self.shown_second = seconds;
            return Some(seconds);
        }
        None
    }

    fn discard(&mut self) {
        self.puzzles.clear();
        self.clock = SessionClock::new();
        self.shown_second = 0;
    }
}
