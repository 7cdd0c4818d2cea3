/// What a scheduled timer is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Splash screen finished (including its fade-out).
    SplashDone,
    /// Debounced victory after the last puzzle was solved.
    Victory,
    /// Hide the achievement notification.
    AchievementDismiss,
    /// Hide the hint panel.
    HintDismiss,
}

#[derive(Debug, Clone)]
struct Pending {
    kind: TimerKind,
    remaining: f32,
}

/// Cancelable one-shot timers driven by the fixed tick.
#[derive(Debug, Default)]
pub struct Timers {
    pending: Vec<Pending>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `kind` to fire after `delay` seconds.
    pub fn schedule(&mut self, kind: TimerKind, delay: f32) {
        self.pending.push(Pending { kind, remaining: delay });
    }

    /// Cancel every pending timer of `kind`, then schedule a fresh one.
    pub fn reschedule(&mut self, kind: TimerKind, delay: f32) {
        self.cancel_kind(kind);
        self.schedule(kind, delay);
    }

    /// Cancel all timers of `kind`. Returns how many were dropped.
    pub fn cancel_kind(&mut self, kind: TimerKind) -> usize {
        let before = self.pending.len();
        self.pending.retain(|p| p.kind != kind);
        before - self.pending.len()
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.pending.iter().any(|p| p.kind == kind)
    }

    /// Advance all timers. Returns the kinds that fired, in scheduling order.
    pub fn tick(&mut self, dt: f32) -> Vec<TimerKind> {
        let mut fired = Vec::new();
        for p in &mut self.pending {
            p.remaining -= dt;
            if p.remaining <= 0.0 {
                fired.push(p.kind);
            }
        }
        self.pending.retain(|p| p.remaining > 0.0);
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_after_delay_only() {
        let mut timers = Timers::new();
        timers.schedule(TimerKind::Victory, 1.0);
        assert!(timers.tick(0.5).is_empty());
        assert!(timers.tick(0.4).is_empty());
        assert_eq!(timers.tick(0.2), vec![TimerKind::Victory]);
        assert!(!timers.is_pending(TimerKind::Victory));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timers = Timers::new();
        timers.schedule(TimerKind::HintDismiss, 3.0);
        assert_eq!(timers.cancel_kind(TimerKind::HintDismiss), 1);
        assert_eq!(timers.cancel_kind(TimerKind::HintDismiss), 0);
        assert!(!timers.is_pending(TimerKind::HintDismiss));
        assert!(timers.tick(10.0).is_empty());
    }

    #[test]
    fn reschedule_replaces_pending() {
        let mut timers = Timers::new();
        timers.schedule(TimerKind::AchievementDismiss, 4.0);
        timers.tick(3.0);
        timers.reschedule(TimerKind::AchievementDismiss, 4.0);
        assert!(timers.tick(2.0).is_empty());
        assert_eq!(timers.tick(2.0), vec![TimerKind::AchievementDismiss]);
    }

    #[test]
    fn cancel_kind_leaves_others() {
        let mut timers = Timers::new();
        timers.schedule(TimerKind::Victory, 1.0);
        timers.schedule(TimerKind::SplashDone, 1.0);
        assert_eq!(timers.cancel_kind(TimerKind::Victory), 1);
        assert_eq!(timers.tick(1.0), vec![TimerKind::SplashDone]);
    }
}
