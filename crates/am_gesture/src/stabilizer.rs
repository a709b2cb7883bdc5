use std::time::{Duration, Instant};

use crate::types::Gesture;

/// Consecutive identical raw classifications required before a gesture is trusted.
pub const STABILITY_FRAMES: u32 = 3;

/// Minimum interval between two stabilized emissions.
pub const GESTURE_COOLDOWN: Duration = Duration::from_millis(300);

/// A gesture that survived debouncing, with the instant it was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StabilizedGesture {
    pub gesture: Gesture,
    pub at: Instant,
}

/// Debounces the raw per-frame gesture stream into infrequent, reliable events.
///
/// Landmark jitter makes single-frame classification unreliable; a run-length
/// requirement suppresses flicker, and the cooldown prevents a held pose (a fist
/// in particular) from retriggering every frame.
#[derive(Debug)]
pub struct GestureStabilizer {
    stability_frames: u32,
    cooldown: Duration,
    last_raw: Gesture,
    run: u32,
    last_emission: Option<Instant>,
}

impl GestureStabilizer {
    pub fn new() -> Self {
        Self::with_params(STABILITY_FRAMES, GESTURE_COOLDOWN)
    }

    pub fn with_params(stability_frames: u32, cooldown: Duration) -> Self {
        Self {
            stability_frames,
            cooldown,
            last_raw: Gesture::None,
            run: 0,
            last_emission: None,
        }
    }

    /// Feed one raw classification; returns an event when the gesture qualifies.
    ///
    /// `Gesture::None` (no hand, or no rule matched) never emits and resets the
    /// run so a fresh streak is required once a hand reappears.
    pub fn update(&mut self, raw: Gesture, now: Instant) -> Option<StabilizedGesture> {
        if raw == Gesture::None {
            self.last_raw = Gesture::None;
            self.run = 0;
            return None;
        }

        if raw == self.last_raw {
            self.run = self.run.saturating_add(1);
        } else {
            self.last_raw = raw;
            self.run = 1;
        }

        if self.run < self.stability_frames {
            return None;
        }
        if let Some(last) = self.last_emission {
            if now.duration_since(last) <= self.cooldown {
                return None;
            }
        }

        self.last_emission = Some(now);
        Some(StabilizedGesture { gesture: raw, at: now })
    }

    /// Drop all debouncing state (used when tracking is lost for a while).
    pub fn reset(&mut self) {
        self.last_raw = Gesture::None;
        self.run = 0;
        self.last_emission = None;
    }
}

impl Default for GestureStabilizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(
        stab: &mut GestureStabilizer,
        seq: &[Gesture],
        start: Instant,
        step: Duration,
    ) -> Vec<Gesture> {
        let mut out = Vec::new();
        for (i, &g) in seq.iter().enumerate() {
            if let Some(ev) = stab.update(g, start + step * i as u32) {
                out.push(ev.gesture);
            }
        }
        out
    }

    #[test]
    fn interrupted_run_emits_only_the_final_gesture() {
        let mut stab = GestureStabilizer::new();
        let emitted = feed(
            &mut stab,
            &[
                Gesture::Write,
                Gesture::Write,
                Gesture::Erase,
                Gesture::Erase,
                Gesture::Erase,
            ],
            Instant::now(),
            Duration::from_millis(33),
        );
        assert_eq!(emitted, vec![Gesture::Erase]);
    }

    #[test]
    fn cooldown_suppresses_the_second_emission() {
        let mut stab = GestureStabilizer::new();
        let start = Instant::now();
        // Six straight frames at ~30fps: the run qualifies from frame 3 onward, but
        // frames 4..6 fall inside the cooldown window.
        let emitted = feed(
            &mut stab,
            &[Gesture::Solve; 6],
            start,
            Duration::from_millis(33),
        );
        assert_eq!(emitted, vec![Gesture::Solve]);

        // Past the cooldown the held pose may fire again.
        let ev = stab.update(Gesture::Solve, start + Duration::from_millis(1_000));
        assert_eq!(ev.map(|e| e.gesture), Some(Gesture::Solve));
    }

    #[test]
    fn none_resets_the_run() {
        let mut stab = GestureStabilizer::new();
        let t = Instant::now();
        assert!(stab.update(Gesture::Write, t).is_none());
        assert!(stab.update(Gesture::Write, t).is_none());
        assert!(stab.update(Gesture::None, t).is_none());
        // The earlier partial run must not count.
        assert!(stab.update(Gesture::Write, t).is_none());
        assert!(stab.update(Gesture::Write, t).is_none());
        assert!(stab.update(Gesture::Write, t).is_some());
    }

    #[test]
    fn run_shorter_than_threshold_never_emits() {
        let mut stab = GestureStabilizer::new();
        let t = Instant::now();
        assert!(stab.update(Gesture::Clear, t).is_none());
        assert!(stab.update(Gesture::Clear, t).is_none());
    }
}
