use crate::landmarks::{FingerState, HandLandmarks};
use crate::types::Gesture;

/// Ordered decision table for gesture classification.
///
/// Evaluated top to bottom, first match wins. The order is a contract: a raised
/// index+middle must become Erase even though the index rule alone would not fire,
/// and the four-or-more rule must shadow any three-finger combination.
const RULES: &[(fn(&FingerState) -> bool, Gesture)] = &[
    (|f| f.count_up() == 1 && f.index(), Gesture::Write),
    (|f| f.count_up() == 2 && f.index() && f.middle(), Gesture::Erase),
    (|f| f.count_up() >= 4, Gesture::Clear),
    (|f| f.count_up() == 0, Gesture::Solve),
    (
        |f| f.count_up() == 3 && f.index() && f.middle() && f.ring(),
        Gesture::Hover,
    ),
];

/// Classify a finger-state vector against the rule table.
pub fn classify_fingers(fingers: &FingerState) -> Gesture {
    for (matches, gesture) in RULES {
        if matches(fingers) {
            return *gesture;
        }
    }
    Gesture::None
}

/// Per-frame gesture classifier for a single hand.
#[derive(Debug, Default)]
pub struct GestureClassifier;

impl GestureClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify one frame. Absent hand yields `Gesture::None`.
    pub fn classify(&self, landmarks: Option<&HandLandmarks>) -> Gesture {
        match landmarks {
            Some(hand) => classify_fingers(&FingerState::from_landmarks(hand)),
            None => Gesture::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fingers(bits: [bool; 5]) -> FingerState {
        FingerState::new(bits)
    }

    #[test]
    fn index_only_is_write() {
        assert_eq!(
            classify_fingers(&fingers([false, true, false, false, false])),
            Gesture::Write
        );
    }

    #[test]
    fn index_and_middle_is_erase() {
        assert_eq!(
            classify_fingers(&fingers([false, true, true, false, false])),
            Gesture::Erase
        );
    }

    #[test]
    fn four_or_more_is_clear() {
        assert_eq!(
            classify_fingers(&fingers([false, true, true, true, true])),
            Gesture::Clear
        );
        assert_eq!(
            classify_fingers(&fingers([true, true, true, true, true])),
            Gesture::Clear
        );
    }

    #[test]
    fn fist_is_solve() {
        assert_eq!(
            classify_fingers(&fingers([false, false, false, false, false])),
            Gesture::Solve
        );
    }

    #[test]
    fn three_middle_fingers_is_hover() {
        assert_eq!(
            classify_fingers(&fingers([false, true, true, true, false])),
            Gesture::Hover
        );
    }

    #[test]
    fn unmatched_combinations_are_none() {
        // One finger up but not the index.
        assert_eq!(
            classify_fingers(&fingers([true, false, false, false, false])),
            Gesture::None
        );
        // Two up but not index+middle.
        assert_eq!(
            classify_fingers(&fingers([false, true, false, false, true])),
            Gesture::None
        );
        // Three up but not index+middle+ring.
        assert_eq!(
            classify_fingers(&fingers([true, true, true, false, false])),
            Gesture::None
        );
    }

    #[test]
    fn absent_hand_is_none() {
        let classifier = GestureClassifier::new();
        assert_eq!(classifier.classify(None), Gesture::None);
    }
}
