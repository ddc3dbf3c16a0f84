//! Geometric gesture rules evaluated before the random fallback.
//!
//! Each rule is a pure predicate over one [`HandFrame`]. The classifier walks
//! [`GESTURE_RULES`] in order and stops at the first match, so rule priority
//! is the array order and adding a gesture means adding an entry, not editing
//! control flow.

use crate::landmarks::HandFrame;
use crate::vocabulary::Sign;

/// Confidence reported for any rule-based match.
pub const RULE_CONFIDENCE: f32 = 95.0;

/// How far apart the four fingertip y-values may spread while still counting
/// as aligned for the greeting gesture.
const FINGER_ALIGNMENT_TOLERANCE: f32 = 0.08;

/// Fraction of the summed thumb segment lengths the direct base-to-tip span
/// must reach for the thumb to count as extended rather than folded.
const THUMB_EXTENDED_SPAN_RATIO: f32 = 0.9;

/// A named gesture predicate paired with the sign it produces.
pub struct GestureRule {
    /// Sign reported when the predicate holds.
    pub sign: Sign,
    /// Pure geometric test over a single hand frame.
    pub predicate: fn(&HandFrame) -> bool,
}

/// Rules in priority order; the first matching entry wins.
pub const GESTURE_RULES: &[GestureRule] = &[
    GestureRule {
        sign: Sign::Hello,
        predicate: is_open_raised_hand,
    },
    GestureRule {
        sign: Sign::Yes,
        predicate: is_thumbs_up,
    },
    GestureRule {
        sign: Sign::No,
        predicate: is_thumbs_down,
    },
];

/// Evaluate the rules against a frame, returning the first match.
pub fn match_gesture(frame: &HandFrame) -> Option<Sign> {
    GESTURE_RULES
        .iter()
        .find(|rule| (rule.predicate)(frame))
        .map(|rule| rule.sign)
}

/// Greeting: fingers straight and together, raised above the wrist, thumb
/// extended out to the side.
fn is_open_raised_hand(frame: &HandFrame) -> bool {
    let tips = frame.fingertips();
    let mut min_y = f32::INFINITY;
    let mut max_y = f32::NEG_INFINITY;
    for tip in tips {
        min_y = min_y.min(tip.y);
        max_y = max_y.max(tip.y);
    }
    let aligned = max_y - min_y <= FINGER_ALIGNMENT_TOLERANCE;

    let wrist_y = frame.wrist().y;
    let raised = tips.iter().all(|tip| tip.y < wrist_y);

    aligned && raised && thumb_extended(frame)
}

/// Affirmative: thumb pointing up out of a closed fist.
fn is_thumbs_up(frame: &HandFrame) -> bool {
    let thumb_tip = frame.thumb_tip();
    let thumb_base = frame.point(crate::landmarks::THUMB_MCP);
    let index_knuckle = frame.point(crate::landmarks::FINGER_KNUCKLES[0]);

    let thumb_up = thumb_tip.y < thumb_base.y && thumb_tip.y < index_knuckle.y;
    thumb_up && fingers_curled(frame) && thumb_clear_of_fist(frame)
}

/// Negative: thumb pointing down out of a closed fist.
fn is_thumbs_down(frame: &HandFrame) -> bool {
    let thumb_tip = frame.thumb_tip();
    let thumb_base = frame.point(crate::landmarks::THUMB_MCP);

    let thumb_down = thumb_tip.y > thumb_base.y && thumb_tip.y > frame.wrist().y;
    thumb_down && fingers_curled(frame) && thumb_clear_of_fist(frame)
}

/// All four non-thumb fingertips sit below their knuckles in image space.
fn fingers_curled(frame: &HandFrame) -> bool {
    frame
        .fingertips()
        .iter()
        .zip(frame.knuckles())
        .all(|(tip, knuckle)| tip.y > knuckle.y)
}

/// The thumb tip is visibly separated from the fist: its distance to the
/// index knuckle exceeds half the wrist-to-index-knuckle distance.
fn thumb_clear_of_fist(frame: &HandFrame) -> bool {
    let index_knuckle = frame.point(crate::landmarks::FINGER_KNUCKLES[0]);
    let separation = frame.thumb_tip().planar_distance(index_knuckle);
    let hand_scale = frame.wrist().planar_distance(index_knuckle);
    separation > hand_scale * 0.5
}

/// The thumb is near-straight: the direct base-to-tip span approaches the
/// summed length of its segments. A folded thumb doubles back on itself and
/// the span collapses while the segment sum stays put.
fn thumb_extended(frame: &HandFrame) -> bool {
    let segments = frame.thumb_segment_length();
    segments > 0.0 && frame.thumb_span() >= segments * THUMB_EXTENDED_SPAN_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_poses::{
        frame, neutral_points, open_raised_points, thumbs_down_points, thumbs_up_points,
    };

    #[test]
    fn neutral_pose_matches_nothing() {
        assert_eq!(match_gesture(&frame(&neutral_points())), None);
    }

    #[test]
    fn open_raised_hand_is_hello() {
        assert_eq!(match_gesture(&frame(&open_raised_points())), Some(Sign::Hello));
    }

    #[test]
    fn misaligned_fingertips_break_the_greeting() {
        let mut points = open_raised_points();
        points[20][1] = 0.32; // pinky lags 0.12 behind the other tips
        assert_ne!(match_gesture(&frame(&points)), Some(Sign::Hello));
    }

    #[test]
    fn folded_thumb_breaks_the_greeting() {
        let mut points = open_raised_points();
        // Double the thumb back so span collapses against segment length.
        points[3] = [0.30, 0.46, 0.0];
        points[4] = [0.38, 0.48, 0.0];
        assert_ne!(match_gesture(&frame(&points)), Some(Sign::Hello));
    }

    #[test]
    fn thumbs_up_is_yes() {
        assert_eq!(match_gesture(&frame(&thumbs_up_points())), Some(Sign::Yes));
    }

    #[test]
    fn thumbs_down_is_no() {
        assert_eq!(match_gesture(&frame(&thumbs_down_points())), Some(Sign::No));
    }

    #[test]
    fn thumb_tucked_against_fist_is_not_yes() {
        let mut points = thumbs_up_points();
        // Thumb tip right next to the index knuckle.
        points[4] = [0.53, 0.48, 0.0];
        assert_ne!(match_gesture(&frame(&points)), Some(Sign::Yes));
    }

    #[test]
    fn open_fingers_break_thumbs_up() {
        let mut points = thumbs_up_points();
        points[8][1] = 0.40; // index tip above its knuckle
        assert_ne!(match_gesture(&frame(&points)), Some(Sign::Yes));
    }
}
