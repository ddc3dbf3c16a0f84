//! Canned landmark poses shared by unit tests.

use crate::landmarks::{HandFrame, LANDMARK_COUNT};

/// Half-open pose that matches no gesture rule.
pub(crate) fn neutral_points() -> Vec<[f32; 3]> {
    let mut points = vec![[0.5_f32, 0.5, 0.0]; LANDMARK_COUNT];
    // Thumb folded across the palm.
    points[1] = [0.45, 0.55, 0.0];
    points[2] = [0.48, 0.52, 0.0];
    points[3] = [0.50, 0.50, 0.0];
    points[4] = [0.46, 0.52, 0.0];
    // Fingers half raised, clearly not aligned.
    points[5] = [0.55, 0.45, 0.0];
    points[8] = [0.56, 0.30, 0.0];
    points[9] = [0.52, 0.45, 0.0];
    points[12] = [0.52, 0.48, 0.0];
    points[13] = [0.49, 0.45, 0.0];
    points[16] = [0.48, 0.52, 0.0];
    points[17] = [0.45, 0.46, 0.0];
    points[20] = [0.44, 0.55, 0.0];
    points
}

/// Open raised hand: the greeting gesture.
pub(crate) fn open_raised_points() -> Vec<[f32; 3]> {
    let mut points = neutral_points();
    points[0] = [0.50, 0.50, 0.0];
    // Straight thumb angled out to the side.
    points[1] = [0.40, 0.48, 0.0];
    points[2] = [0.34, 0.46, 0.0];
    points[3] = [0.28, 0.44, 0.0];
    points[4] = [0.22, 0.42, 0.0];
    // Fingertips raised and mutually within the alignment tolerance.
    points[8] = [0.56, 0.20, 0.0];
    points[12] = [0.52, 0.21, 0.0];
    points[16] = [0.48, 0.22, 0.0];
    points[20] = [0.44, 0.19, 0.0];
    points
}

/// Closed fist with the thumb up: the affirmative gesture.
pub(crate) fn thumbs_up_points() -> Vec<[f32; 3]> {
    let mut points = neutral_points();
    points[0] = [0.50, 0.70, 0.0];
    // Thumb reaching up, well clear of the fist, kinked enough at the base
    // that the greeting rule's straight-thumb test stays unsatisfied.
    points[2] = [0.40, 0.55, 0.0];
    points[4] = [0.38, 0.30, 0.0];
    // Fist: every fingertip below its knuckle.
    points[5] = [0.55, 0.50, 0.0];
    points[8] = [0.55, 0.58, 0.0];
    points[9] = [0.52, 0.50, 0.0];
    points[12] = [0.52, 0.58, 0.0];
    points[13] = [0.49, 0.50, 0.0];
    points[16] = [0.49, 0.58, 0.0];
    points[17] = [0.46, 0.50, 0.0];
    points[20] = [0.46, 0.58, 0.0];
    points
}

/// Closed fist with the thumb down: the negative gesture.
pub(crate) fn thumbs_down_points() -> Vec<[f32; 3]> {
    let mut points = thumbs_up_points();
    points[0] = [0.50, 0.40, 0.0];
    points[2] = [0.40, 0.45, 0.0];
    points[4] = [0.38, 0.65, 0.0];
    // Keep the fist below its knuckles in the flipped pose.
    points[5] = [0.55, 0.42, 0.0];
    points[8] = [0.55, 0.50, 0.0];
    points[9] = [0.52, 0.42, 0.0];
    points[12] = [0.52, 0.50, 0.0];
    points[13] = [0.49, 0.42, 0.0];
    points[16] = [0.49, 0.50, 0.0];
    points[17] = [0.46, 0.42, 0.0];
    points[20] = [0.46, 0.50, 0.0];
    points
}

/// Build a frame from points, panicking on malformed input.
pub(crate) fn frame(points: &[[f32; 3]]) -> HandFrame {
    HandFrame::from_points(points).expect("test pose must form a valid frame")
}
