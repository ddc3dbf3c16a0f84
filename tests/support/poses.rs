//! Canned landmark poses for integration tests.

/// Closed fist with the thumb up: matches the affirmative gesture rule.
pub fn thumbs_up_points() -> Vec<[f32; 3]> {
    let mut points = vec![[0.5_f32, 0.5, 0.0]; 21];
    points[0] = [0.50, 0.70, 0.0];
    // Thumb reaching up, clear of the fist, kinked at the base so the
    // greeting rule's straight-thumb test stays unsatisfied.
    points[1] = [0.45, 0.55, 0.0];
    points[2] = [0.40, 0.55, 0.0];
    points[3] = [0.50, 0.50, 0.0];
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

/// Open raised hand: matches the greeting gesture rule.
pub fn open_raised_points() -> Vec<[f32; 3]> {
    let mut points = vec![[0.5_f32, 0.5, 0.0]; 21];
    points[0] = [0.50, 0.50, 0.0];
    // Straight thumb angled out to the side.
    points[1] = [0.40, 0.48, 0.0];
    points[2] = [0.34, 0.46, 0.0];
    points[3] = [0.28, 0.44, 0.0];
    points[4] = [0.22, 0.42, 0.0];
    // Fingertips raised and mutually within the alignment tolerance.
    points[5] = [0.55, 0.45, 0.0];
    points[8] = [0.56, 0.20, 0.0];
    points[9] = [0.52, 0.45, 0.0];
    points[12] = [0.52, 0.21, 0.0];
    points[13] = [0.49, 0.45, 0.0];
    points[16] = [0.48, 0.22, 0.0];
    points[17] = [0.45, 0.46, 0.0];
    points[20] = [0.44, 0.19, 0.0];
    points
}

/// Half-open pose that matches no rule, forcing the fallback path.
pub fn neutral_points() -> Vec<[f32; 3]> {
    let mut points = vec![[0.5_f32, 0.5, 0.0]; 21];
    points[1] = [0.45, 0.55, 0.0];
    points[2] = [0.48, 0.52, 0.0];
    points[3] = [0.50, 0.50, 0.0];
    points[4] = [0.46, 0.52, 0.0];
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
