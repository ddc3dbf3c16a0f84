//! Hand landmark frames and the geometry helpers the gesture rules build on.
//!
//! Landmarks arrive from an external pose estimator as normalized coordinates,
//! 21 points per hand in a fixed anatomical order. This module keeps the frame
//! math pure and testable so the classifier and session code can stay small.

/// Index of the wrist landmark.
pub const WRIST: usize = 0;
/// Index of the thumb carpometacarpal joint (thumb base).
pub const THUMB_CMC: usize = 1;
/// Index of the thumb metacarpophalangeal joint.
pub const THUMB_MCP: usize = 2;
/// Index of the thumb interphalangeal joint.
pub const THUMB_IP: usize = 3;
/// Index of the thumb tip.
pub const THUMB_TIP: usize = 4;
/// Metacarpophalangeal (knuckle) indices for index, middle, ring and pinky.
pub const FINGER_KNUCKLES: [usize; 4] = [5, 9, 13, 17];
/// Fingertip indices for index, middle, ring and pinky.
pub const FINGER_TIPS: [usize; 4] = [8, 12, 16, 20];
/// Number of landmarks in a complete hand frame.
pub const LANDMARK_COUNT: usize = 21;

/// Landmark index pairs forming the hand skeleton, for overlay collaborators.
pub const HAND_CONNECTIONS: [(usize, usize); 21] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 4),
    (0, 5),
    (5, 6),
    (6, 7),
    (7, 8),
    (9, 10),
    (10, 11),
    (11, 12),
    (13, 14),
    (14, 15),
    (15, 16),
    (17, 18),
    (18, 19),
    (19, 20),
    (0, 9),
    (9, 13),
    (13, 17),
    (0, 17),
];

/// One anatomical point of a hand in normalized image coordinates.
///
/// `x` and `y` lie roughly in `[0, 1]` with the origin at the top-left of the
/// camera image, so a smaller `y` is higher in the frame. `z` is a relative
/// depth estimate and only meaningful within a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position (smaller is higher in the image).
    pub y: f32,
    /// Relative depth.
    pub z: f32,
}

impl Landmark {
    /// Create a landmark from raw coordinates.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Planar (x/y) distance to another landmark.
    ///
    /// The gesture heuristics ignore the depth estimate on purpose: it is far
    /// noisier than the image-plane coordinates.
    pub fn planar_distance(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f32; 3]> for Landmark {
    fn from(p: [f32; 3]) -> Self {
        Self::new(p[0], p[1], p[2])
    }
}

/// A complete set of 21 hand landmarks captured from one video frame.
///
/// Frames are ephemeral: produced once per frame by the pose estimator,
/// consumed immediately by the classifier and discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct HandFrame {
    points: [Landmark; LANDMARK_COUNT],
}

impl HandFrame {
    /// Build a frame from raw estimator output.
    ///
    /// Returns `None` when fewer than 21 points are supplied or any coordinate
    /// is non-finite; such input is treated as "hand absent", never an error.
    /// Points beyond the 21st are ignored (holistic estimators may append
    /// extra keypoints).
    pub fn from_points(points: &[[f32; 3]]) -> Option<Self> {
        if points.len() < LANDMARK_COUNT {
            return None;
        }
        let mut landmarks = [Landmark::new(0.0, 0.0, 0.0); LANDMARK_COUNT];
        for (slot, raw) in landmarks.iter_mut().zip(points) {
            let landmark = Landmark::from(*raw);
            if !landmark.is_finite() {
                return None;
            }
            *slot = landmark;
        }
        Some(Self { points: landmarks })
    }

    /// Landmark at a raw anatomical index.
    pub fn point(&self, index: usize) -> &Landmark {
        &self.points[index]
    }

    /// The wrist landmark.
    pub fn wrist(&self) -> &Landmark {
        &self.points[WRIST]
    }

    /// The thumb tip landmark.
    pub fn thumb_tip(&self) -> &Landmark {
        &self.points[THUMB_TIP]
    }

    /// The four non-thumb fingertips (index, middle, ring, pinky).
    pub fn fingertips(&self) -> [&Landmark; 4] {
        FINGER_TIPS.map(|index| &self.points[index])
    }

    /// The four non-thumb knuckles, in the same finger order as
    /// [`Self::fingertips`].
    pub fn knuckles(&self) -> [&Landmark; 4] {
        FINGER_KNUCKLES.map(|index| &self.points[index])
    }

    /// Total length of the thumb measured along its three segments.
    pub fn thumb_segment_length(&self) -> f32 {
        let base = &self.points[THUMB_CMC];
        let mcp = &self.points[THUMB_MCP];
        let ip = &self.points[THUMB_IP];
        let tip = &self.points[THUMB_TIP];
        base.planar_distance(mcp) + mcp.planar_distance(ip) + ip.planar_distance(tip)
    }

    /// Straight-line distance from the thumb base to the thumb tip.
    pub fn thumb_span(&self) -> f32 {
        self.points[THUMB_CMC].planar_distance(&self.points[THUMB_TIP])
    }
}

/// Pick the hand frame the classifier should evaluate.
///
/// Prefers the right hand when present, otherwise the left. Which physical
/// hand ends up on which side depends on whether the camera image was mirrored
/// before pose estimation; the upstream demo never settled this, so callers
/// feeding mirrored video may see left and right swapped. This follows the
/// newest upstream behavior rather than guessing at an "unmirrored" order.
pub fn select_active_hand<'a>(
    left: Option<&'a HandFrame>,
    right: Option<&'a HandFrame>,
) -> Option<&'a HandFrame> {
    right.or(left)
}
