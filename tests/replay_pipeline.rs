mod support;

use std::io::Write;

use handspeak::capture::{CaptureFrame, read_capture};
use handspeak::classifier::Label;
use handspeak::session::Session;
use handspeak::vocabulary::Sign;
use support::poses::{neutral_points, open_raised_points, thumbs_up_points};

fn write_capture(lines: &[CaptureFrame]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create capture file");
    for frame in lines {
        let line = serde_json::to_string(frame).expect("serialize frame");
        writeln!(file, "{line}").expect("write capture line");
    }
    file.flush().expect("flush capture file");
    file
}

fn frame(left: Option<Vec<[f32; 3]>>, right: Option<Vec<[f32; 3]>>) -> CaptureFrame {
    CaptureFrame { left, right }
}

#[test]
fn capture_replay_drives_the_full_session() {
    let file = write_capture(&[
        frame(None, None),
        frame(None, Some(open_raised_points())),
        frame(None, Some(thumbs_up_points())),
        // Repeat of the same sign must not count twice.
        frame(None, Some(thumbs_up_points())),
        // Malformed hand: too few points, treated as absent.
        frame(Some(vec![[0.1, 0.2, 0.0]; 5]), None),
    ]);

    let frames = read_capture(file.path()).expect("read capture");
    assert_eq!(frames.len(), 5);

    let mut session = Session::with_seed("default", 1234);
    session.start();
    let predictions: Vec<_> = frames
        .iter()
        .map(|frame| {
            let left = frame.left_hand();
            let right = frame.right_hand();
            session.process_frame(left.as_ref(), right.as_ref())
        })
        .collect();

    assert_eq!(predictions[0].label, Label::NoHand);
    assert_eq!(predictions[0].confidence, 0.0);
    assert_eq!(predictions[1].label, Label::Sign(Sign::Hello));
    assert_eq!(predictions[1].confidence, 95.0);
    assert_eq!(predictions[2].label, Label::Sign(Sign::Yes));
    assert_eq!(predictions[3].label, Label::Sign(Sign::Yes));
    assert_eq!(predictions[4].label, Label::NoHand);

    // hello + yes counted once each at confidence 95.
    assert_eq!(session.stats().signs_detected(), 2);
    assert_eq!(session.stats().average_confidence(), 95.0);

    session.stop();
    assert_eq!(session.stats().signs_detected(), 0);
}

#[test]
fn seeded_replays_are_reproducible_end_to_end() {
    let file = write_capture(&vec![frame(Some(neutral_points()), None); 25]);
    let frames = read_capture(file.path()).expect("read capture");

    let run = |seed: u64| {
        let mut session = Session::with_seed("user1", seed);
        session.start();
        frames
            .iter()
            .map(|frame| {
                let left = frame.left_hand();
                session.process_frame(left.as_ref(), None)
            })
            .collect::<Vec<_>>()
    };

    let first = run(99);
    assert_eq!(first, run(99));

    for prediction in &first {
        assert!((0.0..=100.0).contains(&prediction.confidence));
        let sign = prediction.label.sign().expect("fallback always predicts");
        assert!(!prediction.alternatives.contains(&sign));
        assert!(prediction.alternatives.len() <= 3);
    }
}

#[test]
fn announcements_drain_in_order_during_replay() {
    let file = write_capture(&[
        frame(None, Some(thumbs_up_points())),
        frame(None, Some(open_raised_points())),
    ]);
    let frames = read_capture(file.path()).expect("read capture");

    let mut session = Session::with_seed("default", 42);
    session.start();
    let mut spoken = Vec::new();
    for frame in &frames {
        let left = frame.left_hand();
        let right = frame.right_hand();
        session.process_frame(left.as_ref(), right.as_ref());
        while let Some(text) = session.speech().current().map(str::to_owned) {
            spoken.push(text);
            session.speech().finish();
        }
    }

    assert_eq!(spoken.len(), 2);
    // Rule confidence is 95, above the announcement threshold, so both
    // predictions speak; the exact text may be a phrase completion.
    assert!(spoken[0] == "yes" || spoken[0] == "Yes, I agree!");
    assert!(spoken[1] == "hello" || spoken[1] == "Hello there!");
}
