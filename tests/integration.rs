// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios driving raw gesture samples through the whole
//! pipeline (binder → samplers → controller → coordinator) against a fake
//! list host, asserting the rest-state invariants the feed must uphold.

use approx::assert_abs_diff_eq;
use iced_core::{Point, Rectangle, Vector};
use pinch_feed::config::{self, Config, Tuning};
use pinch_feed::feed::{AnimationToken, Command, Feed, RowGeometrySource, Update};
use pinch_feed::gesture::{GesturePhase, RawPan, RawPinch};

const EPSILON: f32 = 1e-5;

/// Route state-machine logs to the test harness; set RUST_LOG=trace to see
/// per-sample decisions when a scenario fails.
fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A virtualized list with `realized` rows of fixed square geometry.
struct FakeList {
    realized: usize,
}

impl RowGeometrySource for FakeList {
    fn row_geometry(&self, row: usize) -> Option<Rectangle> {
        (row < self.realized).then(|| Rectangle {
            x: 0.0,
            y: 400.0 * row as f32,
            width: 375.0,
            height: 375.0,
        })
    }
}

/// A render collaborator that applies commands to tracked properties and
/// remembers pending animation tokens.
#[derive(Debug)]
struct FakeHost {
    overlay_opacity: f32,
    backdrop_opacity: f32,
    row_opacity: Vec<f32>,
    overlay_scale: f32,
    overlay_translation: Vector,
    scroll_enabled: bool,
    pending: Vec<AnimationToken>,
}

impl FakeHost {
    fn new(rows: usize) -> Self {
        Self {
            overlay_opacity: 0.0,
            backdrop_opacity: 0.0,
            row_opacity: vec![1.0; rows],
            overlay_scale: 1.0,
            overlay_translation: Vector::new(0.0, 0.0),
            scroll_enabled: true,
            pending: Vec::new(),
        }
    }

    fn apply(&mut self, commands: &[Command]) {
        for command in commands {
            match command {
                Command::Set(update) => self.apply_update(update),
                Command::Animate { updates, token, .. } => {
                    // The fake host completes animations instantly but
                    // still requires an explicit completion report.
                    for update in updates {
                        self.apply_update(update);
                    }
                    if let Some(token) = token {
                        self.pending.push(*token);
                    }
                }
                Command::SetScrollEnabled(enabled) => self.scroll_enabled = *enabled,
            }
        }
    }

    fn apply_update(&mut self, update: &Update) {
        match update {
            Update::OverlayFrame(_) => {}
            Update::OverlayTransform(transform) => {
                self.overlay_scale = transform.scale();
                self.overlay_translation = transform.translation;
            }
            Update::OverlayOpacity(opacity) => self.overlay_opacity = *opacity,
            Update::RowImageOpacity { row, opacity } => {
                if let Some(slot) = self.row_opacity.get_mut(*row) {
                    *slot = *opacity;
                }
            }
            Update::BackdropOpacity(opacity) => self.backdrop_opacity = *opacity,
        }
    }

    /// Report every pending animation as finished, applying the cleanup
    /// commands each report returns.
    fn drain_animations(&mut self, feed: &mut Feed) {
        while let Some(token) = self.pending.pop() {
            let commands = feed.animation_finished(token);
            self.apply(&commands);
        }
    }

    fn assert_at_rest(&self) {
        assert_eq!(self.overlay_opacity, 0.0);
        assert_eq!(self.backdrop_opacity, 0.0);
        assert!(self.scroll_enabled);
        assert!(self.row_opacity.iter().all(|&o| o == 1.0));
    }
}

fn pinch(phase: GesturePhase, scale: f32) -> RawPinch {
    RawPinch {
        phase,
        scale,
        focal: Point::new(30.0, -15.0),
        touches: 2,
    }
}

fn pan(phase: GesturePhase, x: f32, y: f32) -> RawPan {
    RawPan {
        phase,
        translation: Vector::new(x, y),
        touches: 1,
    }
}

#[test]
fn pinch_expand_and_release_returns_to_rest() {
    init_logs();
    let list = FakeList { realized: 10 };
    let mut host = FakeHost::new(10);
    let mut feed = Feed::default();
    let id = feed.bind_row(3);

    // Begin: overlay detaches from row 3, scroll locks, backdrop dims.
    host.apply(&feed.submit_pinch(id, &pinch(GesturePhase::Began, 1.0), &list));
    assert!(feed.is_zoomed());
    assert!(!host.scroll_enabled);
    assert_eq!(host.overlay_opacity, 1.0);
    assert_eq!(host.row_opacity[3], 0.0);
    assert_abs_diff_eq!(host.backdrop_opacity, 0.6, epsilon = EPSILON);
    assert_eq!(
        feed.session().expect("session should be live").base_frame,
        list.row_geometry(3).unwrap()
    );

    // Cumulative 1.5: incremental factor 1.5.
    host.apply(&feed.submit_pinch(id, &pinch(GesturePhase::Changed, 1.5), &list));
    assert_abs_diff_eq!(host.overlay_scale, 1.5, epsilon = EPSILON);

    // Cumulative 3.0 re-baselines to an incremental factor of 2.0.
    host.apply(&feed.submit_pinch(id, &pinch(GesturePhase::Changed, 3.0), &list));
    assert_abs_diff_eq!(host.overlay_scale, 3.0, epsilon = EPSILON);

    // Push past the limit: soft stop at the max of 4.0, not 3.0 * 3.0.
    host.apply(&feed.submit_pinch(id, &pinch(GesturePhase::Changed, 9.0), &list));
    assert_abs_diff_eq!(host.overlay_scale, 4.0, epsilon = EPSILON);

    // Release: snap-back animates, then cleanup runs on completion.
    host.apply(&feed.submit_pinch(id, &pinch(GesturePhase::Ended, 9.0), &list));
    assert!(feed.scroll_locked(), "scroll stays locked until cleanup");
    host.drain_animations(&mut feed);

    assert!(!feed.is_zoomed());
    host.assert_at_rest();
}

#[test]
fn pan_while_pinched_moves_overlay_and_does_not_close_session() {
    let list = FakeList { realized: 5 };
    let mut host = FakeHost::new(5);
    let mut feed = Feed::default();
    let id = feed.bind_row(1);

    host.apply(&feed.submit_pinch(id, &pinch(GesturePhase::Began, 1.2), &list));
    host.apply(&feed.submit_pan(id, &pan(GesturePhase::Changed, 40.0, 10.0), &list));
    host.apply(&feed.submit_pan(id, &pan(GesturePhase::Changed, 70.0, 25.0), &list));

    assert_abs_diff_eq!(host.overlay_translation.x, 70.0, epsilon = EPSILON);
    assert_abs_diff_eq!(host.overlay_translation.y, 25.0, epsilon = EPSILON);

    // Pan terminal while pinched: session stays live.
    host.apply(&feed.submit_pan(id, &pan(GesturePhase::Ended, 70.0, 25.0), &list));
    assert!(feed.is_zoomed());

    host.apply(&feed.submit_pinch(id, &pinch(GesturePhase::Ended, 1.2), &list));
    host.drain_animations(&mut feed);
    host.assert_at_rest();
}

#[test]
fn zoom_out_pinch_never_starts_a_session() {
    let list = FakeList { realized: 5 };
    let mut host = FakeHost::new(5);
    let mut feed = Feed::default();
    let id = feed.bind_row(1);

    let commands = feed.submit_pinch(id, &pinch(GesturePhase::Began, 0.8), &list);
    host.apply(&commands);

    assert!(commands.is_empty());
    assert!(!feed.is_zoomed());
    host.assert_at_rest();
}

#[test]
fn pan_only_stream_while_idle_is_ignored() {
    let list = FakeList { realized: 5 };
    let mut feed = Feed::default();
    let id = feed.bind_row(2);

    assert!(feed.submit_pan(id, &pan(GesturePhase::Began, 0.0, 0.0), &list).is_empty());
    assert!(feed.submit_pan(id, &pan(GesturePhase::Changed, 25.0, 5.0), &list).is_empty());
    assert!(feed.submit_pan(id, &pan(GesturePhase::Ended, 25.0, 5.0), &list).is_empty());
    assert!(!feed.is_zoomed());
}

#[test]
fn second_row_cannot_steal_an_active_session() {
    let list = FakeList { realized: 10 };
    let mut host = FakeHost::new(10);
    let mut feed = Feed::default();
    let row_a = feed.bind_row(0);
    let row_b = feed.bind_row(5);

    host.apply(&feed.submit_pinch(row_a, &pinch(GesturePhase::Began, 1.0), &list));
    let commands = feed.submit_pinch(row_b, &pinch(GesturePhase::Began, 1.5), &list);

    assert!(commands.is_empty());
    assert_eq!(feed.session().expect("session should be live").row, 0);
}

#[test]
fn cancelled_pinch_rolls_back_like_a_normal_end() {
    let list = FakeList { realized: 5 };
    let mut host = FakeHost::new(5);
    let mut feed = Feed::default();
    let id = feed.bind_row(4);

    host.apply(&feed.submit_pinch(id, &pinch(GesturePhase::Began, 1.0), &list));
    host.apply(&feed.submit_pinch(id, &pinch(GesturePhase::Changed, 2.5), &list));
    host.apply(&feed.submit_pinch(id, &pinch(GesturePhase::Cancelled, 2.5), &list));
    host.drain_animations(&mut feed);

    assert!(!feed.is_zoomed());
    host.assert_at_rest();
}

#[test]
fn row_recycled_mid_gesture_aborts_straight_to_rest() {
    init_logs();
    let mut host = FakeHost::new(5);
    let mut feed = Feed::default();
    let id = feed.bind_row(2);

    host.apply(&feed.submit_pinch(id, &pinch(GesturePhase::Began, 1.0), &FakeList { realized: 5 }));
    host.apply(&feed.submit_pinch(id, &pinch(GesturePhase::Changed, 3.0), &FakeList { realized: 5 }));

    // The whole visible set is gone by the time the pinch ends.
    host.apply(&feed.submit_pinch(id, &pinch(GesturePhase::Ended, 3.0), &FakeList { realized: 0 }));

    assert!(host.pending.is_empty(), "abort must not animate");
    assert!(!feed.is_zoomed());
    host.assert_at_rest();
}

#[test]
fn config_tuning_flows_into_the_feed() {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = temp_dir.path().join("settings.toml");

    let config = Config {
        max_scale: Some(2.0),
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("failed to save config");
    let tuning: Tuning = config::load_from_path(&path)
        .expect("failed to load config")
        .tuning();

    let list = FakeList { realized: 5 };
    let mut host = FakeHost::new(5);
    let mut feed = Feed::new(tuning);
    let id = feed.bind_row(0);

    host.apply(&feed.submit_pinch(id, &pinch(GesturePhase::Began, 1.0), &list));
    host.apply(&feed.submit_pinch(id, &pinch(GesturePhase::Changed, 3.5), &list));

    assert_abs_diff_eq!(host.overlay_scale, 2.0, epsilon = EPSILON);
}
