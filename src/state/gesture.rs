//! Single-finger gesture state machine.
//!
//! | Phase    | Event              | Effect                                          | Next     |
//! | -------- | ------------------ | ----------------------------------------------- | -------- |
//! | any      | start              | forget previous gesture, remember start point   | Tracking |
//! | Idle     | move               | ignored                                         | Idle     |
//! | Tracking | move               | record deltas, move one or both axes            | Tracking |
//! | any      | end / cancel       | tap if nothing moved, else commit or revert     | Idle     |

use log::{debug, trace};
use yew::Callback;

use super::axis::AxisTracker;
use super::transition::TransitionCache;
use crate::config::ControllerConfig;
use crate::error::ControllerError;
use crate::model::{Axis, AxisOutcome, GestureOutcome, Point, TouchInput, TouchPhase};

/// Caller-owned reactions. Any of them may be absent; a missing axis handler
/// disables that axis.
#[derive(Clone, Default)]
pub struct Handlers {
    pub x: Option<Callback<AxisOutcome>>,
    pub y: Option<Callback<AxisOutcome>>,
    pub click: Option<Callback<Point>>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Tracking,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureState {
    pub phase: Phase,
    pub start: Option<Point>,
    /// Only ever set while `start` is.
    pub current: Option<Point>,
}

pub struct GestureController<T: TransitionCache> {
    trackers: [AxisTracker; 2],
    /// (priority, secondary), fixed at construction.
    ranking: Option<(Axis, Axis)>,
    click: Option<Callback<Point>>,
    state: GestureState,
    transitions: T,
}

impl<T: TransitionCache> GestureController<T> {
    pub fn new(config: &ControllerConfig, handlers: Handlers, transitions: T) -> Result<Self, ControllerError> {
        let trackers = [
            AxisTracker::new(Axis::X, config.sensitivity_for(Axis::X)?, handlers.x),
            AxisTracker::new(Axis::Y, config.sensitivity_for(Axis::Y)?, handlers.y),
        ];
        debug!(
            "touch controller: sensitivity x={} y={}, priority={:?}",
            trackers[0].sensitivity(),
            trackers[1].sensitivity(),
            config.priority_axis
        );
        Ok(Self {
            trackers,
            ranking: config.priority_axis.ranking(),
            click: handlers.click,
            state: GestureState::default(),
            transitions,
        })
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn tracker(&self, axis: Axis) -> &AxisTracker {
        &self.trackers[axis.index()]
    }

    pub fn transitions(&self) -> &T {
        &self.transitions
    }

    pub fn handle(&mut self, input: TouchInput) -> GestureOutcome {
        match (input.phase, input.point) {
            (TouchPhase::Start, Some(p)) => self.touch_start(p),
            (TouchPhase::Move, Some(p)) => self.touch_move(p),
            (TouchPhase::Start, None) => self.abandon(),
            (TouchPhase::Move, None) => GestureOutcome::Ignored,
            (TouchPhase::End, _) => self.touch_end(),
            (TouchPhase::Cancel, _) => self.touch_cancel(),
        }
    }

    pub fn touch_start(&mut self, point: Point) -> GestureOutcome {
        if self.state.phase == Phase::Tracking {
            debug!("touchstart during an active gesture, starting over");
        }
        self.state = GestureState {
            phase: Phase::Tracking,
            start: Some(point),
            current: None,
        };
        for t in &mut self.trackers {
            t.clear();
        }
        trace!("gesture start at ({}, {})", point.x, point.y);
        GestureOutcome::Started(point)
    }

    /// A start we cannot locate still ends whatever gesture was in progress.
    fn abandon(&mut self) -> GestureOutcome {
        if self.state.phase == Phase::Tracking {
            debug!("touchstart without a point, dropping the active gesture");
        }
        self.state = GestureState::default();
        for t in &mut self.trackers {
            t.clear();
        }
        for axis in Axis::ALL {
            self.transitions.release(axis);
        }
        GestureOutcome::Ignored
    }

    pub fn touch_move(&mut self, point: Point) -> GestureOutcome {
        let Some(start) = self.state.start else {
            debug!("touchmove without touchstart ignored");
            return GestureOutcome::Ignored;
        };
        self.state.current = Some(point);
        let dx = point.x - start.x;
        let dy = point.y - start.y;
        self.trackers[Axis::X.index()].record_delta(dx);
        self.trackers[Axis::Y.index()].record_delta(dy);

        match self.ranking {
            None => {
                for axis in Axis::ALL {
                    if self.tracker(axis).has_callback() {
                        self.transitions.capture(axis);
                        self.tracker(axis).resolve_move();
                    }
                }
            }
            Some((priority, secondary)) => self.move_ranked(priority, secondary),
        }
        GestureOutcome::Moved { dx, dy }
    }

    fn move_ranked(&mut self, priority: Axis, secondary: Axis) {
        self.transitions.capture(priority);
        let p = self.tracker(priority);
        let s = self.tracker(secondary);
        if p.delta().abs() < s.delta().abs() && p.delta().abs() < p.sensitivity() {
            self.transitions.capture(secondary);
            self.tracker(secondary).resolve_move();
        } else {
            self.tracker(priority).resolve_move();
            if self.transitions.is_captured(secondary) {
                trace!("{:?} takes over from {:?}, snapping {:?} back", priority, secondary, secondary);
                self.transitions.release(secondary);
                self.tracker(secondary).resolve_end(false);
            }
        }
    }

    pub fn touch_end(&mut self) -> GestureOutcome {
        self.release()
    }

    /// Same as [`touch_end`](Self::touch_end): an interrupted gesture is settled, never left hanging.
    pub fn touch_cancel(&mut self) -> GestureOutcome {
        self.release()
    }

    fn release(&mut self) -> GestureOutcome {
        for axis in Axis::ALL {
            self.transitions.release(axis);
        }
        let state = std::mem::take(&mut self.state);
        let outcome = match (state.start, state.current) {
            (Some(start), None) => {
                debug!("tap at ({}, {})", start.x, start.y);
                if let Some(click) = &self.click {
                    click.emit(start);
                }
                GestureOutcome::Tapped(start)
            }
            (Some(_), Some(_)) => {
                match self.ranking {
                    None => {
                        for t in self.trackers.iter().filter(|t| t.has_callback()) {
                            let committed = t.crosses_threshold();
                            debug!("release: {:?} {}", t.axis(), if committed { "commit" } else { "revert" });
                            t.resolve_end(committed);
                        }
                    }
                    Some((priority, secondary)) => self.release_ranked(priority, secondary),
                }
                GestureOutcome::Released
            }
            (None, _) => GestureOutcome::Ignored,
        };
        for t in &mut self.trackers {
            t.clear();
        }
        outcome
    }

    fn release_ranked(&mut self, priority: Axis, secondary: Axis) {
        let committed = self.tracker(priority).crosses_threshold();
        self.tracker(priority).resolve_end(committed);
        if !committed {
            // a priority axis that stayed below its threshold cancels the whole gesture
            self.trackers[secondary.index()].clear();
        }
        let s = self.tracker(secondary);
        debug!(
            "release: {:?} {}, {:?} {}",
            priority,
            if committed { "commit" } else { "revert" },
            secondary,
            if s.crosses_threshold() { "commit" } else { "revert" }
        );
        s.resolve_end(s.crosses_threshold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PriorityAxis;
    use crate::state::transition::MemoryTransitions;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Debug, PartialEq)]
    enum Call {
        X(AxisOutcome),
        Y(AxisOutcome),
        Click(Point),
    }

    fn controller(config: ControllerConfig) -> (GestureController<MemoryTransitions>, Rc<RefCell<Vec<Call>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (lx, ly, lc) = (log.clone(), log.clone(), log.clone());
        let handlers = Handlers {
            x: Some(Callback::from(move |o| lx.borrow_mut().push(Call::X(o)))),
            y: Some(Callback::from(move |o| ly.borrow_mut().push(Call::Y(o)))),
            click: Some(Callback::from(move |p| lc.borrow_mut().push(Call::Click(p)))),
        };
        let c = GestureController::new(&config, handlers, MemoryTransitions::new()).unwrap();
        (c, log)
    }

    fn ends(log: &Rc<RefCell<Vec<Call>>>) -> Vec<Call> {
        log.borrow()
            .iter()
            .filter(|c| matches!(c, Call::X(AxisOutcome::End(_)) | Call::Y(AxisOutcome::End(_))))
            .cloned()
            .collect()
    }

    #[test]
    fn free_axes_commit_and_revert_independently() {
        let (mut c, log) = controller(ControllerConfig::default());
        c.touch_start(Point::new(0.0, 0.0));
        assert_eq!(c.touch_move(Point::new(100.0, 10.0)), GestureOutcome::Moved { dx: 100.0, dy: 10.0 });
        assert_eq!(c.touch_end(), GestureOutcome::Released);
        assert_eq!(
            *log.borrow(),
            vec![
                Call::X(AxisOutcome::Move(100.0)),
                Call::Y(AxisOutcome::Move(10.0)),
                Call::X(AxisOutcome::End(100.0)),
                Call::Y(AxisOutcome::End(0.0)),
            ]
        );
        assert_eq!(*c.state(), GestureState::default());
    }

    #[test]
    fn secondary_wins_small_diagonal_but_is_cancelled_at_release() {
        let cfg = ControllerConfig::default()
            .with_priority(PriorityAxis::X)
            .with_axis_sensitivity(Axis::X, 50.0)
            .with_axis_sensitivity(Axis::Y, 50.0);
        let (mut c, log) = controller(cfg);
        c.touch_start(Point::new(0.0, 0.0));
        c.touch_move(Point::new(20.0, 40.0));
        assert_eq!(*log.borrow(), vec![Call::Y(AxisOutcome::Move(40.0))]);
        c.touch_end();
        assert_eq!(ends(&log), vec![Call::X(AxisOutcome::End(0.0)), Call::Y(AxisOutcome::End(0.0))]);
    }

    #[test]
    fn tap_only_reaches_click_handler() {
        let (mut c, log) = controller(ControllerConfig::default());
        c.touch_start(Point::new(5.0, 5.0));
        assert_eq!(c.touch_end(), GestureOutcome::Tapped(Point::new(5.0, 5.0)));
        assert_eq!(*log.borrow(), vec![Call::Click(Point::new(5.0, 5.0))]);
    }

    #[test]
    fn cancel_settles_like_end() {
        let run = |cancel: bool| {
            let (mut c, log) = controller(ControllerConfig::default());
            c.touch_start(Point::new(0.0, 0.0));
            c.touch_move(Point::new(200.0, 0.0));
            if cancel { c.touch_cancel() } else { c.touch_end() };
            assert_eq!(c.state().phase, Phase::Idle);
            ends(&log)
        };
        let cancelled = run(true);
        assert_eq!(cancelled, vec![Call::X(AxisOutcome::End(200.0)), Call::Y(AxisOutcome::End(0.0))]);
        assert_eq!(cancelled, run(false));
    }

    #[test]
    fn move_before_start_is_ignored() {
        let (mut c, log) = controller(ControllerConfig::default());
        assert_eq!(c.touch_move(Point::new(30.0, 30.0)), GestureOutcome::Ignored);
        assert_eq!(c.state().current, None);
        assert_eq!(c.touch_end(), GestureOutcome::Ignored);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn start_mid_gesture_begins_fresh() {
        let (mut c, log) = controller(ControllerConfig::default());
        c.touch_start(Point::new(0.0, 0.0));
        c.touch_move(Point::new(90.0, 0.0));
        c.touch_start(Point::new(50.0, 50.0));
        assert_eq!(c.tracker(Axis::X).delta(), 0.0);
        assert_eq!(c.state().current, None);
        log.borrow_mut().clear();
        c.touch_end();
        assert_eq!(*log.borrow(), vec![Call::Click(Point::new(50.0, 50.0))]);
    }

    #[test]
    fn each_ranked_move_drives_exactly_one_axis() {
        let cfg = ControllerConfig::default().with_priority(PriorityAxis::X).with_sensitivity(50.0);
        let (mut c, log) = controller(cfg);
        c.touch_start(Point::new(0.0, 0.0));
        for (x, y) in [(5.0, 30.0), (40.0, 10.0), (10.0, -60.0), (60.0, 90.0), (-3.0, 0.0)] {
            log.borrow_mut().clear();
            c.touch_move(Point::new(x, y));
            let moves: Vec<_> = log
                .borrow()
                .iter()
                .filter(|c| matches!(c, Call::X(AxisOutcome::Move(_)) | Call::Y(AxisOutcome::Move(_))))
                .cloned()
                .collect();
            assert_eq!(moves.len(), 1, "move to ({x}, {y}) drove {moves:?}");
        }
    }

    #[test]
    fn priority_taking_over_snaps_secondary_back() {
        let cfg = ControllerConfig::default().with_priority(PriorityAxis::X).with_sensitivity(50.0);
        let (mut c, log) = controller(cfg);
        c.touch_start(Point::new(0.0, 0.0));
        c.touch_move(Point::new(5.0, 30.0));
        assert!(c.transitions().is_captured(Axis::Y));
        c.touch_move(Point::new(60.0, 30.0));
        assert!(!c.transitions().is_captured(Axis::Y));
        assert_eq!(
            *log.borrow(),
            vec![
                Call::Y(AxisOutcome::Move(30.0)),
                Call::X(AxisOutcome::Move(60.0)),
                Call::Y(AxisOutcome::End(0.0)),
            ]
        );
        // secondary is not engaged any more, so no second snap-back
        c.touch_move(Point::new(70.0, 30.0));
        assert_eq!(log.borrow().last(), Some(&Call::X(AxisOutcome::Move(70.0))));
    }

    #[test]
    fn uncommitted_priority_forces_secondary_to_zero() {
        let cfg = ControllerConfig::default().with_priority(PriorityAxis::X).with_sensitivity(50.0);
        let (mut c, log) = controller(cfg);
        c.touch_start(Point::new(0.0, 0.0));
        c.touch_move(Point::new(10.0, 200.0));
        c.touch_end();
        assert_eq!(ends(&log), vec![Call::X(AxisOutcome::End(0.0)), Call::Y(AxisOutcome::End(0.0))]);
    }

    #[test]
    fn committed_priority_lets_secondary_judge_itself() {
        let cfg = ControllerConfig::default().with_priority(PriorityAxis::X).with_sensitivity(50.0);
        let (mut c, log) = controller(cfg);
        c.touch_start(Point::new(0.0, 0.0));
        c.touch_move(Point::new(80.0, -55.0));
        c.touch_end();
        assert_eq!(ends(&log), vec![Call::X(AxisOutcome::End(80.0)), Call::Y(AxisOutcome::End(-55.0))]);
    }

    #[test]
    fn y_priority_ranks_y_first() {
        let cfg = ControllerConfig::default().with_priority(PriorityAxis::Y).with_sensitivity(50.0);
        let (mut c, log) = controller(cfg);
        c.touch_start(Point::new(0.0, 0.0));
        c.touch_move(Point::new(40.0, 20.0));
        assert_eq!(*log.borrow(), vec![Call::X(AxisOutcome::Move(40.0))]);
        c.touch_move(Point::new(40.0, 60.0));
        assert_eq!(log.borrow()[1], Call::Y(AxisOutcome::Move(60.0)));
        c.touch_end();
        assert_eq!(ends(&log)[1..], [Call::Y(AxisOutcome::End(60.0)), Call::X(AxisOutcome::End(0.0))]);
    }

    #[test]
    fn release_returns_every_transition() {
        let (mut c, _) = controller(ControllerConfig::default());
        c.touch_start(Point::new(0.0, 0.0));
        c.touch_move(Point::new(10.0, 10.0));
        assert!(c.transitions().is_captured(Axis::X) && c.transitions().is_captured(Axis::Y));
        c.touch_end();
        assert!(!c.transitions().is_captured(Axis::X) && !c.transitions().is_captured(Axis::Y));
    }

    #[test]
    fn single_axis_controller_leaves_other_axis_alone() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let handlers = Handlers {
            y: Some(Callback::from(move |o: AxisOutcome| sink.borrow_mut().push(o))),
            ..Default::default()
        };
        let mut c = GestureController::new(&ControllerConfig::default(), handlers, MemoryTransitions::new()).unwrap();
        c.handle(TouchInput::new(TouchPhase::Start, Some(Point::new(0.0, 0.0))));
        c.handle(TouchInput::new(TouchPhase::Move, Some(Point::new(300.0, -80.0))));
        assert!(!c.transitions().is_captured(Axis::X));
        // no click handler configured; a tap must still settle quietly
        c.handle(TouchInput::new(TouchPhase::Cancel, None));
        assert_eq!(*log.borrow(), vec![AxisOutcome::Move(-80.0), AxisOutcome::End(-80.0)]);
        c.handle(TouchInput::new(TouchPhase::Start, Some(Point::new(1.0, 1.0))));
        assert_eq!(c.handle(TouchInput::new(TouchPhase::End, None)), GestureOutcome::Tapped(Point::new(1.0, 1.0)));
    }

    #[test]
    fn start_without_point_returns_to_idle() {
        let (mut c, log) = controller(ControllerConfig::default());
        c.touch_start(Point::new(0.0, 0.0));
        c.touch_move(Point::new(120.0, 0.0));
        log.borrow_mut().clear();
        assert_eq!(c.handle(TouchInput::new(TouchPhase::Start, None)), GestureOutcome::Ignored);
        assert_eq!(*c.state(), GestureState::default());
        assert_eq!(c.tracker(Axis::X).delta(), 0.0);
        assert!(!c.transitions().is_captured(Axis::X));
        // the abandoned drag must not be settled or reported as a tap afterwards
        assert_eq!(c.touch_move(Point::new(200.0, 0.0)), GestureOutcome::Ignored);
        assert_eq!(c.touch_end(), GestureOutcome::Ignored);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn invalid_sensitivity_fails_construction() {
        let cfg = ControllerConfig::default().with_axis_sensitivity(Axis::X, -1.0);
        assert!(GestureController::new(&cfg, Handlers::default(), MemoryTransitions::new()).is_err());
    }
}
