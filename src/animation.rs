//! One-shot entrance animations driven by viewport visibility.
//!
//! Watched elements start `Unanimated` and move to `Animated` the first time
//! they cross the visibility threshold. Re-entering the viewport never
//! re-triggers them, so a counter can't restart mid-flight.

use std::collections::HashMap;

use log::debug;

use crate::error::{ContentError, Result};

pub const FADE_IN_CLASS: &str = "animate-fade-in";
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.3;
pub const DEFAULT_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const DEFAULT_COUNTER_STEPS: u32 = 100;
pub const DEFAULT_COUNTER_TICK_MS: u32 = 20;
const STAGGER_SLOTS: usize = 6;

/// Declared fill of a progress bar, always within `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressTarget(u8);

impl ProgressTarget {
    pub fn new(percent: u32) -> Result<Self> {
        u8::try_from(percent)
            .ok()
            .filter(|value| *value <= 100)
            .map(Self)
            .ok_or(ContentError::PercentageOutOfRange { value: percent })
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    /// CSS width once the fill has run.
    pub fn width(self) -> String {
        format!("{}%", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationKind {
    ProgressFill(ProgressTarget),
    Counter { target: u64 },
    FadeOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    Unanimated,
    Animated,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_VISIBILITY_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN,
        }
    }
}

/// What the observer reported for one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilitySample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// Work the page has to do for an element that just became visible.
#[derive(Clone, Debug, PartialEq)]
pub struct Trigger {
    pub id: String,
    pub kind: AnimationKind,
    pub fade_class: &'static str,
}

struct Watched {
    kind: AnimationKind,
    state: AnimationState,
}

pub struct VisibilityAnimator {
    options: ObserverOptions,
    watched: HashMap<String, Watched>,
}

impl VisibilityAnimator {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            watched: HashMap::new(),
        }
    }

    pub fn options(&self) -> ObserverOptions {
        self.options
    }

    pub fn watch(&mut self, id: impl Into<String>, kind: AnimationKind) {
        self.watched.insert(
            id.into(),
            Watched {
                kind,
                state: AnimationState::Unanimated,
            },
        );
    }

    pub fn state(&self, id: &str) -> Option<AnimationState> {
        self.watched.get(id).map(|watched| watched.state)
    }

    pub fn on_visibility(&mut self, id: &str, sample: VisibilitySample) -> Option<Trigger> {
        if !sample.is_intersecting || sample.ratio < self.options.threshold {
            return None;
        }

        let watched = self.watched.get_mut(id)?;
        if watched.state == AnimationState::Animated {
            return None;
        }

        watched.state = AnimationState::Animated;
        debug!("animation triggered for {id}: {:?}", watched.kind);

        Some(Trigger {
            id: id.to_string(),
            kind: watched.kind,
            fade_class: FADE_IN_CLASS,
        })
    }
}

/// Delay class staggering fade-ins across six slots of 100ms.
pub fn stagger_delay_class(index: usize) -> String {
    format!("delay-{}", (index % STAGGER_SLOTS) * 100)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterTick {
    Running(u64),
    Finished(u64),
}

impl CounterTick {
    pub fn value(self) -> u64 {
        match self {
            Self::Running(value) | Self::Finished(value) => value,
        }
    }

    pub fn is_finished(self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

/// Counts a displayed integer up from zero in a fixed number of steps.
#[derive(Clone, Debug)]
pub struct CounterStepper {
    target: u64,
    steps: u32,
    step: u32,
}

impl CounterStepper {
    pub fn new(target: u64, steps: u32) -> Self {
        Self {
            target,
            steps: steps.max(1),
            step: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps
    }

    pub fn tick(&mut self) -> CounterTick {
        if self.is_finished() {
            return CounterTick::Finished(self.target);
        }

        self.step += 1;
        if self.is_finished() {
            return CounterTick::Finished(self.target);
        }

        let value = u128::from(self.target) * u128::from(self.step) / u128::from(self.steps);
        CounterTick::Running(value as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(ratio: f64) -> VisibilitySample {
        VisibilitySample {
            is_intersecting: true,
            ratio,
        }
    }

    #[test]
    fn progress_target_rejects_values_above_hundred() {
        assert_eq!(
            ProgressTarget::new(101),
            Err(ContentError::PercentageOutOfRange { value: 101 })
        );
        assert!(ProgressTarget::new(70_000).is_err());
    }

    #[test]
    fn progress_fill_ends_at_declared_percentage() {
        for percent in [0, 1, 45, 99, 100] {
            let target = ProgressTarget::new(percent).expect("valid percentage");
            assert_eq!(target.width(), format!("{percent}%"));
        }
    }

    #[test]
    fn counter_finishes_exactly_on_target() {
        for target in [0, 1, 7, 99, 100, 250, 1_234_567] {
            let mut stepper = CounterStepper::new(target, DEFAULT_COUNTER_STEPS);
            let mut last = 0;
            let mut ticks = 0;

            loop {
                let tick = stepper.tick();
                ticks += 1;
                assert!(tick.value() >= last, "counter went backwards at {target}");
                last = tick.value();
                if tick.is_finished() {
                    break;
                }
            }

            assert_eq!(last, target);
            assert_eq!(ticks, DEFAULT_COUNTER_STEPS);
        }
    }

    #[test]
    fn counter_floors_intermediate_values() {
        let mut stepper = CounterStepper::new(50, DEFAULT_COUNTER_STEPS);

        assert_eq!(stepper.tick(), CounterTick::Running(0));
        assert_eq!(stepper.tick(), CounterTick::Running(1));
        assert_eq!(stepper.tick(), CounterTick::Running(1));
    }

    #[test]
    fn finished_counter_stays_finished() {
        let mut stepper = CounterStepper::new(3, 2);

        assert_eq!(stepper.tick(), CounterTick::Running(1));
        assert_eq!(stepper.tick(), CounterTick::Finished(3));
        assert_eq!(stepper.tick(), CounterTick::Finished(3));
    }

    #[test]
    fn element_below_threshold_is_not_triggered() {
        let mut animator = VisibilityAnimator::new(ObserverOptions::default());
        animator.watch("card", AnimationKind::FadeOnly);

        assert_eq!(animator.on_visibility("card", visible(0.1)), None);
        assert_eq!(
            animator.on_visibility(
                "card",
                VisibilitySample {
                    is_intersecting: false,
                    ratio: 0.9,
                }
            ),
            None
        );
        assert_eq!(animator.state("card"), Some(AnimationState::Unanimated));
    }

    #[test]
    fn visible_element_triggers_once_with_fade_class() {
        let mut animator = VisibilityAnimator::new(ObserverOptions::default());
        animator.watch("stat-projects", AnimationKind::Counter { target: 12 });

        let trigger = animator
            .on_visibility("stat-projects", visible(0.3))
            .expect("element crossed threshold");
        assert_eq!(trigger.kind, AnimationKind::Counter { target: 12 });
        assert_eq!(trigger.fade_class, FADE_IN_CLASS);
        assert_eq!(animator.state("stat-projects"), Some(AnimationState::Animated));

        assert_eq!(animator.on_visibility("stat-projects", visible(1.0)), None);
    }

    #[test]
    fn default_options_use_thirty_percent_and_bottom_margin() {
        let options = ObserverOptions::default();

        assert!((options.threshold - 0.3).abs() < f64::EPSILON);
        assert_eq!(options.root_margin, "0px 0px -50px 0px");

        let mut animator = VisibilityAnimator::new(options);
        animator.watch("bar", AnimationKind::FadeOnly);
        assert_eq!(animator.on_visibility("bar", visible(0.29)), None);
        assert!(animator.on_visibility("bar", visible(0.3)).is_some());
    }

    #[test]
    fn every_kind_receives_fade_class() {
        let kinds = [
            AnimationKind::ProgressFill(ProgressTarget::new(65).expect("valid percentage")),
            AnimationKind::Counter { target: 40 },
            AnimationKind::FadeOnly,
        ];
        let mut animator = VisibilityAnimator::new(ObserverOptions::default());

        for (index, kind) in kinds.into_iter().enumerate() {
            let id = format!("element-{index}");
            animator.watch(id.clone(), kind);

            let trigger = animator
                .on_visibility(&id, visible(0.5))
                .expect("element crossed threshold");
            assert_eq!(trigger.kind, kind);
            assert_eq!(trigger.fade_class, FADE_IN_CLASS);
        }
    }

    #[test]
    fn unknown_element_is_ignored() {
        let mut animator = VisibilityAnimator::new(ObserverOptions::default());
        assert_eq!(animator.on_visibility("missing", visible(1.0)), None);
    }

    #[test]
    fn stagger_delay_wraps_after_six_elements() {
        assert_eq!(stagger_delay_class(0), "delay-0");
        assert_eq!(stagger_delay_class(5), "delay-500");
        assert_eq!(stagger_delay_class(6), "delay-0");
        assert_eq!(stagger_delay_class(8), "delay-200");
    }
}
