// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! The trajectory validator
//!
//! Every step of a candidate trajectory is re-derived from the previous step
//! and the outcome that closed it. The first disagreement is reported as a
//! [`Violation`] naming the step, the rule and both values.

use crate::{
    ack::AckOutcome,
    error::{Error, Result},
    settings::InitialState,
    state::MINIMUM_WINDOW,
    synthesis::trajectory_len,
    trace,
    trajectory::{Trajectory, TrajectoryStep},
};
use alloc::{format, string::String};
use core::fmt;


/// The number of steps preceding a violation included in a diagram
const DIAGRAM_CONTEXT: usize = 4;

/// The rules a trajectory must obey
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// The trajectory has one step per outcome, and at least one step
    Length,
    /// The round trip index of a step equals its position
    RoundTripIndex,
    /// The window is positive
    PositiveWindow,
    /// The threshold is positive
    PositiveThreshold,
    /// The first window equals the configured initial window
    InitialWindow,
    /// The first threshold equals the configured initial threshold
    InitialThreshold,
    /// The outcome recorded on a step is the outcome supplied for it
    AckLabel,
    /// The window only collapses to the minimum after a loss
    LossCollapse,
    /// The window follows from the previous step
    WindowTransition,
    /// The threshold follows from the previous step
    ThresholdTransition,
}

impl Rule {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::RoundTripIndex => "round_trip_index",
            Self::PositiveWindow => "positive_window",
            Self::PositiveThreshold => "positive_threshold",
            Self::InitialWindow => "initial_window",
            Self::InitialThreshold => "initial_threshold",
            Self::AckLabel => "ack_label",
            Self::LossCollapse => "loss_collapse",
            Self::WindowTransition => "window_transition",
            Self::ThresholdTransition => "threshold_transition",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value compared by a rule
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    Count(u64),
    Ack(Option<AckOutcome>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Count(value) => write!(f, "{value}"),
            Self::Ack(Some(ack)) => write!(f, "{ack}"),
            Self::Ack(None) => f.write_str("none"),
        }
    }
}

impl From<u32> for Value {
    #[inline]
    fn from(value: u32) -> Self {
        Self::Count(value as u64)
    }
}

impl From<usize> for Value {
    #[inline]
    fn from(value: usize) -> Self {
        Self::Count(value as u64)
    }
}

impl From<Option<AckOutcome>> for Value {
    #[inline]
    fn from(value: Option<AckOutcome>) -> Self {
        Self::Ack(value)
    }
}

/// The first rule a trajectory failed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Violation {
    /// The round trip index at which the rule failed
    pub step: usize,
    pub rule: Rule,
    pub expected: Value,
    pub actual: Value,
}

impl Violation {
    #[inline]
    fn new<E: Into<Value>, A: Into<Value>>(step: usize, rule: Rule, expected: E, actual: A) -> Self {
        Self {
            step,
            rule,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Renders the steps leading to the violation as a table
    ///
    /// Format:
    /// ```text
    /// Failure: step 3 violates window_transition: expected 8, found 9
    ///
    ///  Step |   Window | Threshold | Ack
    /// ------|----------|-----------|----------
    ///     1 |        2 |        64 | normal
    ///     2 |        4 |        64 | normal
    ///     3 |        9 |        64 | normal    <-- window_transition
    /// ```
    pub fn render_diagram(&self, trajectory: &Trajectory) -> String {
        let mut output = format!("Failure: {self}\n\n");

        output.push_str(" Step |   Window | Threshold | Ack\n");
        output.push_str("------|----------|-----------|----------\n");

        let end = trajectory.len().min(self.step + 1);
        let start = end.saturating_sub(DIAGRAM_CONTEXT + 1);

        for (t, step) in trajectory[start..end].iter().enumerate() {
            let t = start + t;
            let ack = format!("{}", Value::Ack(step.ack));

            if t == self.step {
                output.push_str(&format!(
                    "{t:5} | {:8} | {:9} | {ack:<9} <-- {}\n",
                    step.window, step.threshold, self.rule
                ));
            } else {
                output.push_str(&format!(
                    "{t:5} | {:8} | {:9} | {ack}\n",
                    step.window, step.threshold
                ));
            }
        }

        if end <= self.step {
            output.push_str(&format!("(step {} is missing)\n", self.step));
        }

        output
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "step {} violates {}: expected {}, found {}",
            self.step, self.rule, self.expected, self.actual
        )
    }
}

/// Checks that `trajectory` is the trajectory driven by `acks` from `initial`
///
/// Fails with [`Error::InvariantViolation`] at the first step that breaks a
/// [`Rule`], with [`Error::InvalidInitialState`] if a constant is zero, and
/// with [`Error::InfeasibleInput`] if the expected window of a step does not
/// fit in a `u32`.
pub fn validate(trajectory: &Trajectory, acks: &[AckOutcome], initial: InitialState) -> Result<()> {
    initial.validate()?;

    let result = check(trajectory, acks, initial);

    trace::_debug!(
        steps = trajectory.len(),
        valid = result.is_ok(),
        error = ?result.as_ref().err(),
        "validated trajectory"
    );

    result
}

fn check(trajectory: &Trajectory, acks: &[AckOutcome], initial: InitialState) -> Result<()> {
    let len = trajectory_len(acks);

    if trajectory.len() != len {
        let step = trajectory.len().min(len);
        return Err(Violation::new(step, Rule::Length, len, trajectory.len()).into());
    }

    let mut previous: Option<&TrajectoryStep> = None;

    for (t, step) in trajectory.iter().enumerate() {
        check_step(t, step, acks)?;

        match previous {
            None => check_initial(step, initial)?,
            Some(previous) => check_transition(t, previous, step, acks[t - 1])?,
        }

        previous = Some(step);
    }

    Ok(())
}

/// Checks the rules that hold for every step on its own
#[inline]
fn check_step(t: usize, step: &TrajectoryStep, acks: &[AckOutcome]) -> Result<(), Violation> {
    if step.round_trip_index != t {
        return Err(Violation::new(
            t,
            Rule::RoundTripIndex,
            t,
            step.round_trip_index,
        ));
    }

    if step.window == 0 {
        return Err(Violation::new(t, Rule::PositiveWindow, MINIMUM_WINDOW, 0u32));
    }

    if step.threshold == 0 {
        return Err(Violation::new(t, Rule::PositiveThreshold, 1u32, 0u32));
    }

    let ack = acks.get(t).copied();
    if step.ack != ack {
        return Err(Violation::new(t, Rule::AckLabel, ack, step.ack));
    }

    Ok(())
}

#[inline]
fn check_initial(step: &TrajectoryStep, initial: InitialState) -> Result<(), Violation> {
    if step.window != initial.window {
        return Err(Violation::new(
            0,
            Rule::InitialWindow,
            initial.window,
            step.window,
        ));
    }

    if step.threshold != initial.threshold {
        return Err(Violation::new(
            0,
            Rule::InitialThreshold,
            initial.threshold,
            step.threshold,
        ));
    }

    Ok(())
}

#[inline]
fn check_transition(
    t: usize,
    previous: &TrajectoryStep,
    step: &TrajectoryStep,
    ack: AckOutcome,
) -> Result<()> {
    let expected = previous
        .state()
        .on_ack(ack)
        .ok_or(Error::InfeasibleInput { step: t })?;

    // growth from a positive window always yields at least 2, so the minimum
    // window can only follow a loss
    if step.window == MINIMUM_WINDOW && !ack.is_loss() {
        return Err(Violation::new(t, Rule::LossCollapse, expected.window, step.window).into());
    }

    if step.window != expected.window {
        return Err(
            Violation::new(t, Rule::WindowTransition, expected.window, step.window).into(),
        );
    }

    if step.threshold != expected.threshold {
        return Err(Violation::new(
            t,
            Rule::ThresholdTransition,
            expected.threshold,
            step.threshold,
        )
        .into());
    }

    Ok(())
}
