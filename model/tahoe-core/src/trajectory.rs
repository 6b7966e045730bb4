// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::{ack::AckOutcome, state::State};
use alloc::vec::Vec;
use core::{ops::Deref, slice};

/// The state at a single round trip
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TrajectoryStep {
    /// The congestion window
    pub window: u32,
    /// The slow start threshold
    pub threshold: u32,
    /// The number of elapsed round trips; equal to the step's index
    pub round_trip_index: usize,
    /// The outcome that drives the transition into the next step
    ///
    /// Only the single step synthesized from an empty sequence has no outcome.
    pub ack: Option<AckOutcome>,
}

impl TrajectoryStep {
    #[inline]
    pub const fn new(round_trip_index: usize, state: State, ack: Option<AckOutcome>) -> Self {
        Self {
            window: state.window,
            threshold: state.threshold,
            round_trip_index,
            ack,
        }
    }

    #[inline]
    pub const fn state(&self) -> State {
        State {
            window: self.window,
            threshold: self.threshold,
        }
    }
}

/// A time-indexed record of congestion control states
///
/// A trajectory is built once, either by [`crate::synthesize`] or from an
/// externally supplied candidate, and is read-only afterwards. Building a
/// trajectory does not check it; use [`crate::validate`] for that.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Trajectory {
    steps: Vec<TrajectoryStep>,
}

impl Trajectory {
    #[inline]
    pub fn from_steps(steps: Vec<TrajectoryStep>) -> Self {
        Self { steps }
    }

    #[inline]
    pub fn steps(&self) -> &[TrajectoryStep] {
        &self.steps
    }

    #[inline]
    pub fn into_steps(self) -> Vec<TrajectoryStep> {
        self.steps
    }

    /// Returns the state after the last transition
    #[inline]
    pub fn final_state(&self) -> Option<State> {
        self.steps.last().map(TrajectoryStep::state)
    }

    #[inline]
    pub fn windows(&self) -> impl Iterator<Item = u32> + '_ {
        self.steps.iter().map(|step| step.window)
    }

    #[inline]
    pub fn thresholds(&self) -> impl Iterator<Item = u32> + '_ {
        self.steps.iter().map(|step| step.threshold)
    }

    #[inline]
    pub fn round_trip_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.steps.iter().map(|step| step.round_trip_index)
    }

    #[inline]
    pub fn acks(&self) -> impl Iterator<Item = Option<AckOutcome>> + '_ {
        self.steps.iter().map(|step| step.ack)
    }

    /// Splits the trajectory into four parallel sequences for reporting
    pub fn series(&self) -> Series {
        Series {
            windows: self.windows().collect(),
            thresholds: self.thresholds().collect(),
            round_trip_indices: self.round_trip_indices().collect(),
            acks: self.acks().collect(),
        }
    }
}

impl Deref for Trajectory {
    type Target = [TrajectoryStep];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectoryStep;
    type IntoIter = slice::Iter<'a, TrajectoryStep>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// A trajectory as parallel sequences of equal length
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Series {
    pub windows: Vec<u32>,
    pub thresholds: Vec<u32>,
    pub round_trip_indices: Vec<usize>,
    pub acks: Vec<Option<AckOutcome>>,
}

impl Series {
    #[inline]
    pub fn len(&self) -> usize {
        self.round_trip_indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.round_trip_indices.is_empty()
    }
}
