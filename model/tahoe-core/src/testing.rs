// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::trajectory::{Trajectory, TrajectoryStep};
use alloc::vec::Vec;

/// Outcome sequences exercised by the scenario tests and simulations
pub mod scenarios {
    use crate::ack::AckOutcome::{self, *};
    use alloc::vec::Vec;

    fn concat(parts: &[(AckOutcome, usize)]) -> Vec<AckOutcome> {
        parts
            .iter()
            .flat_map(|&(ack, count)| core::iter::repeat(ack).take(count))
            .collect()
    }

    /// `[Normal] * 7 + [Timeout] + [Normal] * 12`
    pub fn single_timeout() -> Vec<AckOutcome> {
        concat(&[(Normal, 7), (Timeout, 1), (Normal, 12)])
    }

    pub fn no_timeouts() -> Vec<AckOutcome> {
        concat(&[(Normal, 5)])
    }

    pub fn multiple_timeouts() -> Vec<AckOutcome> {
        concat(&[(Normal, 2), (Timeout, 1), (Normal, 2), (Timeout, 1), (Normal, 1)])
    }

    pub fn consecutive_timeouts() -> Vec<AckOutcome> {
        concat(&[(Normal, 2), (Timeout, 2), (Normal, 2)])
    }

    pub fn timeout_at_start() -> Vec<AckOutcome> {
        concat(&[(Timeout, 1), (Normal, 1)])
    }

    pub fn timeout_at_end() -> Vec<AckOutcome> {
        concat(&[(Normal, 2), (Timeout, 1)])
    }

    /// Two losses, the second one hitting during slow start
    pub fn two_losses() -> Vec<AckOutcome> {
        concat(&[(Normal, 7), (Timeout, 1), (Normal, 5), (Timeout, 1), (Normal, 1)])
    }

    /// Alternating duplicate acknowledgements and timeouts in congestion avoidance
    pub fn mixed_losses() -> Vec<AckOutcome> {
        concat(&[
            (Normal, 8),
            (Duplicate, 1),
            (Normal, 7),
            (Timeout, 1),
            (Normal, 3),
            (Duplicate, 1),
            (Normal, 4),
        ])
    }
}

/// A value of a step that can be altered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "generator"), derive(bolero_generator::TypeGenerator))]
pub enum Field {
    Window,
    Threshold,
    RoundTripIndex,
}

/// Returns a copy of `trajectory` with one value of `step` increased by `delta`
///
/// `trajectory` itself is left untouched.
pub fn mutate(trajectory: &Trajectory, step: usize, field: Field, delta: u32) -> Trajectory {
    let mut steps: Vec<TrajectoryStep> = trajectory.steps().to_vec();
    let target = &mut steps[step];

    match field {
        Field::Window => target.window = target.window.wrapping_add(delta),
        Field::Threshold => target.threshold = target.threshold.wrapping_add(delta),
        Field::RoundTripIndex => {
            target.round_trip_index = target.round_trip_index.wrapping_add(delta as usize)
        }
    }

    Trajectory::from_steps(steps)
}

/// Returns a copy of `trajectory` with the value of `field` at `step` replaced
pub fn replace(trajectory: &Trajectory, step: usize, field: Field, value: u32) -> Trajectory {
    let mut steps: Vec<TrajectoryStep> = trajectory.steps().to_vec();
    let target = &mut steps[step];

    match field {
        Field::Window => target.window = value,
        Field::Threshold => target.threshold = value,
        Field::RoundTripIndex => target.round_trip_index = value as usize,
    }

    Trajectory::from_steps(steps)
}
