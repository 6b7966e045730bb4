// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! The state recurrence engine
//!
//! The transition from one round trip to the next is a total function of the
//! previous state and the outcome that closed the round trip, so the
//! trajectory for an outcome sequence is unique and is computed forward in a
//! single pass.

use crate::{
    ack::AckOutcome,
    error::{Error, Result},
    settings::InitialState,
    trace,
    trajectory::{Trajectory, TrajectoryStep},
};
use alloc::vec::Vec;


/// Returns the number of steps in the trajectory for `acks`
///
/// Every outcome but the last drives a transition. An empty sequence still
/// yields the initial step.
#[inline]
pub fn trajectory_len(acks: &[AckOutcome]) -> usize {
    acks.len().max(1)
}

/// Computes the trajectory driven by `acks` from the `initial` constants
///
/// Fails with [`Error::InvalidInitialState`] before computing any step if a
/// constant is zero, and with [`Error::InfeasibleInput`] if a window grows
/// past `u32::MAX`.
pub fn synthesize(acks: &[AckOutcome], initial: InitialState) -> Result<Trajectory> {
    initial.validate()?;

    let len = trajectory_len(acks);
    let mut steps = Vec::with_capacity(len);
    let mut state = initial.state();

    steps.push(TrajectoryStep::new(0, state, acks.first().copied()));

    for (t, (&ack, &next_ack)) in acks.iter().zip(acks.iter().skip(1)).enumerate() {
        let step = t + 1;

        state = state
            .on_ack(ack)
            .ok_or(Error::InfeasibleInput { step })?;

        trace::_trace!(
            step,
            %ack,
            window = state.window,
            threshold = state.threshold,
            phase = ?state.phase(),
            "transition"
        );

        steps.push(TrajectoryStep::new(step, state, Some(next_ack)));
    }

    debug_assert_eq!(steps.len(), len);

    trace::_debug!(
        steps = steps.len(),
        window = state.window,
        threshold = state.threshold,
        "synthesized trajectory"
    );

    Ok(Trajectory::from_steps(steps))
}
