// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Recovers the outcome sequence behind an observed window trace
//!
//! A normal acknowledgement always grows a positive window to at least 2 and a
//! loss always collapses it to 1, so each observed transition is explained by
//! at most one branch. A timeout and a duplicate acknowledgement produce the
//! same successor and are both reported as [`AckOutcome::Timeout`].

use crate::{
    ack::AckOutcome,
    error::{Error, Result},
    settings::InitialState,
    state::State,
    synthesis::synthesize,
    trace,
    trajectory::Trajectory,
};
use alloc::vec::Vec;


/// Returns the outcomes driving each transition of `windows`
///
/// The result holds one outcome per transition, so one less than the number
/// of observed windows. Fails with [`Error::InfeasibleInput`] at the first
/// window neither branch can reach. An empty trace, or one that does not start
/// at the initial window, is infeasible at step 0.
pub fn infer(windows: &[u32], initial: InitialState) -> Result<Vec<AckOutcome>> {
    initial.validate()?;

    match windows.first() {
        Some(&window) if window == initial.window => {}
        _ => return Err(Error::InfeasibleInput { step: 0 }),
    }

    let mut state = initial.state();
    let mut acks = Vec::with_capacity(windows.len() - 1);

    for (t, &window) in windows.iter().enumerate().skip(1) {
        let (ack, next) = classify(state, window).ok_or(Error::InfeasibleInput { step: t })?;

        trace::_trace!(step = t, window, %ack, "classified transition");

        state = next;
        acks.push(ack);
    }

    Ok(acks)
}

/// Synthesizes the full trajectory implied by `windows`
///
/// The outcome closing the final round trip is not observable; the last step
/// is labelled [`AckOutcome::Normal`].
pub fn reconstruct(windows: &[u32], initial: InitialState) -> Result<Trajectory> {
    let mut acks = infer(windows, initial)?;
    acks.push(AckOutcome::Normal);
    synthesize(&acks, initial)
}

/// Returns the outcome that takes `state` to `window`, and the resulting state
#[inline]
fn classify(state: State, window: u32) -> Option<(AckOutcome, State)> {
    [AckOutcome::Normal, AckOutcome::Timeout]
        .into_iter()
        .find_map(|ack| {
            let next = state.on_ack(ack)?;
            (next.window == window).then_some((ack, next))
        })
}
