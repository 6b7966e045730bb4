// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::ack::AckOutcome;
use core::cmp::max;

/// The window every loss collapses to
pub const MINIMUM_WINDOW: u32 = 1;

/// The lower bound of the threshold after a loss
pub const MINIMUM_THRESHOLD: u32 = 1;

/// The congestion control state at a single round trip
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct State {
    pub window: u32,
    pub threshold: u32,
}

/// The growth regime selected by a normal acknowledgement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The window doubles every round trip
    SlowStart,
    /// The window grows by one every round trip
    CongestionAvoidance,
}

impl State {
    #[inline]
    pub fn phase(&self) -> Phase {
        if self.window < self.threshold {
            Phase::SlowStart
        } else {
            Phase::CongestionAvoidance
        }
    }

    /// Computes the successor state for the given outcome
    ///
    /// Returns `None` if the grown window does not fit in a `u32`.
    #[inline]
    pub fn on_ack(self, ack: AckOutcome) -> Option<Self> {
        if ack.is_loss() {
            Some(self.on_loss())
        } else {
            self.on_growth()
        }
    }

    #[inline]
    fn on_growth(self) -> Option<Self> {
        let window = match self.phase() {
            Phase::SlowStart => self.window.checked_mul(2)?,
            Phase::CongestionAvoidance => self.window.checked_add(1)?,
        };

        Some(Self {
            window,
            threshold: self.threshold,
        })
    }

    #[inline]
    fn on_loss(self) -> Self {
        // the threshold halves but never drops below the minimum, even when the
        // window was already at the minimum
        Self {
            window: MINIMUM_WINDOW,
            threshold: max(self.window / 2, MINIMUM_THRESHOLD),
        }
    }
}
