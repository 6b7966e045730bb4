// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::{error::Error, state::State};

#[cfg(any(test, feature = "generator"))]
use bolero_generator::prelude::*;

/// The recommended initial congestion window, in segments
const RECOMMENDED_WINDOW: u32 = 1;

/// The recommended initial slow start threshold, in segments
const RECOMMENDED_THRESHOLD: u32 = 64;

/// The constants a trajectory starts from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "generator"), derive(TypeGenerator))]
pub struct InitialState {
    /// The congestion window at round trip 0
    pub window: u32,
    /// The slow start threshold at round trip 0
    pub threshold: u32,
}

impl Default for InitialState {
    fn default() -> Self {
        Self::RECOMMENDED
    }
}

impl InitialState {
    pub const RECOMMENDED: Self = Self {
        window: RECOMMENDED_WINDOW,
        threshold: RECOMMENDED_THRESHOLD,
    };

    #[inline]
    pub const fn new(window: u32, threshold: u32) -> Self {
        Self { window, threshold }
    }

    #[inline]
    #[must_use]
    pub const fn with_window(mut self, window: u32) -> Self {
        self.window = window;
        self
    }

    #[inline]
    #[must_use]
    pub const fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Ensures both constants are positive
    ///
    /// No trajectory can start from a zero window or threshold.
    #[inline]
    pub fn validate(&self) -> Result<(), Error> {
        if self.window == 0 || self.threshold == 0 {
            return Err(Error::InvalidInitialState {
                window: self.window,
                threshold: self.threshold,
            });
        }

        Ok(())
    }

    #[inline]
    pub const fn state(&self) -> State {
        State {
            window: self.window,
            threshold: self.threshold,
        }
    }
}
