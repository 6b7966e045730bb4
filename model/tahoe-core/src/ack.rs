// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#[cfg(any(test, feature = "generator"))]
use bolero_generator::prelude::*;
use core::{convert::TryFrom, fmt};

/// The event observed at the end of a round trip
///
/// The outcome recorded at step `t` drives the transition into step `t + 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(any(test, feature = "generator"), derive(TypeGenerator))]
pub enum AckOutcome {
    /// An ordinary acknowledgement
    #[default]
    Normal,
    /// No acknowledgement arrived within the expected interval
    Timeout,
    /// A duplicate acknowledgement, signaling an out-of-order or lost segment
    Duplicate,
}

impl AckOutcome {
    pub const ALL: [Self; 3] = [Self::Normal, Self::Timeout, Self::Duplicate];

    /// Returns true if the outcome signals a loss
    ///
    /// Timeouts and duplicate acknowledgements are treated identically.
    #[inline]
    pub fn is_loss(self) -> bool {
        matches!(self, Self::Timeout | Self::Duplicate)
    }

    /// Returns the raw tag of the outcome
    #[inline]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Timeout => 1,
            Self::Duplicate => 2,
        }
    }

    /// Returns the label used when reporting or plotting a trajectory
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Timeout => "timeout",
            Self::Duplicate => "duplicate",
        }
    }
}

impl fmt::Display for AckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AckOutcomeError(pub u8);

impl fmt::Display for AckOutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid ack outcome tag {}", self.0)
    }
}

impl core::error::Error for AckOutcomeError {}

impl TryFrom<u8> for AckOutcome {
    type Error = AckOutcomeError;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Timeout),
            2 => Ok(Self::Duplicate),
            _ => Err(AckOutcomeError(value)),
        }
    }
}

impl From<AckOutcome> for u8 {
    #[inline]
    fn from(ack: AckOutcome) -> Self {
        ack.as_u8()
    }
}
