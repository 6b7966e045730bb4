// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::validation::Violation;
use core::fmt;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors returned by synthesis, validation and inference
///
/// Every error is terminal for the call that returned it. The computation is
/// deterministic so repeating the call with the same inputs fails the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The initial window or threshold is not positive
    InvalidInitialState { window: u32, threshold: u32 },
    /// No representable trajectory exists for the inputs
    ///
    /// `step` is the first round trip whose value cannot be produced.
    InfeasibleInput { step: usize },
    /// A candidate trajectory disagrees with the transition rules
    InvariantViolation(Violation),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInitialState { window, threshold } => write!(
                f,
                "invalid initial state: window={window} threshold={threshold}"
            ),
            Self::InfeasibleInput { step } => {
                write!(f, "no trajectory satisfies the inputs at step {step}")
            }
            Self::InvariantViolation(violation) => fmt::Display::fmt(violation, f),
        }
    }
}

impl core::error::Error for Error {}

impl From<Violation> for Error {
    #[inline]
    fn from(violation: Violation) -> Self {
        Self::InvariantViolation(violation)
    }
}

impl Error {
    /// Returns the violation if the error was raised by the validator
    #[inline]
    pub fn violation(&self) -> Option<&Violation> {
        if let Self::InvariantViolation(violation) = self {
            Some(violation)
        } else {
            None
        }
    }
}
