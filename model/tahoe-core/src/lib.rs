// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! Synthesis and validation of TCP Tahoe congestion control trajectories.
//!
//! A trajectory is the per-round record of the congestion window, the slow
//! start threshold and the round trip index produced by a sequence of
//! [`AckOutcome`]s. [`synthesize`] computes the unique trajectory for a
//! sequence and [`validate`] re-derives every step of a candidate trajectory
//! and reports the first [`Violation`].

extern crate alloc;

mod trace;

pub mod ack;
pub mod error;
pub mod inference;
pub mod settings;
pub mod state;
pub mod synthesis;
pub mod trajectory;
pub mod validation;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[cfg(test)]
mod simulation;

pub use ack::AckOutcome;
pub use error::{Error, Result};
pub use settings::InitialState;
pub use state::{Phase, State};
pub use synthesis::synthesize;
pub use trajectory::{Series, Trajectory, TrajectoryStep};
pub use validation::{validate, Rule, Value, Violation};
