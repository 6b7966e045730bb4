// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::{
    ack::AckOutcome, settings::InitialState, synthesis::synthesize, testing::scenarios,
    trajectory::Series, validation::Value,
};
use core::{fmt, ops::Range};
use insta::assert_debug_snapshot;
use plotters::prelude::*;
use std::{
    env,
    path::{Path, PathBuf},
};

const CHART_DIMENSIONS: (u32, u32) = (1024, 768);

#[test]
#[cfg_attr(miri, ignore)]
fn single_timeout_test() {
    simulate(
        "Single Timeout",
        "A single timeout in congestion avoidance",
        &scenarios::single_timeout(),
    )
    .finish();
}

#[test]
#[cfg_attr(miri, ignore)]
fn two_losses_test() {
    simulate(
        "Two Losses",
        "A timeout in congestion avoidance followed by a timeout in slow start",
        &scenarios::two_losses(),
    )
    .finish();
}

#[test]
#[cfg_attr(miri, ignore)]
fn mixed_losses_test() {
    simulate(
        "Mixed Losses",
        "Duplicate acknowledgements and timeouts in congestion avoidance",
        &scenarios::mixed_losses(),
    )
    .finish();
}

#[test]
#[cfg_attr(miri, ignore)]
fn consecutive_timeouts_test() {
    simulate(
        "Consecutive Timeouts",
        "Back to back timeouts clamp the threshold to the minimum",
        &scenarios::consecutive_timeouts(),
    )
    .finish();
}

#[derive(Debug)]
struct Simulation {
    name: &'static str,
    description: &'static str,
    rounds: Vec<Round>,
}

struct Round {
    number: usize,
    window: u32,
    threshold: u32,
    ack: Option<AckOutcome>,
}

impl Round {
    fn annotation(&self) -> String {
        format!(
            "{} (ack: {}, ssthresh: {})",
            self.window,
            Value::Ack(self.ack),
            self.threshold
        )
    }
}

impl fmt::Debug for Round {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:>3}: cwnd: {} ssthresh: {} ack: {}",
            self.number,
            self.window,
            self.threshold,
            Value::Ack(self.ack)
        )
    }
}

impl Simulation {
    fn finish(&self) {
        if let Ok(dir) = env::var("TAHOE_SIM_DIR") {
            let mut path = PathBuf::new();
            path.push(dir);
            path.push(self.filename());
            path.set_extension("svg");
            self.plot(&path);
        } else {
            self.assert_snapshot();
        }
    }

    fn plot<T: AsRef<Path> + ?Sized>(&self, path: &T) {
        let root_area = SVGBackend::new(path, CHART_DIMENSIONS).into_drawing_area();
        root_area.fill(&WHITE).expect("Could not fill chart");
        root_area
            .titled(self.name, ("sans-serif", 40))
            .expect("Could not add title");

        let mut ctx = ChartBuilder::on(&root_area)
            .set_label_area_size(LabelAreaPosition::Left, 120)
            .set_label_area_size(LabelAreaPosition::Bottom, 60)
            .margin(20)
            .margin_top(40)
            .caption(self.description, ("sans-serif", 20))
            .build_cartesian_2d(self.x_spec(), self.y_spec())
            .expect("Could not build chart");

        ctx.configure_mesh()
            .x_desc("Round Trip")
            .label_style(("sans-serif", 20))
            .y_desc("Segments")
            .draw()
            .expect("Could not configure mesh");

        ctx.draw_series(LineSeries::new(
            self.rounds.iter().map(|r| (r.number as i32, r.window as i32)),
            GREEN,
        ))
        .expect("Could not draw series")
        .label("cwnd")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

        ctx.draw_series(LineSeries::new(
            self.rounds
                .iter()
                .map(|r| (r.number as i32, r.threshold as i32)),
            BLUE,
        ))
        .expect("Could not draw series")
        .label("ssthresh")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

        ctx.draw_series(self.rounds.iter().map(|r| {
            Text::new(
                r.annotation(),
                (r.number as i32, r.window as i32),
                ("sans-serif", 12).into_font(),
            )
        }))
        .expect("Could not draw annotations");

        ctx.configure_series_labels()
            .background_style(WHITE)
            .border_style(BLACK)
            .draw()
            .expect("Could not draw legend");
    }

    fn x_spec(&self) -> Range<i32> {
        0..(self.rounds.len() as i32 + 1)
    }

    fn y_spec(&self) -> Range<i32> {
        let mut max = self
            .rounds
            .iter()
            .map(|r| r.window.max(r.threshold) as i32)
            .max()
            .unwrap_or(0);

        // Add a 5% buffer
        max = (max as f32 * 1.05) as i32 + 1;

        0..max
    }

    fn assert_snapshot(&self) {
        assert_debug_snapshot!(self.filename(), self);
    }

    fn filename(&self) -> String {
        self.name.split_whitespace().collect()
    }
}

/// Synthesizes the trajectory for `acks` from the recommended constants
fn simulate(name: &'static str, description: &'static str, acks: &[AckOutcome]) -> Simulation {
    let trajectory = synthesize(acks, InitialState::RECOMMENDED).unwrap();
    let Series {
        windows,
        thresholds,
        round_trip_indices,
        acks,
    } = trajectory.series();

    let rounds = round_trip_indices
        .into_iter()
        .zip(windows)
        .zip(thresholds)
        .zip(acks)
        .map(|(((number, window), threshold), ack)| Round {
            number,
            window,
            threshold,
            ack,
        })
        .collect();

    Simulation {
        name,
        description,
        rounds,
    }
}
