//! Measurement orchestration across rounds and directions
//!
//! Repeats the transfer runner a fixed number of rounds per direction,
//! strictly one round at a time, collects the samples in round order and
//! reduces them into summary statistics. Rounds never overlap so one
//! round's transfers cannot skew the next round's timing.

use crate::{
    error::{AppError, Result},
    logging, stats,
    models::{Config, Measurement, Sample, SampleSeries},
    runner::RoundExecutor,
    types::Direction,
};

/// Extra attempts granted to a round that produced a degenerate
/// measurement (zero duration or no completed transfer)
const ROUND_RETRY_LIMIT: u32 = 2;

/// Drives repeated measurement rounds and reduces their samples
pub struct MeasurementOrchestrator<E: RoundExecutor> {
    executor: E,
    round_count: u32,
}

impl<E: RoundExecutor> MeasurementOrchestrator<E> {
    /// Create an orchestrator over the given round executor
    pub fn new(executor: E, config: &Config) -> Self {
        Self {
            executor,
            round_count: config.round_count,
        }
    }

    /// Measure one direction: run all rounds, reduce, package the result
    ///
    /// A degenerate round is retried up to [`ROUND_RETRY_LIMIT`] times;
    /// if it stays degenerate the whole direction is abandoned. Other
    /// directions and the process itself are unaffected.
    pub async fn measure(&self, direction: Direction) -> Result<Measurement> {
        let mut series = SampleSeries::with_capacity(direction, self.round_count as usize);

        for round in 1..=self.round_count {
            let sample = self.run_round_with_retry(direction, round).await?;

            logging::info(
                "orchestrator",
                &format!(
                    "{} measurement {} complete: {:.2} Mbps",
                    direction, round, sample.mbps
                ),
            );

            series.push(sample);
        }

        let summary = stats::reduce(&series.mbps_values())?;

        if series.total_failed_units() > 0 {
            logging::warn(
                "orchestrator",
                &format!(
                    "{} phase finished with {} failed transfer units; throughput reflects completed transfers only",
                    direction,
                    series.total_failed_units()
                ),
            );
        }

        Ok(Measurement {
            direction,
            series,
            summary,
        })
    }

    /// Run one round, retrying degenerate measurements a bounded number
    /// of times
    async fn run_round_with_retry(&self, direction: Direction, round: u32) -> Result<Sample> {
        let mut attempt = 0;
        loop {
            match self.executor.run_round(direction, round).await {
                Ok(sample) => return Ok(sample),
                Err(error @ AppError::Measurement(_)) if attempt < ROUND_RETRY_LIMIT => {
                    attempt += 1;
                    logging::warn(
                        "orchestrator",
                        &format!(
                            "{} round {} degenerate ({}), retry {}/{}",
                            direction, round, error, attempt, ROUND_RETRY_LIMIT
                        ),
                    );
                }
                Err(error) => {
                    logging::error(
                        "orchestrator",
                        &format!("{} phase aborted at round {}: {}", direction, round, error),
                    );
                    return Err(error);
                }
            }
        }
    }
}
