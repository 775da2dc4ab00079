use std::time::Duration;

use async_trait::async_trait;
use bon::Builder;
use serde_json::Value;
use tokio::time::sleep;

use crate::{core::limits::CallBudget, journal::Journal, prelude::*, snapshot::SnapshotSink};

/// Source of real-time readings.
#[async_trait]
pub trait Poller {
    async fn poll(&mut self) -> Result<Value>;
}

/// Outcome of a single iteration of the loop.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Step {
    /// One poll attempt was made, successful or not.
    Polled,

    /// The call budget is spent; no request was issued.
    Exhausted,
}

#[derive(Builder)]
pub struct Monitor<P, S, J> {
    poller: P,
    snapshot: S,
    journal: J,
    budget: CallBudget,
    pacing: Duration,
}

impl<P: Poller, S: SnapshotSink, J: Journal> Monitor<P, S, J> {
    /// Drive the fetch-persist-journal cycle until the budget is spent.
    ///
    /// The pacing sleep is unconditional after every poll attempt, so the last
    /// attempt before exhaustion is still followed by a full interval.
    pub async fn run(mut self) -> Result {
        loop {
            if self.step().await? == Step::Exhausted {
                break;
            }
            sleep(self.pacing).await;
        }
        Ok(())
    }

    /// One iteration: budget check, poll, persist, journal. No timers in here.
    ///
    /// Failures are journaled and swallowed so that a flaky endpoint never stops
    /// the loop; only sink I/O errors propagate.
    pub async fn step(&mut self) -> Result<Step> {
        if self.budget.is_spent() {
            info!(calls_made = self.budget.calls_made(), "call budget spent");
            self.journal.append("Maximum API calls per day reached. Exiting.")?;
            return Ok(Step::Exhausted);
        }
        match self.poller.poll().await {
            Ok(reading) => {
                self.budget.charge();
                self.snapshot.replace(&reading)?;
                self.journal.append(&format!(
                    "Extraction and saving complete. Output saved to {location}",
                    location = self.snapshot.location(),
                ))?;
            }
            Err(error) => {
                warn!("poll failed: {error:#}");
                self.journal.append(&format!("Error: {error:#}"))?;
            }
        }
        Ok(Step::Polled)
    }
}
