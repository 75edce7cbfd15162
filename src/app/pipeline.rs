//! Shared "fetch pipeline" logic used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! disease.sh fetch -> shape -> summary stats
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use crate::data::disease_sh::{DiseaseShClient, RawTimeline};
use crate::domain::{Timeline, TimelineStats};
use crate::error::AppError;

/// All computed outputs of a single fetch run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub timeline: Timeline,
    pub stats: TimelineStats,
}

/// Execute the full pipeline: one network call, then shaping.
///
/// Every invocation performs its own independent fetch; nothing is cached
/// between runs.
pub fn run_fetch(client: &DiseaseShClient) -> Result<RunOutput, AppError> {
    let raw = client.fetch_historical().map_err(|err| {
        log::error!("historical fetch failed: {err}");
        err
    })?;

    shape_output(&raw)
}

/// Shape a pre-fetched document into run output.
///
/// Split out so tests and offline flows can exercise shaping without a
/// network round trip.
pub fn shape_output(raw: &RawTimeline) -> Result<RunOutput, AppError> {
    let timeline = crate::shape::shape_timeline(raw).map_err(|err| {
        log::error!("shaping failed: {err}");
        err
    })?;

    let stats = timeline.stats();
    log::info!("shaped {} days for {}", stats.n_days, timeline.country);

    Ok(RunOutput { timeline, stats })
}
