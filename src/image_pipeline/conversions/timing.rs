use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug_span, info};

/// The stages a frame can pass through, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Unpack,
    ValidateDimensions,
    Flip,
    Rotate,
    EncodeJpeg,
}

impl Stage {
    pub const COUNT: usize = 5;

    pub const ALL: [Stage; Stage::COUNT] = [
        Stage::Unpack,
        Stage::ValidateDimensions,
        Stage::Flip,
        Stage::Rotate,
        Stage::EncodeJpeg,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::Unpack => "unpack",
            Stage::ValidateDimensions => "validate_dimensions",
            Stage::Flip => "flip",
            Stage::Rotate => "rotate",
            Stage::EncodeJpeg => "encode_jpeg",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Time spent in each stage for one frame. Stages that did not run have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineTimings {
    stages: [Option<Duration>; Stage::COUNT],
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `step` inside a span named after `stage` and adds its wall time
    /// to that stage, whether or not the step succeeded.
    pub fn time<T>(&mut self, stage: Stage, step: impl FnOnce() -> T) -> T {
        let span = debug_span!("stage", name = stage.name());
        let start = Instant::now();
        let output = span.in_scope(step);
        self.add(stage, start.elapsed());
        output
    }

    pub fn add(&mut self, stage: Stage, duration: Duration) {
        let slot = &mut self.stages[stage.index()];
        *slot = Some(slot.unwrap_or(Duration::ZERO) + duration);
    }

    pub fn get(&self, stage: Stage) -> Option<Duration> {
        self.stages[stage.index()]
    }

    /// Stages that ran, in pipeline order.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, Duration)> + '_ {
        Stage::ALL
            .iter()
            .filter_map(|&stage| self.get(stage).map(|duration| (stage, duration)))
    }

    pub fn total(&self) -> Duration {
        self.iter().map(|(_, duration)| duration).sum()
    }

    pub fn log_summary(&self) {
        let total = self.total().as_secs_f64();
        for (stage, duration) in self.iter() {
            let share = if total > 0.0 {
                duration.as_secs_f64() / total * 100.0
            } else {
                0.0
            };
            info!(%stage, "{:.3}ms ({:.1}%)", duration.as_secs_f64() * 1000.0, share);
        }
        info!("Frame processed in {:.3}ms", total * 1000.0);
    }
}
