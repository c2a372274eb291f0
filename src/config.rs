use serde::Deserialize;

use crate::disk::DiskAlgorithm;
use crate::error::Result;
use crate::paging::ReplacementPolicy;

/// Settings of the `ossim` binary. Command line flags take precedence over
/// these when both are given.
#[derive(Debug, PartialEq, Deserialize)]
pub struct Config {
    pub log_level: String,

    /// Number of cylinders, used when a disk run does not give one.
    pub disk_size: usize,
    pub disk_algorithm: DiskAlgorithm,

    pub frame_count: usize,
    pub page_policy: ReplacementPolicy,

    /// Pause between two steps when playing a trace back.
    pub step_delay_ms: u64,
}

impl Config {
    pub fn new(file: &str) -> Result<Config> {
        let mut cfg = config::Config::builder()
            .set_default("log_level", "info")?
            .set_default("disk_size", 200)?
            .set_default("disk_algorithm", "C-SCAN")?
            .set_default("frame_count", 3)?
            .set_default("page_policy", "Optimal")?
            .set_default("step_delay_ms", 500)?;
        if !file.is_empty() {
            cfg = cfg.add_source(config::File::with_name(file))
        }
        cfg = cfg.add_source(config::Environment::with_prefix("OSSIM"));
        Ok(cfg.build()?.try_deserialize()?)
    }
}
