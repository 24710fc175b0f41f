//! Loop configuration from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use crate::types::{GRID_HEIGHT, GRID_WIDTH, POLL_INTERVAL_MS, TARGET_FPS};

/// Highest accepted frame rate.
pub const MAX_FPS: u32 = 240;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopConfig {
    pub width: u16,
    /// At least 2 so both overlay rows exist.
    pub height: u16,
    pub target_fps: u32,
    pub poll_interval: Duration,
    pub log_path: Option<PathBuf>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            target_fps: TARGET_FPS,
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
            log_path: None,
        }
    }
}

impl LoopConfig {
    /// Create from `WIREFRAME_*` environment variables.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parse = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u64>().ok());

        let width = parse("WIREFRAME_WIDTH")
            .map(|v| v.clamp(1, u16::MAX as u64) as u16)
            .unwrap_or(defaults.width);
        let height = parse("WIREFRAME_HEIGHT")
            .map(|v| v.clamp(2, u16::MAX as u64) as u16)
            .unwrap_or(defaults.height);
        let target_fps = parse("WIREFRAME_FPS")
            .map(|v| v.clamp(1, MAX_FPS as u64) as u32)
            .unwrap_or(defaults.target_fps);
        let poll_interval = parse("WIREFRAME_POLL_MS")
            .map(|v| Duration::from_millis(v.max(1)))
            .unwrap_or(defaults.poll_interval);

        let log_path = lookup("WIREFRAME_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            width,
            height,
            target_fps,
            poll_interval,
            log_path,
        }
    }

    /// Fixed sleep between frames. Render time is not subtracted.
    pub fn frame_delay(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(LoopConfig::from_lookup(|_| None), LoopConfig::default());
        let d = LoopConfig::default();
        assert_eq!((d.width, d.height, d.target_fps), (80, 24, 60));
        assert_eq!(d.poll_interval, Duration::from_millis(10));
    }

    #[test]
    fn values_are_parsed_and_clamped() {
        let cfg = LoopConfig::from_lookup(lookup(&[
            ("WIREFRAME_WIDTH", "120"),
            ("WIREFRAME_HEIGHT", "1"),
            ("WIREFRAME_FPS", "1000"),
            ("WIREFRAME_POLL_MS", " 25 "),
            ("WIREFRAME_LOG_PATH", "/tmp/wire.log"),
        ]));
        assert_eq!(cfg.width, 120);
        assert_eq!(cfg.height, 2);
        assert_eq!(cfg.target_fps, MAX_FPS);
        assert_eq!(cfg.poll_interval, Duration::from_millis(25));
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/wire.log")));
    }

    #[test]
    fn garbage_and_blank_values_fall_back() {
        let cfg = LoopConfig::from_lookup(lookup(&[
            ("WIREFRAME_WIDTH", "wide"),
            ("WIREFRAME_FPS", "-5"),
            ("WIREFRAME_LOG_PATH", "   "),
        ]));
        assert_eq!(cfg, LoopConfig::default());
    }

    #[test]
    fn frame_delay_targets_fps() {
        let cfg = LoopConfig::default();
        assert_eq!(cfg.frame_delay(), Duration::from_nanos(16_666_666));
    }
}
