use std::env;
use std::str::FromStr;

use tracing::warn;

pub const DEFAULT_VERTEX_COUNT: u32 = 2_000;
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_PROBABILITY: u8 = 1;

/// Benchmark settings: positional `[mode] [vertex_count]` plus environment
/// overrides `WGRAPH_SEED` and `WGRAPH_PROBABILITY`.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub mode: String,
    pub vertex_count: u32,
    pub seed: u64,
    /// Edge probability (percent) for the `random` generator.
    pub probability: u8,
}

impl BenchConfig {
    pub fn from_env() -> Self {
        let args: Vec<String> = env::args().collect();
        Self::from_parts(
            args.get(1).map(String::as_str),
            args.get(2).map(String::as_str),
            env::var("WGRAPH_SEED").ok().as_deref(),
            env::var("WGRAPH_PROBABILITY").ok().as_deref(),
        )
    }

    fn from_parts(
        mode: Option<&str>,
        vertex_count: Option<&str>,
        seed: Option<&str>,
        probability: Option<&str>,
    ) -> Self {
        let probability = parse_or("WGRAPH_PROBABILITY", probability, DEFAULT_PROBABILITY);
        let probability = if probability > 100 {
            warn!(probability, "WGRAPH_PROBABILITY above 100, using {}", DEFAULT_PROBABILITY);
            DEFAULT_PROBABILITY
        } else {
            probability
        };

        Self {
            mode: mode.unwrap_or("all").to_string(),
            vertex_count: parse_or("vertex_count", vertex_count, DEFAULT_VERTEX_COUNT).max(2),
            seed: parse_or("WGRAPH_SEED", seed, DEFAULT_SEED),
            probability,
        }
    }
}

/// Parse an optional setting, falling back to `default` (with a warning)
/// when it is present but malformed.
fn parse_or<T: FromStr + Copy>(name: &str, raw: Option<&str>, default: T) -> T {
    match raw {
        None => default,
        Some(s) => s.trim().parse().unwrap_or_else(|_| {
            warn!(setting = name, value = s, "invalid value, using default");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = BenchConfig::from_parts(None, None, None, None);
        assert_eq!(c.mode, "all");
        assert_eq!(c.vertex_count, DEFAULT_VERTEX_COUNT);
        assert_eq!(c.seed, DEFAULT_SEED);
        assert_eq!(c.probability, DEFAULT_PROBABILITY);
    }

    #[test]
    fn test_overrides() {
        let c = BenchConfig::from_parts(Some("random"), Some("500"), Some("7"), Some("25"));
        assert_eq!(c.mode, "random");
        assert_eq!(c.vertex_count, 500);
        assert_eq!(c.seed, 7);
        assert_eq!(c.probability, 25);
    }

    #[test]
    fn test_malformed_falls_back() {
        let c = BenchConfig::from_parts(None, Some("lots"), Some("-1"), Some("250"));
        assert_eq!(c.vertex_count, DEFAULT_VERTEX_COUNT);
        assert_eq!(c.seed, DEFAULT_SEED);
        assert_eq!(c.probability, DEFAULT_PROBABILITY);
    }

    #[test]
    fn test_vertex_count_floor() {
        let c = BenchConfig::from_parts(None, Some("1"), None, None);
        assert_eq!(c.vertex_count, 2);
    }
}
