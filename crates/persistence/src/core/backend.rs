//! Backend identification.

use std::fmt;
use std::str::FromStr;

/// Identifies the type of document store backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Process-local store, for tests and local development.
    Memory,
    /// Elasticsearch cluster.
    Elasticsearch,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Memory => write!(f, "memory"),
            BackendKind::Elasticsearch => write!(f, "elasticsearch"),
        }
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => Ok(BackendKind::Memory),
            "elasticsearch" | "es" => Ok(BackendKind::Elasticsearch),
            other => Err(format!(
                "unknown storage backend '{}' (expected 'memory' or 'elasticsearch')",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for kind in [BackendKind::Memory, BackendKind::Elasticsearch] {
            assert_eq!(kind.to_string().parse::<BackendKind>().unwrap(), kind);
        }
        assert_eq!("ES".parse::<BackendKind>().unwrap(), BackendKind::Elasticsearch);
        assert!("sqlite".parse::<BackendKind>().is_err());
    }
}
