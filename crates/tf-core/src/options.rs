use serde::{Deserialize, Serialize};

/// Which combining marks the decomposer/filter drops.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MarkFilter {
    /// Drop every combining mark.
    All,
    /// Drop a mark only when the current base character is a Latin letter.
    LatinOnly,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_filter_serde_roundtrip() {
        let json = serde_json::to_string(&MarkFilter::LatinOnly).unwrap();
        assert_eq!(json, "\"latin_only\"");
        let back: MarkFilter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MarkFilter::LatinOnly);
    }
}
