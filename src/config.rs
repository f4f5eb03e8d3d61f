use std::fmt;

use crate::{error::BookError, event_kind::EventKind};

/// Which event dialect a stream speaks. A stream uses one mode from start to finish.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BookMode {
    /// Quantities are signed deltas, optionally with a previous price and quantity.
    #[default]
    Mutation,
    /// Quantities are the new total resting at a price.
    Update,
}

impl BookMode {
    #[inline]
    #[must_use]
    pub const fn accepts(self, kind: EventKind) -> bool {
        match self {
            Self::Mutation => matches!(kind, EventKind::DeltaMutation | EventKind::ModifyMutation),
            Self::Update => matches!(kind, EventKind::AbsoluteUpdate),
        }
    }
}

impl fmt::Display for BookMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mutation => f.write_str("mutation"),
            Self::Update => f.write_str("update"),
        }
    }
}

/// What to do when a removal asks for more quantity than a level holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UnderflowPolicy {
    /// Drive the level to zero and evict it. Removals at unknown prices are ignored.
    #[default]
    Evict,
    /// Reject the event, leaving the book unchanged.
    Reject,
}

/// Stream-wide settings, fixed when an engine is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BookConfig {
    /// Number of levels reported per side
    #[cfg_attr(feature = "serde", serde(alias = "n"))]
    pub depth: usize,
    pub mode: BookMode,
    pub underflow: UnderflowPolicy,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self { depth: 1, mode: BookMode::default(), underflow: UnderflowPolicy::default() }
    }
}

impl BookConfig {
    #[must_use]
    pub fn new(depth: usize) -> Self {
        Self { depth, ..Self::default() }
    }

    #[must_use]
    pub fn with_mode(self, mode: BookMode) -> Self {
        Self { mode, ..self }
    }

    #[must_use]
    pub fn with_underflow(self, underflow: UnderflowPolicy) -> Self {
        Self { underflow, ..self }
    }

    pub fn validate(&self) -> Result<(), BookError> {
        if self.depth == 0 {
            return Err(BookError::InvalidDepth);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = BookConfig::default();
        assert_eq!(config.depth, 1);
        assert_eq!(config.mode, BookMode::Mutation);
        assert_eq!(config.underflow, UnderflowPolicy::Evict);
        assert!(config.validate().is_ok());
        assert_eq!(BookConfig::new(0).validate(), Err(BookError::InvalidDepth));
    }

    #[test]
    fn mode_accepts_its_own_dialect_only() {
        assert!(BookMode::Mutation.accepts(EventKind::DeltaMutation));
        assert!(BookMode::Mutation.accepts(EventKind::ModifyMutation));
        assert!(!BookMode::Mutation.accepts(EventKind::AbsoluteUpdate));
        assert!(BookMode::Update.accepts(EventKind::AbsoluteUpdate));
        assert!(!BookMode::Update.accepts(EventKind::ModifyMutation));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn deserialize_from_kwargs() {
        let config: BookConfig = serde_json::from_str(r#"{"n": 5, "mode": "update"}"#).unwrap();
        assert_eq!(config, BookConfig::new(5).with_mode(BookMode::Update));

        let config: BookConfig = serde_json::from_str(r#"{"depth": 2, "underflow": "reject"}"#).unwrap();
        assert_eq!(config, BookConfig::new(2).with_underflow(UnderflowPolicy::Reject));

        let json = serde_json::to_string(&BookConfig::default()).unwrap();
        assert_eq!(json, r#"{"depth":1,"mode":"mutation","underflow":"evict"}"#);
    }
}
