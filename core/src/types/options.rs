//! Closed option sets for a search spec.
//!
//! Each option maps to a stable integer code used only at the bundle
//! boundary. Codes must never be reassigned.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How query terms are matched against indexed text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermMatch {
    /// Only documents containing the exact query terms match.
    ExactOnly,
    /// Query terms also match as prefixes of indexed terms.
    Prefix,
}

impl TermMatch {
    pub const fn code(self) -> i32 {
        match self {
            TermMatch::ExactOnly => 1,
            TermMatch::Prefix => 2,
        }
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(TermMatch::ExactOnly),
            2 => Some(TermMatch::Prefix),
            _ => None,
        }
    }
}

impl fmt::Display for TermMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermMatch::ExactOnly => write!(f, "exact_only"),
            TermMatch::Prefix => write!(f, "prefix"),
        }
    }
}

/// Result ordering applied on top of the ranking strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    #[default]
    Descending,
    Ascending,
}

impl Order {
    pub const fn code(self) -> i32 {
        match self {
            Order::Descending => 0,
            Order::Ascending => 1,
        }
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Order::Descending),
            1 => Some(Order::Ascending),
            _ => None,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Descending => write!(f, "descending"),
            Order::Ascending => write!(f, "ascending"),
        }
    }
}

/// Strategy the engine uses to rank results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingStrategy {
    /// Results come back in engine order.
    #[default]
    None,
    /// Rank by the score stored with each document.
    DocumentScore,
    /// Rank by document creation time.
    CreationTimestamp,
}

impl RankingStrategy {
    pub const fn code(self) -> i32 {
        match self {
            RankingStrategy::None => 0,
            RankingStrategy::DocumentScore => 1,
            RankingStrategy::CreationTimestamp => 2,
        }
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(RankingStrategy::None),
            1 => Some(RankingStrategy::DocumentScore),
            2 => Some(RankingStrategy::CreationTimestamp),
            _ => None,
        }
    }
}

impl fmt::Display for RankingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankingStrategy::None => write!(f, "none"),
            RankingStrategy::DocumentScore => write!(f, "document_score"),
            RankingStrategy::CreationTimestamp => write!(f, "creation_timestamp"),
        }
    }
}
