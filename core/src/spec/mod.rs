//! Immutable search specification and its bundle form.

mod builder;
pub use builder::SearchSpecBuilder;

use crate::bundle::Bundle;
use crate::error::{Result, SpecError};
use crate::types::{Count, Order, RankingStrategy, TermMatch};
use serde::{Deserialize, Serialize};
use tracing::debug;

// Bundle keys. These are read by the search engine and must stay stable.
pub const TERM_MATCH_TYPE_FIELD: &str = "termMatchType";
pub const SCHEMA_TYPE_FIELD: &str = "schemaType";
pub const NAMESPACE_FIELD: &str = "namespace";
pub const NUM_PER_PAGE_FIELD: &str = "numPerPage";
pub const RANKING_STRATEGY_FIELD: &str = "rankingStrategy";
pub const ORDER_FIELD: &str = "order";
pub const SNIPPET_COUNT_FIELD: &str = "snippetCount";
pub const SNIPPET_COUNT_PER_PROPERTY_FIELD: &str = "snippetCountPerProperty";
pub const MAX_SNIPPET_FIELD: &str = "maxSnippet";

pub const DEFAULT_RESULT_COUNT_PER_PAGE: i32 = 10;

/// Parameters of a single search request.
///
/// Built with [`SearchSpecBuilder`] or decoded from a [`Bundle`]. There are no
/// mutators; a spec never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSpec {
    term_match: TermMatch,
    namespaces: Vec<String>,
    schema_types: Vec<String>,
    snippet_count: Count,
    snippet_count_per_property: Count,
    max_snippet_size: Count,
    result_count_per_page: Count,
    order: Order,
    ranking_strategy: RankingStrategy,
}

impl SearchSpec {
    pub fn builder() -> SearchSpecBuilder {
        SearchSpecBuilder::new()
    }

    pub fn term_match(&self) -> TermMatch {
        self.term_match
    }

    /// Namespaces to search. Empty means all namespaces.
    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }

    /// Schema types to search. Empty means all schema types.
    pub fn schema_types(&self) -> &[String] {
        &self.schema_types
    }

    /// Number of results that get snippets. Zero disables snippeting.
    pub fn snippet_count(&self) -> i32 {
        self.snippet_count.into_inner()
    }

    pub fn snippet_count_per_property(&self) -> i32 {
        self.snippet_count_per_property.into_inner()
    }

    pub fn max_snippet_size(&self) -> i32 {
        self.max_snippet_size.into_inner()
    }

    pub fn result_count_per_page(&self) -> i32 {
        self.result_count_per_page.into_inner()
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn ranking_strategy(&self) -> RankingStrategy {
        self.ranking_strategy
    }

    /// Serialized key-value form. Every field is written, defaults included.
    pub fn bundle(&self) -> Bundle {
        Bundle::from(self)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.bundle().to_bytes()?)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let bundle = Bundle::from_bytes(data)?;
        Ok(Self::try_from(&bundle)?)
    }
}

impl From<&SearchSpec> for Bundle {
    fn from(spec: &SearchSpec) -> Self {
        let mut bundle = Bundle::new();
        bundle.put_int(TERM_MATCH_TYPE_FIELD, spec.term_match.code());
        bundle.put_string_list(NAMESPACE_FIELD, spec.namespaces.clone());
        bundle.put_string_list(SCHEMA_TYPE_FIELD, spec.schema_types.clone());
        bundle.put_int(SNIPPET_COUNT_FIELD, spec.snippet_count());
        bundle.put_int(
            SNIPPET_COUNT_PER_PROPERTY_FIELD,
            spec.snippet_count_per_property(),
        );
        bundle.put_int(MAX_SNIPPET_FIELD, spec.max_snippet_size());
        bundle.put_int(NUM_PER_PAGE_FIELD, spec.result_count_per_page());
        bundle.put_int(ORDER_FIELD, spec.order.code());
        bundle.put_int(RANKING_STRATEGY_FIELD, spec.ranking_strategy.code());
        bundle
    }
}

impl TryFrom<&Bundle> for SearchSpec {
    type Error = SpecError;

    /// Missing optional keys fall back to their defaults.
    fn try_from(bundle: &Bundle) -> std::result::Result<Self, Self::Error> {
        let code = bundle
            .get_int(TERM_MATCH_TYPE_FIELD)?
            .ok_or(SpecError::MissingTermMatch)?;
        let term_match = TermMatch::from_code(code).ok_or(SpecError::UnknownCode {
            field: TERM_MATCH_TYPE_FIELD,
            code,
        })?;

        let order = match bundle.get_int(ORDER_FIELD)? {
            None => Order::default(),
            Some(code) => Order::from_code(code).ok_or(SpecError::UnknownCode {
                field: ORDER_FIELD,
                code,
            })?,
        };

        let ranking_strategy = match bundle.get_int(RANKING_STRATEGY_FIELD)? {
            None => RankingStrategy::default(),
            Some(code) => RankingStrategy::from_code(code).ok_or(SpecError::UnknownCode {
                field: RANKING_STRATEGY_FIELD,
                code,
            })?,
        };

        let spec = Self {
            term_match,
            namespaces: string_list(bundle, NAMESPACE_FIELD)?,
            schema_types: string_list(bundle, SCHEMA_TYPE_FIELD)?,
            snippet_count: count(bundle, SNIPPET_COUNT_FIELD, 0)?,
            snippet_count_per_property: count(bundle, SNIPPET_COUNT_PER_PROPERTY_FIELD, 0)?,
            max_snippet_size: count(bundle, MAX_SNIPPET_FIELD, 0)?,
            result_count_per_page: count(
                bundle,
                NUM_PER_PAGE_FIELD,
                DEFAULT_RESULT_COUNT_PER_PAGE,
            )?,
            order,
            ranking_strategy,
        };
        debug!(term_match = %spec.term_match, keys = bundle.len(), "decoded search spec");
        Ok(spec)
    }
}

fn string_list(bundle: &Bundle, key: &'static str) -> std::result::Result<Vec<String>, SpecError> {
    Ok(bundle
        .get_string_list(key)?
        .map(<[String]>::to_vec)
        .unwrap_or_default())
}

fn count(
    bundle: &Bundle,
    key: &'static str,
    default: i32,
) -> std::result::Result<Count, SpecError> {
    let value = bundle.get_int(key)?.unwrap_or(default);
    Count::try_new(value).map_err(|_| SpecError::NegativeCount { field: key, value })
}
