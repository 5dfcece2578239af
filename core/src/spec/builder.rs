use super::{
    DEFAULT_RESULT_COUNT_PER_PAGE, MAX_SNIPPET_FIELD, NUM_PER_PAGE_FIELD, SearchSpec,
    SNIPPET_COUNT_FIELD, SNIPPET_COUNT_PER_PROPERTY_FIELD,
};
use crate::config::SpecConfig;
use crate::error::SpecError;
use crate::types::{Count, Order, RankingStrategy, TermMatch};
use tracing::{debug, warn};

/// Fluent builder for [`SearchSpec`].
///
/// Setters take and return the builder by value so calls chain. Invalid
/// arguments do not break the chain: the first one is remembered and
/// reported by [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct SearchSpecBuilder {
    term_match: Option<TermMatch>,
    namespaces: Vec<String>,
    schema_types: Vec<String>,
    snippet_count: Count,
    snippet_count_per_property: Count,
    max_snippet_size: Count,
    result_count_per_page: Count,
    order: Order,
    ranking_strategy: RankingStrategy,
    /// First rejected count argument as `(bundle key, value)`.
    invalid: Option<(&'static str, i32)>,
}

impl Default for SearchSpecBuilder {
    fn default() -> Self {
        Self {
            term_match: None,
            namespaces: Vec::new(),
            schema_types: Vec::new(),
            snippet_count: Count::default(),
            snippet_count_per_property: Count::default(),
            max_snippet_size: Count::default(),
            result_count_per_page: Count::try_new(DEFAULT_RESULT_COUNT_PER_PAGE)
                .unwrap_or_default(),
            order: Order::default(),
            ranking_strategy: RankingStrategy::default(),
            invalid: None,
        }
    }
}

impl SearchSpecBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from configured defaults. Invalid config values are replaced
    /// with built-in defaults.
    pub fn from_config(config: &SpecConfig) -> Self {
        let config = config.with_defaults_for_invalid();
        Self::new()
            .set_order(config.results.order)
            .set_ranking_strategy(config.results.ranking_strategy)
            .set_result_count_per_page(config.results.count_per_page)
            .set_snippet_count(config.snippets.count)
            .set_snippet_count_per_property(config.snippets.count_per_property)
            .set_max_snippet_size(config.snippets.max_size)
    }

    /// Required. Calling again replaces the previous mode.
    pub fn set_term_match(mut self, term_match: TermMatch) -> Self {
        self.term_match = Some(term_match);
        self
    }

    /// Appends namespaces after any added earlier. Duplicates are kept.
    pub fn add_namespace<I, S>(mut self, namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.namespaces.extend(namespaces.into_iter().map(Into::into));
        self
    }

    /// Appends schema types after any added earlier. Duplicates are kept.
    pub fn add_schema<I, S>(mut self, schema_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schema_types.extend(schema_types.into_iter().map(Into::into));
        self
    }

    pub fn set_snippet_count(mut self, count: i32) -> Self {
        if let Some(count) = self.count(SNIPPET_COUNT_FIELD, count) {
            self.snippet_count = count;
        }
        self
    }

    pub fn set_snippet_count_per_property(mut self, count: i32) -> Self {
        if let Some(count) = self.count(SNIPPET_COUNT_PER_PROPERTY_FIELD, count) {
            self.snippet_count_per_property = count;
        }
        self
    }

    pub fn set_max_snippet_size(mut self, size: i32) -> Self {
        if let Some(size) = self.count(MAX_SNIPPET_FIELD, size) {
            self.max_snippet_size = size;
        }
        self
    }

    pub fn set_result_count_per_page(mut self, count: i32) -> Self {
        if let Some(count) = self.count(NUM_PER_PAGE_FIELD, count) {
            self.result_count_per_page = count;
        }
        self
    }

    pub fn set_order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    pub fn set_ranking_strategy(mut self, ranking_strategy: RankingStrategy) -> Self {
        self.ranking_strategy = ranking_strategy;
        self
    }

    /// Validates and freezes the accumulated state.
    ///
    /// Fails with [`SpecError::MissingTermMatch`] if no term match was set,
    /// otherwise with [`SpecError::NegativeCount`] if a setter got a negative
    /// value.
    pub fn build(self) -> Result<SearchSpec, SpecError> {
        let term_match = self.term_match.ok_or(SpecError::MissingTermMatch)?;
        if let Some((field, value)) = self.invalid {
            return Err(SpecError::NegativeCount { field, value });
        }

        debug!(
            %term_match,
            namespaces = self.namespaces.len(),
            schema_types = self.schema_types.len(),
            order = %self.order,
            ranking_strategy = %self.ranking_strategy,
            "built search spec"
        );

        Ok(SearchSpec {
            term_match,
            namespaces: self.namespaces,
            schema_types: self.schema_types,
            snippet_count: self.snippet_count,
            snippet_count_per_property: self.snippet_count_per_property,
            max_snippet_size: self.max_snippet_size,
            result_count_per_page: self.result_count_per_page,
            order: self.order,
            ranking_strategy: self.ranking_strategy,
        })
    }

    fn count(&mut self, field: &'static str, value: i32) -> Option<Count> {
        match Count::try_new(value) {
            Ok(count) => Some(count),
            Err(_) => {
                warn!(field, value, "rejecting negative count");
                self.invalid.get_or_insert((field, value));
                None
            }
        }
    }
}
