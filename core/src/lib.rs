//! Search specification builder.
//!
//! A [`SearchSpec`] describes how a search should run: term matching, the
//! namespaces and schema types to search, snippet limits, page size, ordering
//! and ranking. It is assembled with [`SearchSpecBuilder`] and handed to the
//! search engine as a flat key-value [`Bundle`].
//!
//! ```
//! use searchspec_core::{Order, RankingStrategy, SearchSpecBuilder, TermMatch};
//!
//! let spec = SearchSpecBuilder::new()
//!     .set_term_match(TermMatch::Prefix)
//!     .add_namespace(["contacts"])
//!     .set_order(Order::Ascending)
//!     .set_ranking_strategy(RankingStrategy::DocumentScore)
//!     .build()
//!     .unwrap();
//!
//! let bundle = spec.bundle();
//! assert_eq!(
//!     bundle.get_int(searchspec_core::spec::TERM_MATCH_TYPE_FIELD).unwrap(),
//!     Some(TermMatch::Prefix.code())
//! );
//! ```

pub mod bundle;
pub mod config;
pub mod error;
pub mod spec;
pub mod types;

pub use bundle::{BUNDLE_FORMAT_VERSION, Bundle, BundleValue};
pub use config::{ResultsConfig, SnippetsConfig, SpecConfig, SpecConfigError};
pub use error::{BundleError, Error, Result, SpecError};
pub use spec::{SearchSpec, SearchSpecBuilder};
pub use types::{Count, CountError, Order, RankingStrategy, TermMatch};
