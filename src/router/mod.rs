//! Query routing.
//!
//! The cascade that turns raw search-box input into a
//! [`Classification`], plus the result types that make up the output
//! contract.

pub mod cascade;
pub mod types;

pub use self::cascade::QueryRouter;
pub use self::types::{Classification, Confidence, Destination, Intent, Method};

use std::sync::LazyLock;

static DEFAULT_ROUTER: LazyLock<QueryRouter> = LazyLock::new(QueryRouter::new);

/// Classify with the built-in tables.
///
/// Equivalent to `QueryRouter::new().classify(raw)` without rebuilding
/// the tables on every call; the shared router is built once, lazily.
///
/// # Examples
///
/// ```
/// use sekisho::router::{Destination, Intent, classify};
///
/// let result = classify("疲れやすいんだけど何がいい？");
/// assert_eq!(result.intent, Intent::Question);
/// assert_eq!(result.destination, Destination::Concierge);
/// assert_eq!(result.entities.symptoms, ["疲れやすい"]);
/// ```
pub fn classify(raw: &str) -> Classification {
    DEFAULT_ROUTER.classify(raw)
}
