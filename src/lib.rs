//! # Sekisho
//!
//! Deterministic query-intent routing for a bilingual (Japanese/English)
//! wellness search box: decide, without any model in the loop, whether a
//! query belongs in structured catalog search or in front of the
//! conversational concierge.
//!
//! ## Features
//!
//! - Normalization into a comparison-stable form
//! - Dictionary and pattern based entity extraction
//! - Ordered regex families for comparison and question constructions
//! - A fixed-priority decision cascade with a total, synchronous API
//! - A TTL'd, FIFO-evicting result cache with an injectable clock

pub mod cache;
pub mod entity;
pub mod error;
pub mod normalize;
pub mod pattern;
pub mod router;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
