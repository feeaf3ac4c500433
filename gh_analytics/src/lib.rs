//! GitHub activity ranking
//!
//! # Overview
//!
//! Ranks users and repositories by the activity recorded in a set of GitHub events.
//! A ranking query names one or more sort criteria (e.g. commits pushed, PRs created, watch activity)
//! and a result size. Each criterion qualifies one event type, and raw event types can be added directly.
//! Qualifying events are grouped by actor or by repository, each group's size is its activity count,
//! and the groups are ordered by count descending with ties broken by ascending id.
//! Group keys are resolved back to users or repositories through a [`api::Store`]; keys with no entity are dropped
//! and the result is cut to the requested size, or shorter when fewer entities are available.

#[cfg(feature = "api")]
pub mod api;

#[cfg(feature = "analytics")]
pub mod aggregation;
#[cfg(feature = "analytics")]
mod analytics;
#[cfg(feature = "analytics")]
pub mod criteria;
#[cfg(feature = "analytics")]
pub mod grouping;
#[cfg(feature = "analytics")]
pub mod ranking;

#[cfg(feature = "analytics")]
pub use analytics::Analytics;
#[cfg(feature = "analytics")]
pub use criteria::RankingConfig;
#[cfg(feature = "analytics")]
pub use ranking::Ranked;
