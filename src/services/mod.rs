//! Service layer for aggregation, comparison, and chart composition.
//!
//! Each service exposes a pure `compute_*`/`compose_*` function over already
//! fetched data plus a `get_*` orchestrator that pulls from the provider.
//! The pure functions carry the invariants; the orchestrators only fetch,
//! delegate, and apply the request-level policies (no-data refusal, narrative
//! fallback).

pub mod aggregate;
pub mod chart;
pub mod compare;
pub mod court;
pub mod error;
pub mod league;
pub mod narrative;

pub use aggregate::aggregate_profile;
pub use chart::{compose_chart, get_shot_chart_data};
pub use compare::{build_head_to_head_rows, get_head_to_head_data};
pub use court::court_shapes;
pub use error::{ChartError, ChartResult};
pub use league::{compare_to_league, get_league_comparison_data};
pub use narrative::{LocalNarrator, Narrator, NARRATIVE_UNAVAILABLE};
