/// Stratus Core — cross-provider storage analytics.
///
/// This crate contains all business logic with zero presentation
/// dependencies. It is a pure engine: a deterministic function of
/// (file inventory, pricing configuration) → derived analytics, with no
/// I/O, no internal concurrency and no hidden clock.
///
/// # Modules
///
/// - [`model`] — Inventory snapshot records, pricing configuration and
///   formatting helpers.
/// - [`analysis`] — Derived views: duplicate clusters, cold data,
///   cost queries, ranked actions, breakdowns, health score.
/// - [`report`] — The one-shot pipeline tying the analyses together.
pub mod analysis;
pub mod model;
pub mod report;
