//! Boundary layer between the pure [`grid`] engine and the warehouse
//! backend's REST API.
//!
//! ARCHITECTURE
//! ============
//! The `grid` crate is pure and synchronous; everything asynchronous lives
//! here. A [`feed::StatusFeed`] polls live per-location status on a fixed
//! cadence and emits wholesale snapshots over a channel. A
//! [`session::GroupSession`] owns one group's engine and state machine and
//! applies those snapshots (discarding stale ones), and a
//! [`dashboard::Dashboard`] ties the active session to its feed across
//! group switches. Bulk configuration goes out through the same
//! [`api::RackApi`] boundary and, on success, resyncs both data sources.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Poll failures keep last-known-good statuses and
//! retry on the next tick; submit failures surface to the caller with the
//! selection intact; snapshots for a no-longer-active group are dropped
//! silently. See `ApiError` and `SubmitError`.

pub mod api;
pub mod dashboard;
pub mod feed;
pub mod session;
