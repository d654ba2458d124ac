#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregation queries behind the fire map dashboard charts.
//!
//! Every query is a pure function over the in-memory record table: the
//! server filters once per request and feeds the same filtered slice to
//! each chart query. Nothing here mutates or caches.

pub mod aggregate;
pub mod filter;
pub mod kpi;
pub mod seasonal;
