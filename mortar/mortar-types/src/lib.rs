//! Core types for mortar network analysis: connectivity, configuration,
//! traced paths, LMT results and errors.
//!
//! This crate provides the domain types shared by the graph builder
//! (`mortar-graph`) and the path tracer (`mortar-trace`).
//!
//! # Overview
//!
//! - **Connectivity**: Neighborhood definitions for 2D and 3D grids ([`Connectivity`])
//! - **Configuration**: Graph and trace settings ([`GraphConfig`], [`TraceConfig`],
//!   [`SearchLimits`], [`CancelToken`])
//! - **Paths**: Node sequences with real-world length ([`TracedPath`])
//! - **Results**: Per-pair and aggregate measurements ([`LmtResult`], [`LmtSummary`])
//! - **Errors**: The shared taxonomy ([`MortarError`])
//!
//! # Line of Minimum Trace
//!
//! The LMT ratio is the real-world length of the shortest path through the
//! mortar joints divided by a reference panel dimension, floored at 1.0.
//! Well-interlocked masonry forces long, staggered paths and a high ratio.
//!
//! # Example
//!
//! ```
//! use mortar_types::{Connectivity, GraphConfig, TraceConfig};
//!
//! let graph = GraphConfig::new(8).with_interface_weight(0.5);
//! assert_eq!(graph.connectivity(2).unwrap(), Connectivity::Eight);
//!
//! let trace = TraceConfig::default()
//!     .with_axis_scale(vec![1.0, 1.0])
//!     .with_normalization_length(100.0);
//! assert!(trace.validate_for(2).is_ok());
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization/deserialization for configuration and result types

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

pub mod cancel;
pub mod config;
pub mod connectivity;
pub mod error;
pub mod path;
pub mod result;

// Re-export main types at crate root for convenience
pub use cancel::CancelToken;
pub use config::{DEFAULT_BATCH_SIZE, GraphConfig, SearchLimits, TraceConfig};
pub use connectivity::Connectivity;
pub use error::MortarError;
pub use path::TracedPath;
pub use result::{EndpointPair, LmtResult, LmtSummary, TraceStats, lmt_ratio};
