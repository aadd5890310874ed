//! # xpander-core
//!
//! Random **k-lift** expander graph generation with spectral-gap
//! validation.
//!
//! The generator lifts the complete graph on `d+1` meta-nodes: every
//! meta-node becomes a group of `k` vertices, and every meta-edge
//! becomes a uniformly random permutation matching between the two
//! incident groups. The resulting graph is `d`-regular on `(d+1)*k`
//! vertices. A candidate lift is accepted only once its second-largest
//! adjacency-eigenvalue magnitude meets the Ramanujan-like bound
//! `2*sqrt(d-1)`; rejected candidates are discarded whole and rebuilt
//! from fresh randomness.
//!
//! ## Modules
//!
//! | Module | What it provides |
//! |--------|-----------------|
//! | [`spectral`] | Ramanujan threshold + symmetric eigendecomposition |
//! | [`graph`] | `LiftedGraph` – dense 0/1 adjacency with meta-node structure |
//! | [`lift`] | `LiftConfig`, `LiftGenerator` – the accept/reject construction loop |
//! | [`edgelist`] | Text boundary: parameter files and edge-list serialization |
//! | [`error`] | `XpanderError`, `XpanderResult` |
//!
//! ## Quick start
//!
//! ```no_run
//! use xpander_core::{LiftConfig, LiftGenerator};
//!
//! let config = LiftConfig::new(3, 3).with_seed(42);
//! let generator = LiftGenerator::new(config)?;
//! let graph = generator.run()?;
//!
//! assert_eq!(graph.n(), 12);
//! for (i, j) in graph.edges() {
//!     println!("{} {}", i, j);
//! }
//! # Ok::<(), xpander_core::XpanderError>(())
//! ```
//!
//! ## Scaling limit
//!
//! The adjacency is a dense `n×n` matrix and validation runs a full
//! eigendecomposition, so memory and time grow as `O(n^2)` and
//! `O(n^3)`. This is intentional: the construction targets the small
//! `(d, k)` regimes of datacenter-topology generation, not large
//! sparse graphs.

pub mod edgelist;
pub mod error;
pub mod graph;
pub mod lift;
pub mod spectral;

// Re-export the most commonly used items at the crate root.
pub use edgelist::{read_edge_list, write_edge_list, GenSpec};
pub use error::{XpanderError, XpanderResult};
pub use graph::LiftedGraph;
pub use lift::{LiftConfig, LiftGenerator};
pub use spectral::{ramanujan_threshold, second_largest_magnitude};
