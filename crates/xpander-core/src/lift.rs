//! Random k-lift construction with spectral accept/reject.
//!
//! ## Algorithm
//!
//! 1. Allocate a zero `n×n` adjacency, `n = (d+1)*k`.
//! 2. For every unordered pair of meta-nodes, draw a fresh uniform
//!    permutation of `0..k` and wire the two groups through it.
//! 3. Accept iff the second-largest eigenvalue magnitude meets the
//!    Ramanujan threshold `2*sqrt(d-1)`; otherwise discard the whole
//!    candidate and rebuild from fresh randomness.
//!
//! ## Liveness
//!
//! The retry loop has no inherent termination guarantee: for some
//! `(d, k)` no lift can meet the threshold (the `d=2, k=1` triangle is
//! the canonical case) and an uncapped generator spins forever. The
//! optional [`LiftConfig::with_max_attempts`] cap turns that into a
//! [`XpanderError::ThresholdUnreachable`] error.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::error::{XpanderError, XpanderResult};
use crate::graph::LiftedGraph;
use crate::spectral::{ramanujan_threshold, second_largest_magnitude};

/// Parameters of a k-lift generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiftConfig {
    /// Target degree `d`; the base graph is complete on `d+1` meta-nodes.
    pub degree: usize,
    /// Lift multiplicity `k` (nodes per meta-node group).
    pub lift: usize,
    /// Deterministic seed; `None` draws from system entropy.
    pub seed: Option<u64>,
    /// Retry cap; `None` preserves the unbounded original behavior.
    pub max_attempts: Option<u64>,
}

impl LiftConfig {
    /// Config for a `degree`-regular lift with multiplicity `lift`.
    pub fn new(degree: usize, lift: usize) -> Self {
        Self {
            degree,
            lift,
            seed: None,
            max_attempts: None,
        }
    }

    /// Config sized for at least `nodes` nodes: `k = ceil(nodes / (d+1))`,
    /// so the realized node count is the smallest multiple of `d+1`
    /// that is `>= nodes`.
    pub fn for_node_count(degree: usize, nodes: usize) -> Self {
        let groups = degree + 1;
        Self::new(degree, nodes.div_ceil(groups))
    }

    /// Set a deterministic seed for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cap the number of candidate builds before giving up.
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Total node count `(d+1)*k`.
    pub fn node_count(&self) -> usize {
        (self.degree + 1) * self.lift
    }

    /// Fail fast on degenerate parameters instead of attempting a
    /// degenerate construction.
    pub fn validate(&self) -> XpanderResult<()> {
        if self.degree < 1 {
            return Err(XpanderError::InvalidDegree(self.degree));
        }
        if self.lift < 1 {
            return Err(XpanderError::InvalidLiftCount(self.lift));
        }
        Ok(())
    }
}

/// Lift generator: builds candidates and runs the accept/reject loop.
#[derive(Debug, Clone)]
pub struct LiftGenerator {
    config: LiftConfig,
}

impl LiftGenerator {
    /// Create a generator, validating the config up front.
    pub fn new(config: LiftConfig) -> XpanderResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Borrow the validated config.
    pub fn config(&self) -> &LiftConfig {
        &self.config
    }

    /// RNG handle for this run: seeded exactly once if the config
    /// carries a seed, otherwise drawn from system entropy.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    /// Seed the RNG and run the full accept/reject loop.
    pub fn run(&self) -> XpanderResult<LiftedGraph> {
        let mut rng = self.rng();
        self.generate(&mut rng)
    }

    /// Accept/reject loop over candidate lifts using the supplied RNG.
    ///
    /// Every attempt consumes fresh randomness, accepted or not, so a
    /// fixed seed reproduces the output only in aggregate across the
    /// whole loop.
    pub fn generate(&self, rng: &mut impl Rng) -> XpanderResult<LiftedGraph> {
        let threshold = ramanujan_threshold(self.config.degree);
        let mut attempts: u64 = 0;

        loop {
            if let Some(cap) = self.config.max_attempts {
                if attempts >= cap {
                    return Err(XpanderError::ThresholdUnreachable { attempts });
                }
            }
            attempts += 1;

            let candidate = self.candidate(rng);
            let lambda = second_largest_magnitude(candidate.adjacency());
            if lambda >= threshold {
                info!(
                    degree = self.config.degree,
                    lift = self.config.lift,
                    nodes = candidate.n(),
                    attempts,
                    lambda,
                    threshold,
                    "lift accepted"
                );
                return Ok(candidate);
            }
            debug!(attempt = attempts, lambda, threshold, "lift rejected");
        }
    }

    /// Build a single candidate lift without spectral validation.
    ///
    /// Always symmetric, zero-diagonal and exactly `d`-regular: each
    /// node is wired once per other meta-node, through one permutation
    /// matching per group pair.
    pub fn candidate(&self, rng: &mut impl Rng) -> LiftedGraph {
        let d = self.config.degree;
        let k = self.config.lift;
        let mut graph = LiftedGraph::empty(d, k);
        let mut perm: Vec<usize> = (0..k).collect();

        for meta1 in 0..=d {
            for meta2 in (meta1 + 1)..=d {
                perm.shuffle(rng);
                for (src_ind, &dst_ind) in perm.iter().enumerate() {
                    let src = meta1 * k + src_ind;
                    let dst = meta2 * k + dst_ind;
                    graph.connect(src, dst);
                }
            }
        }
        graph
    }
}
