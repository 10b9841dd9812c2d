//! Random rooted binary phylogenetic networks.
//!
//! Purpose
//! - Produce reproducible test and benchmark inputs: a random binary tree
//!   with a given number of leaves, then a given number of reticulations
//!   inserted between random edge pairs.
//!
//! Model
//! - Tree: root `0` with children `1`, `2`; repeatedly pick a leaf uniformly
//!   and hang two fresh leaves below it.
//! - Reticulation: pick two distinct edges `(t1,h1)`, `(t2,h2)` uniformly
//!   until `h1` is not reachable from `h2`, subdivide them with fresh nodes
//!   `u`, `v` and add `u → v`. The reachability test keeps the result
//!   acyclic.
//! - Every sample carries its params and a seed replay token;
//!   `NetworkGenerator` offers streaming (`generate_next`) and replay
//!   (`regenerate`).

use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};

use crate::network::{Edge, Network, NodeId};

/// Error type shared by the generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    InvalidParams { reason: String },
    Exhausted { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    fn exhausted(reason: impl Into<String>) -> Self {
        Self::Exhausted {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
            Self::Exhausted { reason } => write!(f, "generator exhausted: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Parameters for random binary networks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkGenParams {
    pub leaves: usize,
    pub reticulations: usize,
    /// Edge-pair draws allowed per reticulation before giving up.
    pub max_attempts: u32,
}

impl NetworkGenParams {
    pub fn new(leaves: usize, reticulations: usize) -> Self {
        Self {
            leaves,
            reticulations,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), GeneratorError> {
        if self.leaves < 2 {
            return Err(GeneratorError::invalid("need at least two leaves"));
        }
        if self.max_attempts == 0 {
            return Err(GeneratorError::invalid("max_attempts must be > 0"));
        }
        // 2 leaves + 2 per extra leaf + 2 per reticulation, plus the root.
        let nodes = 1 + 2 * (self.leaves - 1) + 2 * self.reticulations;
        if u32::try_from(nodes).is_err() {
            return Err(GeneratorError::invalid("network too large for u32 node ids"));
        }
        Ok(())
    }
}

impl Default for NetworkGenParams {
    fn default() -> Self {
        Self {
            leaves: 10,
            reticulations: 3,
            max_attempts: 10_000,
        }
    }
}

/// Replay token storing the seed that regenerates the same sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedReplay {
    pub seed: u64,
}

/// A generated network plus replay metadata.
#[derive(Clone, Debug)]
pub struct NetworkSample {
    pub network: Network,
    pub params: NetworkGenParams,
    pub replay: SeedReplay,
}

/// Stream of random networks derived from one master seed.
pub struct NetworkGenerator {
    params: NetworkGenParams,
    master_rng: StdRng,
}

impl NetworkGenerator {
    pub fn new(params: NetworkGenParams, seed: u64) -> Result<Self, GeneratorError> {
        params.validate()?;
        Ok(Self {
            params,
            master_rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn generate_next(&mut self) -> Result<NetworkSample, GeneratorError> {
        let seed = self.master_rng.next_u64();
        let network = Self::generate_single(&self.params, seed)?;
        Ok(NetworkSample {
            network,
            params: self.params.clone(),
            replay: SeedReplay { seed },
        })
    }

    pub fn regenerate(&self, replay: &SeedReplay) -> Result<Network, GeneratorError> {
        Self::generate_single(&self.params, replay.seed)
    }

    pub fn generate_single(params: &NetworkGenParams, seed: u64) -> Result<Network, GeneratorError> {
        params.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let mut net = random_tree(params.leaves, &mut rng);
        for _ in 0..params.reticulations {
            add_reticulation(&mut net, params.max_attempts, &mut rng)?;
        }
        Ok(net)
    }
}

/// Random rooted binary tree with `leaves` leaves (at least two).
pub fn random_tree<R: Rng>(leaves: usize, rng: &mut R) -> Network {
    let mut net = Network::from_edges([(0, 1), (0, 2)]);
    let mut leaf_set: Vec<u32> = vec![1, 2];
    let mut max_id = 2u32;
    while leaf_set.len() < leaves {
        let pick = rng.gen_range(0..leaf_set.len());
        let leaf = leaf_set.remove(pick);
        let (a, b) = (max_id + 1, max_id + 2);
        net.add_edge(Edge::from_raw(leaf, a));
        net.add_edge(Edge::from_raw(leaf, b));
        leaf_set.push(a);
        leaf_set.push(b);
        max_id += 2;
    }
    net
}

/// Insert one reticulation edge between two subdivided edges.
pub fn add_reticulation<R: Rng>(
    net: &mut Network,
    max_attempts: u32,
    rng: &mut R,
) -> Result<(), GeneratorError> {
    let edges: Vec<Edge> = net.edge_set().into_iter().collect();
    if edges.len() < 2 {
        return Err(GeneratorError::exhausted("need two edges to add a reticulation"));
    }
    let mut chosen = None;
    for _ in 0..max_attempts {
        let mut pair = edges.choose_multiple(rng, 2);
        let (Some(&e1), Some(&e2)) = (pair.next(), pair.next()) else {
            break;
        };
        if !net.has_path(e2.head, e1.head) {
            chosen = Some((e1, e2));
            break;
        }
    }
    let Some((e1, e2)) = chosen else {
        return Err(GeneratorError::exhausted(format!(
            "no admissible edge pair after {max_attempts} attempts"
        )));
    };

    let next = net.max_node().map_or(0, |n| n.0 + 1);
    let (u, v) = (NodeId(next), NodeId(next + 1));
    net.remove_edge(e1);
    net.remove_edge(e2);
    net.add_edge(Edge::new(e1.tail, u));
    net.add_edge(Edge::new(u, e1.head));
    net.add_edge(Edge::new(e2.tail, v));
    net.add_edge(Edge::new(v, e2.head));
    net.add_edge(Edge::new(u, v));
    Ok(())
}
