//! Graph generation strategies for MST property-based tests.
//!
//! Each generator is driven by a seeded [`SmallRng`] so that rstest cases can
//! replay a specific distribution and seed deterministically.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::types::{MstFixture, WeightDistribution};

const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 64;
/// Dense graphs stay small to bound the quadratic edge count.
const DENSE_MAX_VERTICES: usize = 32;
const MAX_WEIGHT: u32 = 1_000_000;

/// Generates fixtures across every weight distribution, biased towards
/// heavy ties.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (distribution_strategy(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

fn distribution_strategy() -> impl Strategy<Value = WeightDistribution> {
    prop_oneof![
        2 => Just(WeightDistribution::Unique),
        3 => Just(WeightDistribution::ManyIdentical),
        2 => Just(WeightDistribution::Sparse),
        2 => Just(WeightDistribution::Dense),
        2 => Just(WeightDistribution::Disconnected),
        2 => Just(WeightDistribution::Multigraph),
    ]
}

/// Generates a fixture for a specific distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let (vertex_count, edges) = match distribution {
        WeightDistribution::Unique => random_graph(rng, MAX_VERTICES, (0.2, 0.6), wide_weight),
        WeightDistribution::ManyIdentical => {
            let pool_size = rng.gen_range(1..=3);
            let pool: Vec<u32> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();
            random_graph(rng, MAX_VERTICES, (0.3, 0.7), move |r| {
                pool[r.gen_range(0..pool.len())]
            })
        }
        WeightDistribution::Sparse => sparse_graph(rng),
        WeightDistribution::Dense => {
            random_graph(rng, DENSE_MAX_VERTICES, (0.7, 0.95), wide_weight)
        }
        WeightDistribution::Disconnected => disconnected_graph(rng),
        WeightDistribution::Multigraph => multigraph(rng),
    };

    MstFixture {
        vertex_count,
        edges,
        distribution,
    }
}

fn wide_weight(rng: &mut SmallRng) -> u32 {
    rng.gen_range(0..=MAX_WEIGHT)
}

/// Adds each unordered pair with a probability sampled from `probability`.
fn random_graph(
    rng: &mut SmallRng,
    max_vertices: usize,
    probability: (f64, f64),
    mut weight: impl FnMut(&mut SmallRng) -> u32,
) -> (usize, Vec<Edge<u32>>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let edge_probability = rng.gen_range(probability.0..=probability.1);
    let mut edges = Vec::new();

    for source in 0..vertex_count {
        for target in (source + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                let w = weight(rng);
                edges.push(oriented(rng, source, target, w));
            }
        }
    }

    (vertex_count, edges)
}

/// Random spanning path through a shuffled vertex order, plus extra edges.
fn sparse_graph(rng: &mut SmallRng) -> (usize, Vec<Edge<u32>>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(rng);

    let mut edges = Vec::new();
    for pair in order.windows(2) {
        let w = wide_weight(rng);
        edges.push(Edge::new(pair[0], pair[1], w));
    }

    let extra = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra {
        let source = rng.gen_range(0..vertex_count);
        let target = rng.gen_range(0..vertex_count);
        if source != target {
            let w = wide_weight(rng);
            edges.push(Edge::new(source, target, w));
        }
    }

    edges.shuffle(rng);
    (vertex_count, edges)
}

/// Concatenates two to five independent random components.
fn disconnected_graph(rng: &mut SmallRng) -> (usize, Vec<Edge<u32>>) {
    let component_count = rng.gen_range(2..=5);
    let mut vertex_count = 0;
    let mut edges = Vec::new();

    for _ in 0..component_count {
        let size: usize = rng.gen_range(1..=12);
        let probability = rng.gen_range(0.3..=0.8);
        for source in 0..size {
            for target in (source + 1)..size {
                if rng.gen_bool(probability) {
                    let w = wide_weight(rng);
                    edges.push(Edge::new(vertex_count + source, vertex_count + target, w));
                }
            }
        }
        vertex_count += size;
    }

    edges.shuffle(rng);
    (vertex_count, edges)
}

/// Random graph whose edge list also carries self-loops and repeated pairs.
fn multigraph(rng: &mut SmallRng) -> (usize, Vec<Edge<u32>>) {
    let (vertex_count, mut edges) = random_graph(rng, MAX_VERTICES, (0.1, 0.4), |r| {
        r.gen_range(0..=100)
    });

    let loops = rng.gen_range(1..=vertex_count);
    for _ in 0..loops {
        let vertex = rng.gen_range(0..vertex_count);
        let w = rng.gen_range(0..=100);
        edges.push(Edge::new(vertex, vertex, w));
    }

    let repeats = edges.len() / 2;
    for _ in 0..repeats {
        let original = edges[rng.gen_range(0..edges.len())];
        let w = rng.gen_range(0..=100);
        edges.push(oriented(rng, original.source(), original.target(), w));
    }

    edges.shuffle(rng);
    (vertex_count, edges)
}

/// Emits the pair in either orientation; edges are undirected.
fn oriented(rng: &mut SmallRng, left: usize, right: usize, weight: u32) -> Edge<u32> {
    if rng.gen_bool(0.5) {
        Edge::new(left, right, weight)
    } else {
        Edge::new(right, left, weight)
    }
}
