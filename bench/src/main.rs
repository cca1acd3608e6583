use std::collections::HashMap;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use graphite_core::{Edge, Graph, GraphOptions, IdAllocator, Node, NodeId, Slots};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Run every generator (default)
    All,
    /// Weighted path graph (worst case for hop count)
    Chain,
    /// 2D lattice with random weights (many equal-length routes)
    Grid,
    /// Erdos-Renyi uniform random edges
    Random,
    /// Preferential attachment via edge sampling (hub-and-spoke)
    Scalefree,
}

/// Benchmark the graphite-core container and Dijkstra engine on synthetic
/// weighted graphs. Log level comes from RUST_LOG (default: info).
#[derive(Debug, Parser)]
#[command(name = "graphite-bench", version)]
struct Args {
    #[arg(value_enum, default_value_t = Mode::All)]
    mode: Mode,

    /// Target node count. Path search is O(V²), so keep this modest.
    #[arg(long, default_value_t = 2_000)]
    nodes: u64,

    /// Seed for the deterministic generators
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Build undirected graphs instead of directed ones
    #[arg(long)]
    undirected: bool,

    /// Number of shortest-path queries to average over
    #[arg(long, default_value_t = 3)]
    samples: u32,
}

type Generator = fn(&IdAllocator, GraphOptions, u64, &mut FastRng) -> Graph;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if args.nodes < 2 {
        bail!("--nodes must be at least 2, got {}", args.nodes);
    }
    if args.samples == 0 {
        bail!("--samples must be at least 1");
    }

    let options = if args.undirected {
        GraphOptions::undirected()
    } else {
        GraphOptions::directed()
    };

    println!("graphite-bench");
    println!("==============");
    println!();

    let generators: Vec<(&str, Generator)> = match args.mode {
        Mode::Chain => vec![("Weighted chain", gen_chain)],
        Mode::Grid => vec![("Weighted grid", gen_grid)],
        Mode::Random => vec![("Erdos-Renyi random", gen_random)],
        Mode::Scalefree => vec![("Scale-free (edge sampling)", gen_scale_free)],
        Mode::All => vec![
            ("Weighted chain", gen_chain as Generator),
            ("Weighted grid", gen_grid),
            ("Erdos-Renyi random", gen_random),
            ("Scale-free (edge sampling)", gen_scale_free),
        ],
    };

    let ids = IdAllocator::new();
    for (name, generator) in generators {
        let mut rng = FastRng::new(args.seed);
        run_benchmark(name, &ids, generator, options, &args, &mut rng)
            .with_context(|| format!("benchmark '{}' failed", name))?;
    }
    Ok(())
}

fn run_benchmark(
    name: &str,
    ids: &IdAllocator,
    generator: Generator,
    options: GraphOptions,
    args: &Args,
    rng: &mut FastRng,
) -> Result<()> {
    println!("--- {} ({}) ---", name, if options.directed { "directed" } else { "undirected" });
    println!("Target: {} nodes", args.nodes);

    let t = Instant::now();
    let mut graph = generator(ids, options, args.nodes, rng);
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s — {} nodes, {} edges, ~{:.1}MB",
        gen_time.as_secs_f64(),
        graph.node_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );
    info!(graph = %graph, nodes = graph.node_count(), edges = graph.edge_count(), "generated");

    let order = graph.node_ids().to_vec();
    let (first, last) = match (order.first(), order.last()) {
        (Some(&f), Some(&l)) => (f, l),
        _ => bail!("generator produced an empty graph"),
    };

    // Adjacency queries: outgoing reads the index, directed incoming scans all edges
    let probe = order[order.len() / 2];
    let t = Instant::now();
    let out = graph.outgoing_edges(probe)?.len();
    let out_time = t.elapsed();
    let t = Instant::now();
    let inc = graph.incoming_edges(probe)?.len();
    let in_time = t.elapsed();
    println!();
    println!("{:>10} {:>8} {:>12}", "query", "edges", "time");
    println!("{:->10} {:->8} {:->12}", "", "", "");
    println!("{:>10} {:>8} {:>10.1}µs", "outgoing", out, micros(out_time));
    println!("{:>10} {:>8} {:>10.1}µs", "incoming", inc, micros(in_time));

    // Shortest path: first node to last node
    let weights = pair_weights(&graph);
    let mut total = Duration::ZERO;
    let mut result = None;
    for _ in 0..args.samples {
        let t = Instant::now();
        result = graph.shortest_path(first, last, |a, b| {
            weights.get(&(a.id(), b.id())).copied().unwrap_or(f64::INFINITY)
        })?;
        total += t.elapsed();
    }
    let mean_ms = total.as_secs_f64() * 1000.0 / args.samples as f64;
    println!();
    match result {
        Some(path) => println!(
            "Shortest path {} → {}: {} hops, weight {:.1}, {:.1}ms (mean of {})",
            first,
            last,
            path.len(),
            path.total_weight(),
            mean_ms,
            args.samples
        ),
        None => println!(
            "Shortest path {} → {}: no path ({:.1}ms, mean of {})",
            first, last, mean_ms, args.samples
        ),
    }

    // Cascade: remove the highest-degree node
    if let Some(hub) = highest_degree(&graph)? {
        let t = Instant::now();
        let removed = graph.remove_node(hub);
        println!(
            "Removed hub {}: {} edges cascaded in {:.1}ms",
            hub,
            removed.len(),
            t.elapsed().as_secs_f64() * 1000.0
        );
    }
    println!();
    Ok(())
}

fn micros(d: Duration) -> f64 {
    d.as_secs_f64() * 1_000_000.0
}

/// Lightest edge weight for each traversable (from, to) pair.
fn pair_weights(graph: &Graph) -> HashMap<(NodeId, NodeId), f64> {
    let mut weights = HashMap::with_capacity(graph.edge_count() * 2);
    for edge in graph.edges() {
        let w = edge.attr_as::<f64>(WEIGHT).unwrap_or(1.0);
        let mut pairs = vec![(edge.from(), edge.to())];
        if !graph.is_directed() {
            pairs.push((edge.to(), edge.from()));
        }
        for pair in pairs {
            weights
                .entry(pair)
                .and_modify(|cur: &mut f64| *cur = cur.min(w))
                .or_insert(w);
        }
    }
    debug!(pairs = weights.len(), "weight table built");
    weights
}

fn highest_degree(graph: &Graph) -> Result<Option<NodeId>> {
    let mut best: Option<(usize, NodeId)> = None;
    for &id in graph.node_ids() {
        let degree = graph.outgoing_edges(id)?.len();
        if best.map_or(true, |(d, _)| degree > d) {
            best = Some((degree, id));
        }
    }
    Ok(best.map(|(_, id)| id))
}

// ---------------------------------------------------------------------------
// Generators — deterministic, single-threaded
// ---------------------------------------------------------------------------

const WEIGHT: &str = "weight";

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    /// Integer weight in 1..=10.
    fn weight(&mut self) -> f64 {
        (self.next(10) + 1) as f64
    }
}

fn make_nodes(ids: &IdAllocator, count: u64) -> Vec<Node> {
    (0..count).map(|_| Node::new(ids)).collect()
}

fn weighted_edge(ids: &IdAllocator, from: &Node, to: &Node, weight: f64) -> Edge {
    Edge::with_attributes(ids, from, to, [(WEIGHT, weight)].into_iter().collect::<Slots>())
}

/// Path graph 0 → 1 → … → n-1 with random weights.
///
/// Deepest possible shortest path; every extraction relaxes one edge.
fn gen_chain(
    ids: &IdAllocator,
    options: GraphOptions,
    node_count: u64,
    rng: &mut FastRng,
) -> Graph {
    let nodes = make_nodes(ids, node_count);
    let edges: Vec<Edge> = nodes
        .windows(2)
        .map(|w| weighted_edge(ids, &w[0], &w[1], rng.weight()))
        .collect();
    Graph::from_parts(ids, nodes, edges, options)
}

/// Square lattice, edges pointing right and down, random weights.
///
/// Many routes of equal hop count; the weights decide the winner.
fn gen_grid(ids: &IdAllocator, options: GraphOptions, node_count: u64, rng: &mut FastRng) -> Graph {
    let side = ((node_count as f64).sqrt() as u64).max(2);
    let nodes = make_nodes(ids, side * side);
    let mut edges = Vec::with_capacity((side * side * 2) as usize);
    for row in 0..side {
        for col in 0..side {
            let at = (row * side + col) as usize;
            if col + 1 < side {
                edges.push(weighted_edge(ids, &nodes[at], &nodes[at + 1], rng.weight()));
            }
            if row + 1 < side {
                let below = at + side as usize;
                edges.push(weighted_edge(ids, &nodes[at], &nodes[below], rng.weight()));
            }
        }
    }
    Graph::from_parts(ids, nodes, edges, options)
}

/// Erdos-Renyi: uniform random edges, ~5 per node. Baseline with no structure.
fn gen_random(
    ids: &IdAllocator,
    options: GraphOptions,
    node_count: u64,
    rng: &mut FastRng,
) -> Graph {
    let target_edges = node_count * 5;
    let nodes = make_nodes(ids, node_count);
    let mut graph = Graph::with_capacity(ids, options, node_count as usize, target_edges as usize);

    let mut edges = Vec::with_capacity(target_edges as usize);
    for _ in 0..target_edges {
        let from = rng.next(node_count) as usize;
        let to = rng.next(node_count) as usize;
        if from != to {
            edges.push(weighted_edge(ids, &nodes[from], &nodes[to], rng.weight()));
        }
    }

    for node in nodes {
        graph.add_node(node);
    }
    for edge in edges {
        graph.add_edge(edge);
    }
    graph
}

/// Scale-free via edge-list sampling (O(edges), not O(n²)).
///
/// Preferential attachment by picking a random existing edge endpoint.
/// Nodes with more edges are more likely to be picked.
fn gen_scale_free(
    ids: &IdAllocator,
    options: GraphOptions,
    node_count: u64,
    rng: &mut FastRng,
) -> Graph {
    let edges_per_node = 4usize;
    let nodes = make_nodes(ids, node_count);
    let mut edges = Vec::with_capacity(nodes.len() * edges_per_node);

    // Endpoint list for O(1) preferential attachment sampling
    let mut endpoints: Vec<usize> = Vec::with_capacity(nodes.len() * edges_per_node * 2);

    // Seed: small clique
    let seed = 5usize.min(nodes.len());
    for i in 0..seed {
        for j in (i + 1)..seed {
            edges.push(weighted_edge(ids, &nodes[i], &nodes[j], rng.weight()));
            endpoints.push(i);
            endpoints.push(j);
        }
    }

    // Grow: each new node attaches to `edges_per_node` existing nodes
    for new_node in seed..nodes.len() {
        for _ in 0..edges_per_node.min(new_node) {
            let target = endpoints[rng.next(endpoints.len() as u64) as usize];
            if target != new_node {
                edges.push(weighted_edge(ids, &nodes[new_node], &nodes[target], rng.weight()));
                endpoints.push(new_node);
                endpoints.push(target);
            }
        }
    }

    Graph::from_parts(ids, nodes, edges, options)
}
