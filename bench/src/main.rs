mod config;

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use wgraph_core::{GeneratorConfig, Graph, Route, VertexId, Weight};

use config::BenchConfig;

type Generator = fn(&BenchConfig) -> Graph;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = BenchConfig::from_env();

    if config.mode == "help" || config.mode == "--help" {
        println!("Usage: wgraph-bench [mode] [vertex_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  random      Uniform random edges (WGRAPH_PROBABILITY percent per pair)");
        println!("  tree        Ternary branching tree (deep paths)");
        println!("  smallworld  Ring lattice + random shortcuts");
        println!("  barbell     Two dense clusters connected by a thin bridge");
        println!();
        println!("Default vertex_count: {}", config::DEFAULT_VERTEX_COUNT);
        println!("Environment: WGRAPH_SEED, WGRAPH_PROBABILITY, RUST_LOG");
        return;
    }

    let generators: Vec<(&str, Generator)> = match config.mode.as_str() {
        "random" => vec![("Uniform random", gen_random)],
        "tree" => vec![("Ternary tree", gen_tree)],
        "smallworld" => vec![("Small-world ring", gen_small_world)],
        "barbell" => vec![("Barbell (cluster-bridge-cluster)", gen_barbell)],
        "all" => vec![
            ("Uniform random", gen_random as Generator),
            ("Ternary tree", gen_tree),
            ("Small-world ring", gen_small_world),
            ("Barbell (cluster-bridge-cluster)", gen_barbell),
        ],
        other => {
            eprintln!("Unknown mode: {}. Use --help for options.", other);
            return;
        }
    };

    info!(
        vertices = config.vertex_count,
        seed = config.seed,
        probability = config.probability,
        "wgraph-bench starting"
    );

    for (name, generator) in generators {
        run_benchmark(name, generator, &config);
    }
}

fn run_benchmark(name: &str, generator: Generator, config: &BenchConfig) {
    println!("--- {} ---", name);

    let t = Instant::now();
    let graph = generator(config);
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s: {} vertices, {} edges, ~{:.1}KB",
        gen_time.as_secs_f64(),
        graph.vertex_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1024.0
    );

    let t = Instant::now();
    let reach = match wgraph_core::reachable_from(&graph, 0) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("reachability failed: {}", e);
            return;
        }
    };
    println!(
        "Reachable from 0: {} of {} ({:.1}ms)",
        reach.reached().count(),
        reach.len(),
        t.elapsed().as_secs_f64() * 1000.0
    );

    let far: VertexId = config.vertex_count - 1;
    let t = Instant::now();
    match wgraph_core::shortest_distance(&graph, 0, far) {
        Ok(Route::Found { distance, path }) => println!(
            "Shortest path 0 -> {}: distance {}, {} hops ({:.1}ms)",
            far,
            distance,
            path.len() - 1,
            t.elapsed().as_secs_f64() * 1000.0
        ),
        Ok(Route::Unreachable) => println!(
            "Shortest path 0 -> {}: unreachable ({:.1}ms)",
            far,
            t.elapsed().as_secs_f64() * 1000.0
        ),
        Err(e) => eprintln!("shortest path failed: {}", e),
    }

    let t = Instant::now();
    if let Ok(all) = wgraph_core::shortest_distances(&graph, 0) {
        let farthest = all.values().max().copied().unwrap_or(0);
        println!(
            "Single-source from 0: {} settled, eccentricity {} ({:.1}ms)",
            all.len(),
            farthest,
            t.elapsed().as_secs_f64() * 1000.0
        );
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators: all seeded from the config, so runs are repeatable
// ---------------------------------------------------------------------------

fn weight(rng: &mut StdRng) -> Weight {
    rng.random_range(1..=9)
}

/// Connect `u` and `v` with a random weight. Pairs that collapse onto one
/// vertex are skipped.
fn connect(graph: &mut Graph, u: VertexId, v: VertexId, rng: &mut StdRng) {
    if u == v {
        return;
    }
    let w = weight(rng);
    if let Err(e) = graph.insert_edge(u, v, w) {
        warn!(u, v, error = %e, "skipped edge");
    }
}

/// Uniform random graph via the core generator.
fn gen_random(config: &BenchConfig) -> Graph {
    let mut graph = Graph::named("random", config.vertex_count);
    let mut rng = StdRng::seed_from_u64(config.seed);
    let gen_config = GeneratorConfig::with_probability(config.probability);
    if let Err(e) = wgraph_core::generate(&mut graph, &gen_config, &mut rng) {
        eprintln!("generation failed: {}", e);
    }
    graph
}

/// Ternary tree: every vertex gets three children until the budget runs
/// out. Deep paths, no cycles.
fn gen_tree(config: &BenchConfig) -> Graph {
    let n = config.vertex_count;
    let mut graph = Graph::named("tree", n);
    let mut rng = StdRng::seed_from_u64(config.seed);

    for child in 1..n {
        connect(&mut graph, (child - 1) / 3, child, &mut rng);
    }
    graph
}

/// Ring lattice with each vertex linked to its `k` clockwise neighbors, and
/// each link rewired to a random vertex with 5% probability.
fn gen_small_world(config: &BenchConfig) -> Graph {
    let n = config.vertex_count;
    let k = 3u32.min(n - 1);
    let mut graph = Graph::named("smallworld", n);
    let mut rng = StdRng::seed_from_u64(config.seed);

    for i in 0..n {
        for j in 1..=k {
            let target = if rng.random_bool(0.05) {
                rng.random_range(0..n)
            } else {
                (i + j) % n
            };
            connect(&mut graph, i, target, &mut rng);
        }
    }
    graph
}

/// Two dense random clusters joined by a chain of bridge vertices. The
/// far vertex sits in the second cluster, so every path crosses the bridge.
fn gen_barbell(config: &BenchConfig) -> Graph {
    let n = config.vertex_count;
    let bridge_len = 10u32.min(n / 3);
    let cluster = (n - bridge_len) / 2;
    let mut graph = Graph::named("barbell", n);
    let mut rng = StdRng::seed_from_u64(config.seed);

    let b_start = cluster + bridge_len;
    for (start, size) in [(0, cluster), (b_start, n - b_start)] {
        for i in 0..size {
            for _ in 0..8u32.min(size.saturating_sub(1)) {
                let target = rng.random_range(0..size);
                connect(&mut graph, start + i, start + target, &mut rng);
            }
        }
    }

    // Chain: last of cluster A, through the bridge, to first of cluster B.
    for id in cluster..=b_start {
        if id > 0 {
            connect(&mut graph, id - 1, id, &mut rng);
        }
    }
    graph
}
