use std::collections::VecDeque;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use clap::{Parser, ValueEnum};
use csr_graph_core::{bounded_bfs, max_out_degree_node, CsrGraph};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "csr-graph-bench",
    about = "Generate synthetic edge lists, then time CSR construction, bounded BFS and max-degree scans"
)]
struct Args {
    #[arg(value_enum, default_value_t = Mode::All)]
    mode: Mode,

    #[arg(default_value_t = 1_000_000)]
    node_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Run every generator
    All,
    /// Fractal branching tree (deep paths)
    Lsystem,
    /// Preferential attachment via edge sampling (hub-and-spoke)
    Scalefree,
    /// Erdos-Renyi uniform random edges
    Random,
    /// Diffusion-limited aggregation (organic branching)
    Dla,
}

/// Writes `source destination` lines for a graph of `node_count` nodes.
type Generator = fn(u32, &mut dyn Write) -> io::Result<()>;

fn main() -> io::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    println!("csr-graph-bench");
    println!("===============");
    println!();

    let generators: Vec<(&str, Generator)> = match args.mode {
        Mode::Lsystem => vec![("L-system tree", gen_lsystem as Generator)],
        Mode::Scalefree => vec![("Scale-free (edge sampling)", gen_scale_free as Generator)],
        Mode::Random => vec![("Erdos-Renyi random", gen_random as Generator)],
        Mode::Dla => vec![("DLA (organic branching)", gen_dla as Generator)],
        Mode::All => vec![
            ("L-system tree", gen_lsystem as Generator),
            ("Scale-free (edge sampling)", gen_scale_free),
            ("Erdos-Renyi random", gen_random),
            ("DLA (organic branching)", gen_dla),
        ],
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, args.node_count)?;
    }
    Ok(())
}

fn run_benchmark(name: &str, generator: Generator, node_count: u32) -> io::Result<()> {
    println!("--- {} ---", name);
    println!("Target: {} nodes", node_count);

    let file = tempfile::NamedTempFile::new()?;
    let t = Instant::now();
    {
        let mut out = BufWriter::new(file.as_file());
        writeln!(out, "# {}: {} nodes", name, node_count)?;
        generator(node_count, &mut out)?;
        out.flush()?;
    }
    let size = file.as_file().metadata()?.len();
    println!(
        "Edge list written in {:.2}s, {:.0}MB on disk",
        t.elapsed().as_secs_f64(),
        size as f64 / 1_048_576.0
    );

    let t = Instant::now();
    let graph = CsrGraph::load(file.path()).map_err(io::Error::other)?;
    println!(
        "CSR built in {:.2}s, {} nodes, {} edges, ~{:.0}MB",
        t.elapsed().as_secs_f64(),
        graph.node_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    if graph.is_empty() {
        println!();
        return Ok(());
    }

    // BFS from node 0 (root or seed in every generator)
    println!();
    println!("{:>8} {:>12} {:>12} {:>10}", "depth", "edges", "discovered", "time");
    println!("{:->8} {:->12} {:->12} {:->10}", "", "", "", "");

    for depth in [1, 2, 3, 5, 10, 20, 50] {
        let t = Instant::now();
        let result = bounded_bfs(&graph, 0, depth);
        let elapsed = t.elapsed();
        println!(
            "{:>8} {:>12} {:>12} {:>8.1}ms",
            depth,
            result.edges.len(),
            result.nodes_discovered,
            elapsed.as_secs_f64() * 1000.0
        );
        if result.nodes_discovered + 1 >= graph.node_count() {
            println!("{:>8} (entire graph reached)", "");
            break;
        }
    }

    println!();
    let t = Instant::now();
    let hub = max_out_degree_node(&graph);
    let elapsed = t.elapsed();
    match hub {
        Some(node) => println!(
            "Max out-degree: node {} ({} edges) in {:.1}ms",
            node,
            graph.out_degree(node),
            elapsed.as_secs_f64() * 1000.0
        ),
        None => println!("Max out-degree: empty graph"),
    }
    println!();
    Ok(())
}

// ---------------------------------------------------------------------------
// Generators: O(n) or O(n + edges), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u32) -> u32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 33) % u64::from(max)) as u32
    }
}

/// L-system fractal tree: every node spawns three children.
/// Log depth, exponential width. Exercises deep BFS levels.
fn gen_lsystem(node_count: u32, out: &mut dyn Write) -> io::Result<()> {
    let branching = 3;
    let mut next_id: u32 = 1;
    let mut frontier: Vec<u32> = vec![0];

    while next_id < node_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id >= node_count {
                    break;
                }
                writeln!(out, "{} {}", parent, next_id)?;
                next_frontier.push(next_id);
                next_id += 1;
            }
        }
        frontier = next_frontier;
    }
    Ok(())
}

/// Scale-free via edge-list sampling.
///
/// Each new node links out to endpoints of randomly chosen existing edges,
/// so targets are picked in proportion to their degree. Hubs collect most
/// of the in-edges; node 0 links out to the whole seed clique.
fn gen_scale_free(node_count: u32, out: &mut dyn Write) -> io::Result<()> {
    let edges_per_node = 10u32;
    let seed = 5u32.min(node_count);
    let mut rng = FastRng::new(12345);
    let mut endpoints: Vec<u32> = Vec::new();

    for i in 0..seed {
        for j in (i + 1)..seed {
            writeln!(out, "{} {}", i, j)?;
            endpoints.extend([i, j]);
        }
    }

    for new_node in seed..node_count {
        if endpoints.is_empty() {
            writeln!(out, "{} {}", new_node, 0)?;
            endpoints.extend([new_node, 0]);
            continue;
        }
        for _ in 0..edges_per_node.min(new_node) {
            let target = endpoints[rng.next(endpoints.len() as u32) as usize];
            if target != new_node {
                writeln!(out, "{} {}", new_node, target)?;
                endpoints.extend([new_node, target]);
            }
        }
    }
    Ok(())
}

/// Erdos-Renyi: ~10 uniformly random out-edges per node, self-loops and
/// duplicates left in. No structure.
fn gen_random(node_count: u32, out: &mut dyn Write) -> io::Result<()> {
    if node_count == 0 {
        return Ok(());
    }
    let mut rng = FastRng::new(54321);
    for _ in 0..u64::from(node_count) * 10 {
        writeln!(out, "{} {}", rng.next(node_count), rng.next(node_count))?;
    }
    Ok(())
}

/// DLA (diffusion-limited aggregation): organic, tree-like growth.
///
/// Each new node is attached beneath a random node on a bounded "surface" of
/// recent additions, with an occasional second link that creates shortcuts.
fn gen_dla(node_count: u32, out: &mut dyn Write) -> io::Result<()> {
    let mut rng = FastRng::new(77777);
    let surface_max = 10_000usize;
    let mut surface: VecDeque<u32> = VecDeque::with_capacity(surface_max + 1);
    surface.push_back(0);

    for new_node in 1..node_count {
        let parent = surface[rng.next(surface.len() as u32) as usize];
        writeln!(out, "{} {}", parent, new_node)?;

        // 10% chance of a second link from an older node
        if rng.next(10) == 0 && new_node > 1 {
            let other = rng.next(new_node);
            if other != parent {
                writeln!(out, "{} {}", other, new_node)?;
            }
        }

        surface.push_back(new_node);
        if surface.len() > surface_max {
            surface.pop_front();
        }
    }
    Ok(())
}
