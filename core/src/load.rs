use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use crate::error::{LoadError, Result};
use crate::graph::{CsrGraph, NodeId, DEFAULT_EDGE_WEIGHT};

/// Settings applied while building a graph.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Refuse to allocate a graph whose projected size exceeds this many MB.
    /// Checked after the discover pass, before any CSR array is allocated.
    pub max_memory_mb: Option<usize>,
}

/// Parse one edge-list record into `(source, destination)`.
///
/// Returns None for blank lines, `#` comments, and lines that do not start
/// with two non-negative 32-bit integers. Each integer is read like a
/// formatted stream extraction: leading whitespace, an optional sign, then the
/// longest run of digits. Anything after the second number is ignored, so
/// `"1 2abc"` and `"1 2.5"` are the edge `(1, 2)`, while `"1.5 2"` is skipped.
pub fn parse_edge_line(line: &str) -> Option<(NodeId, NodeId)> {
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (src, rest) = scan_node_id(line)?;
    let (dst, _) = scan_node_id(rest)?;
    Some((src, dst))
}

/// Read one integer off the front of `input`, returning it and the unread tail.
fn scan_node_id(input: &str) -> Option<(NodeId, &str)> {
    let s = input.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let end = s.len() - unsigned.len() + digits;
    let id: i32 = s[..end].parse().ok()?;
    Some((NodeId::try_from(id).ok()?, &s[end..]))
}

impl CsrGraph {
    /// Build a graph from the edge-list file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(path, &LoadOptions::default())
    }

    pub fn load_with(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading edge list");

        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(&mut BufReader::new(file), options)
    }

    /// Build a graph from any re-scannable edge-list source.
    ///
    /// Three full scans of the input, a counting sort over source IDs:
    /// 1. discover: max node ID and number of valid records
    /// 2. histogram: out-degree per node, then an in-place prefix sum into `row_offsets`
    /// 3. fill: place each destination at a per-source cursor copied from `row_offsets`
    pub fn from_reader<R: BufRead + Seek>(reader: &mut R, options: &LoadOptions) -> Result<Self> {
        let start = Instant::now();

        let Discovery {
            node_count,
            edge_count,
        } = discover(reader)?;
        debug!(node_count, edge_count, "discover pass complete");

        if let Some(limit_mb) = options.max_memory_mb {
            let required_mb = CsrGraph::estimate_memory(node_count, edge_count) / (1024 * 1024);
            if required_mb > limit_mb {
                return Err(LoadError::MemoryLimit {
                    required_mb,
                    limit_mb,
                });
            }
        }

        let row_offsets = histogram(reader, node_count, edge_count)?;
        debug!("histogram pass complete");

        let (column_indices, edge_weights) = fill(reader, &row_offsets)?;
        debug!("fill pass complete");

        let graph = CsrGraph::from_parts(row_offsets, column_indices, edge_weights);
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            memory_mb = graph.memory_usage() / (1024 * 1024),
            load_time_ms = start.elapsed().as_secs_f64() * 1000.0,
            "CSR graph built"
        );
        Ok(graph)
    }
}

struct Discovery {
    node_count: usize,
    edge_count: usize,
}

/// Rewind `reader` and call `f` for every valid record, in file order.
/// Lines that are not UTF-8 are skipped like any other malformed record.
fn for_each_edge<R, F>(reader: &mut R, mut f: F) -> Result<()>
where
    R: BufRead + Seek,
    F: FnMut(NodeId, NodeId),
{
    reader.rewind()?;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let Ok(line) = std::str::from_utf8(&buf) else {
            continue;
        };
        if let Some((src, dst)) = parse_edge_line(line.trim_end_matches(['\n', '\r'])) {
            f(src, dst);
        }
    }
    Ok(())
}

fn discover<R: BufRead + Seek>(reader: &mut R) -> Result<Discovery> {
    let mut max_id: Option<NodeId> = None;
    let mut edge_count = 0usize;

    for_each_edge(reader, |src, dst| {
        let hi = src.max(dst);
        max_id = Some(max_id.map_or(hi, |m| m.max(hi)));
        edge_count += 1;
    })?;

    Ok(Discovery {
        node_count: max_id.map_or(0, |m| m as usize + 1),
        edge_count,
    })
}

/// Out-degree histogram shifted by one slot, prefix-summed in place so that
/// `row_offsets[i]` is the first slot of node `i`'s bucket.
fn histogram<R: BufRead + Seek>(
    reader: &mut R,
    node_count: usize,
    edge_count: usize,
) -> Result<Vec<usize>> {
    let mut row_offsets = vec![0usize; node_count + 1];
    let mut changed = false;

    for_each_edge(reader, |src, _| match row_offsets.get_mut(src as usize + 1) {
        Some(slot) => *slot += 1,
        None => changed = true,
    })?;

    for i in 0..node_count {
        row_offsets[i + 1] += row_offsets[i];
    }

    if changed || row_offsets[node_count] != edge_count {
        return Err(LoadError::InputChanged);
    }
    Ok(row_offsets)
}

/// Bucket fill. `row_offsets` is only read; the write positions live in a
/// separate cursor array so the final bucket boundaries survive the pass.
fn fill<R: BufRead + Seek>(
    reader: &mut R,
    row_offsets: &[usize],
) -> Result<(Vec<NodeId>, Vec<u32>)> {
    let node_count = row_offsets.len() - 1;
    let edge_count = row_offsets[node_count];

    let mut column_indices: Vec<NodeId> = vec![0; edge_count];
    let edge_weights = vec![DEFAULT_EDGE_WEIGHT; edge_count];
    let mut cursor = row_offsets.to_vec();
    let mut changed = false;

    for_each_edge(reader, |src, dst| {
        let s = src as usize;
        if s < node_count && cursor[s] < row_offsets[s + 1] {
            column_indices[cursor[s]] = dst;
            cursor[s] += 1;
        } else {
            changed = true;
        }
    })?;

    // Every bucket must be exactly full.
    if changed || cursor[..node_count] != row_offsets[1..] {
        return Err(LoadError::InputChanged);
    }
    Ok((column_indices, edge_weights))
}
