use std::io::{self, Write};

use csr_graph_core::{GraphStore, NodeId};
use serde::Serialize;

use crate::output::Report;

#[derive(Debug, Serialize)]
pub struct MaxDegreeReport {
    /// None when the graph has no nodes.
    pub node: Option<NodeId>,
    pub out_degree: usize,
}

pub fn max_degree<G: GraphStore>(graph: &G) -> MaxDegreeReport {
    let node = graph.max_degree_node();
    let out_degree = node.map_or(0, |n| graph.out_degree(i64::from(n)));
    MaxDegreeReport { node, out_degree }
}

impl Report for MaxDegreeReport {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        match self.node {
            Some(node) => writeln!(out, "node {} (out-degree {})", node, self.out_degree),
            None => writeln!(out, "graph is empty"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DegreeEntry {
    pub node_id: NodeId,
    pub out_degree: usize,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct DegreeReport {
    pub entries: Vec<DegreeEntry>,
}

pub fn ranking<G: GraphStore>(graph: &G, top_n: usize) -> DegreeReport {
    DegreeReport {
        entries: graph
            .degree_ranking(top_n)
            .into_iter()
            .map(|dr| DegreeEntry {
                node_id: dr.node_id,
                out_degree: dr.out_degree,
            })
            .collect(),
    }
}

impl Report for DegreeReport {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{:>12} {:>12}", "node", "out_degree")?;
        writeln!(out, "{:->12} {:->12}", "", "")?;
        for entry in &self.entries {
            writeln!(out, "{:>12} {:>12}", entry.node_id, entry.out_degree)?;
        }
        Ok(())
    }
}
