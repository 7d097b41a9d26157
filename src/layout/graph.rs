//! Visible-topology graph — the drawn neurons and synapses as a petgraph
//! DiGraph, plus the per-column bookkeeping the layout engine needs.
//!
//! Columns are pushed left to right with their layer-slot index; only
//! columns in *consecutive* slots get connected, so a collapsed slot
//! between two real layers silently severs them.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::types::{NeuronPoint, Segment};

/// Graph of visible neurons with one edge per drawn synapse.
pub struct TopologyGraph {
    digraph: DiGraph<NeuronPoint, ()>,
    /// (layer-slot index, node indices top to bottom), in insertion order.
    columns: Vec<(usize, Vec<NodeIndex>)>,
}

impl TopologyGraph {
    pub fn new() -> Self {
        Self {
            digraph: DiGraph::new(),
            columns: Vec::new(),
        }
    }

    /// Add one real layer's visible neurons, top to bottom.
    pub fn push_column(&mut self, slot: usize, points: Vec<NeuronPoint>) {
        let indices = points
            .into_iter()
            .map(|p| self.digraph.add_node(p))
            .collect();
        self.columns.push((slot, indices));
    }

    /// Connect every pair of columns sitting in consecutive layer slots
    /// with a full bipartite edge set.
    pub fn connect_adjacent(&mut self) {
        for w in 0..self.columns.len().saturating_sub(1) {
            let (slot_a, ref col_a) = self.columns[w];
            let (slot_b, ref col_b) = self.columns[w + 1];
            if slot_b != slot_a + 1 {
                continue;
            }
            let pairs: Vec<(NodeIndex, NodeIndex)> = col_a
                .iter()
                .flat_map(|&m| col_b.iter().map(move |&o| (m, o)))
                .collect();
            for (m, o) in pairs {
                self.digraph.add_edge(m, o, ());
            }
        }
    }

    /// Drawn neurons in insertion (reading) order.
    pub fn neurons(&self) -> Vec<NeuronPoint> {
        self.digraph.node_weights().copied().collect()
    }

    /// One segment per synapse, endpoints exactly the neuron positions,
    /// in insertion order.
    pub fn segments(&self) -> Vec<Segment> {
        self.digraph
            .edge_references()
            .map(|e| {
                Segment::new(
                    self.digraph[e.source()].pos,
                    self.digraph[e.target()].pos,
                )
            })
            .collect()
    }

    pub fn neuron_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn synapse_count(&self) -> usize {
        self.digraph.edge_count()
    }
}

impl Default for TopologyGraph {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
