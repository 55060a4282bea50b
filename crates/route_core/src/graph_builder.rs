//! Turns route records into a [`Graph`] of cities.
//!
//! Every record becomes one undirected connection. Travel costs are treated
//! as symmetric even though a record describes `origin -> destination`.
use crate::{
    constants::{CityId, Weight},
    graph::{CityNode, DuplicateEdgePolicy, Edge, Graph},
    weights::{calculate_weights, WeightPreferences},
};
use log::{debug, info};
use route_reader::RouteRecord;
use rustc_hash::FxHashMap;

/// Which name to keep if the same city id shows up with different names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamePolicy {
    FirstSeen,
    #[default]
    LastSeen,
}

pub struct GraphBuilder<'a> {
    records: &'a [RouteRecord],
    preferences: WeightPreferences,
    name_policy: NamePolicy,
    g: Graph,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(records: &'a [RouteRecord]) -> Self {
        GraphBuilder {
            records,
            preferences: WeightPreferences::default(),
            name_policy: NamePolicy::default(),
            g: Graph::with_capacity(records.len(), records.len()),
        }
    }

    pub fn preferences(mut self, preferences: WeightPreferences) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn duplicate_policy(mut self, policy: DuplicateEdgePolicy) -> Self {
        self.g.set_duplicate_policy(policy);
        self
    }

    pub fn name_policy(mut self, policy: NamePolicy) -> Self {
        self.name_policy = policy;
        self
    }

    /// Creates one node per distinct city id of the origin and destination
    /// columns, in order of first appearance.
    ///
    /// Ids that never appear as an origin have no known name and are labeled `#<id>`.
    pub fn create_nodes(&mut self) {
        let mut order: Vec<CityId> = Vec::new();
        let mut names: FxHashMap<CityId, Option<&str>> = FxHashMap::default();

        for record in self.records {
            let name = names.entry(record.origin_id).or_insert_with(|| {
                order.push(record.origin_id);
                None
            });
            if self.name_policy == NamePolicy::LastSeen || name.is_none() {
                *name = Some(record.origin_name.as_str());
            }

            names.entry(record.destination_id).or_insert_with(|| {
                order.push(record.destination_id);
                None
            });
        }

        for id in order {
            let name = match names[&id] {
                Some(name) => name.to_string(),
                None => format!("#{}", id),
            };
            self.g.add_node(CityNode::new(id, name));
        }

        debug!("Created {} city nodes", self.g.nodes.len());
    }

    /// Inserts one undirected edge per record, weighted by
    /// [`calculate_weights`] over all records.
    ///
    /// Self-loops and records whose cities have no node are skipped.
    /// Returns the number of records that resulted in an edge.
    pub fn create_edges(&mut self) -> anyhow::Result<usize> {
        if self.records.is_empty() {
            return Ok(0);
        }

        let weights = self.calculate_weights()?;

        let mut inserted = 0;
        for (record, weight) in self.records.iter().zip(weights) {
            let (Some(from), Some(to)) = (
                self.g.node_index_of(record.origin_id),
                self.g.node_index_of(record.destination_id),
            ) else {
                debug!(
                    "Skipping route {} -> {}: unknown city",
                    record.origin_id, record.destination_id
                );
                continue;
            };

            if from == to {
                continue;
            }

            if self.g.add_edge(Edge::new(from, to, weight)).is_some() {
                inserted += 1;
            }
        }

        Ok(inserted)
    }

    fn calculate_weights(&self) -> anyhow::Result<Vec<Weight>> {
        let distances: Vec<f64> = self.records.iter().map(|r| r.distance_km).collect();
        let tickets: Vec<f64> = self.records.iter().map(|r| r.ticket_price).collect();
        calculate_weights(&distances, &tickets, &self.preferences)
    }

    /// Runs [`Self::create_nodes`] and [`Self::create_edges`] and returns the graph
    pub fn build(mut self) -> anyhow::Result<Graph> {
        self.preferences.validate()?;
        self.create_nodes();
        self.create_edges()?;
        info!(
            "Graph has {} cities and {} connections",
            self.g.nodes.len(),
            self.g.edges.len()
        );
        Ok(self.g)
    }

    /// The graph built so far
    pub fn graph(&self) -> &Graph {
        &self.g
    }
}
