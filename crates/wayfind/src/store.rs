use std::collections::HashMap;

use anyhow::{Result, bail};

use crate::routing::types::MapPoint;

/// A node on the store plan: an aisle endpoint, junction or shelf position.
#[derive(Debug, Clone)]
pub struct MapNode {
    pub name: String,
    pub pos: MapPoint,
    /// Outgoing edges, in declaration order. The order is part of the map's
    /// contract: search and nearest-node tie-breaks follow it.
    pub neighbors: Vec<String>,
}

/// The store plan: a directed graph of named locations with pixel coordinates.
///
/// Nodes are kept in insertion order so every iteration over the map is
/// deterministic. Fixed at startup and never mutated afterwards.
pub struct StoreMap {
    nodes: Vec<MapNode>,
    index: HashMap<String, usize>,
}

impl StoreMap {
    pub fn builder() -> StoreMapBuilder {
        StoreMapBuilder { nodes: Vec::new() }
    }

    /// The fixed demo store: a single corridor along the top wall with two
    /// branches, rooted at the entrance.
    ///
    /// ```text
    /// entrance -- a1 -- a2 -- a3 -- milk
    ///              |           `--- rice
    ///              b1 -- bread
    ///               `--- toothpaste
    /// ```
    pub fn default_layout() -> StoreMap {
        StoreMap::builder()
            .node("entrance", 0, 0, &["a1"])
            .node("a1", 100, 0, &["a2", "b1"])
            .node("a2", 200, 0, &["a3"])
            .node("a3", 300, 0, &["milk", "rice"])
            .node("milk", 400, 0, &[])
            .node("rice", 400, 180, &[])
            .node("b1", 100, 100, &["bread", "toothpaste"])
            .node("bread", 150, 200, &[])
            .node("toothpaste", 180, 120, &[])
            .build()
            .expect("default layout is consistent")
    }

    /// Whether a node with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Coordinate of a node, if it exists.
    pub fn position(&self, name: &str) -> Option<MapPoint> {
        self.index.get(name).map(|&i| self.nodes[i].pos)
    }

    /// Outgoing neighbors of a node, in declaration order.
    pub fn neighbors(&self, name: &str) -> &[String] {
        static EMPTY: &[String] = &[];
        self.index
            .get(name)
            .map_or(EMPTY, |&i| self.nodes[i].neighbors.as_slice())
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[MapNode] {
        &self.nodes
    }

    /// The node closest to a point in Euclidean distance.
    ///
    /// Linear scan in insertion order; among equidistant nodes the first one
    /// encountered wins. The map is small enough that no spatial index is
    /// warranted.
    pub fn nearest_node(&self, point: MapPoint) -> Option<&str> {
        let mut best: Option<(&str, i64)> = None;
        for node in &self.nodes {
            let dist = node.pos.distance_sq(point);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((node.name.as_str(), dist)),
            }
        }
        best.map(|(name, _)| name)
    }
}

/// Builder for a [`StoreMap`].
///
/// `build` validates referential integrity: every neighbor reference must name
/// a declared node, and node names must be unique.
pub struct StoreMapBuilder {
    nodes: Vec<MapNode>,
}

impl StoreMapBuilder {
    /// Declare a node with its coordinate and outgoing neighbors.
    pub fn node(mut self, name: &str, x: i32, y: i32, neighbors: &[&str]) -> Self {
        self.nodes.push(MapNode {
            name: name.to_string(),
            pos: MapPoint::new(x, y),
            neighbors: neighbors.iter().map(|n| n.to_string()).collect(),
        });
        self
    }

    pub fn build(self) -> Result<StoreMap> {
        let mut index = HashMap::with_capacity(self.nodes.len());
        for (i, node) in self.nodes.iter().enumerate() {
            if index.insert(node.name.clone(), i).is_some() {
                bail!("Duplicate node '{}' in store map", node.name);
            }
        }
        for node in &self.nodes {
            for neighbor in &node.neighbors {
                if !index.contains_key(neighbor.as_str()) {
                    bail!(
                        "Node '{}' references unknown neighbor '{}'",
                        node.name,
                        neighbor
                    );
                }
            }
        }
        Ok(StoreMap {
            nodes: self.nodes,
            index,
        })
    }
}
