use anyhow::{Result, bail};

use crate::catalog::ProductCatalog;
use crate::routing::types::{MapPoint, Trip, TripOutcome};
use crate::routing::{find_path, synthesize};
use crate::store::StoreMap;

/// One wayfinding session: the store map, the product catalog, and the
/// shopper's current start node.
///
/// The start node is explicit session state rather than module-global: it
/// defaults to the map's first node (the entrance in the demo layout) and
/// changes only through [`set_start`] or [`set_start_near`]. Queries read it
/// once at the start of the computation.
///
/// [`set_start`]: Navigator::set_start
/// [`set_start_near`]: Navigator::set_start_near
pub struct Navigator {
    map: StoreMap,
    catalog: ProductCatalog,
    current_start: String,
}

impl Navigator {
    /// Create a session over a map and catalog, starting at `start`.
    ///
    /// Fails if the start node is unknown or any catalog entry points at a
    /// node missing from the map, so that inconsistencies surface at startup
    /// instead of mid-query.
    pub fn new(map: StoreMap, catalog: ProductCatalog, start: &str) -> Result<Self> {
        if !map.contains(start) {
            bail!("Start node '{start}' is not on the store map");
        }
        for product in catalog.products() {
            if !map.contains(&product.node) {
                bail!(
                    "Product '{}' points at unknown map node '{}'",
                    product.name,
                    product.node
                );
            }
        }
        Ok(Self {
            map,
            catalog,
            current_start: start.to_string(),
        })
    }

    /// The demo store session, starting at the entrance.
    pub fn default_store() -> Self {
        Self::new(
            StoreMap::default_layout(),
            ProductCatalog::default_catalog(),
            "entrance",
        )
        .expect("default store is consistent")
    }

    pub fn map(&self) -> &StoreMap {
        &self.map
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn current_start(&self) -> &str {
        &self.current_start
    }

    /// Set the start node by name.
    pub fn set_start(&mut self, name: &str) -> Result<()> {
        if !self.map.contains(name) {
            bail!("Node '{name}' is not on the store map");
        }
        self.current_start = name.to_string();
        Ok(())
    }

    /// Set the start to the node nearest a map-space point, returning its
    /// name. Mirrors tapping the map to say "I am here".
    pub fn set_start_near(&mut self, point: MapPoint) -> &str {
        if let Some(name) = self.map.nearest_node(point) {
            self.current_start = name.to_string();
        }
        &self.current_start
    }

    /// Plan a trip to a product.
    ///
    /// Catalog lookup, then shortest-path search from the current start, then
    /// direction synthesis. Both failure modes come back as explicit
    /// outcomes.
    pub fn find_product(&self, query: &str) -> TripOutcome {
        let Some(product) = self.catalog.lookup(query) else {
            return TripOutcome::UnknownProduct;
        };

        let Some(route) = find_path(&self.map, &self.current_start, &product.node) else {
            return TripOutcome::NoRoute {
                product: product.name.clone(),
            };
        };

        let instructions = synthesize(&self.map, &route);
        TripOutcome::Found(Trip {
            product: product.name.clone(),
            aisle: product.aisle.clone(),
            route,
            instructions,
        })
    }
}
