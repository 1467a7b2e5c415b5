/// A product entry: the searchable name, its display aisle label, and the
/// store-map node where it sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub aisle: String,
    pub node: String,
}

/// The product catalog, fixed at startup.
///
/// Entries are kept in insertion order for listing. Lookup is exact-match
/// only, case-insensitive: the query is lowercased and compared against the
/// stored (already lowercase) names. No fuzzy or partial matching.
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The fixed demo catalog matching [`StoreMap::default_layout`].
    ///
    /// [`StoreMap::default_layout`]: crate::store::StoreMap::default_layout
    pub fn default_catalog() -> Self {
        let entry = |name: &str, aisle: &str, node: &str| Product {
            name: name.to_string(),
            aisle: aisle.to_string(),
            node: node.to_string(),
        };
        Self::new(vec![
            entry("milk", "5", "milk"),
            entry("bread", "2", "bread"),
            entry("rice", "8", "rice"),
            entry("toothpaste", "3", "toothpaste"),
        ])
    }

    /// Look up a product by name, case-insensitively.
    pub fn lookup(&self, query: &str) -> Option<&Product> {
        let query = query.to_lowercase();
        self.products.iter().find(|p| p.name == query)
    }

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
