use super::ProblemId;
use serde::{Deserialize, Serialize};
use setpick_utils::Points;
use std::ops::Index;

/// A ranked problem ready for search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item<V> {
    pub id: ProblemId,
    pub value: V,
    pub cost: u32,
    pub length: u32,
    pub rank: u32,
}

/// Order in which the catalog is laid out. It only changes which of several
/// equally good subsets is found first, never the optimum itself.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CatalogOrder {
    #[default]
    Identifier,
    CostLengthIdentifier,
}

/// Items sorted once at construction. Indices are stable for the lifetime of
/// the catalog and are the only handles the solvers use.
#[derive(Debug, Clone)]
pub struct Catalog<V> {
    items: Vec<Item<V>>,
    order: CatalogOrder,
}

impl<V: Points> Catalog<V> {
    pub fn new(mut items: Vec<Item<V>>, order: CatalogOrder) -> Self {
        match order {
            CatalogOrder::Identifier => items.sort_by_key(|item| item.id),
            CatalogOrder::CostLengthIdentifier => {
                items.sort_by_key(|item| (item.cost, item.length, item.id))
            }
        }
        Self { items, order }
    }

    pub fn order(&self) -> CatalogOrder {
        self.order
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item<V>] {
        &self.items
    }

    pub fn total_value(&self) -> V {
        self.items
            .iter()
            .fold(V::zero(), |acc, item| acc.saturating_sum(item.value))
    }
}

impl<V> Index<usize> for Catalog<V> {
    type Output = Item<V>;

    fn index(&self, index: usize) -> &Item<V> {
        &self.items[index]
    }
}
