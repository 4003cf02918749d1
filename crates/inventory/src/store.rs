//! In-memory inventory: the ordered list the daily update runs over.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use gildedrose_core::{Aggregate, DomainError, DomainResult};

use crate::item::{AdvanceDay, InventoryCommand, Item, ItemId, ReceiveItem};

/// Ordered collection of items under daily-aging management.
///
/// Items never interact: the daily update applies to each element
/// independently, in list order.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Bring a new item under management.
    pub fn receive(&mut self, cmd: ReceiveItem) -> DomainResult<ItemId> {
        if self.get(cmd.item_id).is_some() {
            return Err(DomainError::conflict("item already received"));
        }

        let item_id = cmd.item_id;
        let mut item = Item::empty(item_id);
        let events = item.handle(&InventoryCommand::ReceiveItem(cmd))?;
        for event in &events {
            item.apply(event);
        }

        debug!(%item_id, category = ?item.category(), "item received");
        self.items.push(item);
        Ok(item_id)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, item_id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id_typed() == item_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Advance every item by exactly one elapsed day.
    ///
    /// Per-item outcomes are independent of list order. An empty inventory is
    /// a no-op.
    pub fn advance_one_day(&mut self, occurred_at: DateTime<Utc>) -> DomainResult<()> {
        for item in &mut self.items {
            let cmd = AdvanceDay {
                item_id: item.id_typed(),
                occurred_at,
            };
            let events = item.handle(&InventoryCommand::AdvanceDay(cmd))?;
            for event in &events {
                item.apply(event);
            }
            debug!(
                item_id = %item.id_typed(),
                sell_in = item.sell_in(),
                quality = item.quality(),
                "item advanced one day"
            );
        }

        info!(items = self.items.len(), "daily update complete");
        Ok(())
    }
}
