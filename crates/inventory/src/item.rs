use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gildedrose_core::{Aggregate, AggregateId, AggregateRoot, DomainError, ValueObject};
use gildedrose_events::Event;

use crate::aging;

/// Inventory item identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub AggregateId);

impl ItemId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Quality floor for every clamped category.
pub const MIN_QUALITY: i32 = 0;
/// Quality ceiling for every clamped category.
pub const MAX_QUALITY: i32 = 50;

/// The one name that ages into higher quality.
pub const AGED_BRIE: &str = "Aged Brie";
/// The one legendary name.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
/// The one special-cased concert pass.
pub const BACKSTAGE_PASS_TAFKAL80ETC: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Aging behavior of an item, fixed once at receive time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Ordinary,
    Aged,
    Legendary,
    BackstagePass,
}

impl Category {
    /// Classify an item name into its category.
    ///
    /// Matching is whole-string equality against the three special-cased
    /// names. Every other name ages as ordinary stock, including bare
    /// "Sulfuras" and passes for other concerts.
    pub fn classify(name: &str) -> Self {
        match name {
            AGED_BRIE => Category::Aged,
            SULFURAS => Category::Legendary,
            BACKSTAGE_PASS_TAFKAL80ETC => Category::BackstagePass,
            _ => Category::Ordinary,
        }
    }

    /// Legendary items are exempt from the [0, 50] quality range.
    pub fn is_legendary(self) -> bool {
        self == Category::Legendary
    }
}

impl ValueObject for Category {}

/// Aggregate root: Item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: String,
    category: Category,
    sell_in: i32,
    quality: i32,
    version: u64,
    created: bool,
}

impl Item {
    /// Create an empty, not-yet-received aggregate instance for rehydration.
    pub fn empty(id: ItemId) -> Self {
        Self {
            id,
            name: String::new(),
            category: Category::Ordinary,
            sell_in: 0,
            quality: 0,
            version: 0,
            created: false,
        }
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Days remaining before the sell-by date; negative once it has passed.
    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    /// True once the item's sell-by date has passed.
    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }
}

impl AggregateRoot for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: ReceiveItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiveItem {
    pub item_id: ItemId,
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
    pub occurred_at: DateTime<Utc>,
}

/// Command: AdvanceDay.
///
/// Advances the item by exactly one elapsed day. Issuing it twice is two
/// elapsed days; there is no idempotence, this models real time passing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvanceDay {
    pub item_id: ItemId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryCommand {
    ReceiveItem(ReceiveItem),
    AdvanceDay(AdvanceDay),
}

/// Event: ItemReceived.
///
/// Carries the classified category and the quality actually stored (the
/// receive-time clamp has already been applied).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemReceived {
    pub item_id: ItemId,
    pub name: String,
    pub category: Category,
    pub sell_in: i32,
    pub quality: i32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemAged.
///
/// Carries the post-transition values for one elapsed day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAged {
    pub item_id: ItemId,
    pub sell_in: i32,
    pub quality: i32,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    ItemReceived(ItemReceived),
    ItemAged(ItemAged),
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ItemReceived(_) => "inventory.item.received",
            InventoryEvent::ItemAged(_) => "inventory.item.aged",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::ItemReceived(e) => e.occurred_at,
            InventoryEvent::ItemAged(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Item {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            InventoryEvent::ItemReceived(e) => {
                self.id = e.item_id;
                self.name = e.name.clone();
                self.category = e.category;
                self.sell_in = e.sell_in;
                self.quality = e.quality;
                self.created = true;
            }
            InventoryEvent::ItemAged(e) => {
                self.sell_in = e.sell_in;
                self.quality = e.quality;
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            InventoryCommand::ReceiveItem(cmd) => self.handle_receive(cmd),
            InventoryCommand::AdvanceDay(cmd) => self.handle_advance(cmd),
        }
    }
}

impl Item {
    fn ensure_item_id(&self, item_id: ItemId) -> Result<(), DomainError> {
        if self.id != item_id {
            return Err(DomainError::invariant("item_id mismatch"));
        }
        Ok(())
    }

    fn handle_receive(&self, cmd: &ReceiveItem) -> Result<Vec<InventoryEvent>, DomainError> {
        if self.created {
            return Err(DomainError::conflict("item already received"));
        }
        if cmd.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        let category = Category::classify(&cmd.name);
        // Receive-time policy: clamped categories never store an out-of-range
        // quality; legendary items keep whatever value they arrive with.
        let quality = if category.is_legendary() {
            cmd.quality
        } else {
            cmd.quality.clamp(MIN_QUALITY, MAX_QUALITY)
        };

        Ok(vec![InventoryEvent::ItemReceived(ItemReceived {
            item_id: cmd.item_id,
            name: cmd.name.clone(),
            category,
            sell_in: cmd.sell_in,
            quality,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_advance(&self, cmd: &AdvanceDay) -> Result<Vec<InventoryEvent>, DomainError> {
        if !self.created {
            return Err(DomainError::not_found());
        }
        self.ensure_item_id(cmd.item_id)?;

        // Legendary stock never has to be sold and never ages. Nothing
        // happened, so there is no event to record.
        if self.category.is_legendary() {
            return Ok(Vec::new());
        }

        let (sell_in, quality) = aging::advance_one_day(self.category, self.sell_in, self.quality);

        Ok(vec![InventoryEvent::ItemAged(ItemAged {
            item_id: cmd.item_id,
            sell_in,
            quality,
            occurred_at: cmd.occurred_at,
        })])
    }
}
