//! Inventory snapshot and the merge applied when a reward batch is confirmed.
//!
//! The merge is pure. The runtime always calls it on a freshly fetched
//! [`InventoryState`], never on the preview snapshot stored in a batch.

use crate::batch::RewardDraw;
use crate::catalog::CatalogKind;

/// A stack of identical items held by a player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub name: String,
    pub quantity: u32,
}

impl ItemStack {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// An ability held by a player together with its remaining charges.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityStack {
    pub name: String,
    pub charges: u32,
}

impl AbilityStack {
    pub fn new(name: impl Into<String>, charges: u32) -> Self {
        Self {
            name: name.into(),
            charges,
        }
    }
}

/// Items and abilities of one player plus the item cap.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryState {
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<ItemStack>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub abilities: Vec<AbilityStack>,
    pub item_limit: u32,
}

impl InventoryState {
    pub fn new(item_limit: u32) -> Self {
        Self {
            items: Vec::new(),
            abilities: Vec::new(),
            item_limit,
        }
    }

    pub fn with_item(mut self, name: impl Into<String>, quantity: u32) -> Self {
        self.items.push(ItemStack::new(name, quantity));
        self
    }

    pub fn with_ability(mut self, name: impl Into<String>, charges: u32) -> Self {
        self.abilities.push(AbilityStack::new(name, charges));
        self
    }

    /// Total number of items held, counting every unit of every stack.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |total, stack| total.saturating_add(stack.quantity))
    }

    pub fn exceeds_item_limit(&self) -> bool {
        self.item_count() > self.item_limit
    }

    pub fn item(&self, name: &str) -> Option<&ItemStack> {
        self.items.iter().find(|stack| stack.name == name)
    }

    pub fn ability(&self, name: &str) -> Option<&AbilityStack> {
        self.abilities.iter().find(|stack| stack.name == name)
    }

    /// Adds `quantity` units of an item. Returns true if a new stack was created.
    pub fn add_item(&mut self, name: &str, quantity: u32) -> bool {
        match self.items.iter_mut().find(|stack| stack.name == name) {
            Some(stack) => {
                stack.quantity = stack.quantity.saturating_add(quantity);
                false
            }
            None => {
                self.items.push(ItemStack::new(name, quantity));
                true
            }
        }
    }

    /// Adds one charge to an ability. Returns true if a new entry was created.
    pub fn charge_ability(&mut self, name: &str) -> bool {
        match self.abilities.iter_mut().find(|stack| stack.name == name) {
            Some(stack) => {
                stack.charges = stack.charges.saturating_add(1);
                false
            }
            None => {
                self.abilities.push(AbilityStack::new(name, 1));
                true
            }
        }
    }

    /// Merges every draw into this inventory.
    ///
    /// - items append a new stack or bump the quantity of an existing one
    /// - any-abilities append or gain a charge
    /// - role-specific abilities matching `current_role` gain a charge on the
    ///   base ability of the same name
    /// - role-specific abilities whose role no longer matches are still
    ///   granted as their own entry and reported as [`MergeOutcome::RoleMismatch`]
    pub fn merge_draws(&mut self, draws: &[RewardDraw], current_role: &str) -> MergeReport {
        let mut report = MergeReport::default();

        for draw in draws {
            let entry = &draw.entry;
            let outcome = match entry.kind {
                CatalogKind::Item => MergeOutcome::Item {
                    name: entry.name.clone(),
                    new_stack: self.add_item(&entry.name, 1),
                },
                CatalogKind::Ability => match entry.role() {
                    None => MergeOutcome::Ability {
                        name: entry.name.clone(),
                        new_entry: self.charge_ability(&entry.name),
                    },
                    Some(role) if role == current_role => MergeOutcome::RoleCharge {
                        name: entry.name.clone(),
                        new_entry: self.charge_ability(&entry.name),
                    },
                    Some(role) => {
                        self.charge_ability(&entry.name);
                        MergeOutcome::RoleMismatch {
                            name: entry.name.clone(),
                            required_role: role.to_string(),
                        }
                    }
                },
            };
            report.outcomes.push(outcome);
        }

        report
    }
}

/// What happened to a single draw during a merge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MergeOutcome {
    Item { name: String, new_stack: bool },
    Ability { name: String, new_entry: bool },
    RoleCharge { name: String, new_entry: bool },
    RoleMismatch { name: String, required_role: String },
}

/// Per-draw outcomes of [`InventoryState::merge_draws`], in draw order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub outcomes: Vec<MergeOutcome>,
}

impl MergeReport {
    pub fn role_mismatches(&self) -> impl Iterator<Item = &MergeOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, MergeOutcome::RoleMismatch { .. }))
    }
}
