//! Test doubles shared by the runtime integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reward_core::{
    AbilityStack, CatalogEntry, CatalogKind, ChannelRef, InventoryState, ItemStack, LuckLevel,
    PlayerId, Rarity,
};
use reward_runtime::repository::Result as RepoResult;
use reward_runtime::{
    CatalogOracle, CatalogOracleImpl, InMemoryInventoryRepo, InMemoryPlayerRepo,
    InventoryRepository, Notifier, NotifyError, OracleError, PlayerProfile, PlayerRepository,
    RepositoryError, RewardEngine, RewardNotice, RollSource,
};

/// Rolls handed out in order, then `0.0` forever. Counts are fixed and
/// catalog picks always take the first match.
pub struct ScriptedRolls {
    rolls: Mutex<VecDeque<f64>>,
    count: u32,
}

impl ScriptedRolls {
    pub fn new(rolls: impl IntoIterator<Item = f64>) -> Self {
        Self {
            rolls: Mutex::new(rolls.into_iter().collect()),
            count: 1,
        }
    }

    pub fn zeros() -> Self {
        Self::new([])
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }
}

impl RollSource for ScriptedRolls {
    fn roll(&self) -> f64 {
        self.rolls.lock().unwrap().pop_front().unwrap_or(0.0)
    }

    fn count(&self, min: u32, max: u32) -> u32 {
        self.count.clamp(min, max.max(min))
    }

    fn index(&self, _len: usize) -> usize {
        0
    }
}

/// Wraps an in-memory catalog and counts draws.
pub struct CountingCatalog {
    inner: CatalogOracleImpl,
    draws: AtomicUsize,
}

impl CountingCatalog {
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut inner = CatalogOracleImpl::with_rolls(Arc::new(ScriptedRolls::zeros()));
        inner.extend(entries);
        Self {
            inner,
            draws: AtomicUsize::new(0),
        }
    }

    pub fn draws(&self) -> usize {
        self.draws.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogOracle for CountingCatalog {
    async fn random_entry(
        &self,
        kind: CatalogKind,
        tier: Rarity,
    ) -> Result<Option<CatalogEntry>, OracleError> {
        self.draws.fetch_add(1, Ordering::SeqCst);
        self.inner.random_entry(kind, tier).await
    }
}

/// Player store whose role lookups always fail; luck reads succeed.
pub struct RoleOutage {
    luck: LuckLevel,
    role_reads: AtomicUsize,
}

impl RoleOutage {
    pub fn new(luck: u32) -> Self {
        Self {
            luck: LuckLevel::new(luck),
            role_reads: AtomicUsize::new(0),
        }
    }

    pub fn role_reads(&self) -> usize {
        self.role_reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlayerRepository for RoleOutage {
    async fn luck(&self, _player: &PlayerId) -> RepoResult<LuckLevel> {
        Ok(self.luck)
    }

    async fn role(&self, _player: &PlayerId) -> RepoResult<String> {
        self.role_reads.fetch_add(1, Ordering::SeqCst);
        Err(RepositoryError::Backend("role service down".into()))
    }
}

/// One `apply_batch` call as received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppliedWrite {
    pub player: PlayerId,
    pub items: Vec<ItemStack>,
    pub abilities: Vec<AbilityStack>,
}

/// In-memory inventory that records writes and can be told to reject them.
pub struct RecordingInventory {
    pub store: InMemoryInventoryRepo,
    writes: Mutex<Vec<AppliedWrite>>,
    fail_writes: bool,
}

impl RecordingInventory {
    pub fn new(store: InMemoryInventoryRepo) -> Self {
        Self {
            store,
            writes: Mutex::new(Vec::new()),
            fail_writes: false,
        }
    }

    pub fn failing(store: InMemoryInventoryRepo) -> Self {
        Self {
            fail_writes: true,
            ..Self::new(store)
        }
    }

    pub fn writes(&self) -> Vec<AppliedWrite> {
        self.writes.lock().unwrap().clone()
    }

    pub fn snapshot(&self, player: &PlayerId) -> InventoryState {
        self.store.get(player).unwrap().unwrap()
    }
}

#[async_trait]
impl InventoryRepository for RecordingInventory {
    async fn fetch_live(&self, player: &PlayerId) -> RepoResult<InventoryState> {
        self.store.fetch_live(player).await
    }

    async fn apply_batch(
        &self,
        player: &PlayerId,
        items: Vec<ItemStack>,
        abilities: Vec<AbilityStack>,
    ) -> RepoResult<()> {
        if self.fail_writes {
            return Err(RepositoryError::Backend("disk full".into()));
        }
        self.writes.lock().unwrap().push(AppliedWrite {
            player: player.clone(),
            items: items.clone(),
            abilities: abilities.clone(),
        });
        self.store.apply_batch(player, items, abilities).await
    }
}

/// Notifier that remembers every delivery.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<(ChannelRef, &'static str)>>,
    refreshes: Mutex<Vec<PlayerId>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<(ChannelRef, &'static str)> {
        self.notices.lock().unwrap().clone()
    }

    pub fn refreshes(&self) -> Vec<PlayerId> {
        self.refreshes.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify_channel(
        &self,
        channel: &ChannelRef,
        notice: &RewardNotice,
    ) -> Result<(), NotifyError> {
        self.notices
            .lock()
            .unwrap()
            .push((channel.clone(), notice.status()));
        Ok(())
    }

    async fn refresh_inventory_display(&self, player: &PlayerId) -> Result<(), NotifyError> {
        self.refreshes.lock().unwrap().push(player.clone());
        Ok(())
    }
}

pub fn approver() -> ChannelRef {
    ChannelRef::new("admin-approvals")
}

pub fn player_dm() -> ChannelRef {
    ChannelRef::new("alice-dm")
}

pub fn alice() -> PlayerId {
    PlayerId::new("alice")
}

/// One item and one any-ability at every drawable tier.
pub fn full_catalog() -> Vec<CatalogEntry> {
    Rarity::DRAWABLE
        .iter()
        .flat_map(|&tier| {
            [
                CatalogEntry::item(format!("{tier} trinket"), "A trinket", tier),
                CatalogEntry::ability(format!("{tier} trick"), "A trick", tier),
            ]
        })
        .collect()
}

/// Everything a test needs to drive an engine and inspect the aftermath.
pub struct Harness {
    pub engine: RewardEngine,
    pub catalog: Arc<CountingCatalog>,
    pub players: Arc<InMemoryPlayerRepo>,
    pub inventory: Arc<RecordingInventory>,
    pub notifier: Arc<RecordingNotifier>,
}

pub struct HarnessBuilder {
    catalog: Vec<CatalogEntry>,
    rolls: ScriptedRolls,
    luck: LuckLevel,
    role: String,
    inventory: InventoryState,
    failing_writes: bool,
}

impl HarnessBuilder {
    pub fn new() -> Self {
        Self {
            catalog: full_catalog(),
            rolls: ScriptedRolls::zeros(),
            luck: LuckLevel::ZERO,
            role: "Detective".into(),
            inventory: InventoryState::new(5).with_item("Flashlight", 1),
            failing_writes: false,
        }
    }

    pub fn catalog(mut self, catalog: Vec<CatalogEntry>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn rolls(mut self, rolls: ScriptedRolls) -> Self {
        self.rolls = rolls;
        self
    }

    pub fn luck(mut self, luck: u32) -> Self {
        self.luck = LuckLevel::new(luck);
        self
    }

    pub fn role(mut self, role: &str) -> Self {
        self.role = role.into();
        self
    }

    pub fn inventory(mut self, inventory: InventoryState) -> Self {
        self.inventory = inventory;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.failing_writes = true;
        self
    }

    pub fn build(self) -> Harness {
        let catalog = Arc::new(CountingCatalog::new(self.catalog));
        let players: Arc<InMemoryPlayerRepo> = Arc::new(
            [(alice(), PlayerProfile::new(self.luck, self.role))]
                .into_iter()
                .collect(),
        );
        let store: InMemoryInventoryRepo = [(alice(), self.inventory)].into_iter().collect();
        let inventory = Arc::new(if self.failing_writes {
            RecordingInventory::failing(store)
        } else {
            RecordingInventory::new(store)
        });
        let notifier = Arc::new(RecordingNotifier::default());

        let engine = RewardEngine::builder()
            .catalog(catalog.clone())
            .players(players.clone())
            .inventory(inventory.clone())
            .notifier(notifier.clone())
            .rolls(Arc::new(self.rolls))
            .build()
            .expect("engine should build");

        Harness {
            engine,
            catalog,
            players,
            inventory,
            notifier,
        }
    }
}
