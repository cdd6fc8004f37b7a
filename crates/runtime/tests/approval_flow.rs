//! Confirm, decline, and expiry against live inventory state.
mod common;

use chrono::{TimeDelta, Utc};
use common::{AppliedWrite, HarnessBuilder, alice, approver, player_dm};
use reward_core::{
    AbilityStack, BatchKind, CatalogEntry, InventoryState, ItemStack, MergeOutcome, Rarity,
};
use reward_runtime::{
    ApprovalEvent, ApprovalStatus, Event, ReconcileStage, RepositoryError, RewardError, Topic,
};

#[tokio::test]
async fn care_package_end_to_end() {
    let harness = HarnessBuilder::new().build();
    let mut approvals = harness.engine.subscribe(Topic::Approval);

    let batch = harness
        .engine
        .generate_batch(BatchKind::CarePackage, &alice(), None)
        .await
        .unwrap();
    let pending = harness.engine.stage(batch, approver(), player_dm());
    assert_eq!(pending.preview().lines.len(), 2);

    let result = harness.engine.on_confirm(pending).await;

    assert!(result.applied);
    assert_eq!(result.status, ApprovalStatus::Applied);
    assert!(result.failure_reason().is_none());
    assert_eq!(
        harness.inventory.writes(),
        vec![AppliedWrite {
            player: alice(),
            items: vec![
                ItemStack::new("Flashlight", 1),
                ItemStack::new("common trinket", 1)
            ],
            abilities: vec![AbilityStack::new("common trick", 1)],
        }]
    );

    assert_eq!(harness.notifier.refreshes(), vec![alice()]);
    assert_eq!(
        harness.notifier.notices(),
        vec![(approver(), "applied"), (player_dm(), "applied")]
    );
    assert!(matches!(
        approvals.recv().await.unwrap(),
        Event::Approval(ApprovalEvent::BatchApplied { draws: 2, .. })
    ));
}

#[tokio::test]
async fn confirm_merges_into_live_inventory() {
    let harness = HarnessBuilder::new().build();

    let batch = harness
        .engine
        .generate_batch(BatchKind::ItemRain, &alice(), None)
        .await
        .unwrap();
    let pending = harness.engine.stage(batch, approver(), player_dm());

    // Another command grants an item while the batch waits.
    harness
        .inventory
        .store
        .update(&alice(), |inventory| {
            inventory.add_item("Map", 1);
        })
        .unwrap();

    let result = harness.engine.on_confirm(pending).await;
    assert!(result.applied);

    let live = harness.inventory.snapshot(&alice());
    assert_eq!(live.item("Map").unwrap().quantity, 1);
    assert_eq!(live.item("Flashlight").unwrap().quantity, 1);
    assert_eq!(live.item("common trinket").unwrap().quantity, 1);
    assert_eq!(result.inventory.as_ref(), Some(&live));
}

#[tokio::test]
async fn repeated_draws_stack_onto_existing_entries() {
    let catalog = vec![
        CatalogEntry::item("Flashlight", "Bright", Rarity::Common),
        CatalogEntry::ability("Investigate", "Learn a role", Rarity::Common).with_role("Detective"),
    ];
    let harness = HarnessBuilder::new()
        .catalog(catalog)
        .inventory(
            InventoryState::new(5)
                .with_item("Flashlight", 1)
                .with_ability("Investigate", 1),
        )
        .build();

    let batch = harness
        .engine
        .generate_batch(BatchKind::CarePackage, &alice(), None)
        .await
        .unwrap();
    let result = harness
        .engine
        .on_confirm(harness.engine.stage(batch, approver(), player_dm()))
        .await;

    let live = harness.inventory.snapshot(&alice());
    assert_eq!(live.item("Flashlight").unwrap().quantity, 2);
    assert_eq!(live.ability("Investigate").unwrap().charges, 2);
    assert_eq!(live.abilities.len(), 1);
    assert!(matches!(
        result.report.outcomes[1],
        MergeOutcome::RoleCharge {
            new_entry: false,
            ..
        }
    ));
}

#[tokio::test]
async fn role_change_before_confirm_is_reported() {
    let catalog = vec![
        CatalogEntry::item("Rope", "Sturdy", Rarity::Common),
        CatalogEntry::ability("Investigate", "Learn a role", Rarity::Common).with_role("Detective"),
    ];
    let harness = HarnessBuilder::new().catalog(catalog).build();

    let batch = harness
        .engine
        .generate_batch(BatchKind::PowerDrop, &alice(), None)
        .await
        .unwrap();
    let pending = harness.engine.stage(batch, approver(), player_dm());
    harness.players.set_role(&alice(), "Jester").unwrap();

    let result = harness.engine.on_confirm(pending).await;

    assert!(result.applied);
    assert_eq!(result.report.role_mismatches().count(), 1);
    assert_eq!(
        harness
            .inventory
            .snapshot(&alice())
            .ability("Investigate")
            .unwrap()
            .charges,
        1
    );
}

#[tokio::test]
async fn decline_never_writes() {
    let harness = HarnessBuilder::new().build();
    let before = harness.inventory.snapshot(&alice());
    let mut approvals = harness.engine.subscribe(Topic::Approval);

    let batch = harness
        .engine
        .generate_batch(BatchKind::CarePackage, &alice(), None)
        .await
        .unwrap();
    let result = harness
        .engine
        .on_decline(harness.engine.stage(batch, approver(), player_dm()))
        .await;

    assert!(!result.applied);
    assert_eq!(result.status, ApprovalStatus::Discarded);
    assert!(harness.inventory.writes().is_empty());
    assert_eq!(harness.inventory.snapshot(&alice()), before);
    assert_eq!(harness.notifier.notices(), vec![(approver(), "declined")]);
    assert!(harness.notifier.refreshes().is_empty());
    assert!(matches!(
        approvals.recv().await.unwrap(),
        Event::Approval(ApprovalEvent::BatchDeclined { .. })
    ));
}

#[tokio::test]
async fn persist_failure_aborts_whole_batch() {
    let harness = HarnessBuilder::new().failing_writes().build();
    let before = harness.inventory.snapshot(&alice());

    let batch = harness
        .engine
        .generate_batch(BatchKind::CarePackage, &alice(), None)
        .await
        .unwrap();
    let result = harness
        .engine
        .on_confirm(harness.engine.stage(batch, approver(), player_dm()))
        .await;

    assert!(!result.applied);
    assert_eq!(result.status, ApprovalStatus::Failed);
    assert!(matches!(
        result.failure,
        Some(RewardError::ReconciliationFailed {
            stage: ReconcileStage::Persist,
            source: RepositoryError::Backend(_),
        })
    ));
    assert!(result.failure_reason().unwrap().contains("persisting"));
    assert_eq!(harness.inventory.snapshot(&alice()), before);
    assert_eq!(harness.notifier.notices(), vec![(approver(), "failed")]);
    assert!(harness.notifier.refreshes().is_empty());
}

#[tokio::test]
async fn vanished_player_fails_at_fetch() {
    let harness = HarnessBuilder::new().build();

    let mut batch = harness
        .engine
        .generate_batch(BatchKind::ItemRain, &alice(), None)
        .await
        .unwrap();
    batch.player = "ghost".into();

    let result = harness
        .engine
        .on_confirm(harness.engine.stage(batch, approver(), player_dm()))
        .await;

    assert!(matches!(
        result.failure,
        Some(RewardError::ReconciliationFailed {
            stage: ReconcileStage::Fetch,
            source: RepositoryError::PlayerNotFound(_),
        })
    ));
    assert!(harness.inventory.writes().is_empty());
}

#[tokio::test]
async fn overflow_is_flagged_not_blocked() {
    let harness = HarnessBuilder::new()
        .inventory(InventoryState::new(1).with_item("Flashlight", 1))
        .build();

    let batch = harness
        .engine
        .generate_batch(BatchKind::ItemRain, &alice(), None)
        .await
        .unwrap();
    let pending = harness.engine.stage(batch, approver(), player_dm());
    assert!(pending.preview().overflow);

    let result = harness.engine.on_confirm(pending).await;
    assert!(result.applied);
    assert!(result.overflow);
}

#[tokio::test]
async fn expiry_discards_and_tells_approver() {
    let harness = HarnessBuilder::new().build();
    let mut approvals = harness.engine.subscribe(Topic::Approval);

    let batch = harness
        .engine
        .generate_batch(BatchKind::PowerDrop, &alice(), None)
        .await
        .unwrap();
    let pending = harness.engine.stage(batch, approver(), player_dm());

    assert!(!harness.engine.is_expired(&pending));
    let ttl = harness.engine.config().approval_ttl_secs;
    let later = Utc::now() + TimeDelta::seconds(ttl as i64 + 1);
    assert!(pending.is_expired(later, ttl));

    let result = harness.engine.on_expire(pending).await;

    assert_eq!(result.status, ApprovalStatus::Discarded);
    assert!(harness.inventory.writes().is_empty());
    assert_eq!(harness.notifier.notices(), vec![(approver(), "expired")]);
    assert!(matches!(
        approvals.recv().await.unwrap(),
        Event::Approval(ApprovalEvent::BatchExpired { .. })
    ));
}
