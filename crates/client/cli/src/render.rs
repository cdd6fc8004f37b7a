//! Terminal rendering of previews and results.
use console::style;
use reward_core::{InventoryState, Rarity, RewardPreview};
use reward_runtime::ApplyResult;

pub fn print_preview(preview: &RewardPreview) {
    let luck = if preview.luck_overridden {
        format!("{} (override)", preview.luck)
    } else {
        preview.luck.to_string()
    };

    println!(
        "{} for {}  luck {}",
        style(&preview.label).bold(),
        style(&preview.player).cyan(),
        luck
    );
    for line in &preview.lines {
        println!(
            "  {:<9} {:<8} {}  {}",
            tier_label(line.tier),
            line.kind,
            style(&line.name).bold(),
            style(&line.description).dim()
        );
    }

    let count = format!(
        "items after merge: {}/{}",
        preview.projected_item_count, preview.item_limit
    );
    if preview.overflow {
        println!("  {}", style(format!("{count} (over limit)")).red());
    } else {
        println!("  {count}");
    }
}

pub fn print_result(result: &ApplyResult) {
    match result.failure_reason() {
        Some(reason) => println!("{} {}", style(result.status).red().bold(), reason),
        None => println!("{}", style(result.status).bold()),
    }
}

pub fn print_inventory(inventory: &InventoryState) {
    println!(
        "Inventory ({}/{} items)",
        inventory.item_count(),
        inventory.item_limit
    );
    for stack in &inventory.items {
        println!("  {} x{}", stack.name, stack.quantity);
    }
    for stack in &inventory.abilities {
        println!("  {} ({} charges)", stack.name, stack.charges);
    }
}

fn tier_label(tier: Rarity) -> console::StyledObject<Rarity> {
    let styled = style(tier);
    match tier {
        Rarity::Common => styled.white(),
        Rarity::Uncommon => styled.green(),
        Rarity::Rare => styled.blue(),
        Rarity::Epic => styled.magenta(),
        Rarity::Legendary => styled.yellow(),
        Rarity::Mythical => styled.red().bold(),
        Rarity::Unique | Rarity::RoleSpecific => styled.cyan(),
    }
}
