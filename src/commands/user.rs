//! Commands for the logged-in user and manager entries

use super::common::print_json;
use crate::{EntryId, FplClient, Result};

pub async fn handle_me(client: &FplClient, json: bool) -> Result<()> {
    if json {
        return print_json(&client.get_user_json().await?);
    }

    let me = client.get_user().await?;
    println!(
        "{} {} (player {})",
        me.player.first_name, me.player.last_name, me.player.id
    );
    match me.player.entry {
        Some(entry) => println!("Entry: {entry}"),
        None => println!("No entry registered this season"),
    }
    Ok(())
}

pub async fn handle_entry(client: &FplClient, id: EntryId, json: bool) -> Result<()> {
    if json {
        return print_json(&client.get_entry_json(id).await?);
    }

    let entry = client.get_entry(id).await?;
    println!(
        "{} - {} {}",
        entry.name, entry.player_first_name, entry.player_last_name
    );
    println!(
        "Overall: {} pts, rank {}",
        entry.summary_overall_points,
        entry
            .summary_overall_rank
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    for league in &entry.leagues.classic {
        println!("  {:<30} rank {}", league.name, league.entry_rank);
    }
    Ok(())
}
