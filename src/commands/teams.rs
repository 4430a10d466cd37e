//! Club listing commands

use std::collections::HashSet;

use super::common::print_json;
use crate::{fpl::types::Team, FplClient, Result, TeamId};

pub fn format_team_line(team: &Team) -> String {
    format!(
        "{:>2}  {:<4} {:<24} strength {} (home {}/{}, away {}/{})",
        team.id.as_u32(),
        team.short_name,
        team.name,
        team.strength,
        team.strength_attack_home,
        team.strength_defence_home,
        team.strength_attack_away,
        team.strength_defence_away,
    )
}

pub async fn handle_teams(client: &FplClient, ids: Vec<TeamId>, json: bool, refresh: bool) -> Result<()> {
    if refresh {
        client.refresh().await?;
    }

    let ids: HashSet<TeamId> = ids.into_iter().collect();
    let teams = client.get_teams(Some(&ids)).await?;

    if json {
        return print_json(&teams);
    }
    for team in &teams {
        println!("{}", format_team_line(team));
    }
    Ok(())
}

pub async fn handle_team(client: &FplClient, id: TeamId, json: bool) -> Result<()> {
    let team = client.get_team(id).await?;

    if json {
        return print_json(&team);
    }
    println!("{}", format_team_line(&team));
    if team.unavailable {
        println!("    (unavailable)");
    }
    Ok(())
}
