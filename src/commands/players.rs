//! Player and player-summary commands

use super::common::{format_price, print_json};
use crate::{
    fpl::types::{ElementSummary, Player},
    FplClient, PlayerId, Result,
};

pub fn format_player_line(player: &Player) -> String {
    let mut line = format!(
        "{:>4}  {:<20} team {:>2}  {}  {} pts  {}% selected",
        player.id.as_u32(),
        player.web_name,
        player.team.as_u32(),
        format_price(player.now_cost),
        player.total_points,
        player.selected_by_percent,
    );
    if let Some(news) = player.news.as_deref().filter(|n| !n.is_empty()) {
        line.push_str(&format!("  [{news}]"));
    }
    line
}

pub fn format_summary_line(id: PlayerId, summary: &ElementSummary) -> String {
    let next = summary
        .next_fixture()
        .map(|f| {
            let venue = if f.is_home { "H" } else { "A" };
            let opponent = if f.is_home { f.team_a } else { f.team_h };
            format!("next: team {opponent} ({venue}), difficulty {}", f.difficulty)
        })
        .unwrap_or_else(|| "no upcoming fixtures".to_string());

    format!(
        "{:>4}  {} gameweeks, {} minutes, {} past seasons; {}",
        id.as_u32(),
        summary.history.len(),
        summary.season_minutes(),
        summary.history_past.len(),
        next
    )
}

pub async fn handle_player(client: &FplClient, id: PlayerId, json: bool) -> Result<()> {
    let player = client.get_player(id).await?;

    if json {
        return print_json(&player);
    }
    println!("{}", format_player_line(&player));
    Ok(())
}

pub async fn handle_summaries(client: &FplClient, ids: &[PlayerId], json: bool) -> Result<()> {
    let summaries = client.get_player_summaries(ids).await?;

    if json {
        return print_json(&summaries);
    }
    for (id, summary) in ids.iter().zip(&summaries) {
        println!("{}", format_summary_line(*id, summary));
    }
    Ok(())
}
