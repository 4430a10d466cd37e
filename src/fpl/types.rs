//! Domain records for the Fantasy Premier League API.
//!
//! Every record rejects unknown fields and is `#[non_exhaustive]`, so code
//! outside this crate can only obtain one through
//! [`schema::parse`](crate::fpl::schema::parse).
//!
//! Fields stay `pub` for reading. The cached [`Snapshot`] is shared as an
//! `Arc` and cannot be changed through it; queries hand out clones, so editing
//! a returned record only changes the caller's copy.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    cli::types::ids::{EntryId, PlayerId, TeamId, MAX_TEAM_ID},
    error::FplError,
    fpl::schema::{nullable, Validate},
    Result,
};


// ---------------------------------------------------------------------------
// Bootstrap snapshot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct ChipPlay {
    pub chip_name: String,
    pub num_played: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct TopPlayerInfo {
    pub id: PlayerId,
    pub points: i32,
}

/// A gameweek.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct Event {
    pub id: u32,
    pub name: String,
    pub deadline_time: DateTime<Utc>,
    pub average_entry_score: f64,
    pub finished: bool,
    pub data_checked: bool,
    #[serde(deserialize_with = "nullable")]
    pub highest_scoring_entry: Option<u32>,
    pub deadline_time_epoch: i64,
    pub deadline_time_game_offset: i64,
    #[serde(deserialize_with = "nullable")]
    pub highest_score: Option<i32>,
    pub is_previous: bool,
    pub is_current: bool,
    pub is_next: bool,
    pub chip_plays: Vec<ChipPlay>,
    #[serde(deserialize_with = "nullable")]
    pub most_selected: Option<PlayerId>,
    #[serde(deserialize_with = "nullable")]
    pub most_transferred_in: Option<PlayerId>,
    #[serde(deserialize_with = "nullable")]
    pub top_element: Option<PlayerId>,
    #[serde(deserialize_with = "nullable")]
    pub top_element_info: Option<TopPlayerInfo>,
    pub transfers_made: u32,
    #[serde(deserialize_with = "nullable")]
    pub most_captained: Option<PlayerId>,
    #[serde(deserialize_with = "nullable")]
    pub most_vice_captained: Option<PlayerId>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct GameSettings {
    pub league_join_private_max: u32,
    pub league_join_public_max: u32,
    pub league_max_size_public_classic: u32,
    pub league_max_size_public_h2h: u32,
    pub league_max_size_private_h2h: u32,
    pub league_max_ko_rounds_private_h2h: u32,
    pub league_prefix_public: String,
    pub league_points_h2h_win: i32,
    pub league_points_h2h_lose: i32,
    pub league_points_h2h_draw: i32,
    pub league_ko_first_instead_of_random: bool,
    pub cup_start_event_id: u32,
    pub cup_stop_event_id: u32,
    pub cup_qualifying_method: String,
    pub cup_type: String,
    pub squad_squadplay: u32,
    pub squad_squadsize: u32,
    pub squad_team_limit: u32,
    pub squad_total_spend: f64,
    pub ui_currency_multiplier: u32,
    pub ui_use_special_shirts: bool,
    pub ui_special_shirt_exclusions: Vec<Value>,
    pub stats_form_days: u32,
    pub sys_vice_captain_enabled: bool,
    pub transfers_sell_on_fee: f64,
    pub league_h2h_tiebreak_stats: Vec<String>,
    pub timezone: String,
}

/// A named run of gameweeks, e.g. "Overall" or "August".
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct Phase {
    pub id: u32,
    pub name: String,
    pub start_event: u32,
    pub stop_event: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct ElementStat {
    pub label: String,
    pub name: String,
}

/// Playing position (goalkeeper, defender, ...).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct ElementType {
    pub id: u32,
    pub plural_name: String,
    pub plural_name_short: String,
    pub singular_name: String,
    pub singular_name_short: String,
    pub squad_select: u32,
    pub squad_min_play: u32,
    pub squad_max_play: u32,
    pub ui_shirt_specific: bool,
    pub sub_positions_locked: Vec<u32>,
    pub element_count: u32,
}

/// A Premier League club.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct Team {
    pub code: u32,
    pub draw: u32,
    #[serde(deserialize_with = "nullable")]
    pub form: Option<Value>,
    pub id: TeamId,
    pub loss: u32,
    pub name: String,
    pub played: u32,
    pub points: u32,
    pub position: u32,
    pub short_name: String,
    pub strength: u32,
    #[serde(deserialize_with = "nullable")]
    pub team_division: Option<Value>,
    pub unavailable: bool,
    pub win: u32,
    pub strength_overall_home: u32,
    pub strength_overall_away: u32,
    pub strength_attack_home: u32,
    pub strength_attack_away: u32,
    pub strength_defence_home: u32,
    pub strength_defence_away: u32,
    pub pulse_id: u32,
}

/// A footballer, called an "element" by the API.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct Player {
    #[serde(deserialize_with = "nullable")]
    pub chance_of_playing_next_round: Option<u32>,
    #[serde(deserialize_with = "nullable")]
    pub chance_of_playing_this_round: Option<u32>,
    pub code: u32,
    pub cost_change_event: i32,
    pub cost_change_event_fall: i32,
    pub cost_change_start: i32,
    pub cost_change_start_fall: i32,
    pub dreamteam_count: u32,
    pub element_type: u32,
    pub ep_next: f64,
    pub ep_this: f64,
    pub event_points: i32,
    pub first_name: String,
    pub form: f64,
    pub id: PlayerId,
    pub in_dreamteam: bool,
    #[serde(deserialize_with = "nullable")]
    pub news: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub news_added: Option<DateTime<Utc>>,
    pub now_cost: f64,
    pub photo: String,
    pub points_per_game: f64,
    pub second_name: String,
    pub selected_by_percent: f64,
    pub special: bool,
    #[serde(deserialize_with = "nullable")]
    pub squad_number: Option<u32>,
    #[serde(deserialize_with = "nullable")]
    pub status: Option<String>,
    pub team: TeamId,
    pub team_code: u32,
    pub total_points: i32,
    pub transfers_in: u32,
    pub transfers_in_event: u32,
    pub transfers_out: u32,
    pub transfers_out_event: u32,
    pub value_form: f64,
    pub value_season: f64,
    pub web_name: String,
    pub minutes: u32,
    pub goals_scored: u32,
    pub assists: u32,
    pub clean_sheets: u32,
    pub goals_conceded: u32,
    pub own_goals: u32,
    pub penalties_saved: u32,
    pub penalties_missed: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub saves: u32,
    pub bonus: u32,
    pub bps: i32,
    pub influence: f64,
    pub creativity: f64,
    pub threat: f64,
    pub ict_index: f64,
    pub influence_rank: u32,
    pub influence_rank_type: u32,
    pub creativity_rank: u32,
    pub creativity_rank_type: u32,
    pub threat_rank: u32,
    pub threat_rank_type: u32,
    pub ict_index_rank: u32,
    pub ict_index_rank_type: u32,
    #[serde(deserialize_with = "nullable")]
    pub corners_and_indirect_freekicks_order: Option<u32>,
    pub corners_and_indirect_freekicks_text: String,
    #[serde(deserialize_with = "nullable")]
    pub direct_freekicks_order: Option<u32>,
    pub direct_freekicks_text: String,
    #[serde(deserialize_with = "nullable")]
    pub penalties_order: Option<u32>,
    pub penalties_text: String,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.second_name)
    }
}

/// The whole `bootstrap-static` payload.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct Snapshot {
    pub events: Vec<Event>,
    pub game_settings: GameSettings,
    pub phases: Vec<Phase>,
    pub teams: Vec<Team>,
    pub elements: Vec<Player>,
    pub element_stats: Vec<ElementStat>,
    pub element_types: Vec<ElementType>,
    pub total_players: u64,
}

impl Snapshot {
    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|team| team.id == id)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.elements.iter().find(|player| player.id == id)
    }

    /// Players registered to a club, in snapshot order.
    pub fn players_for_team(&self, id: TeamId) -> impl Iterator<Item = &Player> {
        self.elements.iter().filter(move |player| player.team == id)
    }

    pub fn current_event(&self) -> Option<&Event> {
        self.events.iter().find(|event| event.is_current)
    }

    /// Resolve both sides of a fixture against the snapshot's teams.
    pub fn fixture_teams(&self, fixture: &impl FixtureSides) -> Result<(&Team, &Team)> {
        let (home, away) = fixture.sides();
        let lookup = |id: TeamId| {
            self.team(id).ok_or(FplError::NotFound {
                entity: "team",
                id: id.as_u32(),
            })
        };
        Ok((lookup(home)?, lookup(away)?))
    }
}

impl Validate for Snapshot {
    const SHAPE: &'static str = "bootstrap snapshot";

    fn validate(&self) -> Result<()> {
        let mut team_ids = HashSet::with_capacity(self.teams.len());
        for team in &self.teams {
            team.validate()?;
            if !team_ids.insert(team.id) {
                return Err(FplError::schema(
                    Self::SHAPE,
                    format!("duplicate team id {}", team.id),
                ));
            }
        }

        let mut player_ids = HashSet::with_capacity(self.elements.len());
        for player in &self.elements {
            if !player_ids.insert(player.id) {
                return Err(FplError::schema(
                    Self::SHAPE,
                    format!("duplicate player id {}", player.id),
                ));
            }
            if !team_ids.contains(&player.team) {
                return Err(FplError::schema(
                    Self::SHAPE,
                    format!("player {} references unknown team {}", player.id, player.team),
                ));
            }
        }

        Ok(())
    }
}

impl Validate for Team {
    const SHAPE: &'static str = "team";

    fn validate(&self) -> Result<()> {
        if (1..=MAX_TEAM_ID).contains(&self.id.as_u32()) {
            Ok(())
        } else {
            Err(FplError::schema(
                Self::SHAPE,
                format!("team id {} outside 1..={MAX_TEAM_ID}", self.id),
            ))
        }
    }
}

impl Validate for Player {
    const SHAPE: &'static str = "player";
}

// ---------------------------------------------------------------------------
// Fixtures and per-player summaries
// ---------------------------------------------------------------------------

/// Anything that names a home and an away club.
pub trait FixtureSides {
    /// `(team_h, team_a)`
    fn sides(&self) -> (TeamId, TeamId);
}

/// A scheduled match between two clubs.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct Fixture {
    pub code: u32,
    #[serde(deserialize_with = "nullable")]
    pub event: Option<u32>,
    pub finished: bool,
    pub finished_provisional: bool,
    pub id: u32,
    #[serde(deserialize_with = "nullable")]
    pub kickoff_time: Option<DateTime<Utc>>,
    pub minutes: u32,
    pub provisional_start_time: bool,
    pub started: bool,
    pub team_a: TeamId,
    #[serde(deserialize_with = "nullable")]
    pub team_a_score: Option<u32>,
    pub team_h: TeamId,
    #[serde(deserialize_with = "nullable")]
    pub team_h_score: Option<u32>,
    pub stats: Vec<Value>,
    pub team_h_difficulty: u8,
    pub team_a_difficulty: u8,
}

impl FixtureSides for Fixture {
    fn sides(&self) -> (TeamId, TeamId) {
        (self.team_h, self.team_a)
    }
}

impl Validate for Fixture {
    const SHAPE: &'static str = "fixture";
}

/// Upcoming fixture as seen from one player's club.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct SummaryFixture {
    pub id: u32,
    pub code: u32,
    pub team_h: TeamId,
    #[serde(deserialize_with = "nullable")]
    pub team_h_score: Option<u32>,
    pub team_a: TeamId,
    #[serde(deserialize_with = "nullable")]
    pub team_a_score: Option<u32>,
    #[serde(deserialize_with = "nullable")]
    pub event: Option<u32>,
    pub finished: bool,
    pub minutes: u32,
    pub provisional_start_time: bool,
    #[serde(deserialize_with = "nullable")]
    pub kickoff_time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "nullable")]
    pub event_name: Option<String>,
    pub is_home: bool,
    pub difficulty: u8,
}

impl FixtureSides for SummaryFixture {
    fn sides(&self) -> (TeamId, TeamId) {
        (self.team_h, self.team_a)
    }
}

/// One gameweek of a player's current season.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct SummaryHistory {
    pub element: PlayerId,
    pub fixture: u32,
    pub opponent_team: TeamId,
    pub was_home: bool,
    pub kickoff_time: DateTime<Utc>,
    #[serde(deserialize_with = "nullable")]
    pub team_h_score: Option<u32>,
    #[serde(deserialize_with = "nullable")]
    pub team_a_score: Option<u32>,
    pub round: u32,
    pub minutes: u32,
    pub goals_scored: u32,
    pub assists: u32,
    pub clean_sheets: u32,
    pub goals_conceded: u32,
    pub own_goals: u32,
    pub penalties_saved: u32,
    pub penalties_missed: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub saves: u32,
    pub bonus: u32,
    pub bps: i32,
    pub influence: f64,
    pub creativity: f64,
    pub threat: f64,
    pub ict_index: f64,
    pub value: f64,
    pub transfers_balance: f64,
    pub selected: u32,
    pub transfers_in: u32,
    pub transfers_out: u32,
}

/// One prior season of a player.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct SummaryHistoryPast {
    pub season_name: String,
    pub element_code: u32,
    pub start_cost: f64,
    pub end_cost: f64,
    pub total_points: i32,
    pub minutes: u32,
    pub goals_scored: u32,
    pub assists: u32,
    pub clean_sheets: u32,
    pub goals_conceded: u32,
    pub own_goals: u32,
    pub penalties_saved: u32,
    pub penalties_missed: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub saves: u32,
    pub bonus: u32,
    pub bps: i32,
    pub influence: f64,
    pub creativity: f64,
    pub threat: f64,
    pub ict_index: f64,
}

/// Payload of `element-summary/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct ElementSummary {
    pub fixtures: Vec<SummaryFixture>,
    pub history: Vec<SummaryHistory>,
    pub history_past: Vec<SummaryHistoryPast>,
}

impl ElementSummary {
    /// Minutes played across the current season's gameweeks.
    pub fn season_minutes(&self) -> u32 {
        self.history.iter().map(|h| h.minutes).sum()
    }

    /// The next fixture that has not finished, if any.
    pub fn next_fixture(&self) -> Option<&SummaryFixture> {
        self.fixtures.iter().find(|f| !f.finished)
    }
}

impl Validate for ElementSummary {
    const SHAPE: &'static str = "element summary";
}

// ---------------------------------------------------------------------------
// Authenticated user and manager entries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct UserPlayer {
    #[serde(deserialize_with = "nullable")]
    pub date_of_birth: Option<String>,
    pub dirty: bool,
    pub first_name: String,
    #[serde(deserialize_with = "nullable")]
    pub gender: Option<String>,
    pub id: u32,
    pub last_name: String,
    pub region: u32,
    pub email: String,
    #[serde(deserialize_with = "nullable")]
    pub entry: Option<EntryId>,
    pub entry_email: bool,
}

/// Payload of `me/` for a logged-in session.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct Me {
    pub player: UserPlayer,
    pub watched: Vec<Value>,
}

impl Validate for Me {
    const SHAPE: &'static str = "current user";
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct Pick {
    pub element: PlayerId,
    pub position: u32,
    pub selling_price: f64,
    pub multiplier: u32,
    pub purchase_price: f64,
    pub is_captain: bool,
    pub is_vice_captain: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct Chip {
    pub status_for_entry: String,
    pub played_by_entry: Vec<Value>,
    pub name: String,
    pub number: u32,
    pub start_event: u32,
    pub stop_event: u32,
    pub chip_type: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct Transfers {
    pub cost: i32,
    pub status: String,
    #[serde(deserialize_with = "nullable")]
    pub limit: Option<u32>,
    pub made: u32,
    pub bank: f64,
    pub value: f64,
}

/// Payload of `my-team/{entry}`: the logged-in manager's squad.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct MyTeam {
    pub picks: Vec<Pick>,
    pub chips: Vec<Chip>,
    pub transfers: Transfers,
}

impl MyTeam {
    pub fn captain(&self) -> Option<PlayerId> {
        self.picks.iter().find(|p| p.is_captain).map(|p| p.element)
    }
}

impl Validate for MyTeam {
    const SHAPE: &'static str = "my team";
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct ClassicLeague {
    pub id: u32,
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub short_name: Option<String>,
    pub created: DateTime<Utc>,
    pub closed: bool,
    #[serde(deserialize_with = "nullable")]
    pub rank: Option<u32>,
    #[serde(deserialize_with = "nullable")]
    pub max_entries: Option<f64>,
    pub league_type: String,
    pub scoring: String,
    #[serde(deserialize_with = "nullable")]
    pub admin_entry: Option<Value>,
    pub start_event: u32,
    pub entry_rank: u32,
    pub entry_last_rank: u32,
    pub entry_can_leave: bool,
    pub entry_can_admin: bool,
    pub entry_can_invite: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct EntryCupStatus {
    #[serde(deserialize_with = "nullable")]
    pub qualification_event: Option<u32>,
    #[serde(deserialize_with = "nullable")]
    pub qualification_numbers: Option<u32>,
    #[serde(deserialize_with = "nullable")]
    pub qualification_rank: Option<u32>,
    #[serde(deserialize_with = "nullable")]
    pub qualification_state: Option<String>,
}

/// Cup progress for one entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct EntryCup {
    pub matches: Vec<Value>,
    pub status: EntryCupStatus,
}

impl Validate for EntryCup {
    const SHAPE: &'static str = "entry cup";
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct EntryLeagues {
    pub classic: Vec<ClassicLeague>,
    pub h2h: Vec<Value>,
    pub cup: EntryCup,
}

/// A manager's fantasy team, from `entry/{id}/`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct ManagerEntry {
    pub id: EntryId,
    pub joined_time: DateTime<Utc>,
    pub started_event: u32,
    #[serde(deserialize_with = "nullable")]
    pub favourite_team: Option<TeamId>,
    pub player_first_name: String,
    pub player_last_name: String,
    pub player_region_id: u32,
    pub player_region_iso_code_short: String,
    pub player_region_iso_code_long: String,
    pub summary_overall_points: i32,
    #[serde(deserialize_with = "nullable")]
    pub summary_overall_rank: Option<u32>,
    pub summary_event_points: i32,
    #[serde(deserialize_with = "nullable")]
    pub summary_event_rank: Option<u32>,
    #[serde(deserialize_with = "nullable")]
    pub current_event: Option<u32>,
    pub leagues: EntryLeagues,
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub kit: Option<Value>,
    pub last_deadline_bank: f64,
    pub last_deadline_value: f64,
    pub last_deadline_total_transfers: u32,
}

impl Validate for ManagerEntry {
    const SHAPE: &'static str = "manager entry";
}
