//! Test doubles: an in-memory [`Transport`] and JSON payload builders.
//!
//! Compiled for unit tests, or for downstream crates with the `test-utils` feature.

use std::{
    collections::{HashMap, VecDeque},
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::{
    error::TransportError,
    fpl::http::{RawResponse, Transport},
};

#[derive(Debug, Clone)]
struct Scripted {
    response: RawResponse,
    delay: Duration,
}

/// Scripted transport that records every request.
///
/// Each path has a queue of responses; the last one repeats once the queue is
/// drained. Unknown paths answer 404.
#[derive(Debug, Default)]
pub struct StubTransport {
    routes: Mutex<HashMap<String, VecDeque<Scripted>>>,
    calls: Mutex<Vec<String>>,
    started: AtomicUsize,
    finished: AtomicUsize,
    closed: AtomicBool,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON 200 response for `path`.
    pub fn respond_json(&self, path: &str, body: Value) -> &Self {
        self.respond_after(path, 200, body.to_string(), Duration::ZERO)
    }

    /// Queue a response with an arbitrary status and body.
    pub fn respond(&self, path: &str, status: u16, body: impl Into<Vec<u8>>) -> &Self {
        self.respond_after(path, status, body, Duration::ZERO)
    }

    /// Queue a response that only completes after `delay`.
    pub fn respond_after(
        &self,
        path: &str,
        status: u16,
        body: impl Into<Vec<u8>>,
        delay: Duration,
    ) -> &Self {
        self.routes
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .entry(path.to_string())
            .or_default()
            .push_back(Scripted {
                response: RawResponse::new(status, body),
                delay,
            });
        self
    }

    /// Paths requested so far, in request order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(|p| p.into_inner()).len()
    }

    pub fn calls_to(&self, path: &str) -> usize {
        self.calls().iter().filter(|c| c.as_str() == path).count()
    }

    /// Requests that were started but neither completed nor failed: they were dropped.
    pub fn abandoned(&self) -> usize {
        self.started.load(Ordering::SeqCst) - self.finished.load(Ordering::SeqCst)
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn next_for(&self, path: &str) -> Option<Scripted> {
        let mut routes = self.routes.lock().unwrap_or_else(|p| p.into_inner());
        let queue = routes.get_mut(path)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

#[async_trait]
impl Transport for StubTransport {
    fn url(&self, path: &str) -> String {
        format!("http://stub.invalid{path}")
    }

    async fn get(&self, path: &str) -> Result<RawResponse, TransportError> {
        if self.is_closed() {
            return Err(TransportError::Closed);
        }

        self.calls
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(path.to_string());
        self.started.fetch_add(1, Ordering::SeqCst);

        let scripted = self.next_for(path);
        let (response, delay) = match scripted {
            Some(s) => (s.response, s.delay),
            None => (RawResponse::new(404, "not found"), Duration::ZERO),
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        self.finished.fetch_add(1, Ordering::SeqCst);
        Ok(response)
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

// ---------------------------------------------------------------------------
// Payload builders
// ---------------------------------------------------------------------------

pub fn team_json(id: u32) -> Value {
    json!({
        "code": id * 3,
        "draw": 0,
        "form": null,
        "id": id,
        "loss": 0,
        "name": format!("Team {id}"),
        "played": 0,
        "points": 0,
        "position": id,
        "short_name": format!("T{id:02}"),
        "strength": 3,
        "team_division": null,
        "unavailable": false,
        "win": 0,
        "strength_overall_home": 1100,
        "strength_overall_away": 1150,
        "strength_attack_home": 1080,
        "strength_attack_away": 1120,
        "strength_defence_home": 1140,
        "strength_defence_away": 1190,
        "pulse_id": id + 100
    })
}

pub fn player_json(id: u32, team: u32) -> Value {
    json!({
        "chance_of_playing_next_round": null,
        "chance_of_playing_this_round": null,
        "code": 100000 + id,
        "cost_change_event": 0,
        "cost_change_event_fall": 0,
        "cost_change_start": -1,
        "cost_change_start_fall": 1,
        "dreamteam_count": 0,
        "element_type": 3,
        "ep_next": 4.5,
        "ep_this": 4.0,
        "event_points": 2,
        "first_name": format!("First{id}"),
        "form": 3.5,
        "id": id,
        "in_dreamteam": false,
        "news": null,
        "news_added": null,
        "now_cost": 65.0,
        "photo": format!("{}.jpg", 100000 + id),
        "points_per_game": 4.2,
        "second_name": format!("Second{id}"),
        "selected_by_percent": 12.7,
        "special": false,
        "squad_number": null,
        "status": "a",
        "team": team,
        "team_code": team * 3,
        "total_points": 42,
        "transfers_in": 1500,
        "transfers_in_event": 30,
        "transfers_out": 900,
        "transfers_out_event": 12,
        "value_form": 0.5,
        "value_season": 6.5,
        "web_name": format!("Player{id}"),
        "minutes": 720,
        "goals_scored": 3,
        "assists": 2,
        "clean_sheets": 1,
        "goals_conceded": 9,
        "own_goals": 0,
        "penalties_saved": 0,
        "penalties_missed": 0,
        "yellow_cards": 1,
        "red_cards": 0,
        "saves": 0,
        "bonus": 4,
        "bps": 180,
        "influence": 210.4,
        "creativity": 180.2,
        "threat": 250.0,
        "ict_index": 64.1,
        "influence_rank": 40,
        "influence_rank_type": 12,
        "creativity_rank": 55,
        "creativity_rank_type": 20,
        "threat_rank": 30,
        "threat_rank_type": 10,
        "ict_index_rank": 38,
        "ict_index_rank_type": 11,
        "corners_and_indirect_freekicks_order": null,
        "corners_and_indirect_freekicks_text": "",
        "direct_freekicks_order": null,
        "direct_freekicks_text": "",
        "penalties_order": 1,
        "penalties_text": ""
    })
}

pub fn event_json(id: u32, is_current: bool) -> Value {
    json!({
        "id": id,
        "name": format!("Gameweek {id}"),
        "deadline_time": "2023-08-11T17:30:00Z",
        "average_entry_score": 64.0,
        "finished": !is_current,
        "data_checked": !is_current,
        "highest_scoring_entry": 3_383_331,
        "deadline_time_epoch": 1_691_775_000,
        "deadline_time_game_offset": 0,
        "highest_score": 127,
        "is_previous": false,
        "is_current": is_current,
        "is_next": false,
        "chip_plays": [
            {"chip_name": "bboost", "num_played": 145_658},
            {"chip_name": "3xc", "num_played": 221_839}
        ],
        "most_selected": 1,
        "most_transferred_in": 2,
        "top_element": 1,
        "top_element_info": {"id": 1, "points": 14},
        "transfers_made": 0,
        "most_captained": 1,
        "most_vice_captained": 2
    })
}

pub fn game_settings_json() -> Value {
    json!({
        "league_join_private_max": 25,
        "league_join_public_max": 5,
        "league_max_size_public_classic": 20,
        "league_max_size_public_h2h": 16,
        "league_max_size_private_h2h": 16,
        "league_max_ko_rounds_private_h2h": 3,
        "league_prefix_public": "League",
        "league_points_h2h_win": 3,
        "league_points_h2h_lose": 0,
        "league_points_h2h_draw": 1,
        "league_ko_first_instead_of_random": false,
        "cup_start_event_id": 17,
        "cup_stop_event_id": 38,
        "cup_qualifying_method": "rank",
        "cup_type": "traditional",
        "squad_squadplay": 11,
        "squad_squadsize": 15,
        "squad_team_limit": 3,
        "squad_total_spend": 1000.0,
        "ui_currency_multiplier": 10,
        "ui_use_special_shirts": false,
        "ui_special_shirt_exclusions": [],
        "stats_form_days": 30,
        "sys_vice_captain_enabled": true,
        "transfers_sell_on_fee": 0.5,
        "league_h2h_tiebreak_stats": ["+goals_scored", "-goals_conceded"],
        "timezone": "UTC"
    })
}

/// A bootstrap payload with the given clubs and two players per club.
pub fn snapshot_json_with_teams(team_ids: &[u32]) -> Value {
    let teams: Vec<Value> = team_ids.iter().map(|&id| team_json(id)).collect();
    let players: Vec<Value> = team_ids
        .iter()
        .flat_map(|&team| [player_json(team * 10 + 1, team), player_json(team * 10 + 2, team)])
        .collect();

    json!({
        "events": [event_json(1, false), event_json(2, true)],
        "game_settings": game_settings_json(),
        "phases": [
            {"id": 1, "name": "Overall", "start_event": 1, "stop_event": 38},
            {"id": 2, "name": "August", "start_event": 1, "stop_event": 4}
        ],
        "teams": teams,
        "elements": players,
        "element_stats": [
            {"label": "Minutes played", "name": "minutes"},
            {"label": "Goals scored", "name": "goals_scored"}
        ],
        "element_types": [{
            "id": 3,
            "plural_name": "Midfielders",
            "plural_name_short": "MID",
            "singular_name": "Midfielder",
            "singular_name_short": "MID",
            "squad_select": 5,
            "squad_min_play": 2,
            "squad_max_play": 5,
            "ui_shirt_specific": false,
            "sub_positions_locked": [],
            "element_count": 40
        }],
        "total_players": 10_234_567u64
    })
}

/// A bootstrap payload with clubs 1 through 20.
pub fn snapshot_json() -> Value {
    let ids: Vec<u32> = (1..=20).collect();
    snapshot_json_with_teams(&ids)
}

pub fn element_summary_json(player_id: u32) -> Value {
    json!({
        "fixtures": [{
            "id": 100 + player_id,
            "code": 2_367_000 + player_id,
            "team_h": 1,
            "team_h_score": null,
            "team_a": 2,
            "team_a_score": null,
            "event": 3,
            "finished": false,
            "minutes": 0,
            "provisional_start_time": false,
            "kickoff_time": "2023-08-26T14:00:00Z",
            "event_name": "Gameweek 3",
            "is_home": true,
            "difficulty": 3
        }],
        "history": [{
            "element": player_id,
            "fixture": 1,
            "opponent_team": 2,
            "was_home": false,
            "kickoff_time": "2023-08-11T19:00:00Z",
            "team_h_score": 0,
            "team_a_score": 3,
            "round": 1,
            "minutes": 90,
            "goals_scored": 2,
            "assists": 0,
            "clean_sheets": 1,
            "goals_conceded": 0,
            "own_goals": 0,
            "penalties_saved": 0,
            "penalties_missed": 0,
            "yellow_cards": 0,
            "red_cards": 0,
            "saves": 0,
            "bonus": 3,
            "bps": 64,
            "influence": 63.8,
            "creativity": 10.5,
            "threat": 78.0,
            "ict_index": 15.2,
            "value": 140.0,
            "transfers_balance": -1200.0,
            "selected": 4_500_000,
            "transfers_in": 0,
            "transfers_out": 1200
        }],
        "history_past": [{
            "season_name": "2022/23",
            "element_code": 100000 + player_id,
            "start_cost": 115.0,
            "end_cost": 124.0,
            "total_points": 272,
            "minutes": 2767,
            "goals_scored": 36,
            "assists": 9,
            "clean_sheets": 13,
            "goals_conceded": 29,
            "own_goals": 0,
            "penalties_saved": 0,
            "penalties_missed": 1,
            "yellow_cards": 5,
            "red_cards": 0,
            "saves": 0,
            "bonus": 40,
            "bps": 1050,
            "influence": 1565.2,
            "creativity": 434.7,
            "threat": 2289.0,
            "ict_index": 428.8
        }]
    })
}

pub fn me_json() -> Value {
    json!({
        "player": {
            "date_of_birth": null,
            "dirty": false,
            "first_name": "Alex",
            "gender": null,
            "id": 9_876_543,
            "last_name": "Manager",
            "region": 241,
            "email": "alex@example.com",
            "entry": 1_234_567,
            "entry_email": false
        },
        "watched": []
    })
}

pub fn fixture_json(id: u32, team_h: u32, team_a: u32) -> Value {
    json!({
        "code": 2_367_538 + id,
        "event": 1,
        "finished": true,
        "finished_provisional": true,
        "id": id,
        "kickoff_time": "2023-08-11T19:00:00Z",
        "minutes": 90,
        "provisional_start_time": false,
        "started": true,
        "team_a": team_a,
        "team_a_score": 3,
        "team_h": team_h,
        "team_h_score": 0,
        "stats": [],
        "team_h_difficulty": 5,
        "team_a_difficulty": 2
    })
}

pub fn my_team_json() -> Value {
    json!({
        "picks": [
            {"element": 11, "position": 1, "selling_price": 50.0, "multiplier": 1,
             "purchase_price": 49.0, "is_captain": false, "is_vice_captain": false},
            {"element": 21, "position": 2, "selling_price": 140.0, "multiplier": 2,
             "purchase_price": 140.0, "is_captain": true, "is_vice_captain": false}
        ],
        "chips": [{
            "status_for_entry": "available",
            "played_by_entry": [],
            "name": "wildcard",
            "number": 1,
            "start_event": 2,
            "stop_event": 19,
            "chip_type": "transfer"
        }],
        "transfers": {"cost": 4, "status": "cost", "limit": 1, "made": 0, "bank": 5.0, "value": 1005.0}
    })
}

pub fn entry_cup_json() -> Value {
    json!({
        "matches": [],
        "status": {
            "qualification_event": null,
            "qualification_numbers": null,
            "qualification_rank": null,
            "qualification_state": null
        }
    })
}

pub fn manager_entry_json(id: u32) -> Value {
    json!({
        "id": id,
        "joined_time": "2023-07-20T10:15:00Z",
        "started_event": 1,
        "favourite_team": 14,
        "player_first_name": "Alex",
        "player_last_name": "Manager",
        "player_region_id": 241,
        "player_region_iso_code_short": "EN",
        "player_region_iso_code_long": "GB-ENG",
        "summary_overall_points": 130,
        "summary_overall_rank": 456_789,
        "summary_event_points": 62,
        "summary_event_rank": 1_234_567,
        "current_event": 2,
        "leagues": {
            "classic": [{
                "id": 314,
                "name": "Overall",
                "short_name": "overall",
                "created": "2023-06-16T08:57:00Z",
                "closed": false,
                "rank": null,
                "max_entries": null,
                "league_type": "s",
                "scoring": "c",
                "admin_entry": null,
                "start_event": 1,
                "entry_rank": 456_789,
                "entry_last_rank": 512_345,
                "entry_can_leave": false,
                "entry_can_admin": false,
                "entry_can_invite": false
            }],
            "h2h": [],
            "cup": entry_cup_json()
        },
        "name": "Expected Toulouse",
        "kit": null,
        "last_deadline_bank": 5.0,
        "last_deadline_value": 1005.0,
        "last_deadline_total_transfers": 1
    })
}
