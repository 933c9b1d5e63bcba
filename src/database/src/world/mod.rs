use core::{
    BuyRecommendation, ChemistryRule, ClubCohesionRule, EngineError, FixtureDifficulty,
    FixtureOutlook, Gameweek, Player, PlayerOutlook, Position, RecommendationScorer,
    RosterValidator, ScoringEngine, SellRecommendation, Squad, TeamScore, TransferLedger,
    TransferOutcome, TransferRecord,
};
use core::{BUDGET_CAP, FDR_LOOKAHEAD};
use log::info;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Gameweeks feeding the rolling form average.
const FORM_WINDOW: usize = 5;

pub struct Club {
    pub code: String,
    pub name: String,
    /// Baseline difficulty of facing this club, 1-5.
    pub fdr: u8,
}

pub struct Fixture {
    pub gw_code: String,
    pub home_club: String,
    pub away_club: String,
    pub played: bool,
}

pub struct FantasyTeam {
    pub id: u32,
    pub manager_id: u32,
    pub name: String,
}

/// One row of the per-gameweek league table.
#[derive(Debug, Clone, Serialize)]
pub struct StandingEntry {
    pub rank: usize,
    pub team_id: u32,
    pub team_name: String,
    pub score: TeamScore,
}

/// The whole season state behind the API: static clubs, generated
/// players and schedule, plus everything managers create at runtime.
/// All mutating operations check their preconditions before touching
/// any table, so a rejected call leaves the world exactly as it was.
pub struct World {
    pub clubs: Vec<Club>,
    pub players: HashMap<u32, Player>,
    pub gameweeks: Vec<Gameweek>,
    pub fixtures: Vec<Fixture>,
    pub fixture_difficulty: FixtureDifficulty,
    teams: HashMap<u32, FantasyTeam>,
    lineups: HashMap<(u32, String), Squad>,
    transfer_log: HashMap<(u32, String), Vec<TransferRecord>>,
    player_points: HashMap<(u32, String), i32>,
    chemistry_rule: Box<dyn ChemistryRule>,
    next_team_id: u32,
}

impl World {
    pub fn new(
        clubs: Vec<Club>,
        players: Vec<Player>,
        gameweeks: Vec<Gameweek>,
        fixtures: Vec<Fixture>,
    ) -> Self {
        let fixture_difficulty = FixtureDifficulty::new(
            clubs
                .iter()
                .map(|club| (club.code.clone(), club.fdr))
                .collect(),
        );

        World {
            clubs,
            players: players.into_iter().map(|p| (p.id, p)).collect(),
            gameweeks,
            fixtures,
            fixture_difficulty,
            teams: HashMap::new(),
            lineups: HashMap::new(),
            transfer_log: HashMap::new(),
            player_points: HashMap::new(),
            chemistry_rule: Box::new(ClubCohesionRule::default()),
            next_team_id: 1,
        }
    }

    pub fn gameweek(&self, code: &str) -> Result<&Gameweek, EngineError> {
        self.gameweeks
            .iter()
            .find(|gw| gw.code == code)
            .ok_or_else(|| EngineError::not_found("gameweek", code))
    }

    fn gameweek_mut(&mut self, code: &str) -> Result<&mut Gameweek, EngineError> {
        self.gameweeks
            .iter_mut()
            .find(|gw| gw.code == code)
            .ok_or_else(|| EngineError::not_found("gameweek", code))
    }

    pub fn team(&self, team_id: u32) -> Result<&FantasyTeam, EngineError> {
        self.teams
            .get(&team_id)
            .ok_or_else(|| EngineError::not_found("team", team_id))
    }

    pub fn player(&self, player_id: u32) -> Result<&Player, EngineError> {
        self.players
            .get(&player_id)
            .ok_or_else(|| EngineError::not_found("player", player_id))
    }

    pub fn lineup(&self, team_id: u32, gw_code: &str) -> Result<&Squad, EngineError> {
        self.team(team_id)?;
        self.gameweek(gw_code)?;

        self.lineups
            .get(&(team_id, gw_code.to_string()))
            .ok_or_else(|| EngineError::not_found("lineup", format!("{}/{}", team_id, gw_code)))
    }

    fn resolve_players(&self, player_ids: &[u32]) -> Result<Vec<&Player>, EngineError> {
        let mut resolved = Vec::with_capacity(player_ids.len());
        let mut missing = Vec::new();

        for &player_id in player_ids {
            match self.players.get(&player_id) {
                Some(player) => resolved.push(player),
                None => missing.push(player_id),
            }
        }

        if missing.is_empty() {
            Ok(resolved)
        } else {
            Err(EngineError::UnknownPlayers(missing))
        }
    }

    fn squad_players(&self, squad: &Squad) -> Result<Vec<&Player>, EngineError> {
        self.resolve_players(&squad.player_ids())
    }

    fn records_for(&self, team_id: u32, gw_code: &str) -> &[TransferRecord] {
        self.transfer_log
            .get(&(team_id, gw_code.to_string()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn points_for(&self, player_id: u32, gw_code: &str) -> i32 {
        self.player_points
            .get(&(player_id, gw_code.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Registers a manager's team with its opening lineup. One team per
    /// manager; the selection must pass every squad rule at once.
    pub fn create_fantasy_team(
        &mut self,
        manager_id: u32,
        team_name: &str,
        gw_code: &str,
        player_ids: &[u32],
        captain_id: u32,
        vice_captain_id: u32,
    ) -> Result<u32, EngineError> {
        if let Some(existing) = self.teams.values().find(|t| t.manager_id == manager_id) {
            return Err(EngineError::DuplicateTeamForManager {
                manager_id,
                team_name: existing.name.clone(),
            });
        }

        let gameweek = self.gameweek(gw_code)?;
        if gameweek.simulated {
            return Err(EngineError::GameweekAlreadySimulated {
                gw_code: gameweek.code.clone(),
            });
        }

        let candidates = self.resolve_players(player_ids)?;
        RosterValidator::validate(&candidates, captain_id, vice_captain_id)
            .map_err(EngineError::SquadInvalid)?;

        let team_id = self.next_team_id;
        self.next_team_id += 1;

        self.teams.insert(
            team_id,
            FantasyTeam {
                id: team_id,
                manager_id,
                name: team_name.to_string(),
            },
        );
        self.lineups.insert(
            (team_id, gw_code.to_string()),
            Squad::from_selection(player_ids, captain_id, vice_captain_id),
        );

        info!(
            "team {} '{}' created by manager {} for {}",
            team_id, team_name, manager_id, gw_code
        );

        Ok(team_id)
    }

    /// Runs the transfer precondition chain and, only on acceptance,
    /// commits the swap and appends the ledger row.
    pub fn propose_transfer(
        &mut self,
        team_id: u32,
        gw_code: &str,
        player_out_id: u32,
        player_in_id: u32,
    ) -> Result<TransferOutcome, EngineError> {
        let outcome = {
            let gameweek = self.gameweek(gw_code)?;
            let squad = self.lineup(team_id, gw_code)?;
            let squad_players = self.squad_players(squad)?;
            let player_out = self.player(player_out_id)?;
            let player_in = self.player(player_in_id)?;
            let records = self.records_for(team_id, gw_code);

            TransferLedger::propose(
                gameweek,
                squad,
                &squad_players,
                records,
                player_out,
                player_in,
            )?
        };

        let key = (team_id, gw_code.to_string());
        if let Some(squad) = self.lineups.get_mut(&key) {
            squad.replace_player(player_out_id, player_in_id);
        }
        self.transfer_log
            .entry(key)
            .or_default()
            .push(outcome.record.clone());

        info!(
            "team {} swapped {} for {} in {}, {} transfers left",
            team_id, player_out_id, player_in_id, gw_code, outcome.remaining_after
        );

        Ok(outcome)
    }

    pub fn transfers_remaining(&self, team_id: u32, gw_code: &str) -> Result<usize, EngineError> {
        self.team(team_id)?;
        self.gameweek(gw_code)?;

        Ok(TransferLedger::remaining(self.records_for(team_id, gw_code)))
    }

    pub fn transfer_history(
        &self,
        team_id: u32,
        gw_code: &str,
    ) -> Result<Vec<TransferRecord>, EngineError> {
        self.team(team_id)?;
        self.gameweek(gw_code)?;

        Ok(self.records_for(team_id, gw_code).to_vec())
    }

    /// Re-arms the captain and vice-captain on an open gameweek. Both
    /// must be distinct members of the current lineup.
    pub fn set_captains(
        &mut self,
        team_id: u32,
        gw_code: &str,
        captain_id: u32,
        vice_captain_id: u32,
    ) -> Result<(), EngineError> {
        if captain_id == vice_captain_id {
            return Err(EngineError::CaptainViceConflict);
        }

        let gameweek = self.gameweek(gw_code)?;
        if gameweek.simulated {
            return Err(EngineError::GameweekAlreadySimulated {
                gw_code: gameweek.code.clone(),
            });
        }

        let squad = self.lineup(team_id, gw_code)?;
        for player_id in [captain_id, vice_captain_id] {
            if !squad.contains(player_id) {
                return Err(EngineError::PlayerNotInLineup { player_id });
            }
        }

        if let Some(squad) = self.lineups.get_mut(&(team_id, gw_code.to_string())) {
            squad.set_captains(captain_id, vice_captain_id);
        }

        Ok(())
    }

    /// Score for a (team, gameweek), or `None` while the week has no
    /// results yet. An unscored week is reported as unavailable, never
    /// as zero.
    pub fn team_score(
        &self,
        team_id: u32,
        gw_code: &str,
    ) -> Result<Option<TeamScore>, EngineError> {
        let gameweek = self.gameweek(gw_code)?;
        let squad = self.lineup(team_id, gw_code)?;

        if !gameweek.simulated {
            return Ok(None);
        }

        Ok(Some(self.compute_score(squad, gw_code)?))
    }

    fn compute_score(&self, squad: &Squad, gw_code: &str) -> Result<TeamScore, EngineError> {
        let points: HashMap<u32, i32> = squad
            .player_ids()
            .into_iter()
            .map(|player_id| (player_id, self.points_for(player_id, gw_code)))
            .collect();

        let squad_players = self.squad_players(squad)?;
        let chemistry = self.chemistry_rule.bonus(&squad_players);

        Ok(ScoringEngine::compute(squad, &points, chemistry))
    }

    /// League table over every fantasy team with a lineup in the given
    /// gameweek, best total first, ties by ascending team id. `None`
    /// while the gameweek has no results.
    pub fn standings(&self, gw_code: &str) -> Result<Option<Vec<StandingEntry>>, EngineError> {
        let gameweek = self.gameweek(gw_code)?;
        if !gameweek.simulated {
            return Ok(None);
        }

        let mut scored: Vec<(u32, String, TeamScore)> = Vec::new();
        for team in self.teams.values() {
            let Some(squad) = self.lineups.get(&(team.id, gw_code.to_string())) else {
                continue;
            };
            scored.push((team.id, team.name.clone(), self.compute_score(squad, gw_code)?));
        }

        scored.sort_by(|a, b| b.2.total.cmp(&a.2.total).then(a.0.cmp(&b.0)));

        Ok(Some(
            scored
                .into_iter()
                .enumerate()
                .map(|(index, (team_id, team_name, score))| StandingEntry {
                    rank: index + 1,
                    team_id,
                    team_name,
                    score,
                })
                .collect(),
        ))
    }

    /// Applies the final scores of one gameweek: per-player points,
    /// season totals, the one-way `simulated` flag, and a carry-forward
    /// of every lineup into the following week. Returns how many player
    /// scores were recorded.
    pub fn ingest_results(
        &mut self,
        gw_code: &str,
        results: &[(u32, i32)],
    ) -> Result<usize, EngineError> {
        let gameweek = self.gameweek(gw_code)?;
        if gameweek.simulated {
            return Err(EngineError::GameweekAlreadySimulated {
                gw_code: gameweek.code.clone(),
            });
        }

        let missing: Vec<u32> = results
            .iter()
            .map(|&(player_id, _)| player_id)
            .filter(|player_id| !self.players.contains_key(player_id))
            .collect();
        if !missing.is_empty() {
            return Err(EngineError::UnknownPlayers(missing));
        }

        for &(player_id, points) in results {
            // a repeated player id within one feed keeps the last entry
            let previous = self
                .player_points
                .insert((player_id, gw_code.to_string()), points);

            if let Some(player) = self.players.get_mut(&player_id) {
                player.total_points += points - previous.unwrap_or(0);
            }
        }

        for fixture in self.fixtures.iter_mut().filter(|f| f.gw_code == gw_code) {
            fixture.played = true;
        }

        let next_code = {
            let gameweek = self.gameweek_mut(gw_code)?;
            gameweek.finalize();
            let finished_number = gameweek.number;

            self.gameweeks
                .iter()
                .find(|gw| gw.number == finished_number + 1)
                .map(|gw| gw.code.clone())
        };

        if let Some(next_code) = next_code {
            let carried: Vec<(u32, Squad)> = self
                .lineups
                .iter()
                .filter(|((_, code), _)| code == gw_code)
                .map(|((team_id, _), squad)| (*team_id, squad.clone()))
                .collect();

            for (team_id, squad) in carried {
                self.lineups
                    .entry((team_id, next_code.clone()))
                    .or_insert(squad);
            }
        }

        info!(
            "gameweek {} simulated with {} player scores",
            gw_code,
            results.len()
        );

        Ok(results.len())
    }

    /// Rolling average of the player's points over the last simulated
    /// gameweeks before `current_number`, capped at `FORM_WINDOW` weeks.
    /// Zero with no history.
    pub fn player_form(&self, player_id: u32, current_number: u8) -> f32 {
        let scores: Vec<i32> = self
            .gameweeks
            .iter()
            .filter(|gw| gw.simulated && gw.number < current_number)
            .map(|gw| self.points_for(player_id, &gw.code))
            .collect();

        if scores.is_empty() {
            return 0.0;
        }

        let window = &scores[scores.len().saturating_sub(FORM_WINDOW)..];
        window.iter().sum::<i32>() as f32 / window.len() as f32
    }

    /// The club's next unplayed fixtures from `from_number` onward,
    /// capped at the scorer's lookahead, each rated from the viewing
    /// club's side of the pitch.
    pub fn upcoming_fixtures(&self, club_code: &str, from_number: u8) -> Vec<FixtureOutlook> {
        let number_of = |code: &str| {
            self.gameweeks
                .iter()
                .find(|gw| gw.code == code)
                .map(|gw| gw.number)
                .unwrap_or(0)
        };

        let mut upcoming: Vec<&Fixture> = self
            .fixtures
            .iter()
            .filter(|f| !f.played && (f.home_club == club_code || f.away_club == club_code))
            .filter(|f| number_of(&f.gw_code) >= from_number)
            .collect();
        upcoming.sort_by_key(|f| number_of(&f.gw_code));

        upcoming
            .into_iter()
            .take(FDR_LOOKAHEAD)
            .map(|f| {
                let home = f.home_club == club_code;
                let opponent = if home {
                    f.away_club.clone()
                } else {
                    f.home_club.clone()
                };
                let rating = self.fixture_difficulty.rating(&opponent, home);

                FixtureOutlook {
                    gw_code: f.gw_code.clone(),
                    opponent,
                    home,
                    rating,
                }
            })
            .collect()
    }

    fn outlook(&self, player: &Player, from_number: u8) -> PlayerOutlook {
        PlayerOutlook {
            player_id: player.id,
            name: player.full_name.to_string(),
            club_code: player.club_code.clone(),
            position: player.position,
            cost: player.cost,
            total_points: player.total_points,
            form: self.player_form(player.id, from_number),
            fixtures: self.upcoming_fixtures(&player.club_code, from_number),
        }
    }

    pub fn buy_recommendations(
        &self,
        team_id: u32,
        gw_code: &str,
        position: Option<Position>,
        limit: usize,
    ) -> Result<Vec<BuyRecommendation>, EngineError> {
        let gameweek = self.gameweek(gw_code)?;
        let squad = self.lineup(team_id, gw_code)?;
        let squad_players = self.squad_players(squad)?;

        let squad_ids: HashSet<u32> = squad.player_ids().into_iter().collect();
        let mut club_counts: HashMap<String, usize> = HashMap::new();
        for player in &squad_players {
            *club_counts.entry(player.club_code.clone()).or_default() += 1;
        }

        // affordable after selling an average-priced member, with a
        // little headroom on top of the unspent budget
        let squad_cost: f32 = squad_players.iter().map(|p| p.cost).sum();
        let average_cost = squad_cost / squad_players.len().max(1) as f32;
        let cost_cap = (BUDGET_CAP - squad_cost) + average_cost + 2.0;

        let pool: Vec<PlayerOutlook> = self
            .players
            .values()
            .map(|player| self.outlook(player, gameweek.number))
            .collect();

        Ok(RecommendationScorer::rank_buy_candidates(
            &pool,
            &squad_ids,
            &club_counts,
            position,
            cost_cap,
            limit,
        ))
    }

    pub fn sell_suggestions(
        &self,
        team_id: u32,
        gw_code: &str,
        limit: usize,
    ) -> Result<Vec<SellRecommendation>, EngineError> {
        let gameweek = self.gameweek(gw_code)?;
        let squad = self.lineup(team_id, gw_code)?;

        let members: Vec<PlayerOutlook> = self
            .squad_players(squad)?
            .into_iter()
            .map(|player| self.outlook(player, gameweek.number))
            .collect();

        Ok(RecommendationScorer::rank_sell_candidates(&members, limit))
    }

    /// Player browser behind the squad-building screens. Filters are
    /// ANDed; the name query is a case-insensitive substring match.
    pub fn search_players(
        &self,
        club: Option<&str>,
        position: Option<Position>,
        query: Option<&str>,
        limit: usize,
    ) -> Vec<&Player> {
        let lowered = query.map(str::to_lowercase);

        let mut matches: Vec<&Player> = self
            .players
            .values()
            .filter(|p| club.is_none_or(|c| p.club_code.eq_ignore_ascii_case(c)))
            .filter(|p| position.is_none_or(|pos| p.position == pos))
            .filter(|p| {
                lowered
                    .as_deref()
                    .is_none_or(|q| p.full_name.to_string().to_lowercase().contains(q))
            })
            .collect();

        matches.sort_by_key(|p| p.id);
        matches.truncate(limit);
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core::shared::FullName;

    fn club(code: &str, fdr: u8) -> Club {
        Club {
            code: code.to_string(),
            name: code.to_string(),
            fdr,
        }
    }

    fn player(id: u32, club: &str, position: Position, cost: f32) -> Player {
        Player::new(
            id,
            FullName::new(format!("First{}", id), format!("Last{}", id)),
            club.to_string(),
            position,
            cost,
        )
    }

    fn fixture(gw_code: &str, home: &str, away: &str) -> Fixture {
        Fixture {
            gw_code: gw_code.to_string(),
            home_club: home.to_string(),
            away_club: away.to_string(),
            played: false,
        }
    }

    fn world() -> World {
        let clubs = vec![
            club("ARS", 5),
            club("MCI", 5),
            club("LIV", 5),
            club("CHE", 4),
            club("TOT", 4),
            club("NEW", 4),
            club("AVL", 4),
            club("BHA", 3),
            club("WHU", 3),
            club("FUL", 3),
            club("EVE", 3),
            club("BOU", 3),
        ];

        let mut players = vec![player(1, "ARS", Position::Goalkeeper, 4.0)];
        for (i, code) in ["MCI", "LIV", "CHE", "TOT"].iter().enumerate() {
            players.push(player(2 + i as u32, code, Position::Defender, 4.5));
        }
        for (i, code) in ["NEW", "AVL", "BHA", "WHU"].iter().enumerate() {
            players.push(player(6 + i as u32, code, Position::Midfielder, 5.0));
        }
        players.push(player(10, "FUL", Position::Forward, 6.0));
        players.push(player(11, "EVE", Position::Forward, 6.0));
        // out-of-squad pool
        players.push(player(12, "BOU", Position::Forward, 6.5));
        players.push(player(13, "ARS", Position::Forward, 6.0));
        players.push(player(14, "BOU", Position::Midfielder, 5.5));
        // priced beyond any budget this fixture's squads can free up
        players.push(player(15, "TOT", Position::Forward, 55.0));

        let start = NaiveDate::from_ymd_opt(2025, 8, 16).unwrap();
        let gameweeks = (1..=3u8)
            .map(|number| {
                Gameweek::new(
                    format!("GW{:02}", number),
                    number,
                    start + chrono::Days::new(7 * (number as u64 - 1)),
                )
            })
            .collect();

        let fixtures = vec![
            fixture("GW01", "FUL", "ARS"),
            fixture("GW02", "MCI", "FUL"),
            fixture("GW03", "FUL", "EVE"),
        ];

        World::new(clubs, players, gameweeks, fixtures)
    }

    const XI: [u32; 11] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

    fn world_with_team() -> (World, u32) {
        let mut world = world();
        let team_id = world
            .create_fantasy_team(7, "The Invincibles", "GW01", &XI, 1, 2)
            .unwrap();
        (world, team_id)
    }

    #[test]
    fn test_create_team_persists_lineup() {
        let (world, team_id) = world_with_team();

        assert_eq!(team_id, 1);
        assert_eq!(world.team(team_id).unwrap().manager_id, 7);

        let lineup = world.lineup(team_id, "GW01").unwrap();
        assert_eq!(lineup.slots.len(), 11);
        assert_eq!(lineup.captain_id(), Some(1));
        assert_eq!(lineup.vice_captain_id(), Some(2));
    }

    #[test]
    fn test_one_team_per_manager() {
        let (mut world, _) = world_with_team();

        let err = world
            .create_fantasy_team(7, "Second Attempt", "GW01", &XI, 1, 2)
            .unwrap_err();

        assert!(matches!(
            err,
            EngineError::DuplicateTeamForManager { manager_id: 7, .. }
        ));
    }

    #[test]
    fn test_unknown_players_listed_in_rejection() {
        let mut world = world();
        let mut ids = XI;
        ids[10] = 999;

        let err = world
            .create_fantasy_team(7, "Ghosts", "GW01", &ids, 1, 2)
            .unwrap_err();

        assert!(matches!(err, EngineError::UnknownPlayers(ref missing) if missing == &vec![999]));
    }

    #[test]
    fn test_invalid_selection_rejected_without_side_effects() {
        let mut world = world();
        // duplicate forward, only 10 distinct players
        let ids = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10];

        let err = world
            .create_fantasy_team(7, "Broken", "GW01", &ids, 1, 2)
            .unwrap_err();

        assert!(matches!(err, EngineError::SquadInvalid(_)));
        assert!(world.team(1).is_err());
    }

    #[test]
    fn test_accepted_transfer_commits_squad_and_ledger() {
        let (mut world, team_id) = world_with_team();

        let outcome = world.propose_transfer(team_id, "GW01", 11, 12).unwrap();

        assert_eq!(outcome.record.sequence_no, 1);
        assert_eq!(outcome.remaining_after, 2);

        let lineup = world.lineup(team_id, "GW01").unwrap();
        assert!(lineup.contains(12));
        assert!(!lineup.contains(11));

        assert_eq!(world.transfers_remaining(team_id, "GW01").unwrap(), 2);
        assert_eq!(world.transfer_history(team_id, "GW01").unwrap().len(), 1);
    }

    #[test]
    fn test_rejected_transfer_leaves_world_untouched() {
        let (mut world, team_id) = world_with_team();

        // forward out, midfielder in
        let err = world.propose_transfer(team_id, "GW01", 11, 14).unwrap_err();
        assert!(matches!(err, EngineError::PositionMismatch { .. }));

        assert!(world.lineup(team_id, "GW01").unwrap().contains(11));
        assert_eq!(world.transfers_remaining(team_id, "GW01").unwrap(), 3);
        assert!(world.transfer_history(team_id, "GW01").unwrap().is_empty());
    }

    #[test]
    fn test_captain_change_requires_lineup_members() {
        let (mut world, team_id) = world_with_team();

        let err = world.set_captains(team_id, "GW01", 3, 3).unwrap_err();
        assert!(matches!(err, EngineError::CaptainViceConflict));

        let err = world.set_captains(team_id, "GW01", 12, 2).unwrap_err();
        assert!(matches!(err, EngineError::PlayerNotInLineup { player_id: 12 }));

        world.set_captains(team_id, "GW01", 3, 4).unwrap();
        let lineup = world.lineup(team_id, "GW01").unwrap();
        assert_eq!(lineup.captain_id(), Some(3));
        assert_eq!(lineup.vice_captain_id(), Some(4));
    }

    #[test]
    fn test_score_unavailable_until_results_arrive() {
        let (world, team_id) = world_with_team();

        assert!(world.team_score(team_id, "GW01").unwrap().is_none());
    }

    #[test]
    fn test_results_produce_score_with_captain_doubled() {
        let (mut world, team_id) = world_with_team();

        world
            .ingest_results("GW01", &[(1, 6), (2, 3), (10, 8)])
            .unwrap();

        let score = world.team_score(team_id, "GW01").unwrap().unwrap();
        assert_eq!(score.raw_total, 17);
        assert_eq!(score.captain_bonus, 6);
        // every squad member plays for a different club
        assert_eq!(score.chemistry_bonus, 0);
        assert_eq!(score.total, 23);

        assert_eq!(world.player(1).unwrap().total_points, 6);
    }

    #[test]
    fn test_club_pair_in_lineup_earns_chemistry_bonus() {
        let mut world = world();
        // players 1 and 13 are both ARS, still within the club quota
        let xi = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 13];
        let team_id = world
            .create_fantasy_team(7, "Gunners", "GW01", &xi, 1, 2)
            .unwrap();

        world.ingest_results("GW01", &[(1, 6)]).unwrap();

        let score = world.team_score(team_id, "GW01").unwrap().unwrap();
        assert_eq!(score.chemistry_bonus, 15);
        assert_eq!(score.total, 6 + 6 + 15);
    }

    #[test]
    fn test_standings_rank_teams_by_total() {
        let (mut world, first) = world_with_team();
        let second = world
            .create_fantasy_team(8, "Wanderers", "GW01", &XI, 10, 2)
            .unwrap();

        world
            .ingest_results("GW01", &[(1, 6), (2, 3), (10, 8)])
            .unwrap();

        let table = world.standings("GW01").unwrap().unwrap();
        assert_eq!(table.len(), 2);

        // captain 10 scored 8, captain 1 scored 6
        assert_eq!(table[0].rank, 1);
        assert_eq!(table[0].team_id, second);
        assert_eq!(table[0].score.total, 25);

        assert_eq!(table[1].rank, 2);
        assert_eq!(table[1].team_id, first);
        assert_eq!(table[1].score.total, 23);
    }

    #[test]
    fn test_standings_unavailable_until_results_arrive() {
        let (world, _) = world_with_team();

        assert!(world.standings("GW01").unwrap().is_none());
        assert!(world.standings("GW99").is_err());
    }

    #[test]
    fn test_simulated_gameweek_is_immutable() {
        let (mut world, team_id) = world_with_team();
        world.ingest_results("GW01", &[(1, 6)]).unwrap();

        let err = world.ingest_results("GW01", &[(1, 9)]).unwrap_err();
        assert!(matches!(err, EngineError::GameweekAlreadySimulated { .. }));

        let err = world.propose_transfer(team_id, "GW01", 11, 12).unwrap_err();
        assert!(matches!(err, EngineError::WindowClosed { .. }));

        let err = world.set_captains(team_id, "GW01", 3, 4).unwrap_err();
        assert!(matches!(err, EngineError::GameweekAlreadySimulated { .. }));
    }

    #[test]
    fn test_lineup_carried_into_next_gameweek() {
        let (mut world, team_id) = world_with_team();
        world.ingest_results("GW01", &[(1, 6)]).unwrap();

        let carried = world.lineup(team_id, "GW02").unwrap();
        assert_eq!(carried.player_ids(), XI.to_vec());
        assert_eq!(carried.captain_id(), Some(1));
    }

    #[test]
    fn test_form_averages_recent_simulated_weeks() {
        let mut world = world();
        world.ingest_results("GW01", &[(10, 8)]).unwrap();
        world.ingest_results("GW02", &[(10, 2)]).unwrap();

        assert_eq!(world.player_form(10, 3), 5.0);
        assert_eq!(world.player_form(10, 2), 8.0);
        // no simulated weeks behind GW01
        assert_eq!(world.player_form(10, 1), 0.0);
    }

    #[test]
    fn test_upcoming_fixtures_rated_from_viewing_side() {
        let world = world();

        let outlook = world.upcoming_fixtures("FUL", 1);

        assert_eq!(outlook.len(), 3);
        // home against a 5-rated side
        assert_eq!(outlook[0].opponent, "ARS");
        assert!(outlook[0].home);
        assert_eq!(outlook[0].rating, 4);
        // away at a 5-rated side
        assert_eq!(outlook[1].rating, 5);
        // home against a 3-rated side
        assert_eq!(outlook[2].rating, 2);
    }

    #[test]
    fn test_played_fixtures_drop_out_of_outlook() {
        let mut world = world();
        world.ingest_results("GW01", &[(10, 8)]).unwrap();

        let outlook = world.upcoming_fixtures("FUL", 2);
        assert_eq!(outlook.len(), 2);
        assert_eq!(outlook[0].gw_code, "GW02");
    }

    #[test]
    fn test_buy_recommendations_skip_squad_and_full_clubs() {
        let (world, team_id) = world_with_team();

        let ranked = world
            .buy_recommendations(team_id, "GW01", Some(Position::Forward), 10)
            .unwrap();

        let ids: Vec<u32> = ranked.iter().map(|r| r.player_id).collect();
        assert!(ids.contains(&12));
        assert!(ids.contains(&13));
        assert!(!ids.contains(&10));
        assert!(!ids.contains(&11));
    }

    #[test]
    fn test_buy_recommendations_skip_unaffordable_players() {
        let (world, team_id) = world_with_team();

        // squad cost 54.0 leaves 46.0 unspent; even with the resale
        // headroom a 55.0 player is out of reach
        let ranked = world
            .buy_recommendations(team_id, "GW01", Some(Position::Forward), 10)
            .unwrap();

        let ids: Vec<u32> = ranked.iter().map(|r| r.player_id).collect();
        assert!(!ids.contains(&15));
        assert!(ids.contains(&12));
    }

    #[test]
    fn test_sell_suggestions_flag_weak_form_after_results() {
        let (mut world, team_id) = world_with_team();
        world
            .ingest_results("GW01", &[(10, 12), (11, 0)])
            .unwrap();

        let ranked = world.sell_suggestions(team_id, "GW02", 10).unwrap();

        let flagged: Vec<u32> = ranked.iter().map(|r| r.player_id).collect();
        assert!(flagged.contains(&11));
        assert!(ranked
            .iter()
            .find(|r| r.player_id == 11)
            .unwrap()
            .reasons
            .contains(&"poor recent form".to_string()));
    }

    #[test]
    fn test_search_players_filters_and_orders() {
        let world = world();

        let forwards = world.search_players(None, Some(Position::Forward), None, 50);
        let ids: Vec<u32> = forwards.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![10, 11, 12, 13, 15]);

        let bou = world.search_players(Some("bou"), None, None, 50);
        assert_eq!(bou.len(), 2);

        let named = world.search_players(None, None, Some("last12"), 50);
        assert_eq!(named.len(), 1);
        assert_eq!(named[0].id, 12);

        assert_eq!(world.search_players(None, None, None, 3).len(), 3);
    }

    #[test]
    fn test_unknown_gameweek_is_not_found() {
        let (world, team_id) = world_with_team();

        let err = world.lineup(team_id, "GW99").unwrap_err();
        assert!(matches!(err, EngineError::NotFound { entity: "gameweek", .. }));
    }
}
