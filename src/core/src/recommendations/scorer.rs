use crate::player::Position;
use crate::recommendations::{FixtureDifficulty, FixtureOutlook};
use crate::squad::MAX_PER_CLUB;
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// How many upcoming fixtures ride along with each recommendation.
const FIXTURES_SHOWN: usize = 3;

/// Everything the scorer needs to know about one player: static facts
/// plus the recent-form average and the upcoming fixture outlook the
/// caller assembled from its schedule.
#[derive(Debug, Clone)]
pub struct PlayerOutlook {
    pub player_id: u32,
    pub name: String,
    pub club_code: String,
    pub position: Position,
    pub cost: f32,
    pub total_points: i32,
    /// Rolling average points over the recent gameweeks.
    pub form: f32,
    pub fixtures: Vec<FixtureOutlook>,
}

impl PlayerOutlook {
    pub fn avg_fdr(&self) -> f32 {
        FixtureDifficulty::average(&self.fixtures)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BuyRecommendation {
    pub player_id: u32,
    pub name: String,
    pub club_code: String,
    pub position: Position,
    pub cost: f32,
    pub total_points: i32,
    pub form: f32,
    pub avg_fdr: f32,
    pub upcoming_fixtures: Vec<FixtureOutlook>,
    pub score: f32,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SellRecommendation {
    pub player_id: u32,
    pub name: String,
    pub club_code: String,
    pub position: Position,
    pub cost: f32,
    pub form: f32,
    pub avg_fdr: f32,
    pub upcoming_fixtures: Vec<FixtureOutlook>,
    pub sell_score: i32,
    pub reasons: Vec<String>,
}

pub struct RecommendationScorer;

impl RecommendationScorer {
    /// Composite buy score. Weights: form 40, fixture ease 30, value
    /// (season points per unit cost) 20, season total 10. Each term is
    /// non-decreasing when its input improves in the buy direction
    /// (higher form, lower FDR, more points, lower cost), so improving
    /// one signal never drops the score.
    pub fn buy_score(form: f32, avg_fdr: f32, cost: f32, total_points: i32) -> f32 {
        let form_score = (form / 10.0).min(1.5) * 40.0;
        let fdr_score = ((6.0 - avg_fdr) / 5.0) * 30.0;

        let value = total_points as f32 / cost.max(4.0);
        let value_score = (value / 15.0).min(1.5) * 20.0;

        let points_score = (total_points as f32 / 150.0).min(1.0) * 10.0;

        form_score + fdr_score + value_score + points_score
    }

    /// Ranks out-of-squad players as buy candidates. Players already in
    /// the lineup, players whose club is already at the 2-per-club
    /// quota, and players priced above `cost_cap` are skipped; the
    /// caller derives the cap from the budget the squad could actually
    /// free up. Equal scores order by ascending player id so the
    /// ranking is deterministic.
    pub fn rank_buy_candidates(
        pool: &[PlayerOutlook],
        squad_ids: &HashSet<u32>,
        squad_club_counts: &HashMap<String, usize>,
        position_filter: Option<Position>,
        cost_cap: f32,
        limit: usize,
    ) -> Vec<BuyRecommendation> {
        let mut ranked: Vec<BuyRecommendation> = pool
            .par_iter()
            .filter(|candidate| !squad_ids.contains(&candidate.player_id))
            .filter(|candidate| candidate.cost <= cost_cap)
            .filter(|candidate| {
                squad_club_counts
                    .get(&candidate.club_code)
                    .is_none_or(|&count| count < MAX_PER_CLUB)
            })
            .filter(|candidate| {
                position_filter.is_none_or(|position| candidate.position == position)
            })
            .map(|candidate| {
                let avg_fdr = candidate.avg_fdr();
                let score = Self::buy_score(
                    candidate.form,
                    avg_fdr,
                    candidate.cost,
                    candidate.total_points,
                );

                BuyRecommendation {
                    player_id: candidate.player_id,
                    name: candidate.name.clone(),
                    club_code: candidate.club_code.clone(),
                    position: candidate.position,
                    cost: candidate.cost,
                    total_points: candidate.total_points,
                    form: candidate.form,
                    avg_fdr,
                    upcoming_fixtures: candidate
                        .fixtures
                        .iter()
                        .take(FIXTURES_SHOWN)
                        .cloned()
                        .collect(),
                    score,
                    reason: Self::buy_reason(
                        candidate.form,
                        avg_fdr,
                        candidate.cost,
                        candidate.total_points,
                    ),
                }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then(a.player_id.cmp(&b.player_id))
        });
        ranked.truncate(limit);
        ranked
    }

    /// Ranks in-squad players as sell candidates. Only players with at
    /// least one flagged reason appear; the reasons list is never empty
    /// for a listed player.
    pub fn rank_sell_candidates(squad: &[PlayerOutlook], limit: usize) -> Vec<SellRecommendation> {
        let mut ranked: Vec<SellRecommendation> = squad
            .iter()
            .filter_map(|member| {
                let avg_fdr = member.avg_fdr();
                let (sell_score, reasons) =
                    Self::sell_score(member.form, avg_fdr, member.cost);

                if sell_score == 0 {
                    return None;
                }

                Some(SellRecommendation {
                    player_id: member.player_id,
                    name: member.name.clone(),
                    club_code: member.club_code.clone(),
                    position: member.position,
                    cost: member.cost,
                    form: member.form,
                    avg_fdr,
                    upcoming_fixtures: member
                        .fixtures
                        .iter()
                        .take(FIXTURES_SHOWN)
                        .cloned()
                        .collect(),
                    sell_score,
                    reasons,
                })
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.sell_score
                .cmp(&a.sell_score)
                .then(a.player_id.cmp(&b.player_id))
        });
        ranked.truncate(limit);
        ranked
    }

    /// Sell pressure is additive: weak form, hard run of fixtures, and
    /// a premium price tag without the form to match.
    fn sell_score(form: f32, avg_fdr: f32, cost: f32) -> (i32, Vec<String>) {
        let mut score = 0;
        let mut reasons = Vec::new();

        if form < 2.0 {
            score += 40;
            reasons.push("poor recent form".to_string());
        } else if form < 3.0 {
            score += 20;
            reasons.push("below average form".to_string());
        }

        if avg_fdr >= 4.0 {
            score += 30;
            reasons.push("difficult fixtures ahead".to_string());
        } else if avg_fdr >= 3.5 {
            score += 15;
            reasons.push("tricky fixtures ahead".to_string());
        }

        if cost >= 8.0 && form < 4.0 {
            score += 20;
            reasons.push("expensive underperformer".to_string());
        }

        (score, reasons)
    }

    fn buy_reason(form: f32, avg_fdr: f32, cost: f32, total_points: i32) -> String {
        let mut reasons = Vec::new();

        if form >= 6.0 {
            reasons.push("excellent recent form");
        } else if form >= 4.0 {
            reasons.push("good form");
        }

        if avg_fdr <= 2.0 {
            reasons.push("easy upcoming fixtures");
        } else if avg_fdr <= 2.5 {
            reasons.push("favorable fixtures");
        }

        let value = total_points as f32 / cost.max(4.0);
        if value >= 15.0 {
            reasons.push("great value");
        } else if value >= 10.0 {
            reasons.push("good value");
        }

        if total_points >= 100 {
            reasons.push("top performer");
        }

        if reasons.is_empty() {
            reasons.push("solid option");
        }

        reasons.join(" | ")
    }
}
