use crate::player::Position;
use crate::squad::SquadRuleViolation;
use thiserror::Error;

/// Coarse error classes the API layer maps onto HTTP statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    StateConflict,
    NotFound,
    CapacityExceeded,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid squad: {}", format_violations(.0))]
    SquadInvalid(Vec<SquadRuleViolation>),

    #[error("transfer window for gameweek {gw_code} is closed")]
    WindowClosed { gw_code: String },

    #[error("maximum {cap} transfers allowed per gameweek")]
    TransferLimitReached { cap: usize },

    #[error("player {player_id} is not in the lineup")]
    PlayerNotInLineup { player_id: u32 },

    #[error("player {player_id} is already in the lineup")]
    PlayerAlreadyInLineup { player_id: u32 },

    #[error("position mismatch: {outgoing} -> {incoming}, transfers must swap like for like")]
    PositionMismatch {
        outgoing: Position,
        incoming: Position,
    },

    #[error("transfer would exceed budget: {new_cost:.1}M used (max {cap:.1}M)")]
    BudgetExceeded { new_cost: f32, cap: f32 },

    #[error("cannot have more than {quota} players from {club_code}")]
    ClubQuotaExceeded { club_code: String, quota: usize },

    #[error("manager {manager_id} already owns fantasy team '{team_name}'")]
    DuplicateTeamForManager { manager_id: u32, team_name: String },

    #[error("gameweek {gw_code} has already been simulated")]
    GameweekAlreadySimulated { gw_code: String },

    #[error("captain and vice-captain must be different players")]
    CaptainViceConflict,

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("unknown player ids: {0:?}")]
    UnknownPlayers(Vec<u32>),
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::SquadInvalid(_)
            | EngineError::PositionMismatch { .. }
            | EngineError::CaptainViceConflict => ErrorKind::Validation,

            EngineError::WindowClosed { .. }
            | EngineError::TransferLimitReached { .. }
            | EngineError::PlayerNotInLineup { .. }
            | EngineError::PlayerAlreadyInLineup { .. }
            | EngineError::DuplicateTeamForManager { .. }
            | EngineError::GameweekAlreadySimulated { .. } => ErrorKind::StateConflict,

            EngineError::NotFound { .. } | EngineError::UnknownPlayers(_) => ErrorKind::NotFound,

            EngineError::BudgetExceeded { .. } | EngineError::ClubQuotaExceeded { .. } => {
                ErrorKind::CapacityExceeded
            }
        }
    }

    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        EngineError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

fn format_violations(violations: &[SquadRuleViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
