pub mod error;
pub mod gameweek;
pub mod player;
pub mod recommendations;
pub mod scoring;
pub mod squad;
pub mod transfers;

pub mod shared;
pub mod utils;

pub use error::{EngineError, ErrorKind};
pub use gameweek::Gameweek;
pub use player::{Player, Position, PositionParseError};
pub use squad::{
    RosterValidator, Squad, SquadRuleViolation, SquadSlot, BUDGET_CAP, MAX_PER_CLUB, SQUAD_SIZE,
};
pub use transfers::{TransferLedger, TransferOutcome, TransferRecord, WEEKLY_TRANSFER_CAP};

pub use scoring::{
    ChemistryRule, ClubCohesionRule, ScoringEngine, TeamScore, CHEMISTRY_BONUS_POINTS,
};

pub use recommendations::{
    BuyRecommendation, FixtureDifficulty, FixtureOutlook, PlayerOutlook, RecommendationScorer,
    SellRecommendation, DEFAULT_FDR, FDR_LOOKAHEAD,
};
