//! E-sports bracket web app: library with models, bracket logic and collaborator stores.

pub mod config;
pub mod logic;
pub mod models;
pub mod service;
pub mod store;

pub use config::ServerConfig;
pub use logic::{
    build_bracket, resolve_team_names, round_count, simulate_results, simulate_single_match,
};
pub use models::{
    Bracket, BracketError, MatchInfo, MatchResult, Score, SeededBracket, Side, Slot, Team, TeamId,
    Tournament, TournamentId, User, UserId,
};
pub use service::BracketService;
pub use store::{
    load_fixture_file, load_fixtures, BracketStore, InMemoryStore, TournamentDirectory,
    UserDirectory,
};
