//! Display names for teams.

use crate::models::{BracketError, Team};
use crate::store::UserDirectory;

/// Resolve one display name per team, keeping the team order.
///
/// Explicit name first, then `team_<captain user name>`, then `Team_<id>` when
/// the captain record is missing.
pub fn resolve_team_names<U: UserDirectory + ?Sized>(
    teams: &[Team],
    users: &U,
) -> Result<Vec<String>, BracketError> {
    teams.iter().map(|team| resolve_team_name(team, users)).collect()
}

pub fn resolve_team_name<U: UserDirectory + ?Sized>(
    team: &Team,
    users: &U,
) -> Result<String, BracketError> {
    if let Some(name) = team.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        return Ok(name.to_owned());
    }
    let captain = users
        .find_user(team.captain_id)?
        .filter(|u| !u.user_name.trim().is_empty());
    Ok(match captain {
        Some(user) => format!("team_{}", user.user_name.trim()),
        None => {
            log::warn!(
                "Captain {} of team {} not found; using placeholder name",
                team.captain_id,
                team.id
            );
            format!("Team_{}", team.id)
        }
    })
}
