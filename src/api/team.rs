//! Team Roster Endpoints

use crate::models::TeamMember;

pub async fn list_team_members() -> Result<Vec<TeamMember>, String> {
    super::get_list("team_members?order=name.asc").await
}
