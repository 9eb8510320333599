//! Role assignment as revealed to the local player

use serde::{Deserialize, Serialize};

use crate::Team;

/// The local player's role.
///
/// `information` is preformatted by the server: the client never works out
/// who-sees-whom on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleInfo {
    pub role_name: String,
    pub team: Team,
    pub information: String,
}

impl RoleInfo {
    pub fn new(role_name: impl Into<String>, team: Team, information: impl Into<String>) -> Self {
        Self {
            role_name: role_name.into(),
            team,
            information: information.into(),
        }
    }
}
