//! Player index - reverse mapping from player to current team

use std::collections::HashMap;

use super::entity::{PlayerId, TeamId};

/// Each player maps to at most one team. The index is kept as the exact
/// inverse of the union of all teams' member lists.
#[derive(Debug, Default, Clone)]
pub struct PlayerIndex {
    entries: HashMap<PlayerId, TeamId>,
}

impl PlayerIndex {
    #[cfg(test)]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub fn team_of(&self, player_id: PlayerId) -> Option<TeamId> {
        self.entries.get(&player_id).copied()
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.entries.contains_key(&player_id)
    }

    /// First player in `players` that already has a team
    pub fn first_assigned<'a, I>(&self, players: I) -> Option<PlayerId>
    where
        I: IntoIterator<Item = &'a PlayerId>,
    {
        players.into_iter().copied().find(|p| self.contains(*p))
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn assign(&mut self, player_id: PlayerId, team_id: TeamId) {
        self.entries.insert(player_id, team_id);
    }

    pub(crate) fn release(&mut self, player_id: PlayerId) -> Option<TeamId> {
        self.entries.remove(&player_id)
    }

    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (PlayerId, TeamId)> + '_ {
        self.entries.iter().map(|(p, t)| (*p, *t))
    }
}
