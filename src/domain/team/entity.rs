//! Team entity and related types

use serde::{Deserialize, Serialize};

/// Player identifier - opaque handle, `0` is reserved as "no player"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(u64);

impl PlayerId {
    /// The reserved "no player" value
    pub const INVALID: Self = Self(0);

    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl From<u64> for PlayerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team identifier - allocated by the registry, monotonically from 1
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(u64);

impl TeamId {
    /// The reserved "no team" value
    pub const INVALID: Self = Self(0);

    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }

    /// The id following this one
    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u64> for TeamId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team entity
///
/// Members keep join order; the head of `members` is the oldest remaining
/// joiner and inherits leadership when the leader leaves. Applicants are a
/// FIFO with the oldest request at index 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    leader_id: PlayerId,
    members: Vec<PlayerId>,
    applicants: Vec<PlayerId>,
    capacity: usize,
}

impl Team {
    /// Create a new team; `members` must already contain `leader_id`
    pub(crate) fn new(id: TeamId, leader_id: PlayerId, members: Vec<PlayerId>, capacity: usize) -> Self {
        Self {
            id,
            leader_id,
            members,
            applicants: Vec::new(),
            capacity,
        }
    }

    // Getters

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn leader_id(&self) -> PlayerId {
        self.leader_id
    }

    pub fn members(&self) -> &[PlayerId] {
        &self.members
    }

    pub fn applicants(&self) -> &[PlayerId] {
        &self.applicants
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_leader(&self, player_id: PlayerId) -> bool {
        self.leader_id == player_id
    }

    pub fn has_member(&self, player_id: PlayerId) -> bool {
        self.members.contains(&player_id)
    }

    pub fn is_applicant(&self, player_id: PlayerId) -> bool {
        self.applicants.contains(&player_id)
    }

    /// Oldest queued applicant
    pub fn first_applicant(&self) -> Option<PlayerId> {
        self.applicants.first().copied()
    }

    /// Remaining member slots
    pub fn headroom(&self) -> usize {
        self.capacity.saturating_sub(self.members.len())
    }

    // Mutators

    /// Append a member, consuming any pending application from the same player
    pub(crate) fn push_member(&mut self, player_id: PlayerId) {
        self.remove_applicant(player_id);
        self.members.push(player_id);
    }

    /// Remove a member; hands leadership to the head of the remaining
    /// members when the leader is the one removed
    pub(crate) fn remove_member(&mut self, player_id: PlayerId) -> bool {
        let Some(idx) = self.members.iter().position(|m| *m == player_id) else {
            return false;
        };

        self.members.remove(idx);

        if self.leader_id == player_id {
            if let Some(&head) = self.members.first() {
                self.leader_id = head;
            }
        }

        true
    }

    /// Transfer leadership; `new_leader` must be a member
    pub(crate) fn set_leader(&mut self, new_leader: PlayerId) {
        debug_assert!(self.has_member(new_leader));
        self.leader_id = new_leader;
    }

    /// Queue an application; when the queue already holds `max_applicants`
    /// entries the oldest is evicted and returned
    pub(crate) fn push_applicant(&mut self, player_id: PlayerId, max_applicants: usize) -> Option<PlayerId> {
        let evicted = if self.applicants.len() >= max_applicants && !self.applicants.is_empty() {
            Some(self.applicants.remove(0))
        } else {
            None
        };

        self.applicants.push(player_id);
        evicted
    }

    pub(crate) fn remove_applicant(&mut self, player_id: PlayerId) -> bool {
        match self.applicants.iter().position(|a| *a == player_id) {
            Some(idx) => {
                self.applicants.remove(idx);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear_applicants(&mut self) -> usize {
        let cleared = self.applicants.len();
        self.applicants.clear();
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u64]) -> Vec<PlayerId> {
        raw.iter().copied().map(PlayerId::new).collect()
    }

    fn team(members: &[u64], capacity: usize) -> Team {
        Team::new(TeamId::new(1), PlayerId::new(members[0]), ids(members), capacity)
    }

    #[test]
    fn test_player_id_validity() {
        assert!(!PlayerId::INVALID.is_valid());
        assert!(PlayerId::new(7).is_valid());
        assert_eq!(PlayerId::from(7).get(), 7);
    }

    #[test]
    fn test_team_id_next() {
        assert_eq!(TeamId::INVALID.next(), TeamId::new(1));
        assert_eq!(TeamId::new(41).next().get(), 42);
    }

    #[test]
    fn test_team_is_full() {
        let mut team = team(&[1, 2], 3);
        assert!(!team.is_full());
        assert_eq!(team.headroom(), 1);

        team.push_member(PlayerId::new(3));
        assert!(team.is_full());
        assert_eq!(team.headroom(), 0);
    }

    #[test]
    fn test_remove_leader_promotes_head() {
        let mut team = team(&[1, 2, 3], 5);

        assert!(team.remove_member(PlayerId::new(1)));
        assert_eq!(team.leader_id(), PlayerId::new(2));
        assert_eq!(team.members(), ids(&[2, 3]).as_slice());
    }

    #[test]
    fn test_remove_non_leader_keeps_leader() {
        let mut team = team(&[1, 2, 3], 5);

        assert!(team.remove_member(PlayerId::new(2)));
        assert_eq!(team.leader_id(), PlayerId::new(1));
        assert!(!team.remove_member(PlayerId::new(2)));
    }

    #[test]
    fn test_push_member_consumes_application() {
        let mut team = team(&[1], 5);
        team.push_applicant(PlayerId::new(9), 20);
        assert!(team.is_applicant(PlayerId::new(9)));

        team.push_member(PlayerId::new(9));
        assert!(team.has_member(PlayerId::new(9)));
        assert!(!team.is_applicant(PlayerId::new(9)));
    }

    #[test]
    fn test_applicant_queue_evicts_oldest() {
        let mut team = team(&[1], 5);

        for raw in 10..13 {
            assert_eq!(team.push_applicant(PlayerId::new(raw), 3), None);
        }

        assert_eq!(team.push_applicant(PlayerId::new(13), 3), Some(PlayerId::new(10)));
        assert_eq!(team.applicants(), ids(&[11, 12, 13]).as_slice());
        assert_eq!(team.first_applicant(), Some(PlayerId::new(11)));
    }

    #[test]
    fn test_clear_applicants() {
        let mut team = team(&[1], 5);
        team.push_applicant(PlayerId::new(2), 20);
        team.push_applicant(PlayerId::new(3), 20);

        assert_eq!(team.clear_applicants(), 2);
        assert!(team.applicants().is_empty());
        assert_eq!(team.first_applicant(), None);
    }
}
