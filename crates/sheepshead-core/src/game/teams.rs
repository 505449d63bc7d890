use crate::model::player::PlayerId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub label: String,
    pub members: Vec<PlayerId>,
}

impl Team {
    pub fn new(label: impl Into<String>, members: Vec<PlayerId>) -> Self {
        Self {
            label: label.into(),
            members,
        }
    }

    pub fn contains(&self, player: PlayerId) -> bool {
        self.members.contains(&player)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Teams as settled once the blind is picked and any partner is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teams {
    teams: Vec<Team>,
    picker: Option<PlayerId>,
    partner: Option<PlayerId>,
}

impl Teams {
    pub fn new(teams: Vec<Team>, picker: Option<PlayerId>, partner: Option<PlayerId>) -> Self {
        Self {
            teams,
            picker,
            partner,
        }
    }

    /// Picker (plus partner, when there is one) against everyone else.
    pub fn picker_against_field(
        players: &[PlayerId],
        picker: PlayerId,
        partner: Option<PlayerId>,
    ) -> Self {
        let (picking, opposing): (Vec<PlayerId>, Vec<PlayerId>) = players
            .iter()
            .copied()
            .partition(|&p| p == picker || Some(p) == partner);
        Self::new(
            vec![Team::new("picker", picking), Team::new("opposition", opposing)],
            Some(picker),
            partner,
        )
    }

    pub fn team_list(&self) -> &[Team] {
        &self.teams
    }

    pub fn picker(&self) -> Option<PlayerId> {
        self.picker
    }

    pub fn partner(&self) -> Option<PlayerId> {
        self.partner
    }
}
