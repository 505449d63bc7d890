use crate::model::card::Card;
use crate::model::player::PlayerId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One trick as recorded by the play loop. Who takes it is decided by the
/// caller and recorded with [`Trick::take`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    seats: usize,
    plays: Vec<Play>,
    taker: Option<PlayerId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub player: PlayerId,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrickError {
    #[error("trick already complete")]
    TrickComplete,
    #[error("{0} has already played this trick")]
    AlreadyPlayed(PlayerId),
    #[error("trick was already taken by {0}")]
    AlreadyTaken(PlayerId),
    #[error("{0} did not play to this trick")]
    NotInTrick(PlayerId),
}

impl Trick {
    pub fn new(seats: usize) -> Self {
        Self {
            seats,
            plays: Vec::with_capacity(seats),
            taker: None,
        }
    }

    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == self.seats
    }

    pub fn play(&mut self, player: PlayerId, card: Card) -> Result<(), TrickError> {
        if self.is_complete() {
            return Err(TrickError::TrickComplete);
        }

        if self.plays.iter().any(|play| play.player == player) {
            return Err(TrickError::AlreadyPlayed(player));
        }

        self.plays.push(Play { player, card });
        Ok(())
    }

    pub fn take(&mut self, taker: PlayerId) -> Result<(), TrickError> {
        if let Some(existing) = self.taker {
            return Err(TrickError::AlreadyTaken(existing));
        }
        if !self.plays.iter().any(|play| play.player == taker) {
            return Err(TrickError::NotInTrick(taker));
        }
        self.taker = Some(taker);
        Ok(())
    }

    pub fn was_taken(&self) -> bool {
        self.taker.is_some()
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.taker
    }

    pub fn points(&self) -> u32 {
        self.plays.iter().map(|play| play.card.points() as u32).sum()
    }
}
