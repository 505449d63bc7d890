use crate::game::events::{AuctionEvent, AuctionObserver};
use crate::model::card::Card;
use crate::model::player::{Player, PlayerId};
use core::fmt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where a seat stands in the auction for the blind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Waiting,
    Passed,
    Picked,
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub player: PlayerId,
    pub decision: Decision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuctionAction {
    Peek,
    Pass,
    Pick,
}

impl fmt::Display for AuctionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AuctionAction::Peek => "peek",
            AuctionAction::Pass => "pass",
            AuctionAction::Pick => "pick",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuctionError {
    #[error("blind has already been set")]
    AlreadySet,
    #[error("blind holds {expected} cards but {actual} were offered")]
    WrongBlindSize { expected: usize, actual: usize },
    #[error("cannot {action} as the blind has already been picked")]
    AlreadyPicked { action: AuctionAction },
    #[error("cannot {action} as the blind has not been set")]
    BlindNotSet { action: AuctionAction },
    #[error("cannot {action} as every player has already passed")]
    RoundComplete { action: AuctionAction },
    #[error("{player} cannot {action} as {holder} currently has the option")]
    NotYourTurn {
        action: AuctionAction,
        player: PlayerId,
        holder: PlayerId,
    },
}

/// Pick-or-pass auction for the blind.
///
/// Seats are offered the blind in turn order. The seat holding the option is
/// always the first one still [`Decision::Waiting`]; passing simply moves
/// that seat out of the way. A pick ends the auction for everyone.
pub struct BlindAuction {
    seats: Vec<Seat>,
    hidden: Vec<Card>,
    blind_size: Option<usize>,
    observer: Option<Box<dyn AuctionObserver>>,
}

impl BlindAuction {
    pub fn new(turn_order: &[PlayerId]) -> Self {
        Self::from_parts(
            turn_order
                .iter()
                .map(|&player| Seat {
                    player,
                    decision: Decision::Waiting,
                })
                .collect(),
            Vec::new(),
            None,
            None,
        )
    }

    pub fn with_observer(turn_order: &[PlayerId], observer: Box<dyn AuctionObserver>) -> Self {
        let mut auction = Self::new(turn_order);
        auction.observer = Some(observer);
        auction
    }

    /// Only blinds of exactly `size` cards will be accepted.
    pub fn with_blind_size(mut self, size: usize) -> Self {
        self.blind_size = Some(size);
        self
    }

    pub(crate) fn from_parts(
        seats: Vec<Seat>,
        hidden: Vec<Card>,
        blind_size: Option<usize>,
        observer: Option<Box<dyn AuctionObserver>>,
    ) -> Self {
        Self {
            seats,
            hidden,
            blind_size,
            observer,
        }
    }

    pub fn blind_size(&self) -> Option<usize> {
        self.blind_size
    }

    pub fn turn_order(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.seats.iter().map(|seat| seat.player)
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn decision(&self, player: PlayerId) -> Option<Decision> {
        self.seats
            .iter()
            .find(|seat| seat.player == player)
            .map(|seat| seat.decision)
    }

    pub fn is_round_complete(&self) -> bool {
        !self
            .seats
            .iter()
            .any(|seat| seat.decision == Decision::Waiting)
    }

    pub fn is_available(&self) -> bool {
        !self.hidden.is_empty() && self.picker().is_none()
    }

    pub fn current_option_holder(&self) -> Option<PlayerId> {
        if !self.is_available() {
            return None;
        }
        self.seats
            .iter()
            .find(|seat| seat.decision == Decision::Waiting)
            .map(|seat| seat.player)
    }

    pub fn player_has_option(&self, player: PlayerId) -> bool {
        self.current_option_holder() == Some(player)
    }

    /// True for the final seat in turn order, whatever the auction state.
    pub fn has_last_option(&self, player: PlayerId) -> bool {
        self.seats.last().map(|seat| seat.player) == Some(player)
    }

    pub fn set_hidden_cards(&mut self, cards: Vec<Card>) -> Result<(), AuctionError> {
        if !self.hidden.is_empty() {
            return Err(AuctionError::AlreadySet);
        }
        if let Some(expected) = self.blind_size {
            if cards.len() != expected {
                return Err(AuctionError::WrongBlindSize {
                    expected,
                    actual: cards.len(),
                });
            }
        }
        self.hidden = cards;
        self.notify(AuctionEvent::BlindSet {
            cards: self.hidden.clone(),
        });
        Ok(())
    }

    pub fn peek_all(&self) -> Vec<Card> {
        self.hidden.clone()
    }

    pub fn peek(&self, player: PlayerId) -> Result<Vec<Card>, AuctionError> {
        self.ensure_option(player, AuctionAction::Peek)?;
        Ok(self.hidden.clone())
    }

    pub fn pass(&mut self, player: PlayerId) -> Result<(), AuctionError> {
        self.ensure_option(player, AuctionAction::Pass)?;
        self.set_decision(player, Decision::Passed);
        self.notify(AuctionEvent::Passed { player });
        Ok(())
    }

    pub fn pick(&mut self, player: &mut Player) -> Result<(), AuctionError> {
        let id = player.id();
        self.ensure_option(id, AuctionAction::Pick)?;
        self.set_decision(id, Decision::Picked);

        let mut skipped = Vec::new();
        for seat in self
            .seats
            .iter_mut()
            .filter(|seat| seat.decision == Decision::Waiting)
        {
            seat.decision = Decision::Skipped;
            skipped.push(seat.player);
        }

        player.receive_cards(&self.hidden);
        self.notify(AuctionEvent::Picked {
            player: id,
            cards: self.hidden.clone(),
            skipped,
        });
        Ok(())
    }

    pub fn picker(&self) -> Option<PlayerId> {
        self.seats
            .iter()
            .find(|seat| seat.decision == Decision::Picked)
            .map(|seat| seat.player)
    }

    fn ensure_option(&self, player: PlayerId, action: AuctionAction) -> Result<(), AuctionError> {
        let Some(holder) = self.current_option_holder() else {
            return Err(self.closed_reason(action));
        };
        if holder != player {
            return Err(AuctionError::NotYourTurn {
                action,
                player,
                holder,
            });
        }
        Ok(())
    }

    fn closed_reason(&self, action: AuctionAction) -> AuctionError {
        if self.picker().is_some() {
            AuctionError::AlreadyPicked { action }
        } else if self.hidden.is_empty() {
            AuctionError::BlindNotSet { action }
        } else {
            AuctionError::RoundComplete { action }
        }
    }

    fn set_decision(&mut self, player: PlayerId, decision: Decision) {
        if let Some(seat) = self.seats.iter_mut().find(|seat| seat.player == player) {
            seat.decision = decision;
        }
    }

    fn notify(&mut self, event: AuctionEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_event(&event);
        }
    }
}

impl fmt::Debug for BlindAuction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlindAuction")
            .field("seats", &self.seats)
            .field("hidden", &self.hidden)
            .field("blind_size", &self.blind_size)
            .field("observed", &self.observer.is_some())
            .finish()
    }
}
