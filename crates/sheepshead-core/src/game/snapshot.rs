use crate::game::blind::{BlindAuction, Decision, Seat};
use crate::model::card::Card;
use crate::model::player::PlayerId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("{0} appears more than once in the turn order")]
    DuplicateSeat(PlayerId),
    #[error("snapshot records {0} pickers")]
    MultiplePickers(usize),
    #[error("{0} is still waiting although the blind was picked")]
    WaitingAfterPick(PlayerId),
}

/// Serializable view of an auction in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionSnapshot {
    pub seats: Vec<Seat>,
    pub hidden_cards: Vec<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blind_size: Option<usize>,
}

impl AuctionSnapshot {
    pub fn capture(auction: &BlindAuction) -> Self {
        AuctionSnapshot {
            seats: auction.seats().to_vec(),
            hidden_cards: auction.peek_all(),
            blind_size: auction.blind_size(),
        }
    }

    /// Rebuilds the auction without an observer.
    pub fn restore(self) -> Result<BlindAuction, SnapshotError> {
        let mut seen = HashSet::new();
        for seat in &self.seats {
            if !seen.insert(seat.player) {
                return Err(SnapshotError::DuplicateSeat(seat.player));
            }
        }

        let pickers = self
            .seats
            .iter()
            .filter(|seat| seat.decision == Decision::Picked)
            .count();
        if pickers > 1 {
            return Err(SnapshotError::MultiplePickers(pickers));
        }
        if pickers == 1 {
            if let Some(seat) = self
                .seats
                .iter()
                .find(|seat| seat.decision == Decision::Waiting)
            {
                return Err(SnapshotError::WaitingAfterPick(seat.player));
            }
        }

        Ok(BlindAuction::from_parts(
            self.seats,
            self.hidden_cards,
            self.blind_size,
            None,
        ))
    }

    pub fn to_json(auction: &BlindAuction) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Self::capture(auction))
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::{AuctionSnapshot, SnapshotError};
    use crate::game::blind::{AuctionError, BlindAuction, Decision, Seat};
    use crate::model::card::Card;
    use crate::model::player::PlayerId;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;

    fn auction() -> BlindAuction {
        let mut auction = BlindAuction::new(&[PlayerId(0), PlayerId(1), PlayerId(2)]);
        auction
            .set_hidden_cards(vec![
                Card::new(Rank::Jack, Suit::Clubs),
                Card::new(Rank::Nine, Suit::Hearts),
            ])
            .unwrap();
        auction.pass(PlayerId(0)).unwrap();
        auction
    }

    #[test]
    fn snapshot_serializes_decisions_in_snake_case() {
        let json = AuctionSnapshot::to_json(&auction()).unwrap();
        assert!(json.contains("\"passed\""));
        assert!(json.contains("\"waiting\""));
        assert!(json.contains("\"hidden_cards\""));
    }

    #[test]
    fn restored_auction_resumes_with_next_holder() {
        let json = AuctionSnapshot::to_json(&auction()).unwrap();
        let mut restored = AuctionSnapshot::from_json(&json).unwrap().restore().unwrap();

        assert_eq!(restored.current_option_holder(), Some(PlayerId(1)));
        assert_eq!(restored.decision(PlayerId(0)), Some(Decision::Passed));
        restored.pass(PlayerId(1)).unwrap();
        assert_eq!(restored.current_option_holder(), Some(PlayerId(2)));
    }

    #[test]
    fn blind_size_survives_a_round_trip() {
        let pending = BlindAuction::new(&[PlayerId(0), PlayerId(1)]).with_blind_size(3);
        let json = AuctionSnapshot::to_json(&pending).unwrap();
        let mut restored = AuctionSnapshot::from_json(&json).unwrap().restore().unwrap();
        assert_eq!(restored.blind_size(), Some(3));
        assert_eq!(
            restored.set_hidden_cards(vec![Card::new(Rank::Ace, Suit::Spades)]),
            Err(AuctionError::WrongBlindSize {
                expected: 3,
                actual: 1
            })
        );

        let unsized_json = AuctionSnapshot::to_json(&auction()).unwrap();
        assert!(!unsized_json.contains("blind_size"));
    }

    #[test]
    fn restore_rejects_two_pickers() {
        let snapshot = AuctionSnapshot {
            seats: vec![
                Seat {
                    player: PlayerId(0),
                    decision: Decision::Picked,
                },
                Seat {
                    player: PlayerId(1),
                    decision: Decision::Picked,
                },
            ],
            hidden_cards: Vec::new(),
            blind_size: None,
        };
        assert!(matches!(
            snapshot.restore(),
            Err(SnapshotError::MultiplePickers(2))
        ));
    }

    #[test]
    fn restore_rejects_waiting_seat_after_pick() {
        let snapshot = AuctionSnapshot {
            seats: vec![
                Seat {
                    player: PlayerId(0),
                    decision: Decision::Picked,
                },
                Seat {
                    player: PlayerId(1),
                    decision: Decision::Waiting,
                },
            ],
            hidden_cards: Vec::new(),
            blind_size: None,
        };
        assert!(matches!(
            snapshot.restore(),
            Err(SnapshotError::WaitingAfterPick(PlayerId(1)))
        ));
    }

    #[test]
    fn restore_rejects_duplicate_seats() {
        let seat = Seat {
            player: PlayerId(4),
            decision: Decision::Waiting,
        };
        let snapshot = AuctionSnapshot {
            seats: vec![seat, seat],
            hidden_cards: Vec::new(),
            blind_size: None,
        };
        assert!(matches!(
            snapshot.restore(),
            Err(SnapshotError::DuplicateSeat(PlayerId(4)))
        ));
    }
}
