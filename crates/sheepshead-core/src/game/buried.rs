use crate::model::card::Card;
use crate::model::player::Player;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuryError {
    #[error("cannot bury {0}: card is not in hand")]
    CardNotInHand(Card),
    #[error("cards have already been buried")]
    AlreadyBuried,
}

/// Cards the picker set aside after taking the blind. Their points count
/// for the picking team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuriedCards {
    cards: Vec<Card>,
}

impl BuriedCards {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Moves `cards` out of the picker's hand. Nothing is removed unless every
    /// card is present.
    pub fn bury(&mut self, picker: &mut Player, cards: &[Card]) -> Result<(), BuryError> {
        if !self.cards.is_empty() {
            return Err(BuryError::AlreadyBuried);
        }

        let mut remaining = picker.hand().clone();
        for card in cards {
            if !remaining.remove(*card) {
                return Err(BuryError::CardNotInHand(*card));
            }
        }

        *picker.hand_mut() = remaining;
        self.cards.extend_from_slice(cards);
        Ok(())
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn points(&self) -> i32 {
        self.cards.iter().map(|card| card.points() as i32).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::{BuriedCards, BuryError};
    use crate::model::card::Card;
    use crate::model::player::{Player, PlayerId};
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;

    fn picker() -> Player {
        let mut player = Player::new(PlayerId(0), "Picker");
        player.receive_cards(&[
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Ten, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Clubs),
        ]);
        player
    }

    #[test]
    fn bury_moves_cards_and_counts_points() {
        let mut player = picker();
        let mut buried = BuriedCards::new();
        buried
            .bury(
                &mut player,
                &[
                    Card::new(Rank::Ace, Suit::Spades),
                    Card::new(Rank::Ten, Suit::Hearts),
                ],
            )
            .unwrap();

        assert_eq!(buried.points(), 21);
        assert_eq!(player.hand().cards(), &[Card::new(Rank::Seven, Suit::Clubs)]);
    }

    #[test]
    fn missing_card_leaves_hand_untouched() {
        let mut player = picker();
        let mut buried = BuriedCards::new();
        let missing = Card::new(Rank::King, Suit::Diamonds);
        let err = buried
            .bury(&mut player, &[Card::new(Rank::Ace, Suit::Spades), missing])
            .unwrap_err();

        assert_eq!(err, BuryError::CardNotInHand(missing));
        assert_eq!(player.hand().len(), 3);
        assert!(buried.cards().is_empty());
    }

    #[test]
    fn duplicate_card_in_request_is_rejected() {
        let mut player = picker();
        let mut buried = BuriedCards::new();
        let ace = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(
            buried.bury(&mut player, &[ace, ace]),
            Err(BuryError::CardNotInHand(ace))
        );
    }

    #[test]
    fn burying_twice_is_rejected() {
        let mut player = picker();
        let mut buried = BuriedCards::new();
        buried
            .bury(&mut player, &[Card::new(Rank::Seven, Suit::Clubs)])
            .unwrap();
        assert_eq!(
            buried.bury(&mut player, &[Card::new(Rank::Ace, Suit::Spades)]),
            Err(BuryError::AlreadyBuried)
        );
    }
}
