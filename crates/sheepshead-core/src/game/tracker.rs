use crate::game::teams::{Team, Teams};
use crate::model::trick::Trick;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPoints {
    pub team: Team,
    pub points: i32,
}

/// Completed tricks of one hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickTracker {
    tricks: Vec<Trick>,
}

impl TrickTracker {
    pub fn new() -> Self {
        Self { tricks: Vec::new() }
    }

    pub fn with_tricks(tricks: Vec<Trick>) -> Self {
        Self { tricks }
    }

    pub fn record(&mut self, trick: Trick) {
        self.tricks.push(trick);
    }

    pub fn tricks(&self) -> &[Trick] {
        &self.tricks
    }

    /// Trick points taken by each team, in team-list order.
    pub fn calculate_current_points(&self, teams: &Teams) -> Vec<TeamPoints> {
        teams
            .team_list()
            .iter()
            .map(|team| {
                let points: i32 = self
                    .tricks
                    .iter()
                    .filter(|trick| trick.winner().is_some_and(|taker| team.contains(taker)))
                    .map(|trick| trick.points() as i32)
                    .sum();
                TeamPoints {
                    team: team.clone(),
                    points,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::TrickTracker;
    use crate::game::teams::Teams;
    use crate::model::card::Card;
    use crate::model::player::PlayerId;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;
    use crate::model::trick::Trick;

    fn trick(cards: [(PlayerId, Card); 2], taker: Option<PlayerId>) -> Trick {
        let mut trick = Trick::new(2);
        for (player, card) in cards {
            trick.play(player, card).unwrap();
        }
        if let Some(taker) = taker {
            trick.take(taker).unwrap();
        }
        trick
    }

    #[test]
    fn tallies_points_by_taking_team() {
        let mut tracker = TrickTracker::new();
        tracker.record(trick(
            [
                (PlayerId(0), Card::new(Rank::Ace, Suit::Hearts)),
                (PlayerId(1), Card::new(Rank::Ten, Suit::Hearts)),
            ],
            Some(PlayerId(0)),
        ));
        tracker.record(trick(
            [
                (PlayerId(0), Card::new(Rank::King, Suit::Spades)),
                (PlayerId(1), Card::new(Rank::Jack, Suit::Spades)),
            ],
            Some(PlayerId(1)),
        ));
        tracker.record(trick(
            [
                (PlayerId(0), Card::new(Rank::Queen, Suit::Clubs)),
                (PlayerId(1), Card::new(Rank::Nine, Suit::Clubs)),
            ],
            None,
        ));

        let teams = Teams::picker_against_field(&[PlayerId(0), PlayerId(1)], PlayerId(0), None);
        let tally = tracker.calculate_current_points(&teams);
        assert_eq!(tally.len(), 2);
        assert_eq!(tally[0].team.label, "picker");
        assert_eq!(tally[0].points, 21);
        assert_eq!(tally[1].points, 6);
    }

    #[test]
    fn empty_tracker_gives_zero_per_team() {
        let teams = Teams::picker_against_field(&[PlayerId(0), PlayerId(1)], PlayerId(1), None);
        let tally = TrickTracker::new().calculate_current_points(&teams);
        assert!(tally.iter().all(|entry| entry.points == 0));
    }
}
