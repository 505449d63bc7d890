use thiserror::Error;

use crate::game::blind::AuctionError;
use crate::game::buried::BuryError;
use crate::game::scoring::ScoringError;
use crate::game::snapshot::SnapshotError;
use crate::model::trick::TrickError;

/// Any rule violation raised while running a hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Auction(#[from] AuctionError),
    #[error(transparent)]
    Bury(#[from] BuryError),
    #[error(transparent)]
    Trick(#[from] TrickError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

#[cfg(test)]
mod tests {
    use super::GameError;
    use crate::game::blind::AuctionError;
    use crate::game::scoring::ScoringError;

    #[test]
    fn wraps_component_errors_transparently() {
        let err: GameError = AuctionError::AlreadySet.into();
        assert_eq!(err.to_string(), "blind has already been set");

        let err: GameError = ScoringError::TeamsUnknown.into();
        assert!(matches!(err, GameError::Scoring(ScoringError::TeamsUnknown)));
    }
}
