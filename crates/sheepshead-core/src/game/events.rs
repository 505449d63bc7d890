use crate::model::card::Card;
use crate::model::player::PlayerId;
use tracing::{Level, event};

/// State transitions reported by a [`BlindAuction`](crate::game::blind::BlindAuction).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuctionEvent {
    BlindSet {
        cards: Vec<Card>,
    },
    Passed {
        player: PlayerId,
    },
    Picked {
        player: PlayerId,
        cards: Vec<Card>,
        skipped: Vec<PlayerId>,
    },
}

/// Sink for auction transitions, handed to the auction at construction.
pub trait AuctionObserver: Send {
    fn on_event(&mut self, event: &AuctionEvent);
}

/// Forwards auction transitions to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl AuctionObserver for TracingObserver {
    fn on_event(&mut self, auction_event: &AuctionEvent) {
        if !tracing::enabled!(Level::DEBUG) {
            return;
        }

        match auction_event {
            AuctionEvent::BlindSet { cards } => {
                let cards = render_cards(cards);
                event!(
                    target: "sheepshead_core::blind",
                    Level::DEBUG,
                    cards = %cards,
                    "blind set"
                );
            }
            AuctionEvent::Passed { player } => {
                event!(
                    target: "sheepshead_core::blind",
                    Level::DEBUG,
                    player = %player,
                    "player passed"
                );
            }
            AuctionEvent::Picked {
                player,
                cards,
                skipped,
            } => {
                let cards = render_cards(cards);
                event!(
                    target: "sheepshead_core::blind",
                    Level::DEBUG,
                    player = %player,
                    cards = %cards,
                    skipped = skipped.len(),
                    "player picked"
                );
            }
        }
    }
}

fn render_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
