pub mod card;
pub mod hand;
pub mod player;
pub mod rank;
pub mod suit;
pub mod trick;
