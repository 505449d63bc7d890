pub mod blind;
pub mod buried;
pub mod events;
pub mod scoring;
pub mod snapshot;
pub mod teams;
pub mod tracker;
