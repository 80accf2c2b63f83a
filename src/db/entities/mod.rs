//! Database entities

pub mod game;

pub use game::Entity as Game;
