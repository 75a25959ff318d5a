//! Local persistence services for Skycast

pub mod favorites;

pub use favorites::FavoritesStore;
