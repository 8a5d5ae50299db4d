//! インメモリ実装

pub mod world;

pub use world::InMemoryWorldRepository;
