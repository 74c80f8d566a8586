pub mod helpers;
pub mod node_spawning;
pub mod spawn_sequence;
pub mod transformation;
