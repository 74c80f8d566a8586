use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeededOrNot {
    Seeded(u64),
    #[default]
    Unseeded,
}

impl SeededOrNot {
    pub fn resolve(&self) -> u64 {
        match self {
            SeededOrNot::Seeded(seed) => *seed,
            SeededOrNot::Unseeded => rand::random::<u64>(),
        }
    }
}
