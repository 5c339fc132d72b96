use enum_map::Enum;
use rand::{
    distr::{Distribution, StandardUniform},
    Rng,
};

/// One of the four directions in which the snake can travel
#[derive(Clone, Copy, Debug, Enum, Eq, Hash, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the direction pointing the opposite way
    pub(crate) fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    #[cfg(test)]
    pub(crate) fn iter() -> impl Iterator<Item = Direction> {
        (0..Self::LENGTH).map(Self::from_usize)
    }
}

impl Distribution<Direction> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::from_usize(rng.random_range(0..Direction::LENGTH))
    }
}
