//! Board geometry. Cells are 1-indexed: `x` in `1..=width`, `y` in `1..=height`.
use crate::consts::{GRID_HEIGHT, GRID_WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const BOARD: Size = Size {
        width: GRID_WIDTH,
        height: GRID_HEIGHT,
    };

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn center(&self) -> Pos {
        Pos {
            x: (self.width + 1) / 2,
            y: (self.height + 1) / 2,
        }
    }

    pub fn contains(&self, pos: Pos) -> bool {
        (1..=self.width).contains(&pos.x) && (1..=self.height).contains(&pos.y)
    }

    /// Every cell of the board, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (1..=self.height).flat_map(move |y| (1..=self.width).map(move |x| Pos { x, y }))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PosDelta {
    pub x: i32,
    pub y: i32,
}

impl From<Direction> for PosDelta {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => PosDelta { x: 0, y: -1 },
            Direction::Down => PosDelta { x: 0, y: 1 },
            Direction::Left => PosDelta { x: -1, y: 0 },
            Direction::Right => PosDelta { x: 1, y: 0 },
        }
    }
}

impl Pos {
    pub fn wrapped_add(&self, delta: PosDelta, size: Size) -> Pos {
        let wrap = |v: u16, d: i32, len: u16| ((v as i32 - 1 + d).rem_euclid(len as i32) + 1) as u16;
        Pos {
            x: wrap(self.x, delta.x, size.width),
            y: wrap(self.y, delta.y, size.height),
        }
    }

    pub fn step(&self, dir: Direction, size: Size) -> Pos {
        self.wrapped_add(dir.into(), size)
    }
}
