use crate::grid::{Pos, Size};
use crate::snek::Snek;
use log::warn;
use rand::{seq::IteratorRandom, Rng};

/// Pick a random cell that isn't under the snake.
///
/// Blind sampling is tried `size.area()` times; after that the free cells are
/// enumerated and one is chosen among them. `None` means the snake covers
/// the whole board.
pub fn place_food(rng: &mut impl Rng, size: Size, snek: &Snek) -> Option<Pos> {
    for _ in 0..size.area() {
        let pos = Pos {
            x: rng.gen_range(1..=size.width),
            y: rng.gen_range(1..=size.height),
        };
        if !snek.occupies(pos) {
            return Some(pos);
        }
    }

    warn!(
        "No free cell after {} samples (snake length {}), scanning the board",
        size.area(),
        snek.len()
    );
    size.cells().filter(|&pos| !snek.occupies(pos)).choose(rng)
}
