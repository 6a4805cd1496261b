use crate::grid::{Direction, Pos, Size};
use std::collections::VecDeque;

/// The snake: a head and its tail, ordered head-to-tail.
#[derive(Debug, Clone, PartialEq)]
pub struct Snek {
    pub head: Pos,
    pub tail: VecDeque<Pos>,
    /// `None` until the first movement key of a round.
    pub direction: Option<Direction>,
    queued: Option<Direction>,
}

impl Snek {
    pub fn new(head: Pos) -> Self {
        Snek {
            head,
            tail: VecDeque::new(),
            direction: None,
            queued: None,
        }
    }

    /// Number of occupied cells, head included.
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    pub fn occupies(&self, pos: Pos) -> bool {
        self.head == pos || self.tail.contains(&pos)
    }

    pub fn would_collide_with_tail(&self, pos: Pos) -> bool {
        self.tail.contains(&pos)
    }

    /// Queue a turn for the next tick. A turn straight back into the tail is
    /// dropped; the check is against the direction of travel, so several keys
    /// between two ticks can't chain into a reversal.
    pub fn change_direction(&mut self, new_direction: Direction) -> bool {
        if self.direction == Some(new_direction.opposite()) {
            return false;
        }
        self.queued = Some(new_direction);
        true
    }

    /// Take the queued turn, if any, and return the direction of travel.
    pub fn apply_turn(&mut self) -> Option<Direction> {
        if let Some(dir) = self.queued.take() {
            self.direction = Some(dir);
        }
        self.direction
    }

    /// Shift every tail segment up one place and move the head to `new_head`.
    /// Returns the cell the tail end vacated.
    pub fn slither(&mut self, new_head: Pos) -> Pos {
        self.tail.push_front(self.head);
        self.head = new_head;
        // The tail was one longer for a moment; it can't be empty here.
        self.tail.pop_back().unwrap_or(new_head)
    }

    /// Re-attach a segment at `pos`, the cell the tail end just left.
    pub fn grow(&mut self, pos: Pos) {
        self.tail.push_back(pos);
    }

    /// The snake's next head position if it moved in `dir`.
    pub fn next_head(&self, dir: Direction, size: Size) -> Pos {
        self.head.step(dir, size)
    }
}
