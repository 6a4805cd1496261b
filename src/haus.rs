use crate::consts::FOOD_REWARD;
use crate::food::place_food;
use crate::grid::{Direction, Pos, Size};
use crate::snek::Snek;
use log::info;
use rand::{rngs::ThreadRng, Rng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    Idle,       // No direction chosen yet
    Moved,      // Normal movement, no special events
    Ate(u32),   // Ate food, with score increment
    Collided,   // Hit own tail, round over
    BoardFull,  // Ate the last free cell, round over
}

/// Why a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    Collided,
    Quit,
    BoardFull,
}

/// All state of one round.
#[derive(Debug)]
pub struct SnekHaus<R = ThreadRng> {
    pub size: Size,
    pub snek: Snek,
    pub food: Pos,
    pub score: u32,
    pub ended: Option<RoundEnd>,
    rng: R,
}

impl<R: Rng> SnekHaus<R> {
    pub fn with_rng(size: Size, mut rng: R) -> Self {
        let snek = Snek::new(size.center());
        // A lone head never fills a board with more than one cell
        let food = place_food(&mut rng, size, &snek).unwrap_or(snek.head);
        SnekHaus {
            size,
            snek,
            food,
            score: 0,
            ended: None,
            rng,
        }
    }

    pub fn is_over(&self) -> bool {
        self.ended.is_some()
    }

    pub fn change_direction(&mut self, new_direction: Direction) {
        if !self.is_over() {
            self.snek.change_direction(new_direction);
        }
    }

    pub fn quit(&mut self) {
        if self.ended.is_none() {
            info!("Round quit with score {}", self.score);
            self.ended = Some(RoundEnd::Quit);
        }
    }

    /// Advance the round by one tick.
    pub fn slither_on(&mut self) -> StepResult {
        if self.is_over() {
            return StepResult::Idle;
        }
        let Some(dir) = self.snek.apply_turn() else {
            return StepResult::Idle;
        };

        let new_head = self.snek.next_head(dir, self.size);
        let nomming = new_head == self.food;
        let vacated = self.snek.slither(new_head);

        if self.snek.would_collide_with_tail(self.snek.head) {
            info!(
                "Snake hit itself at {:?}, final score {}",
                self.snek.head, self.score
            );
            self.ended = Some(RoundEnd::Collided);
            return StepResult::Collided;
        }

        if !nomming {
            return StepResult::Moved;
        }

        self.score += FOOD_REWARD;
        self.snek.grow(vacated);
        info!("Ate food at {:?}, score {}", new_head, self.score);

        match place_food(&mut self.rng, self.size, &self.snek) {
            Some(food) => {
                self.food = food;
                StepResult::Ate(FOOD_REWARD)
            }
            None => {
                info!("Board full, final score {}", self.score);
                self.ended = Some(RoundEnd::BoardFull);
                StepResult::BoardFull
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::LOG_LEVEL;
    use log::{Log, Metadata, Record};
    use rand::{rngs::StdRng, SeedableRng};
    use std::sync::Mutex;

    fn haus() -> SnekHaus<StdRng> {
        SnekHaus::with_rng(Size::BOARD, StdRng::seed_from_u64(42))
    }

    /// Keeps every record that passes the game's log level.
    struct CaptureLogger(Mutex<Vec<String>>);

    impl Log for CaptureLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= LOG_LEVEL
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                self.0.lock().unwrap().push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: CaptureLogger = CaptureLogger(Mutex::new(Vec::new()));

    fn captured_logs() -> Vec<String> {
        // Only the first call in the test binary installs it
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(LOG_LEVEL);
        CAPTURE.0.lock().unwrap().clone()
    }

    #[test]
    fn test_new_round() {
        let haus = haus();
        assert_eq!(haus.snek.head, Pos { x: 20, y: 10 });
        assert!(haus.snek.tail.is_empty());
        assert_eq!(haus.snek.direction, None);
        assert_eq!(haus.score, 0);
        assert!(!haus.is_over());
        assert!(haus.size.contains(haus.food));
        assert!(!haus.snek.occupies(haus.food));
    }

    #[test]
    fn test_idle_until_direction_chosen() {
        let mut haus = haus();
        for _ in 0..5 {
            assert_eq!(haus.slither_on(), StepResult::Idle);
        }
        assert_eq!(haus.snek.head, Pos { x: 20, y: 10 });
    }

    #[test]
    fn test_three_ticks_right() {
        let mut haus = haus();
        haus.food = Pos { x: 1, y: 1 };

        haus.change_direction(Direction::Right);
        for _ in 0..3 {
            assert_eq!(haus.slither_on(), StepResult::Moved);
        }

        assert_eq!(haus.snek.head, Pos { x: 23, y: 10 });
        assert_eq!(haus.snek.tail.len(), 0);
        assert_eq!(haus.score, 0);
    }

    #[test]
    fn test_wraps_instead_of_hitting_walls() {
        let mut haus = haus();
        haus.food = Pos { x: 1, y: 1 };
        haus.snek.head = Pos { x: 1, y: 10 };

        haus.change_direction(Direction::Left);
        assert_eq!(haus.slither_on(), StepResult::Moved);
        assert_eq!(haus.snek.head, Pos { x: 40, y: 10 });

        haus.change_direction(Direction::Down);
        haus.snek.head = Pos { x: 40, y: 20 };
        assert_eq!(haus.slither_on(), StepResult::Moved);
        assert_eq!(haus.snek.head, Pos { x: 40, y: 1 });
    }

    #[test]
    fn test_eating_food() {
        let mut haus = haus();
        haus.food = Pos { x: 21, y: 10 };

        haus.change_direction(Direction::Right);
        assert_eq!(haus.slither_on(), StepResult::Ate(10));

        assert_eq!(haus.score, 10);
        assert_eq!(haus.snek.tail.len(), 1);
        assert_eq!(haus.snek.tail[0], Pos { x: 20, y: 10 });
        assert_ne!(haus.food, Pos { x: 21, y: 10 });
        assert!(!haus.snek.occupies(haus.food));
    }

    #[test]
    fn test_segment_count_only_changes_on_food() {
        let mut haus = haus();
        haus.change_direction(Direction::Down);

        let turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Left];
        for tick in 0..400 {
            if tick % 7 == 0 {
                haus.change_direction(turns[(tick / 7) % turns.len()]);
            }
            let before = haus.snek.len();
            match haus.slither_on() {
                StepResult::Moved => assert_eq!(haus.snek.len(), before),
                StepResult::Ate(_) => {
                    assert_eq!(haus.snek.len(), before + 1);
                    assert!(!haus.snek.occupies(haus.food));
                }
                StepResult::Collided | StepResult::BoardFull => break,
                StepResult::Idle => panic!("snake stopped moving"),
            }
        }
    }

    #[test]
    fn test_self_collision_ends_round_without_scoring() {
        let mut haus = haus();
        // Moving right from (5,5) lands on (6,5), which stays in the tail
        haus.snek.head = Pos { x: 5, y: 5 };
        haus.snek.tail = [
            Pos { x: 5, y: 6 },
            Pos { x: 6, y: 6 },
            Pos { x: 6, y: 5 },
            Pos { x: 7, y: 5 },
        ]
        .into_iter()
        .collect();
        haus.snek.direction = Some(Direction::Up);
        haus.change_direction(Direction::Right);
        haus.food = Pos { x: 6, y: 5 };

        assert_eq!(haus.slither_on(), StepResult::Collided);
        assert_eq!(haus.ended, Some(RoundEnd::Collided));
        assert_eq!(haus.score, 0);
        assert_eq!(haus.snek.tail.len(), 4);
        assert_eq!(haus.food, Pos { x: 6, y: 5 });

        // Nothing moves once the round is over
        let head = haus.snek.head;
        assert_eq!(haus.slither_on(), StepResult::Idle);
        assert_eq!(haus.snek.head, head);
    }

    #[test]
    fn test_following_the_tail_end_is_safe() {
        let mut haus = haus();
        haus.food = Pos { x: 30, y: 15 };
        // A 2x2 loop: the head moves into the cell the tail end leaves
        haus.snek.head = Pos { x: 5, y: 5 };
        haus.snek.tail = [Pos { x: 6, y: 5 }, Pos { x: 6, y: 4 }, Pos { x: 5, y: 4 }]
            .into_iter()
            .collect();
        haus.snek.direction = Some(Direction::Left);
        haus.change_direction(Direction::Up);

        assert_eq!(haus.slither_on(), StepResult::Moved);
        assert_eq!(haus.snek.head, Pos { x: 5, y: 4 });
        assert!(!haus.is_over());
    }

    #[test]
    fn test_quit_ends_round() {
        let mut haus = haus();
        haus.change_direction(Direction::Right);
        haus.quit();
        assert_eq!(haus.ended, Some(RoundEnd::Quit));
        assert_eq!(haus.slither_on(), StepResult::Idle);
    }

    #[test]
    fn test_board_full() {
        let size = Size {
            width: 3,
            height: 1,
        };
        let mut haus = SnekHaus::with_rng(size, StdRng::seed_from_u64(1));
        haus.snek.head = Pos { x: 1, y: 1 };
        haus.snek.tail.clear();
        haus.food = Pos { x: 2, y: 1 };

        haus.change_direction(Direction::Right);
        assert_eq!(haus.slither_on(), StepResult::Ate(10));
        assert_eq!(haus.food, Pos { x: 3, y: 1 });

        assert_eq!(haus.slither_on(), StepResult::BoardFull);
        assert_eq!(haus.ended, Some(RoundEnd::BoardFull));
        assert_eq!(haus.score, 20);
        assert_eq!(haus.snek.len(), 3);
    }

    #[test]
    fn test_food_eaten_reaches_the_log() {
        captured_logs();
        let mut haus = haus();
        haus.food = Pos { x: 20, y: 9 };

        haus.change_direction(Direction::Up);
        assert_eq!(haus.slither_on(), StepResult::Ate(10));

        let logs = captured_logs();
        assert!(
            logs.iter().any(|l| l == "Ate food at Pos { x: 20, y: 9 }, score 10"),
            "{:?}",
            logs
        );
    }
}
