use crate::consts::TICK_PERIOD;
use crate::error::SnakeError;
use crate::grid::Size;
use crate::haus::{SnekHaus, StepResult};
use crate::input::{self, Command};
use crate::render;
use crossterm::event;
use log::info;
use rand::{rngs::ThreadRng, Rng};
use ratatui::{backend::Backend, Terminal};
use std::time::{Duration, Instant};

/// Gates game updates to a fixed wall-clock interval, independent of how
/// often the loop polls for input.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    last_tick: Instant,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Ticker {
            period,
            last_tick: Instant::now(),
        }
    }

    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }

    /// True at most once per period; restarts the period when it fires.
    pub fn tick_due(&mut self) -> bool {
        if self.last_tick.elapsed() >= self.period {
            self.last_tick = Instant::now();
            true
        } else {
            false
        }
    }

    pub fn until_next(&self) -> Duration {
        self.period.saturating_sub(self.last_tick.elapsed())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    RoundOver,
    Exited,
}

pub struct Game<R = ThreadRng> {
    pub phase: Phase,
    pub haus: SnekHaus<R>,
    new_rng: fn() -> R,
    rounds: u32,
}

impl Game<ThreadRng> {
    pub fn new() -> Self {
        Game::with_rng(rand::thread_rng)
    }
}

impl<R: Rng> Game<R> {
    /// `new_rng` seeds every round's food placement.
    pub fn with_rng(new_rng: fn() -> R) -> Self {
        let game = Game {
            phase: Phase::Playing,
            haus: SnekHaus::with_rng(Size::BOARD, new_rng()),
            new_rng,
            rounds: 1,
        };
        info!("Round {} started", game.rounds);
        game
    }

    pub fn score(&self) -> u32 {
        self.haus.score
    }

    fn restart(&mut self) {
        self.haus = SnekHaus::with_rng(Size::BOARD, (self.new_rng)());
        self.rounds += 1;
        self.phase = Phase::Playing;
        info!("Round {} started", self.rounds);
    }

    pub fn handle_command(&mut self, command: Command) {
        match (self.phase, command) {
            (Phase::Playing, Command::Steer(dir)) => self.haus.change_direction(dir),
            (Phase::Playing, Command::Quit) => {
                self.haus.quit();
                self.phase = Phase::RoundOver;
            }
            (Phase::RoundOver, Command::Restart) => self.restart(),
            (Phase::RoundOver, Command::Quit) => {
                info!("Quit after {} round(s)", self.rounds);
                self.phase = Phase::Exited;
            }
            _ => {}
        }
    }

    /// One game tick. Moves the round to `RoundOver` when it ends.
    pub fn tick(&mut self) -> StepResult {
        let result = self.haus.slither_on();
        match result {
            StepResult::Collided | StepResult::BoardFull => self.phase = Phase::RoundOver,
            StepResult::Idle | StepResult::Moved | StepResult::Ate(_) => {}
        }
        result
    }

    /// Drive rounds until the player quits. Returns the final score.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<u32, SnakeError> {
        let mut ticker = Ticker::new(TICK_PERIOD);

        while self.phase != Phase::Exited {
            match self.phase {
                Phase::Playing => {
                    terminal.clear()?;
                    terminal.draw(|f| render::draw(f, &self.haus))?;
                    ticker.reset();
                    self.play_round(terminal, &mut ticker)?;
                }
                Phase::RoundOver => {
                    terminal.draw(|f| render::draw(f, &self.haus))?;
                    if let Some(command) = input::read_command()? {
                        self.handle_command(command);
                    }
                }
                Phase::Exited => {}
            }
        }

        Ok(self.score())
    }

    fn play_round<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        ticker: &mut Ticker,
    ) -> Result<(), SnakeError> {
        while self.phase == Phase::Playing {
            for command in input::pending_commands()? {
                self.handle_command(command);
            }
            if self.phase != Phase::Playing {
                break;
            }

            if ticker.tick_due() {
                self.tick();
                terminal.draw(|f| render::draw(f, &self.haus))?;
            } else {
                // Sleep until the next tick, waking early for input
                event::poll(ticker.until_next())?;
            }
        }
        Ok(())
    }
}
