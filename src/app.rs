use crate::command::Command;
use crate::game::{Advance, Game, Scene, Tick};
use crossterm::event::{poll, read};
use log::{debug, info};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

/// A source of player input
pub(crate) trait InputSource {
    /// Return every command that has arrived since the last call, without
    /// blocking
    fn poll_commands(&mut self) -> io::Result<Vec<Command>>;
}

/// Something that can display the state of the game
pub(crate) trait Renderer {
    fn render(&mut self, scene: Scene<'_>) -> io::Result<()>;
}

/// Controls the rate at which the game loop runs
pub(crate) trait Pacer {
    /// Block until the next tick is due
    fn wait_for_tick(&mut self);
}

/// Reads input from the terminal via crossterm
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct CrosstermEvents;

impl InputSource for CrosstermEvents {
    fn poll_commands(&mut self) -> io::Result<Vec<Command>> {
        let mut commands = Vec::new();
        while poll(Duration::ZERO)? {
            commands.extend(Command::from_event(read()?));
        }
        Ok(commands)
    }
}

impl<B: Backend> Renderer for Terminal<B> {
    fn render(&mut self, scene: Scene<'_>) -> io::Result<()> {
        self.draw(|frame| frame.render_widget(scene, frame.area()))?;
        Ok(())
    }
}

/// Drives a [`Game`] one tick at a time until the player quits
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameLoop<R, P> {
    game: Game<R>,
    pacer: P,
}

impl<R: Rng, P: Pacer> GameLoop<R, P> {
    pub(crate) fn new(game: Game<R>, pacer: P) -> Self {
        GameLoop { game, pacer }
    }

    /// Run ticks until a quit command arrives.  The only errors are I/O
    /// errors from `input` or `renderer`.
    pub(crate) fn run<I: InputSource, D: Renderer>(
        mut self,
        input: &mut I,
        renderer: &mut D,
    ) -> io::Result<()> {
        let mut ticks = 0u64;
        loop {
            for cmd in input.poll_commands()? {
                match cmd {
                    Command::Quit => {
                        info!(
                            "Quitting after {ticks} ticks with snake length {}",
                            self.game.snake_len()
                        );
                        return Ok(());
                    }
                    Command::Turn(d) => self.game.request_direction(d),
                }
            }
            ticks += 1;
            match self.game.tick() {
                Tick {
                    advance: Advance::Collided,
                    ..
                } => debug!("Snake reset on tick {ticks}"),
                Tick { ate: true, .. } => debug!(
                    "Food eaten on tick {ticks}; snake length is {}",
                    self.game.snake_len()
                ),
                _ => (),
            }
            renderer.render(self.game.scene())?;
            self.pacer.wait_for_tick();
        }
    }
}
