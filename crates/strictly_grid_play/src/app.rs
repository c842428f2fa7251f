//! The interactive game loop.
//!
//! Reads commands line by line, plays them through the session, and lets
//! the automated opponent move when the scheduler fires.

use crate::input::{self, Command, HELP};
use crate::render;
use crate::scheduler::AutomatedMoveScheduler;
use crate::session::{GameSession, PlayOutcome};
use anyhow::Result;
use std::time::Duration;
use strictly_grid::MovePolicy;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument};

/// Drives one session from a line-based input until quit or end of input.
pub struct App<W> {
    session: GameSession,
    policy: Box<dyn MovePolicy + Send>,
    out: W,
}

impl<W: AsyncWrite + Unpin> App<W> {
    /// Creates the app.
    pub fn new(session: GameSession, policy: Box<dyn MovePolicy + Send>, out: W) -> Self {
        Self {
            session,
            policy,
            out,
        }
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Consumes the app, returning the session and the output sink.
    pub fn into_parts(self) -> (GameSession, W) {
        (self.session, self.out)
    }

    /// Runs the game loop.
    ///
    /// After the input closes, a pending automated move is still played
    /// before returning.
    #[instrument(skip_all, fields(policy = self.policy.name()))]
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> Result<()> {
        let delay = Duration::from_millis(*self.session.settings().automated_delay_ms());
        let (mut scheduler, mut due) = AutomatedMoveScheduler::new(delay);
        let mut lines = input.lines();
        let mut input_open = true;

        info!("Starting game loop");
        self.show().await?;
        self.schedule_if_needed(&mut scheduler);

        loop {
            if !input_open && !self.session.is_automated_turn() {
                break;
            }

            tokio::select! {
                line = lines.next_line(), if input_open => {
                    let Some(line) = line? else {
                        debug!("Input closed");
                        input_open = false;
                        continue;
                    };

                    match input::parse(&line) {
                        Command::Quit => break,
                        Command::Empty => {}
                        Command::Help => self.say(HELP).await?,
                        Command::Invalid(message) => {
                            self.say(&message).await?;
                            self.say(HELP).await?;
                        }
                        Command::Restart => {
                            scheduler.cancel();
                            self.session.restart()?;
                            self.show().await?;
                        }
                        Command::Play(cell) => {
                            if self.session.is_automated_turn() {
                                self.say("Wait for the computer to move").await?;
                                continue;
                            }
                            let outcome = self.session.play(cell);
                            self.report(outcome).await?;
                        }
                    }
                    self.schedule_if_needed(&mut scheduler);
                }
                Some(tick) = due.recv() => {
                    if !self.session.accepts(tick) {
                        debug!(generation = tick.generation, "Discarding stale automated move");
                        continue;
                    }
                    let cell = self.session.engine().pick_move_with(self.policy.as_mut())?;
                    self.say(&format!("Computer plays {} {}", cell.row, cell.col)).await?;
                    let outcome = self.session.play(cell);
                    self.report(outcome).await?;
                    self.schedule_if_needed(&mut scheduler);
                }
            }
        }

        scheduler.cancel();
        info!(moves = self.session.engine().moves().len(), "Game loop finished");
        Ok(())
    }

    fn schedule_if_needed(&self, scheduler: &mut AutomatedMoveScheduler) {
        if self.session.is_automated_turn() && !scheduler.is_pending() {
            scheduler.schedule(self.session.generation());
        }
    }

    async fn report(&mut self, outcome: PlayOutcome) -> Result<()> {
        match outcome {
            PlayOutcome::Rejected => {
                let message = if self.session.is_game_over() {
                    "Game over, type restart to play again"
                } else {
                    "That cell is not available"
                };
                self.say(message).await
            }
            PlayOutcome::Continue { .. } | PlayOutcome::Won { .. } | PlayOutcome::Draw => {
                self.show().await
            }
        }
    }

    async fn show(&mut self) -> Result<()> {
        let text = format!(
            "{}{}\n",
            render::board(&self.session),
            render::status_line(&self.session)
        );
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await?;
        Ok(())
    }

    async fn say(&mut self, message: &str) -> Result<()> {
        self.out.write_all(message.as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        self.out.flush().await?;
        Ok(())
    }
}
