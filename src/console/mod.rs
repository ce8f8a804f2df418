//! Menu-driven console over a [`Library`].
//!
//! The console is a small state machine: each [`Screen`] shows its menu,
//! performs at most one action and names the next screen. Recoverable errors
//! are printed and the same screen is shown again; only I/O failures end the
//! session with an error. End of input ends the session cleanly.

pub mod loans;
pub mod members;
pub mod prompt;
pub mod publications;
pub mod reports;

use std::io::{self, BufRead, Write};

use crate::{
    error::{AppError, AppResult},
    services::Library,
};

use prompt::{Menu, Prompt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    Members,
    Publications,
    Loans,
    Reports,
    Exit,
}

pub const MAIN_MENU: Menu = Menu {
    title: "Main Menu",
    options: &[
        "Member Management",
        "Publication Management",
        "Loan Management",
        "Reports",
        "Exit",
    ],
};

pub struct Console<'a, R, W> {
    library: &'a mut Library,
    prompt: Prompt<R, W>,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(library: &'a mut Library, input: R, output: W) -> Self {
        Self {
            library,
            prompt: Prompt::new(input, output),
        }
    }

    /// Run until the user exits or input runs out.
    pub fn run(&mut self) -> AppResult<()> {
        let mut screen = Screen::Main;
        while screen != Screen::Exit {
            screen = self.step(screen)?;
        }
        tracing::info!("Console session finished");
        Ok(())
    }

    /// Show `screen` once and return the screen to show next.
    pub fn step(&mut self, screen: Screen) -> AppResult<Screen> {
        let result = match screen {
            Screen::Main => self.main_menu(),
            Screen::Members => members::handle(self.library, &mut self.prompt),
            Screen::Publications => publications::handle(self.library, &mut self.prompt),
            Screen::Loans => loans::handle(self.library, &mut self.prompt),
            Screen::Reports => reports::handle(self.library, &mut self.prompt),
            Screen::Exit => Ok(Screen::Exit),
        };

        match result {
            Ok(next) => Ok(next),
            Err(AppError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                tracing::debug!(?screen, "Input closed");
                Ok(Screen::Exit)
            }
            Err(err) if err.is_recoverable() => {
                tracing::warn!(?screen, code = ?err.code(), "{}", err);
                self.prompt.say(&err)?;
                Ok(screen)
            }
            Err(err) => Err(err),
        }
    }

    fn main_menu(&mut self) -> AppResult<Screen> {
        let next = match self.prompt.choose(&MAIN_MENU)? {
            1 => Screen::Members,
            2 => Screen::Publications,
            3 => Screen::Loans,
            4 => Screen::Reports,
            _ => {
                self.prompt.say("Exiting program...")?;
                Screen::Exit
            }
        };
        Ok(next)
    }
}
