//! Line-oriented menu loop driving a [`Catalog`].
//!
//! The shell is generic over its input and output so a whole session can be
//! scripted in tests. End of input on any read ends the session cleanly.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use thiserror::Error;
use tracing::debug;

use crate::{catalog::Catalog, user::User};

/// Rule printed above and below the welcome line
const BANNER_RULE: &str = "=============================";
/// Welcome line of the banner
const BANNER_TITLE: &str = "   Welcome to the Library   ";
/// Menu entries, printed in order under `Options:`
const MENU: [&str; 5] =
    ["1. List Books", "2. Borrow a Book", "3. Return a Book", "4. Add a Book", "5. Exit"];

/// Faults that end a session early
#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading from or writing to the terminal failed
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// How a session finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user picked the exit option
    Exited,
    /// Input ran out before the user exited
    EndOfInput,
}

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Show every book with its status
    List,
    /// Borrow a book by title
    Borrow,
    /// Return a book by title
    Return,
    /// Add a new book
    Add,
    /// Leave the loop
    Exit,
}

impl MenuChoice {
    /// Parse a menu line. Only the exact strings `1` through `5` are accepted.
    #[must_use]
    pub fn from_input(line: &str) -> Option<Self> {
        match line {
            "1" => Some(Self::List),
            "2" => Some(Self::Borrow),
            "3" => Some(Self::Return),
            "4" => Some(Self::Add),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Interactive front end over a reader and a writer
#[derive(Debug)]
pub struct Shell<R, W> {
    /// Where user lines come from
    input: R,
    /// Where prompts and results go
    output: W,
    /// Render the banner with colors
    color: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create an uncolored shell
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, color: false }
    }

    /// Enable or disable colored banner output
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Give back the writer, e.g. to inspect a captured transcript
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run a full session against `catalog`
    ///
    /// # Errors
    ///
    /// Returns `ShellError::Io` if the terminal cannot be read or written.
    /// Rejected catalog requests are printed, never returned.
    pub fn run(&mut self, catalog: &mut Catalog) -> Result<SessionEnd, ShellError> {
        self.print_banner()?;

        let Some(name) = self.prompt("Enter your name: ")? else {
            return Ok(SessionEnd::EndOfInput);
        };
        let user = User::new(name);
        debug!(user = user.name(), "session started");

        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Choose an option: ")? else {
                debug!("input closed at menu");
                return Ok(SessionEnd::EndOfInput);
            };
            writeln!(self.output)?;

            let Some(choice) = MenuChoice::from_input(&line) else {
                writeln!(self.output, "Invalid option. Try again.")?;
                continue;
            };

            if let Some(end) = self.dispatch(choice, catalog, &user)? {
                return Ok(end);
            }
        }
    }

    /// Carry out one menu choice. Returns the session end if the loop should stop.
    fn dispatch(
        &mut self,
        choice: MenuChoice,
        catalog: &mut Catalog,
        user: &User,
    ) -> Result<Option<SessionEnd>, ShellError> {
        match choice {
            MenuChoice::List => {
                writeln!(self.output, "Available books:")?;
                for book in catalog.list_books() {
                    writeln!(self.output, "- {book}")?;
                }
            }
            MenuChoice::Borrow => {
                let Some(title) = self.prompt("Enter book title to borrow: ")? else {
                    return Ok(Some(SessionEnd::EndOfInput));
                };
                match catalog.borrow_book(&title, user) {
                    Ok(event) => writeln!(self.output, "{event}")?,
                    Err(rejection) => writeln!(self.output, "{rejection}")?,
                }
            }
            MenuChoice::Return => {
                let Some(title) = self.prompt("Enter book title to return: ")? else {
                    return Ok(Some(SessionEnd::EndOfInput));
                };
                match catalog.return_book(&title, user) {
                    Ok(event) => writeln!(self.output, "{event}")?,
                    Err(rejection) => writeln!(self.output, "{rejection}")?,
                }
            }
            MenuChoice::Add => {
                let Some(title) = self.prompt("Enter book title: ")? else {
                    return Ok(Some(SessionEnd::EndOfInput));
                };
                let Some(author) = self.prompt("Enter author: ")? else {
                    return Ok(Some(SessionEnd::EndOfInput));
                };
                let event = catalog.add_book(&title, &author);
                writeln!(self.output, "{event}")?;
            }
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting...")?;
                return Ok(Some(SessionEnd::Exited));
            }
        }
        Ok(None)
    }

    /// Print the three-line welcome banner followed by a blank line
    fn print_banner(&mut self) -> Result<(), ShellError> {
        if self.color {
            writeln!(self.output, "{}", BANNER_RULE.cyan())?;
            writeln!(self.output, "{}", BANNER_TITLE.bold())?;
            writeln!(self.output, "{}", BANNER_RULE.cyan())?;
        } else {
            writeln!(self.output, "{BANNER_RULE}")?;
            writeln!(self.output, "{BANNER_TITLE}")?;
            writeln!(self.output, "{BANNER_RULE}")?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    /// Print the option list preceded by a blank line
    fn print_menu(&mut self) -> Result<(), ShellError> {
        writeln!(self.output)?;
        writeln!(self.output, "Options:")?;
        for entry in MENU {
            writeln!(self.output, "{entry}")?;
        }
        Ok(())
    }

    /// Write `text` without a newline, flush, and read the answer
    fn prompt(&mut self, text: &str) -> Result<Option<String>, ShellError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line without its terminator. `None` once input is exhausted.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        let trimmed = line
            .strip_suffix('\n')
            .map_or(&*line, |rest| rest.strip_suffix('\r').unwrap_or(rest));
        Ok(Some(trimmed.to_owned()))
    }
}
