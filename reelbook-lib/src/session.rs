//! The interactive add/delete/edit loop.
//!
//! A [`Session`] owns the database connection for its whole lifetime and
//! talks to the user through a [`Prompter`]. Each command runs to completion
//! before the menu is shown again. Storage failures propagate out of
//! [`Session::run`] unless the session was built with
//! [`ErrorPolicy::Continue`].

use std::io::{BufRead, Write};

use reelbook_catalog::{Movie, MovieEdit, parse_release_year};
use reelbook_db::{
    Connection, delete_movies_by_title, find_movie_by_title, insert_movie, update_movie,
};
use serde::Deserialize;

use crate::command::{Command, MENU, USAGE};
use crate::error::SessionError;
use crate::prompt::Prompter;

const NO_MATCH: &str = "No movie found with the given title.";
const FAREWELL: &str = "Exiting application...";

/// What the loop does when the storage engine fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop the session and hand the error to the caller
    #[default]
    Abort,
    /// Print the error and return to the menu
    Continue,
}

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<R, W> {
    conn: Connection,
    prompter: Prompter<R, W>,
    policy: ErrorPolicy,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(conn: Connection, input: R, output: W) -> Self {
        Self {
            conn,
            prompter: Prompter::new(input, output),
            policy: ErrorPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn output(&self) -> &W {
        self.prompter.output()
    }

    /// Show the menu and dispatch commands until `exit` or end of input.
    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            let Some(line) = self.prompter.ask(MENU)? else {
                self.farewell()?;
                return Ok(());
            };

            let command = Command::parse(&line);
            log::debug!("Dispatching command '{}'", command);

            match self.dispatch(&command) {
                Ok(Flow::Exit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(SessionError::Storage(e)) if self.policy == ErrorPolicy::Continue => {
                    log::error!("Command '{}' failed: {}", command, e);
                    self.prompter.say(format!("Error: {e}"))?;
                }
                Err(e) => return Err(e),
            }

            self.prompter.say("")?;
        }
    }

    /// Run a single command.
    pub fn dispatch(&mut self, command: &Command) -> Result<Flow, SessionError> {
        match command {
            Command::Add => self.add(),
            Command::Delete => self.delete(),
            Command::Edit => self.edit(),
            Command::Exit => self.farewell(),
            Command::Invalid(_) => {
                self.prompter.say(USAGE)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn add(&mut self) -> Result<Flow, SessionError> {
        let Some(title) = self.prompter.ask("Enter the title of movie: ")? else {
            return self.farewell();
        };
        let Some(year_input) = self.prompter.ask("Enter the release year of movie: ")? else {
            return self.farewell();
        };
        let release_year = match parse_release_year(&year_input) {
            Ok(year) => year,
            Err(e) => {
                log::debug!("{e}, storing 0");
                self.prompter.say("Invalid input for release year. Using 0.")?;
                0
            }
        };
        let Some(director) = self.prompter.ask("Enter the director name of movie: ")? else {
            return self.farewell();
        };
        let Some(genre) = self.prompter.ask("Enter the genre of movie: ")? else {
            return self.farewell();
        };

        let movie = Movie::new(title, release_year, director, genre);
        insert_movie(&self.conn, &movie)?;
        self.prompter.say(format!("Added new movie: {}", movie.title))?;
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow, SessionError> {
        let Some(title) = self
            .prompter
            .ask("Enter the title of the movie you want to delete:")?
        else {
            return self.farewell();
        };

        if delete_movies_by_title(&self.conn, &title)? == 0 {
            self.prompter.say(NO_MATCH)?;
        } else {
            self.prompter
                .say(format!("Movie titled \"{title}\" was deleted successfully."))?;
        }
        Ok(Flow::Continue)
    }

    fn edit(&mut self) -> Result<Flow, SessionError> {
        let Some(search) = self
            .prompter
            .ask("Enter the title of the movie you want to edit:")?
        else {
            return self.farewell();
        };

        let Some(movie) = find_movie_by_title(&self.conn, &search)? else {
            self.prompter.say(NO_MATCH)?;
            return Ok(Flow::Continue);
        };

        let Some(title) = self
            .prompter
            .ask_replacement("New title (press Enter to keep current)", &movie.title)?
        else {
            return self.farewell();
        };
        let Some(director) = self
            .prompter
            .ask_replacement("New director (press Enter to keep current)", &movie.director)?
        else {
            return self.farewell();
        };
        let Some(genre) = self
            .prompter
            .ask_replacement("New genre (press Enter to keep current)", &movie.genre)?
        else {
            return self.farewell();
        };
        let Some(year_input) = self
            .prompter
            .ask("Enter new release year (press Enter to keep current):")?
        else {
            return self.farewell();
        };

        let release_year = if year_input.is_empty() {
            None
        } else {
            match parse_release_year(&year_input) {
                Ok(year) => Some(year),
                Err(e) => {
                    log::debug!("{e}, keeping {}", movie.release_year);
                    self.prompter
                        .say("Invalid input for release year. Keeping the current value.")?;
                    None
                }
            }
        };

        let edit = MovieEdit {
            title,
            release_year,
            director,
            genre,
        };
        if edit.is_empty() {
            log::debug!("No changes for movie id {}", movie.id);
        }
        let updated = movie.apply_edit(&edit);
        update_movie(
            &self.conn,
            updated.id,
            &updated.title,
            updated.release_year,
            &updated.director,
            &updated.genre,
        )?;
        self.prompter.say("Movie updated successfully.")?;
        Ok(Flow::Continue)
    }

    fn farewell(&mut self) -> Result<Flow, SessionError> {
        self.prompter.say(FAREWELL)?;
        Ok(Flow::Exit)
    }
}
