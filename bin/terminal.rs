use crate::{player::Player, render::Render};
use lib::game::GameState;
use lib::rules::RuleSet;
use std::io::{self, BufRead, ErrorKind, Lines, Write};
use tracing::instrument;

/// A [`Player`] that prompts for moves on a line-based text interface.
#[derive(Debug)]
pub struct Terminal<W: Write, R: BufRead> {
    writer: W,
    reader: Lines<R>,
}

impl<W: Write, R: BufRead> Terminal<W, R> {
    pub fn new(writer: W, reader: R) -> Self {
        Terminal {
            writer,
            reader: reader.lines(),
        }
    }
}

impl<W: Write, R: BufRead> Player for Terminal<W, R> {
    type Error = io::Error;

    #[instrument(level = "trace", skip(self, rules, state), ret, err)]
    fn request_move(&mut self, rules: &RuleSet, state: &GameState) -> io::Result<String> {
        writeln!(self.writer, "{}", Render::new(rules, state))?;
        write!(self.writer, "player {} > ", state.turn())?;
        self.writer.flush()?;

        let line = self.reader.next().ok_or(ErrorKind::UnexpectedEof)??;
        Ok(line.trim().to_string())
    }
}
