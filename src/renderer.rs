use std::io::{self, Stdout, Write};

use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, execute, queue};

use crate::battle::{BattleOutcome, BattleReport, Round};
use crate::menu::Menu;
use crate::session::SessionStats;
use crate::weapon::RoundOutcome;

/// Trait that abstracts the presentation layer, so the game loop and the
/// battle engine never touch the console directly.
pub trait Renderer {
    /// Wipe the screen and home the cursor.
    fn clear(&mut self) -> io::Result<()>;
    /// A boxed section title.
    fn heading(&mut self, title: &str) -> io::Result<()>;
    /// An inline prompt; the cursor stays on the same line.
    fn prompt(&mut self, label: &str) -> io::Result<()>;
    fn info(&mut self, msg: &str) -> io::Result<()>;
    /// A boxed error notice.
    fn error(&mut self, msg: &str) -> io::Result<()>;
    fn stats(&mut self, stats: &SessionStats) -> io::Result<()>;
    /// Draw a selection menu.  With `redraw` the previous drawing of the
    /// same menu is overwritten in place.
    fn menu(&mut self, menu: &Menu, redraw: bool) -> io::Result<()>;
    fn round(&mut self, round: &Round) -> io::Result<()>;
    fn summary(&mut self, report: &BattleReport) -> io::Result<()>;
    /// A flavor line.
    fn message(&mut self, msg: &str) -> io::Result<()>;
}

// ---------------------------------------------------------------------------
// CLI Renderer
// ---------------------------------------------------------------------------

/// Colored line-oriented console output.
pub struct CliRenderer<W: Write = Stdout> {
    out: W,
    /// Lines written by the last menu draw.
    menu_height: u16,
}

impl CliRenderer {
    pub fn new() -> Self {
        CliRenderer::with_writer(io::stdout())
    }
}

impl<W: Write> CliRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        CliRenderer {
            out,
            menu_height: 0,
        }
    }
}

impl<W: Write> Renderer for CliRenderer<W> {
    fn clear(&mut self) -> io::Result<()> {
        self.menu_height = 0;
        execute!(self.out, Clear(ClearType::All), cursor::MoveTo(0, 0))
    }

    fn heading(&mut self, title: &str) -> io::Result<()> {
        let bar = "-".repeat(title.chars().count() + 6);
        writeln!(self.out, "+{}+", bar)?;
        writeln!(self.out, "|   {}   |", title.bold())?;
        writeln!(self.out, "+{}+", bar)
    }

    fn prompt(&mut self, label: &str) -> io::Result<()> {
        write!(self.out, "{}", label)?;
        self.out.flush()
    }

    fn info(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.out, "{}", msg.dark_grey())?;
        self.out.flush()
    }

    fn error(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.out, "{}", "\n+----------------------- ERROR -----------------------+".red())?;
        writeln!(self.out, "{}", format!("| {:<49} |", msg).red())?;
        writeln!(self.out, "{}", "+-----------------------------------------------------+".red())
    }

    fn stats(&mut self, stats: &SessionStats) -> io::Result<()> {
        writeln!(self.out, "+==============================+")?;
        writeln!(self.out, "|         {}           |", "STATISTICS".bold())?;
        writeln!(self.out, "+==============================+")?;
        writeln!(self.out, "| Nickname: {}", stats.nickname.as_str().cyan())?;
        writeln!(self.out, "| Age:      {}", stats.age)?;
        writeln!(self.out, "| Battles:  {}", stats.battles)?;
        writeln!(self.out, "| Wins:     {}", stats.wins)?;
        writeln!(self.out, "| Win rate: {}%", stats.win_rate())?;
        writeln!(self.out, "+==============================+\n")
    }

    // Menus are drawn while the terminal is in raw mode, so every line
    // ends in an explicit "\r\n".
    fn menu(&mut self, menu: &Menu, redraw: bool) -> io::Result<()> {
        if redraw && self.menu_height > 0 {
            queue!(
                self.out,
                cursor::MoveToPreviousLine(self.menu_height),
                Clear(ClearType::FromCursorDown)
            )?;
        }

        let mut lines = 0;
        if !menu.prompt().is_empty() {
            write!(self.out, "{}\r\n", menu.prompt().bold())?;
            lines += 1;
        }
        for (i, option) in menu.options().iter().enumerate() {
            if i == menu.selected() {
                write!(self.out, "  {} {}\r\n", ">".yellow(), option.as_str().black().on_yellow())?;
            } else {
                write!(self.out, "    {}\r\n", option)?;
            }
            lines += 1;
        }
        self.out.flush()?;

        self.menu_height = lines;
        Ok(())
    }

    fn round(&mut self, round: &Round) -> io::Result<()> {
        let line = round.log_line();
        let styled = match round.outcome {
            RoundOutcome::PlayerWin => line.green(),
            RoundOutcome::OpponentWin => line.red(),
            RoundOutcome::Draw => line.yellow(),
        };
        writeln!(self.out, "{}\n", styled)?;
        // The next menu starts below this line.
        self.menu_height = 0;
        Ok(())
    }

    fn summary(&mut self, report: &BattleReport) -> io::Result<()> {
        writeln!(self.out, "+========== BATTLE LOG ==========+")?;
        for round in &report.rounds {
            writeln!(self.out, "| {}", round.log_line())?;
        }
        writeln!(self.out, "+================================+")?;
        writeln!(
            self.out,
            "| You {} - {} Opponent",
            report.result.player_wins, report.result.opponent_wins
        )?;
        let outcome = report.outcome();
        let label = match outcome {
            BattleOutcome::Victory => outcome.label().green().bold(),
            BattleOutcome::Defeat => outcome.label().red().bold(),
            BattleOutcome::Draw => outcome.label().yellow().bold(),
        };
        writeln!(self.out, "| Result: {}", label)?;
        writeln!(self.out, "+================================+")?;
        self.message(&report.message)
    }

    fn message(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.out, "\n  {}\n", msg.magenta().italic())?;
        self.out.flush()
    }
}
