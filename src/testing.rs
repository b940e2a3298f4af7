//! Test doubles for the console and the random source.

use std::collections::VecDeque;
use std::io;

use crate::battle::{BattleOutcome, BattleReport, Round};
use crate::chance::{MessagePicker, WeaponSource};
use crate::error::{GameError, Result};
use crate::menu::{Menu, MenuKey};
use crate::renderer::Renderer;
use crate::session::SessionStats;
use crate::terminal::Input;
use crate::weapon::Weapon;

/// Menu keys that pick `weapon` from a freshly opened weapon menu.
pub fn weapon_keys(weapon: Weapon) -> Vec<MenuKey> {
    match weapon {
        Weapon::Rock => vec![MenuKey::Confirm],
        Weapon::Paper => vec![MenuKey::Down, MenuKey::Confirm],
        Weapon::Scissors => vec![MenuKey::Up, MenuKey::Confirm],
    }
}

/// Replays queued lines and keys; runs dry with `EndOfInput`.
#[derive(Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    keys: VecDeque<MenuKey>,
    pub waits: usize,
    /// Inside a `begin_keys`/`end_keys` stretch.
    pub in_key_mode: bool,
    /// Menu keys read outside such a stretch.
    pub stray_key_reads: usize,
}

impl ScriptedInput {
    pub fn lines(mut self, lines: &[&str]) -> Self {
        self.lines.extend(lines.iter().map(|l| format!("{}\n", l)));
        self
    }

    pub fn keys(mut self, keys: &[MenuKey]) -> Self {
        self.keys.extend(keys.iter().copied());
        self
    }
}

impl Input for ScriptedInput {
    fn read_line(&mut self) -> Result<String> {
        self.in_key_mode = false;
        self.lines.pop_front().ok_or(GameError::EndOfInput)
    }

    fn read_key(&mut self) -> Result<MenuKey> {
        if !self.in_key_mode {
            self.stray_key_reads += 1;
        }
        self.keys.pop_front().ok_or(GameError::EndOfInput)
    }

    fn wait_key(&mut self) -> Result<()> {
        self.waits += 1;
        Ok(())
    }

    fn begin_keys(&mut self) -> Result<()> {
        self.in_key_mode = true;
        Ok(())
    }

    fn end_keys(&mut self) {
        self.in_key_mode = false;
    }
}

/// Remembers what would have been shown.
#[derive(Default)]
pub struct RecordingRenderer {
    pub clears: usize,
    /// (selected index, redraw) for every menu draw.
    pub frames: Vec<(usize, bool)>,
    /// Menu prompts, once per opened menu.
    pub prompts: Vec<String>,
    pub errors: Vec<String>,
    pub infos: Vec<String>,
    pub stats: Vec<SessionStats>,
    pub rounds: Vec<Round>,
    pub summaries: Vec<BattleOutcome>,
    pub messages: Vec<String>,
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn heading(&mut self, _title: &str) -> io::Result<()> {
        Ok(())
    }

    fn prompt(&mut self, _label: &str) -> io::Result<()> {
        Ok(())
    }

    fn info(&mut self, msg: &str) -> io::Result<()> {
        self.infos.push(msg.to_string());
        Ok(())
    }

    fn error(&mut self, msg: &str) -> io::Result<()> {
        self.errors.push(msg.to_string());
        Ok(())
    }

    fn stats(&mut self, stats: &SessionStats) -> io::Result<()> {
        self.stats.push(stats.clone());
        Ok(())
    }

    fn menu(&mut self, menu: &Menu, redraw: bool) -> io::Result<()> {
        if !redraw {
            self.prompts.push(menu.prompt().to_string());
        }
        self.frames.push((menu.selected(), redraw));
        Ok(())
    }

    fn round(&mut self, round: &Round) -> io::Result<()> {
        self.rounds.push(*round);
        Ok(())
    }

    fn summary(&mut self, report: &BattleReport) -> io::Result<()> {
        self.summaries.push(report.outcome());
        self.messages.push(report.message.clone());
        Ok(())
    }

    fn message(&mut self, msg: &str) -> io::Result<()> {
        self.messages.push(msg.to_string());
        Ok(())
    }
}

/// Opponent plays the queued weapons (Rock once empty); messages are
/// always the first line of their pool.
#[derive(Default)]
pub struct FixedChance {
    weapons: VecDeque<Weapon>,
}

impl FixedChance {
    pub fn new(weapons: &[Weapon]) -> Self {
        FixedChance {
            weapons: weapons.iter().copied().collect(),
        }
    }
}

impl WeaponSource for FixedChance {
    fn draw_weapon(&mut self) -> Weapon {
        self.weapons.pop_front().unwrap_or(Weapon::Rock)
    }
}

impl MessagePicker for FixedChance {
    fn pick_message(&mut self, pool: &[&'static str]) -> &'static str {
        pool[0]
    }
}
