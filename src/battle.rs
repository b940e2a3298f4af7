use crate::chance::{MessagePicker, WeaponSource};
use crate::error::Result;
use crate::menu;
use crate::messages::{self, MessageKind};
use crate::renderer::Renderer;
use crate::terminal::Input;
use crate::weapon::{RoundOutcome, Weapon};

/// Rounds in every battle.
pub const ROUNDS_PER_BATTLE: usize = 3;
/// Round wins needed to take the battle.
pub const WINS_NEEDED: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BattleOutcome {
    Victory,
    Defeat,
    Draw,
}

impl BattleOutcome {
    pub fn label(self) -> &'static str {
        match self {
            BattleOutcome::Victory => "VICTORY",
            BattleOutcome::Defeat => "DEFEAT",
            BattleOutcome::Draw => "DRAW",
        }
    }
}

/// One resolved round.  `number` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub number: usize,
    pub player: Weapon,
    pub opponent: Weapon,
    pub outcome: RoundOutcome,
}

impl Round {
    pub fn new(number: usize, player: Weapon, opponent: Weapon) -> Self {
        Round {
            number,
            player,
            opponent,
            outcome: RoundOutcome::resolve(player, opponent),
        }
    }

    pub fn log_line(&self) -> String {
        format!(
            "Round {}: {} vs {} - {}",
            self.number,
            self.player.name(),
            self.opponent.name(),
            self.outcome.label()
        )
    }
}

/// Round-win tallies.  Drawn rounds advance neither side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BattleResult {
    pub player_wins: u8,
    pub opponent_wins: u8,
}

impl BattleResult {
    pub fn tally(outcomes: impl IntoIterator<Item = RoundOutcome>) -> Self {
        let mut result = BattleResult::default();
        for outcome in outcomes {
            match outcome {
                RoundOutcome::PlayerWin => result.player_wins += 1,
                RoundOutcome::OpponentWin => result.opponent_wins += 1,
                RoundOutcome::Draw => {}
            }
        }
        result
    }

    pub fn outcome(&self) -> BattleOutcome {
        if self.player_wins >= WINS_NEEDED {
            BattleOutcome::Victory
        } else if self.opponent_wins >= WINS_NEEDED {
            BattleOutcome::Defeat
        } else {
            BattleOutcome::Draw
        }
    }
}

/// Everything a finished battle produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleReport {
    pub rounds: Vec<Round>,
    pub result: BattleResult,
    pub message: String,
}

impl BattleReport {
    pub fn outcome(&self) -> BattleOutcome {
        self.result.outcome()
    }

    pub fn player_won(&self) -> bool {
        self.outcome() == BattleOutcome::Victory
    }
}

/// Play one best-of-three battle.  The player picks each weapon from a
/// menu; the opponent's weapon comes from `chance`.
pub fn fight<R, I, C>(
    renderer: &mut R,
    input: &mut I,
    chance: &mut C,
    nickname: &str,
) -> Result<BattleReport>
where
    R: Renderer,
    I: Input,
    C: WeaponSource + MessagePicker,
{
    let labels = Weapon::labels();
    let mut rounds = Vec::with_capacity(ROUNDS_PER_BATTLE);

    for number in 1..=ROUNDS_PER_BATTLE {
        let prompt = format!("Round {} of {} - choose your weapon", number, ROUNDS_PER_BATTLE);
        let idx = menu::select(renderer, input, &prompt, &labels)?;
        let player = Weapon::ALL[idx];
        let opponent = chance.draw_weapon();

        let round = Round::new(number, player, opponent);
        tracing::debug!(round = number, ?player, ?opponent, outcome = ?round.outcome, "round resolved");
        renderer.round(&round)?;
        rounds.push(round);
    }

    let result = BattleResult::tally(rounds.iter().map(|r| r.outcome));
    let message = messages::compose(chance, MessageKind::from(result.outcome()), nickname);
    let report = BattleReport {
        rounds,
        result,
        message,
    };

    tracing::info!(
        outcome = ?report.outcome(),
        player_wins = result.player_wins,
        opponent_wins = result.opponent_wins,
        "battle finished"
    );
    renderer.summary(&report)?;
    Ok(report)
}
