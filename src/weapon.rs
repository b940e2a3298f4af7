/// The three weapons.  Dominance is cyclic:
/// Rock beats Scissors, Scissors beats Paper, Paper beats Rock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weapon {
    Rock,
    Paper,
    Scissors,
}

impl Weapon {
    /// All three weapons, in menu order.
    pub const ALL: [Weapon; 3] = [Weapon::Rock, Weapon::Paper, Weapon::Scissors];

    pub fn name(self) -> &'static str {
        match self {
            Weapon::Rock => "Rock",
            Weapon::Paper => "Paper",
            Weapon::Scissors => "Scissors",
        }
    }

    /// Menu labels, index-aligned with `ALL`.
    pub fn labels() -> [&'static str; 3] {
        Self::ALL.map(Weapon::name)
    }

    pub fn beats(self, other: Weapon) -> bool {
        matches!(
            (self, other),
            (Weapon::Rock, Weapon::Scissors)
                | (Weapon::Scissors, Weapon::Paper)
                | (Weapon::Paper, Weapon::Rock)
        )
    }
}

/// Result of a single round, seen from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    PlayerWin,
    OpponentWin,
    Draw,
}

impl RoundOutcome {
    pub fn resolve(player: Weapon, opponent: Weapon) -> Self {
        if player == opponent {
            RoundOutcome::Draw
        } else if player.beats(opponent) {
            RoundOutcome::PlayerWin
        } else {
            RoundOutcome::OpponentWin
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RoundOutcome::PlayerWin => "you win",
            RoundOutcome::OpponentWin => "opponent wins",
            RoundOutcome::Draw => "draw",
        }
    }
}
