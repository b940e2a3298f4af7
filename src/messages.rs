use crate::battle::BattleOutcome;
use crate::chance::MessagePicker;

/// Flavor-text categories.  `{nickname}` in a template is replaced with
/// the player's nickname.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Greeting,
    Victory,
    Defeat,
    Draw,
    Farewell,
}

const GREETINGS: &[&str] = &[
    "Welcome to the arena, {nickname}!",
    "The crowd roars as {nickname} steps into the ring.",
    "Sharpen your scissors, {nickname}. The computer is waiting.",
    "Good to see you, {nickname}. Let's settle this the old way.",
];

const VICTORY: &[&str] = &[
    "Flawless instincts, {nickname}! The arena is yours.",
    "Victory! The computer never saw it coming.",
    "{nickname} wins the battle. Legends are made like this.",
    "Your paper wrapped up the competition!",
];

const DEFEAT: &[&str] = &[
    "Defeat... the machine was one step ahead this time.",
    "Tough luck, {nickname}. Dust yourself off and try again.",
    "The computer claims this battle. Revenge awaits.",
    "Crushed like scissors under a rock.",
];

const DRAW: &[&str] = &[
    "A stalemate! Neither side would give an inch.",
    "Evenly matched, {nickname}. Nobody takes the crown today.",
    "Draw. The crowd demands a rematch!",
];

const FAREWELL: &[&str] = &[
    "Thanks for playing, {nickname}. See you next time!",
    "The arena lights dim. Farewell, {nickname}.",
    "Rest your hands, champion. Goodbye!",
];

impl MessageKind {
    /// Templates for this category, in a fixed order.
    pub fn pool(self) -> &'static [&'static str] {
        match self {
            MessageKind::Greeting => GREETINGS,
            MessageKind::Victory => VICTORY,
            MessageKind::Defeat => DEFEAT,
            MessageKind::Draw => DRAW,
            MessageKind::Farewell => FAREWELL,
        }
    }
}

impl From<BattleOutcome> for MessageKind {
    fn from(outcome: BattleOutcome) -> Self {
        match outcome {
            BattleOutcome::Victory => MessageKind::Victory,
            BattleOutcome::Defeat => MessageKind::Defeat,
            BattleOutcome::Draw => MessageKind::Draw,
        }
    }
}

pub fn fill(template: &str, nickname: &str) -> String {
    template.replace("{nickname}", nickname)
}

/// Pick a line for `kind` and fill in the nickname.
pub fn compose<P: MessagePicker + ?Sized>(picker: &mut P, kind: MessageKind, nickname: &str) -> String {
    fill(picker.pick_message(kind.pool()), nickname)
}
