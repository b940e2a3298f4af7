use crate::battle;
use crate::chance::{MessagePicker, WeaponSource};
use crate::error::Result;
use crate::menu;
use crate::messages::{self, MessageKind};
use crate::prompt;
use crate::renderer::Renderer;
use crate::session::SessionStats;
use crate::terminal::Input;

const READY_PROMPT: &str = "Ready for battle?";
const READY_OPTIONS: [&str; 2] = ["Yes", "No"];
const READY_YES: usize = 0;

/// The session loop.  `renderer`, `input` and `chance` are injected so the
/// engine runs the same against the console and against test doubles.
pub struct Game<R, I, C> {
    renderer: R,
    input: I,
    chance: C,
}

impl<R, I, C> Game<R, I, C>
where
    R: Renderer,
    I: Input,
    C: WeaponSource + MessagePicker,
{
    pub fn new(renderer: R, input: I, chance: C) -> Self {
        Game {
            renderer,
            input,
            chance,
        }
    }

    /// Onboard the player, then battle until they decline.  Returns the
    /// final statistics.
    pub fn run(&mut self) -> Result<SessionStats> {
        let nickname = prompt::ask_nickname(&mut self.renderer, &mut self.input)?;
        let age = prompt::ask_age(&mut self.renderer, &mut self.input)?;
        let mut stats = SessionStats::new(nickname, age);
        tracing::info!(nickname = %stats.nickname, age, "session started");

        let mut greeting =
            Some(messages::compose(&mut self.chance, MessageKind::Greeting, &stats.nickname));

        loop {
            self.renderer.clear()?;
            self.renderer.stats(&stats)?;
            if let Some(line) = greeting.take() {
                self.renderer.message(&line)?;
            }

            let choice = menu::select(
                &mut self.renderer,
                &mut self.input,
                READY_PROMPT,
                &READY_OPTIONS,
            )?;
            if choice != READY_YES {
                break;
            }

            let report = battle::fight(
                &mut self.renderer,
                &mut self.input,
                &mut self.chance,
                &stats.nickname,
            )?;
            stats.record(report.player_won());

            self.renderer.info("Press any key to continue...")?;
            self.input.wait_key()?;
        }

        let farewell = messages::compose(&mut self.chance, MessageKind::Farewell, &stats.nickname);
        self.renderer.message(&farewell)?;
        tracing::info!(battles = stats.battles, wins = stats.wins, "session ended");
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::BattleOutcome;
    use crate::error::GameError;
    use crate::menu::MenuKey;
    use crate::testing::{weapon_keys, FixedChance, RecordingRenderer, ScriptedInput};
    use crate::weapon::Weapon;

    const YES: [MenuKey; 1] = [MenuKey::Confirm];
    const NO: [MenuKey; 2] = [MenuKey::Down, MenuKey::Confirm];

    fn battle_keys(weapons: [Weapon; 3]) -> Vec<MenuKey> {
        let mut keys = YES.to_vec();
        keys.extend(weapons.iter().flat_map(|w| weapon_keys(*w)));
        keys
    }

    #[test]
    fn declining_right_away_ends_with_empty_stats() {
        let input = ScriptedInput::default().lines(&["Neo", "30"]).keys(&NO);
        let mut game = Game::new(RecordingRenderer::default(), input, FixedChance::default());

        let stats = game.run().unwrap();

        assert_eq!(stats, SessionStats::new("Neo".into(), 30));
        assert_eq!(
            game.renderer.messages,
            vec![
                "Welcome to the arena, Neo!",
                "Thanks for playing, Neo. See you next time!"
            ]
        );
    }

    #[test]
    fn full_session_counts_battles_and_wins() {
        use Weapon::*;
        let mut keys = battle_keys([Rock, Rock, Rock]);
        keys.extend(battle_keys([Paper, Paper, Paper]));
        keys.extend(NO);

        let input = ScriptedInput::default()
            .lines(&["  ", "Neo", "abc", "10", "12"])
            .keys(&keys);
        let chance = FixedChance::new(&[Scissors, Scissors, Scissors, Scissors, Scissors, Scissors]);
        let mut game = Game::new(RecordingRenderer::default(), input, chance);

        let stats = game.run().unwrap();

        assert_eq!(stats.nickname, "Neo");
        assert_eq!(stats.age, 12);
        assert_eq!(stats.battles, 2);
        assert_eq!(stats.wins, 1);
        assert_eq!(
            game.renderer.summaries,
            vec![BattleOutcome::Victory, BattleOutcome::Defeat]
        );
        // Three rejected inputs plus one pause after each battle.
        assert_eq!(game.input.waits, 5);
        assert_eq!(game.input.stray_key_reads, 0);
        assert_eq!(
            game.renderer.infos.iter().filter(|m| *m == "Press any key to continue...").count(),
            2
        );

        let battles_seen: Vec<u32> = game.renderer.stats.iter().map(|s| s.battles).collect();
        assert_eq!(battles_seen, vec![0, 1, 2]);
    }

    #[test]
    fn greeting_is_shown_once() {
        let mut keys = battle_keys([Weapon::Rock; 3]);
        keys.extend(NO);
        let input = ScriptedInput::default().lines(&["Neo", "18"]).keys(&keys);
        let mut game = Game::new(RecordingRenderer::default(), input, FixedChance::default());

        game.run().unwrap();

        let greetings = game
            .renderer
            .messages
            .iter()
            .filter(|m| m.starts_with("Welcome"))
            .count();
        assert_eq!(greetings, 1);
    }

    #[test]
    fn running_out_of_keys_is_an_error() {
        let input = ScriptedInput::default().lines(&["Neo", "18"]).keys(&YES);
        let mut game = Game::new(RecordingRenderer::default(), input, FixedChance::default());

        assert!(matches!(game.run(), Err(GameError::EndOfInput)));
    }
}
