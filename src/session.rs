/// Per-process player record.  Owned by the game loop, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub nickname: String,
    pub age: u8,
    pub battles: u32,
    pub wins: u32,
}

impl SessionStats {
    pub fn new(nickname: String, age: u8) -> Self {
        SessionStats {
            nickname,
            age,
            battles: 0,
            wins: 0,
        }
    }

    /// Count a finished battle.
    pub fn record(&mut self, won: bool) {
        self.battles += 1;
        if won {
            self.wins += 1;
        }
    }

    /// Whole-number win percentage; 0 before the first battle.
    pub fn win_rate(&self) -> u32 {
        if self.battles == 0 {
            0
        } else {
            (u64::from(self.wins) * 100 / u64::from(self.battles)) as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_is_empty() {
        let stats = SessionStats::new("neo".into(), 30);
        assert_eq!((stats.battles, stats.wins, stats.win_rate()), (0, 0, 0));
    }

    #[test]
    fn record_counts_battles_and_wins() {
        let mut stats = SessionStats::new("neo".into(), 30);
        stats.record(true);
        stats.record(false);
        stats.record(true);
        assert_eq!(stats.battles, 3);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.win_rate(), 66);
    }

    #[test]
    fn win_rate_survives_huge_counts() {
        let stats = SessionStats {
            nickname: "neo".into(),
            age: 30,
            battles: u32::MAX,
            wins: u32::MAX / 2,
        };
        assert_eq!(stats.win_rate(), 49);

        let perfect = SessionStats {
            battles: u32::MAX,
            wins: u32::MAX,
            ..stats
        };
        assert_eq!(perfect.win_rate(), 100);
    }
}
