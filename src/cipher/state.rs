use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

pub const DEFAULT_TARGET: &str = "MASSON";
pub const DEFAULT_TILES: &str = "MASSONXYZ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("target word is empty")]
    EmptyTarget,
    #[error("tile set has {available} '{letter}' tile(s), target word needs {needed}")]
    MissingTile {
        letter: char,
        needed: usize,
        available: usize,
    },
}

/// Result of a single tile tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Puzzle already unlocked, nothing changed.
    Ignored,
    /// Tap extended the attempt by one correct character.
    Advanced,
    /// Tap broke the prefix, the attempt was cleared.
    Rejected,
    /// Tap completed the target word.
    Unlocked,
}

/// Puzzle state for one page session.
///
/// `attempt` is always a prefix of `target`, and `tile_order` is always a
/// permutation of `tile_set`.
#[derive(Debug, Clone, PartialEq)]
pub struct PuzzleState {
    target: Vec<char>,
    tile_set: Vec<char>,
    tile_order: Vec<char>,
    attempt: Vec<char>,
    unlocked: bool,
}

impl PuzzleState {
    /// Builds an unshuffled puzzle. Fails if the tiles cannot spell `target`.
    pub fn new(target: &str, tiles: &str) -> Result<Self, PuzzleError> {
        let target: Vec<char> = target.chars().collect();
        if target.is_empty() {
            return Err(PuzzleError::EmptyTarget);
        }
        let tile_set: Vec<char> = tiles.chars().collect();

        for &letter in &target {
            let needed = target.iter().filter(|&&c| c == letter).count();
            let available = tile_set.iter().filter(|&&c| c == letter).count();
            if available < needed {
                return Err(PuzzleError::MissingTile {
                    letter,
                    needed,
                    available,
                });
            }
        }

        Ok(Self {
            target,
            tile_order: tile_set.clone(),
            tile_set,
            attempt: Vec::new(),
            unlocked: false,
        })
    }

    /// Reorders the tiles and clears any progress.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.tile_order = self.tile_set.clone();
        self.tile_order.shuffle(rng);
        self.attempt.clear();
        self.unlocked = false;
    }

    pub fn tap(&mut self, ch: char) -> TapOutcome {
        if self.unlocked {
            return TapOutcome::Ignored;
        }

        let next = self.attempt.len();
        if self.target.get(next) != Some(&ch) {
            self.attempt.clear();
            return TapOutcome::Rejected;
        }

        self.attempt.push(ch);
        if self.attempt.len() == self.target.len() {
            self.unlocked = true;
            TapOutcome::Unlocked
        } else {
            TapOutcome::Advanced
        }
    }

    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    /// Tiles in on-screen order.
    pub fn tiles(&self) -> &[char] {
        &self.tile_order
    }

    pub fn tile_set(&self) -> &[char] {
        &self.tile_set
    }

    pub fn attempt(&self) -> String {
        self.attempt.iter().collect()
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Matched characters and target length.
    pub fn progress(&self) -> (usize, usize) {
        (self.attempt.len(), self.target.len())
    }
}

impl Default for PuzzleState {
    fn default() -> Self {
        let tile_set: Vec<char> = DEFAULT_TILES.chars().collect();
        Self {
            target: DEFAULT_TARGET.chars().collect(),
            tile_order: tile_set.clone(),
            tile_set,
            attempt: Vec::new(),
            unlocked: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn cat() -> PuzzleState {
        PuzzleState::new("CAT", "CATXY").unwrap()
    }

    fn sorted(tiles: &[char]) -> Vec<char> {
        let mut tiles = tiles.to_vec();
        tiles.sort_unstable();
        tiles
    }

    #[test]
    fn correct_sequence_unlocks_on_last_letter() {
        let mut puzzle = cat();
        assert_eq!(puzzle.tap('C'), TapOutcome::Advanced);
        assert!(!puzzle.is_unlocked());
        assert_eq!(puzzle.tap('A'), TapOutcome::Advanced);
        assert!(!puzzle.is_unlocked());
        assert_eq!(puzzle.tap('T'), TapOutcome::Unlocked);
        assert!(puzzle.is_unlocked());
        assert_eq!(puzzle.attempt(), "CAT");
    }

    #[test]
    fn distractor_resets_attempt() {
        let mut puzzle = cat();
        puzzle.tap('C');
        assert_eq!(puzzle.tap('X'), TapOutcome::Rejected);
        assert_eq!(puzzle.attempt(), "");
        assert!(!puzzle.is_unlocked());
    }

    #[test]
    fn wrong_first_letter_resets_immediately() {
        let mut puzzle = cat();
        assert_eq!(puzzle.tap('A'), TapOutcome::Rejected);
        assert_eq!(puzzle.attempt(), "");
    }

    #[test]
    fn rejected_tap_does_not_count_as_restart() {
        // 'C' after 'C' breaks "CC", it does not start a fresh "C".
        let mut puzzle = cat();
        puzzle.tap('C');
        assert_eq!(puzzle.tap('C'), TapOutcome::Rejected);
        assert_eq!(puzzle.attempt(), "");
    }

    #[test]
    fn unknown_character_is_a_mismatch() {
        let mut puzzle = cat();
        puzzle.tap('C');
        assert_eq!(puzzle.tap('#'), TapOutcome::Rejected);
        assert_eq!(puzzle.attempt(), "");
    }

    #[test]
    fn taps_after_unlock_are_ignored() {
        let mut puzzle = cat();
        for ch in "CAT".chars() {
            puzzle.tap(ch);
        }
        assert_eq!(puzzle.tap('X'), TapOutcome::Ignored);
        assert_eq!(puzzle.tap('C'), TapOutcome::Ignored);
        assert_eq!(puzzle.attempt(), "CAT");
        assert!(puzzle.is_unlocked());
    }

    #[test]
    fn duplicate_letters_match_by_prefix() {
        let mut puzzle = PuzzleState::default();
        let outcomes: Vec<TapOutcome> = "MASSON".chars().map(|c| puzzle.tap(c)).collect();
        assert_eq!(outcomes.last(), Some(&TapOutcome::Unlocked));
        assert!(outcomes[..5].iter().all(|o| *o == TapOutcome::Advanced));
    }

    #[test]
    fn attempt_is_always_empty_or_a_prefix() {
        let mut puzzle = PuzzleState::default();
        let taps = "MAXMASSZOMASSON";
        for ch in taps.chars() {
            puzzle.tap(ch);
            let attempt = puzzle.attempt();
            assert!(DEFAULT_TARGET.starts_with(&attempt), "{attempt} is not a prefix");
        }
        assert!(puzzle.is_unlocked());
    }

    #[test]
    fn shuffle_clears_progress_and_keeps_tiles() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut puzzle = PuzzleState::default();
        puzzle.tap('M');
        puzzle.tap('A');
        puzzle.shuffle(&mut rng);
        assert_eq!(puzzle.attempt(), "");
        assert!(!puzzle.is_unlocked());
        assert_eq!(sorted(puzzle.tiles()), sorted(puzzle.tile_set()));

        for _ in 0..20 {
            puzzle.shuffle(&mut rng);
            assert_eq!(sorted(puzzle.tiles()), sorted(&"MASSONXYZ".chars().collect::<Vec<_>>()));
        }
    }

    #[test]
    fn reset_after_unlock_allows_second_unlock() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut puzzle = cat();
        for ch in "CAT".chars() {
            puzzle.tap(ch);
        }
        puzzle.shuffle(&mut rng);
        assert!(!puzzle.is_unlocked());
        assert_eq!(puzzle.tap('C'), TapOutcome::Advanced);
        assert_eq!(puzzle.tap('A'), TapOutcome::Advanced);
        assert_eq!(puzzle.tap('T'), TapOutcome::Unlocked);
    }

    #[test]
    fn random_tap_sessions_follow_prefix_rule() {
        use rand::seq::SliceRandom;

        let alphabet: Vec<char> = "MASONXYZ#".chars().collect();
        let mut rng = StdRng::seed_from_u64(2026);
        let mut puzzle = PuzzleState::default();

        for _ in 0..500 {
            puzzle.shuffle(&mut rng);
            let mut expected = String::new();
            let mut unlocked = false;

            for _ in 0..30 {
                let ch = *alphabet.choose(&mut rng).unwrap();
                let outcome = puzzle.tap(ch);

                let want = if unlocked {
                    TapOutcome::Ignored
                } else {
                    let candidate = format!("{expected}{ch}");
                    if !DEFAULT_TARGET.starts_with(&candidate) {
                        expected.clear();
                        TapOutcome::Rejected
                    } else if candidate == DEFAULT_TARGET {
                        expected = candidate;
                        unlocked = true;
                        TapOutcome::Unlocked
                    } else {
                        expected = candidate;
                        TapOutcome::Advanced
                    }
                };

                assert_eq!(outcome, want);
                assert_eq!(puzzle.attempt(), expected);
                assert_eq!(puzzle.is_unlocked(), unlocked);
            }
        }
    }

    #[test]
    fn progress_tracks_attempt() {
        let mut puzzle = cat();
        assert_eq!(puzzle.progress(), (0, 3));
        puzzle.tap('C');
        puzzle.tap('A');
        assert_eq!(puzzle.progress(), (2, 3));
        puzzle.tap('Y');
        assert_eq!(puzzle.progress(), (0, 3));
    }

    #[test]
    fn construction_rejects_unsolvable_tiles() {
        assert_eq!(PuzzleState::new("", "ABC"), Err(PuzzleError::EmptyTarget));
        assert_eq!(
            PuzzleState::new("MASSON", "MASONXYZ"),
            Err(PuzzleError::MissingTile {
                letter: 'S',
                needed: 2,
                available: 1
            })
        );
    }

    #[test]
    fn default_matches_constructed_puzzle() {
        assert_eq!(
            PuzzleState::default(),
            PuzzleState::new(DEFAULT_TARGET, DEFAULT_TILES).unwrap()
        );
    }
}
