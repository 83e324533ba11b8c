//! Score constants for SiDing evaluation

/// Score scale used by evaluation and search
pub struct Score;

impl Score {
    /// Opponent reduced below two pieces
    pub const WIN: i32 = 10_000;
    /// Value of one piece of material advantage
    pub const PIECE: i32 = 100;
    /// Default tie-break jitter range: scores get `0..JITTER` added
    pub const JITTER: i32 = 2;
    /// Bound for alpha-beta windows, above any reachable score
    pub const INF: i32 = Score::WIN * 2;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::INITIAL_PIECES;

    #[test]
    fn test_score_hierarchy() {
        // Largest material swing plus jitter stays below a win
        let max_material = Score::PIECE * INITIAL_PIECES as i32;
        assert!(max_material + Score::JITTER < Score::WIN);
        assert!(Score::WIN < Score::INF);
    }

    #[test]
    fn test_jitter_below_piece_gap() {
        assert!(Score::JITTER > 0);
        assert!(Score::JITTER < Score::PIECE);
    }
}
