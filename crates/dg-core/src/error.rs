//! Error types for the dice game engine.

/// Errors that can occur while setting up dice or a game session.
///
/// Every variant is raised at construction time. Rolling and scoring
/// never fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A die needs its lower bound strictly below its upper bound.
    #[error("upper bound must be larger than lower bound (got {lower}..={upper})")]
    InvalidDieBounds {
        /// Requested lowest face.
        lower: i32,
        /// Requested highest face.
        upper: i32,
    },

    /// A dice cluster needs its lower bound at or below its upper bound.
    #[error("upper bound must be greater than or equal to lower bound (got {lower}..={upper})")]
    InvalidDiceBounds {
        /// Requested lowest face.
        lower: i32,
        /// Requested highest face.
        upper: i32,
    },

    /// A legacy die's highest possible roll, `lower + upper`, does not fit in an `i32`.
    #[error("legacy die range {lower}..={upper} can roll past the largest face value")]
    LegacyRangeOverflow {
        /// Requested lowest face.
        lower: i32,
        /// Requested highest face.
        upper: i32,
    },

    /// A dice cluster was requested with no dice in it.
    #[error("a dice cluster needs at least one die")]
    EmptyDice,

    /// The requested number of dice falls outside the game's limits.
    #[error("you must select a whole number of dice between {min} and {max} (got {count})")]
    DiceCountOutOfRange {
        /// Requested number of dice.
        count: usize,
        /// Smallest allowed number of dice.
        min: usize,
        /// Largest allowed number of dice.
        max: usize,
    },

    /// A configuration file could not be read or parsed.
    #[error("invalid config: {0}")]
    Config(String),
}

/// Convenience result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
