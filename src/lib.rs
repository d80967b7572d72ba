/// Solver for the Set card game: find the valid 3-card combinations
/// ("sets") hidden in a 9 or 12 card board.
///
/// A set is 3 cards where, for each of the 4 attributes (color, shape,
/// shading, count), the values are all identical or all pairwise distinct.
/// The basic board deals 9 cards hiding 4 sets, the advanced board deals
/// 12 cards hiding 6.

pub mod card;
pub mod decode;
pub mod is_set;
pub mod solver;
pub mod utils;

pub use card::{Card, CardPool, Color, Shading};
pub use decode::{DecodeError, RawCard, decode_card, decode_pool};
pub use is_set::is_valid_set;
pub use solver::{
    SolveError, SolveSession, Triple, ValidSet, combination_count, count_all_sets,
    enumerate_all_sets,
};
