//! RNG module - seedable random piece selection
//!
//! Pieces are picked uniformly among [`ShapeKind::ALL`]. The random source is
//! injected rather than global, so a seed fully determines the piece sequence.
//!
//! Also provides a scripted source for deterministic testing.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::pieces::Piece;
use crate::types::ShapeKind;

/// Anything that can hand the engine its next piece.
pub trait PieceSource {
    fn next_piece(&mut self) -> Piece;
}

/// Pick a shape uniformly at random and return it at its spawn position
pub fn get_random_piece<R: Rng + ?Sized>(rng: &mut R) -> Piece {
    let idx = rng.random_range(0..ShapeKind::ALL.len());
    Piece::spawn(ShapeKind::ALL[idx])
}

/// Uniform piece generator over an injected RNG
#[derive(Debug, Clone)]
pub struct PieceCatalog<R = ChaCha8Rng> {
    rng: R,
    /// Seed the RNG was built from, when known
    seed: Option<u64>,
}

impl PieceCatalog<ChaCha8Rng> {
    /// Create a catalog whose sequence is fully determined by `seed`
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create a catalog with a fresh seed drawn from the thread RNG.
    ///
    /// The seed is kept so the session can be replayed with [`Self::from_seed`].
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::rng().random())
    }
}

impl<R: Rng> PieceCatalog<R> {
    /// Wrap an existing RNG (seed unknown)
    pub fn with_rng(rng: R) -> Self {
        Self { rng, seed: None }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_random_piece(&mut self) -> Piece {
        get_random_piece(&mut self.rng)
    }
}

impl<R: Rng> PieceSource for PieceCatalog<R> {
    fn next_piece(&mut self) -> Piece {
        self.get_random_piece()
    }
}

impl Default for PieceCatalog<ChaCha8Rng> {
    fn default() -> Self {
        Self::from_seed(1)
    }
}

/// Source that cycles through a fixed list of kinds
#[derive(Debug, Clone)]
pub struct ScriptedPieces {
    kinds: Vec<ShapeKind>,
    index: usize,
}

impl ScriptedPieces {
    /// An empty script falls back to cycling through every kind.
    pub fn new(kinds: impl IntoIterator<Item = ShapeKind>) -> Self {
        let mut kinds: Vec<ShapeKind> = kinds.into_iter().collect();
        if kinds.is_empty() {
            kinds = ShapeKind::ALL.to_vec();
        }
        Self { kinds, index: 0 }
    }

    pub fn repeat(kind: ShapeKind) -> Self {
        Self::new([kind])
    }
}

impl PieceSource for ScriptedPieces {
    fn next_piece(&mut self) -> Piece {
        let kind = self.kinds[self.index % self.kinds.len()];
        self.index = (self.index + 1) % self.kinds.len();
        Piece::spawn(kind)
    }
}
