//! Player identification.
//!
//! Senet is strictly a two-player game: the human and the computer. The
//! engine never assumes which of the two is being driven by a person:
//! `Human`/`Computer` are labels for the two seats, and every rules query
//! takes the acting player explicitly.

use serde::{Deserialize, Serialize};

/// One of the two Senet players.
///
/// ```
/// use senet_rules::core::PlayerId;
///
/// assert_eq!(PlayerId::Human.opponent(), PlayerId::Computer);
/// assert_eq!(PlayerId::Computer.opponent(), PlayerId::Human);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    Human,
    Computer,
}

impl PlayerId {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::Human => PlayerId::Computer,
            PlayerId::Computer => PlayerId::Human,
        }
    }

    /// Iterate over both players, human first.
    ///
    /// The order is load-bearing for win detection: when both players could
    /// in principle satisfy a predicate, the human is examined first.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [PlayerId::Human, PlayerId::Computer].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::Human => write!(f, "Human"),
            PlayerId::Computer => write!(f, "Computer"),
        }
    }
}
