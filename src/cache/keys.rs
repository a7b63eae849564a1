//! Query key registry
//!
//! Pure, deterministic mapping from logical cache targets to structurally
//! comparable keys. Two keys address the same cached slice exactly when
//! they compare equal; differing namespaces or ids never collide.

/// A labeled partition of the card cache.
///
/// The same card id may be cached independently in each namespace; a write
/// to one namespace never propagates to the other. Ownership-specific
/// fields (e.g. `isFavorited`) live only in the user-cards projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Global catalog view
    Card,
    /// The authenticated user's owned-card view
    UserCards,
}

/// Opaque, structurally comparable cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// One catalog card, keyed by id
    Card { id: String },
    /// The user's full owned-card listing (no id parameter)
    UserCards,
    /// Per-card view within the user-cards namespace, independent of the
    /// id-indexed listing slice
    UserCard { id: String },
}

impl QueryKey {
    /// Key for one card in the global catalog namespace
    pub fn card(id: impl Into<String>) -> Self {
        QueryKey::Card { id: id.into() }
    }

    /// Key for the current user's full owned-card set
    pub fn user_cards() -> Self {
        QueryKey::UserCards
    }

    /// Key for one card's cached projection inside the user-cards
    /// namespace. Addresses its own slice; patches issued through
    /// [`Namespace::UserCards`] touch the listing slice only.
    pub fn user_card(id: impl Into<String>) -> Self {
        QueryKey::UserCard { id: id.into() }
    }
}

impl Namespace {
    /// The key a patch on `(namespace, id)` addresses.
    ///
    /// Catalog cards are cached one slice per id; user cards share the
    /// single listing slice and are addressed by id inside it.
    pub fn slice_key(&self, id: &str) -> QueryKey {
        match self {
            Namespace::Card => QueryKey::card(id),
            Namespace::UserCards => QueryKey::user_cards(),
        }
    }
}
