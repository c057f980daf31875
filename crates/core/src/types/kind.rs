//! Record kinds and the collections they live in.

/// A kind of persisted record.
///
/// Each kind corresponds to exactly one document collection, named after the
/// lowercased kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Product,
    Review,
    Newsletter,
    ContactMessage,
    Order,
}

impl RecordKind {
    /// Name of the collection holding documents of this kind.
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Review => "review",
            Self::Newsletter => "newsletter",
            Self::ContactMessage => "contactmessage",
            Self::Order => "order",
        }
    }

    /// Human-readable singular name, used in error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Product => "Product",
            Self::Review => "Review",
            Self::Newsletter => "Newsletter subscription",
            Self::ContactMessage => "Contact message",
            Self::Order => "Order",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.collection())
    }
}
