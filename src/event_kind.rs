use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// Replaces the resting quantity at a price
    AbsoluteUpdate,
    /// Adds a signed quantity to a price
    DeltaMutation,
    /// Moves a contribution from one price (and quantity) to another on the same side
    ModifyMutation,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AbsoluteUpdate => "absolute update",
            Self::DeltaMutation => "delta mutation",
            Self::ModifyMutation => "modify mutation",
        })
    }
}
