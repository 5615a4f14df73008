use std::ops::BitOr;

/// The directions a property participates in.
///
/// `READ` properties are read from an instance (parameter binding). `WRITE`
/// properties are written onto an instance from a row; result mapping only
/// considers these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Actions(u8);

impl Actions {
    pub const NONE: Actions = Actions(0);
    pub const READ: Actions = Actions(0b01);
    pub const WRITE: Actions = Actions(0b10);
    pub const ALL: Actions = Actions(0b11);

    /// Returns `true` if every action in `other` is also in `self`.
    pub fn contains(self, other: Actions) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if `self` and `other` share at least one action.
    pub fn intersects(self, other: Actions) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl Default for Actions {
    fn default() -> Self {
        Actions::ALL
    }
}

impl BitOr for Actions {
    type Output = Actions;

    fn bitor(self, rhs: Actions) -> Actions {
        Actions(self.0 | rhs.0)
    }
}
