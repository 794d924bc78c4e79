use static_assertions::const_assert;

#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct Lockup {
    // Start of the lockup.
    pub start_ts: i64,
    // End of the lockup.
    pub end_ts: i64,
    pub kind: LockupKind,
    // Empty bytes for future upgrades.
    pub reserved: [u8; 15],
}
const_assert!(std::mem::size_of::<Lockup>() == 2 * 8 + 1 + 15);
const_assert!(std::mem::size_of::<Lockup>() % 8 == 0);

impl Default for Lockup {
    fn default() -> Self {
        Self {
            start_ts: 0,
            end_ts: 0,
            kind: LockupKind::None,
            reserved: [0; 15],
        }
    }
}

impl Lockup {
    /// Whether withdraws are still constrained by this lockup.
    pub fn is_locked(&self) -> bool {
        !matches!(self.kind, LockupKind::None)
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockupKind {
    None,
    Daily,
    Monthly,
    Cliff,
}
