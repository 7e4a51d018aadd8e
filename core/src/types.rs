/// Cell identifier, 1-based and stable for the lifetime of a grid.
pub type CellId = u16;

/// Count type used for grid sizes, round lengths and progress.
pub type CellCount = u16;

/// Value dealt into a cell.
pub type Digit = u8;

/// Milliseconds, used for both timestamps and durations.
pub type Millis = u64;

/// Identifies a dealt round so deferred actions can be matched against it.
pub type RoundId = u32;
