#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Return mode reported in the factory field of each data packet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReturnMode {
    /// The strongest return of each firing is reported
    Strongest,
    /// The last return of each firing is reported
    Last,
    /// Both strongest and last returns are reported
    Dual,
    /// Factory byte not recognised
    Unknown(u8),
}
