use std::fmt;

use serde::{Deserialize, Serialize};

/// Snapshot of the safety profile compiled into this build.
///
/// The checks themselves are resolved once at build time through Cargo
/// features; this type exists so a binary can report or serialize which
/// profile it was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckProfile {
    pub bounds: bool,
    pub empty: bool,
    pub null: bool,
    pub dimensions: bool,
    pub sticky_compute: bool,
}

impl CheckProfile {
    /// The profile of the current build.
    pub const fn active() -> Self {
        Self {
            bounds: cfg!(feature = "bounds-checks"),
            empty: cfg!(feature = "empty-checks"),
            null: cfg!(feature = "null-checks"),
            dimensions: cfg!(feature = "dimension-checks"),
            sticky_compute: cfg!(feature = "sticky-compute"),
        }
    }

    /// True when every validation family is compiled in.
    pub const fn fully_checked(&self) -> bool {
        self.bounds && self.empty && self.null && self.dimensions
    }

    /// True when every validation family is compiled out.
    pub const fn unchecked(&self) -> bool {
        !self.bounds && !self.empty && !self.null && !self.dimensions
    }
}

impl Default for CheckProfile {
    fn default() -> Self {
        Self::active()
    }
}

impl fmt::Display for CheckProfile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn flag(on: bool) -> &'static str {
            if on {
                "on"
            } else {
                "off"
            }
        }
        write!(
            f,
            "bounds={} empty={} null={} dimensions={} sticky-compute={}",
            flag(self.bounds),
            flag(self.empty),
            flag(self.null),
            flag(self.dimensions),
            flag(self.sticky_compute),
        )
    }
}
