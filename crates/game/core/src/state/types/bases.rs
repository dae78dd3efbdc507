use std::fmt;

bitflags::bitflags! {
    /// Occupancy of first, second and third base.
    ///
    /// Runners are anonymous: only whether a base is occupied is tracked, and
    /// each base holds at most one runner.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct BaseRunners: u8 {
        const FIRST = 1;
        const SECOND = 1 << 1;
        const THIRD = 1 << 2;
    }
}

impl BaseRunners {
    pub const EMPTY: Self = Self::empty();
    pub const LOADED: Self = Self::all();

    pub fn from_bools(first: bool, second: bool, third: bool) -> Self {
        let mut bases = Self::empty();
        bases.set(Self::FIRST, first);
        bases.set(Self::SECOND, second);
        bases.set(Self::THIRD, third);
        bases
    }

    pub const fn first(self) -> bool {
        self.contains(Self::FIRST)
    }

    pub const fn second(self) -> bool {
        self.contains(Self::SECOND)
    }

    pub const fn third(self) -> bool {
        self.contains(Self::THIRD)
    }

    /// Number of occupied bases (0..=3).
    pub const fn occupied(self) -> u8 {
        self.bits().count_ones() as u8
    }
}

impl fmt::Display for BaseRunners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = |occupied: bool, label: char| if occupied { label } else { '-' };
        write!(
            f,
            "{}{}{}",
            mark(self.first(), '1'),
            mark(self.second(), '2'),
            mark(self.third(), '3')
        )
    }
}
