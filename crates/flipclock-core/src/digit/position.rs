use std::fmt;

use crate::time::ClockDigits;

/// One character cell of the clock face, in display order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum DigitPosition {
    H1,
    H2,
    M1,
    M2,
    S1,
    S2,
}

impl DigitPosition {
    /// Every position, in the fixed update order.
    pub const ALL: [DigitPosition; 6] = [
        DigitPosition::H1,
        DigitPosition::H2,
        DigitPosition::M1,
        DigitPosition::M2,
        DigitPosition::S1,
        DigitPosition::S2,
    ];

    /// Positions present for a given seconds setting: `h1..m2`, plus `s1,s2`
    /// only when seconds are shown.
    #[inline]
    pub fn active(show_seconds: bool) -> &'static [DigitPosition] {
        if show_seconds { &Self::ALL } else { &Self::ALL[..4] }
    }

    /// Stable element id (`"h1"`, `"m2"`, …).
    pub fn id(self) -> &'static str {
        match self {
            DigitPosition::H1 => "h1",
            DigitPosition::H2 => "h2",
            DigitPosition::M1 => "m1",
            DigitPosition::M2 => "m2",
            DigitPosition::S1 => "s1",
            DigitPosition::S2 => "s2",
        }
    }

    /// Index of the two-digit group (hours 0, minutes 1, seconds 2).
    #[inline]
    pub fn group(self) -> usize {
        self as usize / 2
    }

    /// Picks this position's character out of a sampled time.
    pub fn pick(self, digits: &ClockDigits) -> char {
        let pair = match self.group() {
            0 => &digits.hour,
            1 => &digits.minute,
            _ => &digits.second,
        };
        let index = self as usize % 2;
        pair.chars().nth(index).unwrap_or('0')
    }
}

impl fmt::Display for DigitPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_positions_without_seconds() {
        assert_eq!(
            DigitPosition::active(false),
            &[DigitPosition::H1, DigitPosition::H2, DigitPosition::M1, DigitPosition::M2]
        );
    }

    #[test]
    fn active_positions_with_seconds() {
        assert_eq!(DigitPosition::active(true), &DigitPosition::ALL);
    }

    #[test]
    fn pick_reads_first_and_second_character() {
        let digits = ClockDigits {
            hour: "14".into(),
            minute: "05".into(),
            second: "09".into(),
        };
        let picked: String = DigitPosition::ALL.iter().map(|p| p.pick(&digits)).collect();
        assert_eq!(picked, "140509");
    }

    #[test]
    fn groups() {
        assert_eq!(DigitPosition::H2.group(), 0);
        assert_eq!(DigitPosition::M1.group(), 1);
        assert_eq!(DigitPosition::S2.group(), 2);
    }
}
