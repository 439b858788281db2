use serde::{Deserialize, Serialize};
use std::fmt;

/// Destination registers of a compute instruction. Encoded as `d1 d2 d3`,
/// i.e. A = 0b100, D = 0b010, M = 0b001.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dest {
    pub a: bool,
    pub d: bool,
    pub m: bool,
}

impl Dest {
    pub const NULL: Dest = Dest {
        a: false,
        d: false,
        m: false,
    };

    /// Parses the text left of `=`. Registers may appear in any order but
    /// each at most once.
    pub fn parse(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }
        let mut dest = Dest::NULL;
        for c in s.chars() {
            let slot = match c {
                'A' => &mut dest.a,
                'D' => &mut dest.d,
                'M' => &mut dest.m,
                _ => return None,
            };
            if *slot {
                return None;
            }
            *slot = true;
        }
        Some(dest)
    }

    pub fn bits(&self) -> u8 {
        (self.a as u8) << 2 | (self.d as u8) << 1 | self.m as u8
    }

    pub fn from_bits(bits: u8) -> Self {
        Dest {
            a: bits & 0b100 != 0,
            d: bits & 0b010 != 0,
            m: bits & 0b001 != 0,
        }
    }

    pub fn is_null(&self) -> bool {
        *self == Dest::NULL
    }
}

impl fmt::Display for Dest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a {
            f.write_str("A")?;
        }
        if self.m {
            f.write_str("M")?;
        }
        if self.d {
            f.write_str("D")?;
        }
        Ok(())
    }
}

#[test]
fn test() {
    assert_eq!(Dest::parse("M").map(|d| d.bits()), Some(0b001));
    assert_eq!(Dest::parse("D").map(|d| d.bits()), Some(0b010));
    assert_eq!(Dest::parse("MD").map(|d| d.bits()), Some(0b011));
    assert_eq!(Dest::parse("DM").map(|d| d.bits()), Some(0b011));
    assert_eq!(Dest::parse("AMD").map(|d| d.bits()), Some(0b111));
    assert_eq!(Dest::parse(""), None);
    assert_eq!(Dest::parse("X"), None);
    assert_eq!(Dest::parse("MM"), None);
    assert_eq!(Dest::from_bits(0b101).to_string(), "AM");
    assert!(Dest::from_bits(0).is_null());
}
