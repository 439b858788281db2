use bimap::BiMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mnemonic <-> `a c1 c2 c3 c4 c5 c6` bits of the computation field.
static COMP: Lazy<BiMap<&'static str, u8>> = Lazy::new(|| {
    [
        // a = 0
        ("0", 0b0101010),
        ("1", 0b0111111),
        ("-1", 0b0111010),
        ("D", 0b0001100),
        ("A", 0b0110000),
        ("!D", 0b0001101),
        ("!A", 0b0110001),
        ("-D", 0b0001111),
        ("-A", 0b0110011),
        ("D+1", 0b0011111),
        ("A+1", 0b0110111),
        ("D-1", 0b0001110),
        ("A-1", 0b0110010),
        ("D+A", 0b0000010),
        ("D-A", 0b0010011),
        ("A-D", 0b0000111),
        ("D&A", 0b0000000),
        ("D|A", 0b0010101),
        // a = 1
        ("M", 0b1110000),
        ("!M", 0b1110001),
        ("-M", 0b1110011),
        ("M+1", 0b1110111),
        ("M-1", 0b1110010),
        ("D+M", 0b1000010),
        ("D-M", 0b1010011),
        ("M-D", 0b1000111),
        ("D&M", 0b1000000),
        ("D|M", 0b1010101),
    ]
    .into_iter()
    .collect()
});

/// Computation field of a compute instruction. Only values present in the
/// table can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Comp(u8);

impl Comp {
    pub fn parse(s: &str) -> Option<Self> {
        COMP.get_by_left(s).map(|&bits| Comp(bits))
    }

    pub fn from_bits(bits: u8) -> Option<Self> {
        COMP.contains_right(&bits).then_some(Comp(bits))
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn mnemonic(&self) -> &'static str {
        COMP.get_by_right(&self.0).copied().unwrap_or("?")
    }
}

impl fmt::Display for Comp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[test]
fn test() {
    assert_eq!(COMP.len(), 28);
    assert_eq!(Comp::parse("0").map(|c| c.bits()), Some(0b0101010));
    assert_eq!(Comp::parse("D+A").map(|c| c.bits()), Some(0b0000010));
    assert_eq!(Comp::parse("M").map(|c| c.bits()), Some(0b1110000));
    assert!(Comp::parse("A+D").is_none());
    assert!(Comp::parse("").is_none());
    assert_eq!(Comp::from_bits(0b0001100).map(|c| c.to_string()), Some("D".into()));
    assert!(Comp::from_bits(0b1111111).is_none());
}
