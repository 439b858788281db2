use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Default,
    FromPrimitive,
    IntoPrimitive,
    EnumString,
    Display,
)]
#[repr(u8)]
pub enum Jump {
    #[default]
    #[strum(serialize = "")]
    Null = 0b000,
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}

impl Jump {
    /// Mnemonics are case-sensitive; an empty string means no jump.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(j) => Ok(j),
            Err(_) => Err(format!("Unknown jump: {s}")),
        }
    }

    pub fn bits(self) -> u8 {
        self.into()
    }

    pub fn from_bits(bits: u8) -> Self {
        Self::from(bits & 0b111)
    }
}

#[test]
fn test() {
    assert_eq!(Jump::parse("JGT"), Ok(Jump::JGT));
    assert_eq!(Jump::parse("JMP").map(Jump::bits), Ok(0b111));
    assert_eq!(Jump::parse(""), Ok(Jump::Null));
    assert!(Jump::parse("jmp").is_err());
    assert!(Jump::parse("JXX").is_err());
    assert_eq!(Jump::from_bits(0b101), Jump::JNE);
    assert_eq!(Jump::JLE.to_string(), "JLE");
    assert_eq!(Jump::Null.to_string(), "");
}
