use crate::{comp::Comp, dest::Dest, jump::Jump, symbol::ADDR_MAX};

use color_print::cformat;
use std::fmt;

/// A fully resolved instruction, one machine word each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    /// `@value`
    A(u16),
    /// `dest=comp;jump`
    C { dest: Dest, comp: Comp, jump: Jump },
}

impl Inst {
    // 111a cccc ccdd djjj
    const C_PREFIX: u16 = 0b111 << 13;

    pub fn to_bin(&self) -> u16 {
        match self {
            Inst::A(value) => value & ADDR_MAX,
            Inst::C { dest, comp, jump } => {
                Self::C_PREFIX
                    | (comp.bits() as u16) << 6
                    | (dest.bits() as u16) << 3
                    | jump.bits() as u16
            }
        }
    }

    pub fn from_bin(bin: u16) -> Option<Inst> {
        if bin & 0x8000 == 0 {
            return Some(Inst::A(bin));
        }
        Some(Inst::C {
            dest: Dest::from_bits((bin >> 3 & 0b111) as u8),
            comp: Comp::from_bits((bin >> 6 & 0b1111111) as u8)?,
            jump: Jump::from_bits((bin & 0b111) as u8),
        })
    }

    /// Binary text of the word, most significant bit first.
    pub fn to_text(&self) -> String {
        format!("{:016b}", self.to_bin())
    }

    pub fn cformat(&self) -> String {
        match self {
            Inst::A(value) => cformat!("<red>@</><yellow>{}</>", value),
            Inst::C { dest, comp, jump } => {
                let dest = if dest.is_null() {
                    String::new()
                } else {
                    cformat!("<blue>{}</>=", dest)
                };
                let jump = match jump {
                    Jump::Null => String::new(),
                    _ => cformat!(";<red>{}</>", jump),
                };
                cformat!("{}<green>{}</>{}", dest, comp, jump)
            }
        }
    }
}

impl fmt::Display for Inst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inst::A(value) => write!(f, "@{value}"),
            Inst::C { dest, comp, jump } => {
                if !dest.is_null() {
                    write!(f, "{dest}=")?;
                }
                write!(f, "{comp}")?;
                if *jump != Jump::Null {
                    write!(f, ";{jump}")?;
                }
                Ok(())
            }
        }
    }
}
