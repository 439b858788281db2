use color_print::cformat;
use std::fmt;

use crate::error::Error;
use arch::symbol::ADDR_MAX;

// ----------------------------------------------------------------------------
// Line cleaning

/// Drops an inline `// comment` and surrounding whitespace.
pub fn clean(raw: &str) -> &str {
    match raw.find("//") {
        Some(pos) => raw[..pos].trim(),
        None => raw.trim(),
    }
}

/// Blank lines and full-line comments carry no instruction.
pub fn is_skipped(line: &str) -> bool {
    line.is_empty() || line.starts_with("//")
}

// ----------------------------------------------------------------------------
// Classification

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Address,
    Label,
    Compute,
}

/// Expects a line that is neither blank nor a comment.
pub fn classify(line: &str) -> Kind {
    match line.chars().next() {
        Some('@') => Kind::Address,
        Some('(') => Kind::Label,
        _ => Kind::Compute,
    }
}

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Address(Operand),
    Label(String),
    Compute(Compute),
}

impl Stmt {
    pub fn parse(idx: usize, code: &str) -> Result<Stmt, Error> {
        match classify(code) {
            Kind::Address => Ok(Stmt::Address(Operand::parse(idx, &code[1..])?)),
            Kind::Label => Ok(Stmt::Label(parse_label(idx, code)?.to_string())),
            Kind::Compute => Ok(Stmt::Compute(Compute::parse(idx, code)?)),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Address(operand) => write!(f, "@{operand}"),
            Stmt::Label(name) => write!(f, "({name})"),
            Stmt::Compute(compute) => write!(f, "{compute}"),
        }
    }
}

impl Stmt {
    pub fn cformat(&self) -> String {
        match self {
            Stmt::Address(Operand::Literal(v)) => cformat!("<red>@</><yellow>{}</>", v),
            Stmt::Address(Operand::Symbol(s)) => cformat!("<red>@</><r,u>{}</>", s),
            Stmt::Label(name) => cformat!("<g>({})</>", name),
            Stmt::Compute(compute) => cformat!("<green>{}</>", compute),
        }
    }
}

/// Extracts `name` from `(name)`.
pub fn parse_label(idx: usize, code: &str) -> Result<&str, Error> {
    let malformed = || Error::MalformedInstruction {
        code: code.to_string(),
        line: idx,
    };
    let name = code
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(malformed)?;
    if is_symbol(name) {
        Ok(name)
    } else {
        Err(malformed())
    }
}

/// Letters, digits, `_ . $ :`, not starting with a digit.
fn is_symbol(s: &str) -> bool {
    match s.chars().next() {
        Some(head) if !head.is_ascii_digit() => s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$' | ':')),
        _ => false,
    }
}

// ----------------------------------------------------------------------------
// Address operand

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Literal(u16),
    Symbol(String),
}

impl Operand {
    /// A literal is all decimal digits; everything else is a symbol name.
    fn parse(idx: usize, s: &str) -> Result<Operand, Error> {
        if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
            match s.parse::<u16>() {
                Ok(v) if v <= ADDR_MAX => Ok(Operand::Literal(v)),
                _ => Err(Error::AddressOutOfRange {
                    value: s.to_string(),
                    line: idx,
                }),
            }
        } else if is_symbol(s) {
            Ok(Operand::Symbol(s.to_string()))
        } else {
            Err(Error::MalformedInstruction {
                code: format!("@{s}"),
                line: idx,
            })
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Literal(v) => write!(f, "{v}"),
            Operand::Symbol(s) => write!(f, "{s}"),
        }
    }
}

// ----------------------------------------------------------------------------
// Compute fields

/// Symbolic `dest=comp;jump`, not yet looked up in the tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compute {
    pub dest: Option<String>,
    pub comp: String,
    pub jump: Option<String>,
}

impl Compute {
    fn parse(idx: usize, code: &str) -> Result<Compute, Error> {
        let (dest, rest) = match code.split_once('=') {
            Some((dest, rest)) => (Some(dest), rest),
            None => (None, code),
        };
        let (comp, jump) = match rest.split_once(';') {
            Some((comp, jump)) => (comp, Some(jump)),
            None => (rest, None),
        };
        if comp.is_empty() || dest == Some("") {
            return Err(Error::MalformedInstruction {
                code: code.to_string(),
                line: idx,
            });
        }
        Ok(Compute {
            dest: dest.map(str::to_string),
            comp: comp.to_string(),
            jump: jump.map(str::to_string),
        })
    }
}

impl fmt::Display for Compute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(dest) = &self.dest {
            write!(f, "{dest}=")?;
        }
        write!(f, "{}", self.comp)?;
        if let Some(jump) = &self.jump {
            write!(f, ";{jump}")?;
        }
        Ok(())
    }
}
