use crate::error::Error;
use crate::parser::{self, Kind, Operand, Stmt};
use crate::symbol::{Binding, SymbolTable};
use arch::symbol::ADDR_MAX;

/// A statement together with the index of the source line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub idx: usize,
    pub stmt: Stmt,
}

/// Pass 1: binds every `(LABEL)` to the index of the next real instruction.
pub fn first_pass<S: AsRef<str>>(
    lines: &[S],
    mut symbols: SymbolTable,
) -> Result<SymbolTable, Error> {
    let mut pc: usize = 0;
    for (idx, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if parser::is_skipped(line) {
            continue;
        }
        match parser::classify(line) {
            Kind::Label => {
                let name = parser::parse_label(idx, line)?;
                let addr = match u16::try_from(pc) {
                    Ok(addr) if addr <= ADDR_MAX => addr,
                    _ => {
                        return Err(Error::AddressOutOfRange {
                            value: pc.to_string(),
                            line: idx,
                        })
                    }
                };
                symbols.bind_label(name, addr, idx)?;
            }
            Kind::Address | Kind::Compute => pc += 1,
        }
    }
    Ok(symbols)
}

/// Pass 2: rewrites every symbolic `@name` into a literal, allocating
/// variables upward from `var_base` in order of first use.
///
/// Blank and comment lines are dropped; labels are kept so the encoder can
/// skip them.
pub fn second_pass<S: AsRef<str>>(
    lines: &[S],
    mut symbols: SymbolTable,
    var_base: u16,
) -> Result<(Vec<Line>, SymbolTable), Error> {
    let mut next_free = var_base;
    let mut rewritten = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if parser::is_skipped(line) {
            continue;
        }
        let stmt = match Stmt::parse(idx, line)? {
            Stmt::Address(Operand::Symbol(name)) => {
                if symbols.lookup(&name).is_none() && next_free > ADDR_MAX {
                    return Err(Error::AddressOutOfRange {
                        value: next_free.to_string(),
                        line: idx,
                    });
                }
                let binding = symbols.resolve_or_allocate(&name, next_free);
                if let Binding::Allocated(_) = binding {
                    next_free += 1;
                }
                Stmt::Address(Operand::Literal(binding.addr()))
            }
            stmt => stmt,
        };
        rewritten.push(Line { idx, stmt });
    }
    Ok((rewritten, symbols))
}
