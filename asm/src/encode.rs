use arch::{comp::Comp, dest::Dest, inst::Inst, jump::Jump};

use crate::error::Error;
use crate::parser::{Compute, Operand, Stmt};
use crate::pass::Line;

/// Resolves one rewritten line into a machine instruction. Labels produce
/// no word.
pub fn encode(line: &Line) -> Result<Option<Inst>, Error> {
    let idx = line.idx;
    match &line.stmt {
        Stmt::Label(_) => Ok(None),
        Stmt::Address(Operand::Literal(value)) => Ok(Some(Inst::A(*value))),
        Stmt::Address(Operand::Symbol(name)) => Err(Error::UnresolvedSymbol {
            name: name.clone(),
            line: idx,
        }),
        Stmt::Compute(compute) => encode_compute(idx, compute).map(Some),
    }
}

fn encode_compute(idx: usize, compute: &Compute) -> Result<Inst, Error> {
    let comp = Comp::parse(&compute.comp).ok_or_else(|| Error::UnknownComputation {
        code: compute.to_string(),
        line: idx,
    })?;
    let dest = match &compute.dest {
        Some(dest) => Dest::parse(dest).ok_or_else(|| Error::MalformedInstruction {
            code: compute.to_string(),
            line: idx,
        })?,
        None => Dest::NULL,
    };
    let jump = match &compute.jump {
        Some(jump) => Jump::parse(jump).map_err(|_| Error::UnknownJump {
            code: compute.to_string(),
            line: idx,
        })?,
        None => Jump::Null,
    };
    Ok(Inst::C { dest, comp, jump })
}
