use crate::assemble::Output;
use crate::symbol::SymbolKind;
use arch::inst::Inst;
use color_print::cformat;

/// Annotated listing: ROM address, word, source line, the rewritten
/// statement and the decoded word.
pub fn print_dump<S: AsRef<str>>(path: &str, lines: &[S], output: &Output) {
    println!(
        "{}+------[{}]{}",
        "-".repeat(23),
        path,
        "-".repeat(45usize.saturating_sub(path.len()))
    );

    let mut stmts = output.lines.iter().peekable();
    let mut words = output.words.iter().enumerate().peekable();
    for (idx, raw) in lines.iter().enumerate() {
        let line_num = idx + 1;
        let raw = raw.as_ref();
        let stmt = stmts
            .next_if(|line| line.idx == idx)
            .map(|line| line.stmt.cformat())
            .unwrap_or_default();
        match words.next_if(|(_, (line, _))| *line == idx) {
            Some((pc, (_, inst))) => {
                let decoded = Inst::from_bin(inst.to_bin())
                    .map(|inst| inst.cformat())
                    .unwrap_or_else(|| cformat!("<r,s>??</>"));
                println!(
                    "[{:04X}] {} | {:>4}: {:<24} {} {}",
                    pc,
                    inst.to_text(),
                    line_num,
                    raw,
                    stmt,
                    decoded
                );
            }
            None => println!("{:23}| {:>4}: {:<24} {}", "", line_num, raw, stmt),
        }
    }
    println!("-----------------------+-----------------------------------------------------");
}

pub fn print_symbols(output: &Output) {
    for (name, sym) in output.symbols.iter() {
        let kind = match sym.kind {
            SymbolKind::Predefined => continue,
            SymbolKind::Label => cformat!("<g>label</>"),
            SymbolKind::Variable => cformat!("<c>var  </>"),
        };
        println!("  {} 0x{:04X} {}", kind, sym.addr, name);
    }
}
