use serde::{Deserialize, Serialize};

use crate::encode::encode;
use crate::error::Error;
use crate::pass::{first_pass, second_pass, Line};
use crate::symbol::SymbolTable;
use arch::inst::Inst;
use arch::symbol::VAR_BASE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// First RAM address handed out to variables.
    pub var_base: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config { var_base: VAR_BASE }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}

#[derive(Debug, Clone)]
pub struct Output {
    /// Rewritten lines from pass 2, labels included.
    pub lines: Vec<Line>,
    /// One word per emitted instruction, paired with its line.
    pub words: Vec<(usize, Inst)>,
    pub symbols: SymbolTable,
}

impl Output {
    pub fn bins(&self) -> Vec<u16> {
        self.words.iter().map(|(_, inst)| inst.to_bin()).collect()
    }

    /// Words as 16-character binary strings.
    pub fn texts(&self) -> Vec<String> {
        self.words.iter().map(|(_, inst)| inst.to_text()).collect()
    }
}

/// Runs pass 1, pass 2 and encoding over pre-trimmed source lines.
/// Fails on the first error without producing any output.
pub fn assemble<S: AsRef<str>>(lines: &[S], config: &Config) -> Result<Output, Error> {
    let symbols = first_pass(lines, SymbolTable::new())?;
    let (lines, symbols) = second_pass(lines, symbols, config.var_base)?;

    let mut words = Vec::with_capacity(lines.len());
    for line in &lines {
        if let Some(inst) = encode(line)? {
            words.push((line.idx, inst));
        }
    }

    Ok(Output {
        lines,
        words,
        symbols,
    })
}

#[test]
fn test() {
    let cfg = Config::from_yaml("var_base: 256").unwrap();
    assert_eq!(cfg.var_base, 256);
    assert_eq!(Config::from_yaml("{}").unwrap(), Config::default());
    assert!(Config::from_yaml("var_base: -1").is_err());

    let out = assemble(&["@x", "(END)", "@END", "0;JMP"], &cfg).unwrap();
    assert_eq!(out.bins(), vec![256, 1, 0b1110101010000111]);
    assert_eq!(out.lines.len(), 4);
}
