use color_print::cprintln;
use hasm::{assemble, parser, util, Config, Error};
use std::io::{BufRead, Write};
use std::path::Path;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    #[clap(default_value = "main.asm")]
    input: String,

    /// Output file [default: input with `.hack` extension]
    #[clap(short, long)]
    output: Option<String>,

    /// Dump assembly listing and symbols
    #[clap(short, long)]
    dump: bool,

    /// Write symbol table as YAML
    #[clap(short, long)]
    symbols: Option<String>,

    /// YAML config file
    #[clap(short, long)]
    config: Option<String>,

    /// First variable address (overrides config)
    #[clap(short, long)]
    base: Option<u16>,

    /// Only print errors
    #[clap(short, long)]
    quiet: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    let mut raw = vec![];
    if let Err(err) = run(&args, &mut raw) {
        match err.line() {
            Some(_) => err.print_diag(&args.input, raw.as_slice()),
            None => cprintln!("<red,bold>error</>: {}", err),
        }
        std::process::exit(1);
    }
}

/// `raw` receives the source lines so errors can point into them.
fn run(args: &Args, raw: &mut Vec<String>) -> Result<(), Error> {
    macro_rules! log {
        ($($arg:tt)*) => {
            if !args.quiet {
                println!($($arg)*);
            }
        };
    }

    log!("Hack Assembler");

    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| Error::FileOpen(path.clone(), e))?;
            Config::from_yaml(&text).map_err(|e| Error::Yaml(path.clone(), e))?
        }
        None => Config::default(),
    };
    if let Some(base) = args.base {
        config.var_base = base;
    }

    log!("1. Read File");
    log!("  < {}", args.input);
    *raw = read_lines(&args.input)?;
    let lines: Vec<&str> = raw.iter().map(|l| parser::clean(l)).collect();

    log!("2. Resolve Symbols & Generate Binary");
    let output = assemble(&lines, &config)?;
    log!("  - {} words, {} symbols", output.words.len(), output.symbols.len());

    let out_path = match &args.output {
        Some(path) => path.clone(),
        None => Path::new(&args.input)
            .with_extension("hack")
            .to_string_lossy()
            .into_owned(),
    };
    log!("3. Write Binary");
    log!("  > {}", out_path);
    let mut file =
        std::fs::File::create(&out_path).map_err(|e| Error::FileCreate(out_path.clone(), e))?;
    for text in output.texts() {
        writeln!(file, "{}", text).map_err(|e| Error::FileWrite(out_path.clone(), e))?;
    }

    if let Some(path) = &args.symbols {
        log!("  > {}", path);
        let yaml = serde_yaml::to_string(&output.symbols)
            .map_err(|e| Error::Yaml(path.clone(), e))?;
        std::fs::write(path, yaml).map_err(|e| Error::FileWrite(path.clone(), e))?;
    }

    if args.dump {
        util::print_dump(&args.input, raw.as_slice(), &output);
        util::print_symbols(&output);
    }

    Ok(())
}

fn read_lines(path: &str) -> Result<Vec<String>, Error> {
    let file = std::fs::File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
    std::io::BufReader::new(file)
        .lines()
        .map(|line| line.map_err(Error::FileRead))
        .collect()
}
