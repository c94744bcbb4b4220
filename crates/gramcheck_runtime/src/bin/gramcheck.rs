//! gramcheck CLI entry point.

use gramcheck_engine::CheckerConfig;
use gramcheck_runtime::render::render;
use gramcheck_runtime::backend::models_dir;
use gramcheck_runtime::{Backend, LogConfig, OutputFormat, Repl, StandardChecker};
use std::env;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    json: bool,
    backend: Backend,
    logging: LogConfig,
    terminal_punctuation: bool,
    etcetera: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            batch_mode: false,
            show_help: false,
            show_version: false,
            json: false,
            backend: Backend::default(),
            logging: LogConfig::standard(),
            terminal_punctuation: false,
            etcetera: false,
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--json" => config.json = true,
            "--terminal-punctuation" => config.terminal_punctuation = true,
            "--etcetera" => config.etcetera = true,
            "--no-log-file" => config.logging = LogConfig::console_only(),
            flag @ ("--backend" | "--lexicon" | "--models" | "--log-file") => {
                i += 1;
                let Some(value) = args.get(i) else {
                    return Err(format!("{flag} requires a value").into());
                };
                match flag {
                    "--backend" => config.backend = parse_backend(value)?,
                    "--lexicon" => config.backend = Backend::Lexicon(Some(PathBuf::from(value))),
                    "--models" => config.backend = models_backend(PathBuf::from(value))?,
                    _ => config.logging = LogConfig::default().with_file(value),
                }
            }
            arg if arg.starts_with('-') && arg != "-" => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn parse_backend(name: &str) -> Result<Backend, Box<dyn std::error::Error>> {
    match name {
        "lexicon" => Ok(Backend::Lexicon(None)),
        "models" => models_backend(models_dir()),
        other => Err(format!("unknown backend: {other}").into()),
    }
}

#[cfg(feature = "nlprule")]
#[allow(clippy::unnecessary_wraps)]
fn models_backend(dir: PathBuf) -> Result<Backend, Box<dyn std::error::Error>> {
    Ok(Backend::Models(dir))
}

#[cfg(not(feature = "nlprule"))]
fn models_backend(_dir: PathBuf) -> Result<Backend, Box<dyn std::error::Error>> {
    Err("this build has no nlprule support; use --backend lexicon".into())
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("gramcheck {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    config.logging.init()?;

    let checker = config.backend.checker(
        CheckerConfig::default()
            .with_terminal_punctuation(config.terminal_punctuation)
            .with_etcetera(config.etcetera),
    )?;
    let format = if config.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    for file in &config.files {
        let text = if file.as_os_str() == "-" {
            read_stdin()?
        } else {
            fs::read_to_string(file)
                .map_err(|e| format!("failed to read {}: {e}", file.display()))?
        };
        print_report(&checker, &text, format)?;
    }

    // Piped input with nothing else to do is checked as a whole.
    if config.files.is_empty() && (config.batch_mode || !io::stdin().is_terminal()) {
        return print_report(&checker, &read_stdin()?, format);
    }

    if config.batch_mode {
        return Ok(());
    }

    let mut repl = Repl::new(checker)?.with_format(format);
    if !config.files.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn print_report(
    checker: &StandardChecker,
    text: &str,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = checker.check(text)?;
    print!("{}", render(&report, format)?);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

fn read_stdin() -> io::Result<String> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

fn print_help() {
    println!(
        "\x1b[1mgramcheck\x1b[0m - Rule-based grammar checker

\x1b[1mUSAGE:\x1b[0m
    gramcheck [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Files to check before starting the REPL (- for stdin)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help                Print help information
    -V, --version             Print version information
    -b, --batch               Check files (or stdin) and exit (no REPL)
    --json                    Print reports as {{\"response\": {{...}}}}
    --backend NAME            models (default) or lexicon
    --models DIR              Directory holding en_tokenizer.bin and en_rules.bin
                              (default: $GRAMCHECK_MODELS, else ./models)
    --lexicon PATH            Use the word table, plus tags from PATH
                              (one \"TAG word word ...\" per line)
    --log-file PATH           Append per-sentence reports to PATH
                              (default: gramcheck.log)
    --no-log-file             Do not write a log file
    --terminal-punctuation    Require sentences to end in . ? or !
    --etcetera                Flag noun lists missing 'and' or 'etc'

\x1b[1mEXAMPLES:\x1b[0m
    gramcheck                           Start interactive REPL
    gramcheck -b essay.txt              Check essay.txt and exit
    echo \"I has a book.\" | gramcheck    Check stdin
    gramcheck --json -b essay.txt       Print a JSON report

\x1b[1mREPL COMMANDS:\x1b[0m
    :format [text|json]  Show or set the report format
    :rules               List the rules run per sentence
    :quit                Exit
    Ctrl+D               Exit REPL
    Ctrl+C               Cancel current input

Set RUST_LOG (e.g. RUST_LOG=info) for diagnostics on stderr."
    );
}
