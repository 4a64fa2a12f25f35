use clap::Parser;
use gitnl::audit::HistoryLogger;
use gitnl::command::generate;
use gitnl::config::{Config, ConfigError};
use gitnl::error::AppResult;
use gitnl::git::GitRunner;
use gitnl::nlp::{DependencyParser, extract_table};
use gitnl::ui::{Menu, Selection};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

/// Exit status when the user quits the menu
const EXIT_QUIT: i32 = 1;
const EXIT_ERROR: i32 = 2;

/// Turn a natural-language sentence into a git command
#[derive(Debug, Parser)]
#[command(name = "gitnl", version, about)]
struct Cli {
    /// Sentence describing the git operation,
    /// e.g. "push branch test_branch to remote github_repo"
    sentence: String,

    /// Dependency-parser script (overrides the config file)
    #[arg(long, value_name = "PATH")]
    parser: Option<PathBuf>,

    /// Working directory for the parser invocation
    #[arg(long, value_name = "DIR")]
    workdir: Option<PathBuf>,

    /// Execute the chosen command instead of only printing it
    #[arg(long)]
    run: bool,

    /// Skip writing the history log entry
    #[arg(long)]
    no_log: bool,
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(EXIT_ERROR);
        }
    }
}

fn run(cli: Cli) -> AppResult<i32> {
    let config = Config::load_or_default()?;

    let script = cli
        .parser
        .or(config.parser.script_path)
        .ok_or(ConfigError::MissingParserScript)?;
    let workdir = cli.workdir.or(config.parser.working_dir);

    let mut parser = DependencyParser::new(&script);
    if let Some(dir) = &workdir {
        parser = parser.with_working_dir(dir);
    }

    let raw = parser.parse(&cli.sentence)?;
    let tokens = extract_table(&raw, config.parser.trailing_lines)?;
    let set = generate(&tokens)?;

    for note in &set.notes {
        eprintln!("{}", note);
    }
    for cmd in &set.commands {
        println!("git {}", cmd);
    }

    let chosen = match prompt_for_choice(&set.commands)? {
        Some(cmd) => cmd,
        None => return Ok(EXIT_QUIT),
    };

    println!("Doing this command: \"git {}\"", chosen);

    if config.behavior.log_commands && !cli.no_log {
        log_choice(&cli.sentence, &chosen);
    }

    if cli.run {
        let runner = GitRunner::new(std::env::current_dir()?);
        let output = runner.run(&chosen)?;

        print!("{}", output.stdout);
        eprint!("{}", output.stderr);
        return Ok(output.exit_code);
    }

    Ok(0)
}

/// Show the menu and read selections until one is valid
///
/// Returns None when the user quits (or stdin closes).
fn prompt_for_choice(commands: &[String]) -> AppResult<Option<String>> {
    let menu = Menu::new(commands);
    let stdin = io::stdin();

    loop {
        print!("{}", menu.render());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF counts as quitting
            return Ok(None);
        }

        match menu.select(&line) {
            Ok(Selection::Quit) => return Ok(None),
            Ok(Selection::Choice(index)) => return Ok(Some(commands[index].clone())),
            Err(e) => eprintln!("{}", e),
        }
    }
}

/// Write the history entry; failures are reported, never fatal
fn log_choice(sentence: &str, command: &str) {
    match HistoryLogger::new() {
        Ok(logger) => {
            if let Err(e) = logger.log_choice(sentence, command) {
                eprintln!("Warning: failed to write history log: {}", e);
            }
        }
        Err(e) => eprintln!("Warning: failed to open history log: {}", e),
    }
}
