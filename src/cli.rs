//! Command-line interface implementation

use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{self, CliOverrides};
use crate::profile::{profile_corpus, profile_corpus_parallel, CorpusProfile};
use crate::report::{
    create_report_file, report_file_name, resolve_output_path, write_json_report,
    write_text_report,
};

/// Process exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_INVALID_ARGS: u8 = 2;

/// Lexband - profile word and letter frequencies in a text corpus
#[derive(Parser)]
#[command(name = "lxb")]
#[command(about = "Lexband - rank word and letter frequencies and band them into popular/common/rare")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Profile a corpus file and write the frequency report
    Analyze(AnalyzeArgs),
    /// Validate configuration and print the resolved settings
    Check {
        /// Explicit config file (default: discovered lexband.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input text file to profile
    pub input: PathBuf,

    /// Output file or directory.
    /// If omitted: report goes to stdout (or the configured output dir)
    /// If directory (ends with /): dir/output-{input}.txt
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit the profile as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Fraction of ranks classed popular (default 0.05)
    #[arg(long)]
    pub popular: Option<f64>,

    /// Fraction of ranks classed common (default 0.05)
    #[arg(long)]
    pub common: Option<f64>,

    /// Fraction of ranks classed rare (default 0.05)
    #[arg(long)]
    pub rare: Option<f64>,

    /// Minimum word length kept by the tokenizer (default 2)
    #[arg(long)]
    pub min_word_len: Option<usize>,

    /// Characters to skip during letter extraction (default "- ")
    #[arg(long)]
    pub exclude: Option<String>,

    /// Worker threads for aggregation (0 = rayon default)
    #[arg(long)]
    pub jobs: Option<usize>,

    /// Aggregate on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Explicit config file (default: discovered lexband.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => run_analyze(&args),
        Commands::Check { config } => run_check(config.as_deref()),
    }
}

/// Execute the analyze command
fn run_analyze(args: &AnalyzeArgs) -> ExitCode {
    let overrides = CliOverrides {
        popular: args.popular,
        common: args.common,
        rare: args.rare,
        min_word_len: args.min_word_len,
        exclude_letters: args.exclude.clone(),
        out_dir: None,
        jobs: args.jobs,
    };

    let settings = match config::resolve(args.config.as_deref(), &overrides) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    // Open input file
    let file = match File::open(&args.input) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: Cannot open input file '{}': {}", args.input.display(), e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let lines: Vec<String> = match BufReader::new(file).lines().collect() {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("Error: Failed to read '{}': {}", args.input.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let rules = settings.token_rules();
    let fractions = settings.fractions();

    let profile = if args.sequential {
        profile_corpus(&lines, &rules, &fractions)
    } else if settings.runtime.jobs > 0 {
        let pool = match rayon::ThreadPoolBuilder::new()
            .num_threads(settings.runtime.jobs)
            .build()
        {
            Ok(pool) => pool,
            Err(e) => {
                eprintln!("Error: Failed to build worker pool: {e}");
                return ExitCode::from(EXIT_ERROR);
            }
        };
        pool.install(|| profile_corpus_parallel(&lines, &rules, &fractions))
    } else {
        profile_corpus_parallel(&lines, &rules, &fractions)
    };

    // Decide where the report goes: explicit -o wins, then the configured
    // output directory, then stdout.
    let target = match (&args.output, &settings.output.dir) {
        (Some(output), _) => Some(resolve_output_path(&args.input, output)),
        (None, Some(dir)) => Some(dir.join(report_file_name(&args.input))),
        (None, None) => None,
    };

    let source = args
        .input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.input.display().to_string());

    match target {
        Some(path) => {
            if let Err(e) = write_report_file(&path, &profile, &source, args.json) {
                eprintln!("Error: Failed to save '{}': {}", path.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
            println!("Saved: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            if let Err(e) = render(&mut out, &profile, &source, args.json) {
                eprintln!("Error: Failed to write report: {e}");
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}

fn render<W: Write>(out: &mut W, profile: &CorpusProfile, source: &str, json: bool) -> io::Result<()> {
    if json {
        write_json_report(out, profile)
    } else {
        write_text_report(out, profile, source)
    }
}

fn write_report_file(path: &Path, profile: &CorpusProfile, source: &str, json: bool) -> io::Result<()> {
    let file = create_report_file(path)?;
    let mut out = BufWriter::new(file);
    render(&mut out, profile, source, json)?;
    out.flush()
}

/// Execute the check command
fn run_check(config_path: Option<&Path>) -> ExitCode {
    match config_path.map(Path::to_path_buf).or_else(config::find_config) {
        Some(path) => println!("Config: {}", path.display()),
        None => println!("Config: builtin defaults"),
    }

    let settings = match config::resolve(config_path, &CliOverrides::default()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    match toml::to_string_pretty(&settings) {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: Failed to render settings: {e}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
