//! mathvox CLI - Speak mathematical notation

#[cfg(feature = "cli")]
use clap::{ArgAction, Parser, Subcommand};
#[cfg(feature = "cli")]
use mathvox::{
    math2speech::pipeline,
    math_to_speech_traced, math_to_speech_with_options, speak, speak_text_only,
    synthesis::convert_to_file,
    utils::files::default_audio_path,
    CommandSynthesizer, Fallback, FileError, SpeechError, SpeechOptions, SpeechOutcome,
    SpeechResult, StdTextFiles, SynthesisConfig, TextFiles,
};
#[cfg(feature = "cli")]
use std::io::{self, Read};
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};
#[cfg(feature = "cli")]
use std::process::ExitCode;
#[cfg(feature = "cli")]
use tracing_subscriber::filter::LevelFilter;

/// Where generated audio lands when no output path is given
#[cfg(feature = "cli")]
const OUTPUT_DIR: &str = "output";

#[cfg(feature = "cli")]
const BATCH_EXTENSIONS: [&str; 3] = ["txt", "md", "tex"];

#[cfg(feature = "cli")]
const DEMO_SENTENCES: [&str; 8] = [
    "The equation E = mc² is famous.",
    "The integral ∫(x²+2x+1)dx equals x³/3 + x² + x + C",
    "The Schrödinger equation is H = -ℏ²/2m ∇² + V",
    "For a sphere, V = 4/3πr³",
    "The eigenvalues λᵢ satisfy det(A - λI) = 0",
    r"LaTeX example: $\frac{\partial^2 u}{\partial t^2} = c^2 \nabla^2 u$",
    "The velocity is d^2x/dt^2 and sorting costs O(n log n)",
    r"For all ε > 0 there is δ with ||x - y|| <= δ in \mathbb{R}",
];

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "mathvox")]
#[command(version)]
#[command(about = "mathvox - Speak mathematical notation through a text-to-speech engine", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Text with mathematical formulas (reads stdin if neither TEXT nor --input is given)
    text: Option<String>,

    /// Input text file containing mathematical formulas
    #[arg(short, long, conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Output audio file (WAV); the converted text is saved next to it as .txt
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML file with synthesizer settings; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Text-to-speech executable
    #[arg(long)]
    executable: Option<String>,

    /// Model to use (default: F5TTS_v1_Base)
    #[arg(short, long)]
    model: Option<String>,

    /// Number of NFE steps for generation (default: 20)
    #[arg(long)]
    nfe_steps: Option<u32>,

    /// CFG strength for generation (default: 2.0)
    #[arg(long)]
    cfg_strength: Option<f32>,

    /// Only convert math to text, don't run the speech engine
    #[arg(long)]
    text_only: bool,

    /// Leave slashes and bare operators as written
    #[arg(long)]
    conservative: bool,

    /// More log output (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Convert text without synthesizing speech
    Convert {
        /// Input text, or a file path with --file (reads stdin if omitted)
        input: Option<String>,

        /// Treat the input as a file path
        #[arg(short = 'f', long)]
        file: bool,

        /// Output file path (writes to stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the text after every pipeline stage
        #[arg(long)]
        trace: bool,

        /// Leave slashes and bare operators as written
        #[arg(long)]
        conservative: bool,
    },

    /// Convert every .txt, .md and .tex file in a directory
    Batch {
        /// Input directory or a single file
        input: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output_dir: PathBuf,

        /// Leave slashes and bare operators as written
        #[arg(long)]
        conservative: bool,
    },

    /// Run the built-in demonstration sentences
    Demo,

    /// Show version and pipeline info
    Info,
}

#[cfg(feature = "cli")]
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Some(ref cmd) => handle_subcommand(cmd),
        None => run_speak(&cli),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("✗ {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "cli")]
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::ERROR
    } else {
        match verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn speech_options(conservative: bool) -> SpeechOptions {
    if conservative {
        SpeechOptions::conservative()
    } else {
        SpeechOptions::default()
    }
}

#[cfg(feature = "cli")]
fn read_stdin() -> SpeechResult<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| FileError::read("<stdin>", e))?;
    Ok(buffer)
}

/// Config file first, then flag overrides
#[cfg(feature = "cli")]
fn synthesis_config(cli: &Cli) -> SpeechResult<SynthesisConfig> {
    let mut config = match cli.config {
        Some(ref path) => SynthesisConfig::from_toml_file(path)?,
        None => SynthesisConfig::default(),
    };
    if let Some(ref executable) = cli.executable {
        config = config.with_executable(executable.clone());
    }
    if let Some(ref model) = cli.model {
        config = config.with_model(model.clone());
    }
    if let Some(steps) = cli.nfe_steps {
        config = config.with_nfe_steps(steps);
    }
    if let Some(strength) = cli.cfg_strength {
        config = config.with_cfg_strength(strength);
    }
    config.validate()?;
    Ok(config)
}

#[cfg(feature = "cli")]
fn run_speak(cli: &Cli) -> SpeechResult<ExitCode> {
    let files = StdTextFiles::new();
    let text = match (&cli.text, &cli.input) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => files.read_text(path)?,
        (None, None) => read_stdin()?,
    };

    let audio_path = cli
        .output
        .clone()
        .unwrap_or_else(|| default_audio_path(Path::new(OUTPUT_DIR), cli.input.as_deref()));
    let options = speech_options(cli.conservative);

    let outcome = if cli.text_only {
        speak_text_only(&text, &audio_path, &files, &options)?
    } else {
        let synthesizer = CommandSynthesizer::new(synthesis_config(cli)?);
        speak(&text, &audio_path, &files, &synthesizer, &options)?
    };

    println!("{}", outcome.converted_text());
    report_outcome(&outcome);

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(feature = "cli")]
fn report_outcome(outcome: &SpeechOutcome) {
    eprintln!("✓ Converted text saved to: {}", outcome.text_path().display());
    match outcome {
        SpeechOutcome::Audio { audio_path, .. } => {
            eprintln!("✓ Speech generated: {}", audio_path.display());
        }
        SpeechOutcome::TextOnly { reason: None, .. } => {}
        SpeechOutcome::TextOnly {
            reason: Some(Fallback::Unavailable(err)),
            ..
        } => {
            eprintln!("⚠ {}", err);
            eprintln!("  Only the converted text was produced.");
        }
        SpeechOutcome::TextOnly {
            reason: Some(Fallback::SynthesisFailed(err)),
            ..
        } => {
            eprintln!("✗ {}", err);
        }
    }
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: &Commands) -> SpeechResult<ExitCode> {
    let files = StdTextFiles::new();

    match cmd {
        Commands::Convert {
            input,
            file,
            output,
            trace,
            conservative,
        } => {
            let content = match input {
                Some(path) if *file => files.read_text(Path::new(path))?,
                Some(text) => text.clone(),
                None if *file => {
                    return Err(SpeechError::config(
                        "an input file path is required with --file",
                    ))
                }
                None => read_stdin()?,
            };
            let options = speech_options(*conservative);

            if *trace {
                print!("{}", math_to_speech_traced(&content, &options));
            }

            match output {
                Some(path) => {
                    convert_to_file(&content, path, &files, &options)?;
                    eprintln!("✓ Output written to: {}", path.display());
                }
                None if *trace => {}
                None => println!("{}", math_to_speech_with_options(&content, &options)),
            }
        }

        Commands::Batch {
            input,
            output_dir,
            conservative,
        } => {
            let options = speech_options(*conservative);
            let inputs = batch_inputs(input)?;

            let mut success_count = 0;
            let mut error_count = 0;

            for file_path in inputs {
                let stem = file_path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("output");
                let output_path = output_dir.join(format!("{}.txt", stem));

                let result = files
                    .read_text(&file_path)
                    .map_err(SpeechError::from)
                    .and_then(|content| convert_to_file(&content, &output_path, &files, &options));

                match result {
                    Ok(_) => {
                        eprintln!("✓ {}", output_path.display());
                        success_count += 1;
                    }
                    Err(e) => {
                        eprintln!("✗ {} - {}", file_path.display(), e);
                        error_count += 1;
                    }
                }
            }

            eprintln!(
                "\nBatch conversion complete: {} succeeded, {} failed",
                success_count, error_count
            );

            if error_count > 0 {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Demo => {
            println!("=== mathvox demo ===");
            for sentence in DEMO_SENTENCES {
                println!("Original:  {}", sentence);
                println!("Converted: {}", mathvox::math_to_speech(sentence));
                println!("{}", "-".repeat(80));
            }
        }

        Commands::Info => {
            println!("mathvox - Speak mathematical notation");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Pipeline:");
            for stage in pipeline() {
                println!("  {:<12} {} rule(s)", stage.stage.name(), stage.rules.len());
            }
            println!();
            let synth = SynthesisConfig::default();
            println!("Speech engine:");
            println!("  executable: {}", synth.executable);
            println!("  model:      {}", synth.model);
            println!();
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// A single file, or the matching files of a directory in name order
#[cfg(feature = "cli")]
fn batch_inputs(input: &Path) -> SpeechResult<Vec<PathBuf>> {
    if !input.is_dir() {
        return Ok(vec![input.to_path_buf()]);
    }

    let entries = std::fs::read_dir(input).map_err(|e| FileError::read(input, e))?;
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|s| s.to_str())
                    .is_some_and(|ext| BATCH_EXTENSIONS.contains(&ext))
        })
        .collect();
    paths.sort();
    Ok(paths)
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install mathvox --features cli");
    eprintln!("  mathvox [OPTIONS] [TEXT]");
}
