use std::env;
use std::ffi::OsString;
use std::io::{ self, Write };
use std::process;
use clap::{ Parser, Subcommand };
use log::LevelFilter;
use hashgrind::{ benchmark, interactive, crypto::HashAlgorithm, BenchmarkOptions, InputEncoding, SearchError };

/// hashgrind - find inputs whose hash starts with a given number of zero bits
#[derive(Parser, Debug)]
#[command(name = "hashgrind")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Brute-force proof-of-work search over incrementing byte buffers", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search for a single solution; prompts for anything not given on the command line
    Search {
        /// Text to start the search from
        #[arg(short, long, value_name = "TEXT")]
        text: Option<OsString>,

        /// Number of leading zero bits to search for
        #[arg(short, long, value_name = "BITS")]
        zero_bits: Option<u32>,

        /// Hash algorithm (sha256, sha3-256, blake3)
        #[arg(short, long, default_value = "sha256", value_name = "ALGORITHM")]
        algorithm: String,

        /// Treat the text as hex-encoded bytes
        #[arg(long)]
        hex: bool,

        /// Give up once every value of the input has been tried
        #[arg(long)]
        halt_on_wrap: bool,
    },

    /// Measure average time per solution for an increasing number of zero bits
    Bench {
        /// Text to start every level from
        #[arg(short, long, default_value = "All you need is love", value_name = "TEXT")]
        text: String,

        /// Highest number of zero bits to measure
        #[arg(short, long, default_value_t = 256, value_name = "BITS")]
        max_zero_bits: u32,

        /// Number of solutions to find at 0 zero bits; halved at every level
        #[arg(long, default_value_t = 1 << 25, value_name = "COUNT")]
        initial_target: usize,

        /// Lower bound on the number of solutions per level
        #[arg(long, default_value_t = 5, value_name = "COUNT")]
        min_target: usize,

        /// Hash algorithm (sha256, sha3-256, blake3)
        #[arg(short, long, default_value = "sha256", value_name = "ALGORITHM")]
        algorithm: String,
    },
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let mut logger = env_logger::Builder::new();
    logger.filter_level(level);
    if let Ok(filters) = env::var("RUST_LOG") {
        logger.parse_filters(&filters);
    }
    logger.init();

    if let Err(err) = execute(args.command) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn execute(command: Option<Command>) -> Result<(), SearchError> {

    let command = command.unwrap_or(Command::Search {
        text        : None,
        zero_bits   : None,
        algorithm   : HashAlgorithm::default().to_string(),
        hex         : false,
        halt_on_wrap: false,
    });

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    match command {
        Command::Search { text, zero_bits, algorithm, hex, halt_on_wrap } => {
            let request = interactive::Request {
                text        : text.map(interactive::decode_argument).transpose()?,
                zero_bits,
                encoding    : if hex { InputEncoding::Hex } else { InputEncoding::Utf8 },
                algorithm   : algorithm.parse()?,
                halt_on_wrap,
            };
            interactive::run(&mut stdin.lock(), &mut output, &request)?;
        },
        Command::Bench { text, max_zero_bits, initial_target, min_target, algorithm } => {
            let algorithm: HashAlgorithm = algorithm.parse()?;
            let options = BenchmarkOptions::new(
                &text, max_zero_bits, initial_target.max(1), min_target.max(1), algorithm);
            benchmark::run(&options, &mut output)?;
        },
    }

    output.flush()?;
    return Ok(());
}
