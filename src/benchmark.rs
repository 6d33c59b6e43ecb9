use std::io::Write;
use std::time::{ Duration, Instant };
use log::debug;
use num_bigint::BigUint;
use crate::{ crypto::{ HashAlgorithm, Hasher }, Buffer, SearchEngine, SearchError };

// CONSTANTS
// ================================================================================================
const DEFAULT_TEXT          : &str = "All you need is love";
const DEFAULT_MAX_ZERO_BITS : u32 = 256;
const DEFAULT_INITIAL_TARGET: usize = 1 << 25;
const DEFAULT_MIN_TARGET    : usize = 5;

// TYPES AND INTERFACES
// ================================================================================================

/// Parameters of a benchmark run: how many solutions to find for each number of zero bits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchmarkOptions {
    text            : String,
    max_zero_bits   : u32,
    initial_target  : usize,
    min_target      : usize,
    algorithm       : HashAlgorithm,
}

/// Measurements for a single number of zero bits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchmarkReport {
    pub zero_bits   : u32,
    pub found       : usize,
    pub candidates  : BigUint,
    pub elapsed     : Duration,
}

// BENCHMARK OPTIONS IMPLEMENTATION
// ================================================================================================
impl BenchmarkOptions {

    pub fn new(
        text            : &str,
        max_zero_bits   : u32,
        initial_target  : usize,
        min_target      : usize,
        algorithm       : HashAlgorithm) -> BenchmarkOptions
    {
        assert!(initial_target > 0, "initial_target must be greater than 0");
        assert!(min_target > 0, "min_target must be greater than 0");

        return BenchmarkOptions {
            text: text.to_string(),
            max_zero_bits,
            initial_target,
            min_target,
            algorithm,
        };
    }

    pub fn text(&self) -> &str {
        return &self.text;
    }

    pub fn max_zero_bits(&self) -> u32 {
        return self.max_zero_bits;
    }

    pub fn initial_target(&self) -> usize {
        return self.initial_target;
    }

    pub fn min_target(&self) -> usize {
        return self.min_target;
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        return self.algorithm;
    }

    /// Number of solutions to find at `zero_bits`: the initial target halved once per level,
    /// but never less than the minimum target.
    pub fn target(&self, zero_bits: u32) -> usize {
        let target = self.initial_target.checked_shr(zero_bits).unwrap_or(0);
        return if target <= self.min_target { self.min_target } else { target };
    }
}

impl Default for BenchmarkOptions {

    fn default() -> BenchmarkOptions {
        return BenchmarkOptions {
            text            : String::from(DEFAULT_TEXT),
            max_zero_bits   : DEFAULT_MAX_ZERO_BITS,
            initial_target  : DEFAULT_INITIAL_TARGET,
            min_target      : DEFAULT_MIN_TARGET,
            algorithm       : HashAlgorithm::default(),
        };
    }
}

// BENCHMARK REPORT IMPLEMENTATION
// ================================================================================================
impl BenchmarkReport {

    /// Average milliseconds per solution; `None` when the level took less than a millisecond.
    pub fn average_millis(&self) -> Option<f64> {
        let millis = self.elapsed.as_millis();
        if millis == 0 || self.found == 0 {
            return None;
        }
        return Some(millis as f64 / self.found as f64);
    }
}

// BENCHMARK RUNNER
// ================================================================================================

/// Measures how long it takes to find solutions for every number of zero bits from 0 up to
/// `max_zero_bits`. For each level the scan restarts from the benchmark text and continues from
/// one solution to the next until the level's target number of solutions has been found.
/// Progress is written to `output` as each level completes.
pub fn run<W: Write>(options: &BenchmarkOptions, output: &mut W) -> Result<Vec<BenchmarkReport>, SearchError> {

    let hasher = Hasher::new(options.algorithm());
    let mut reports = Vec::with_capacity(options.max_zero_bits() as usize + 1);

    for zero_bits in 0..=options.max_zero_bits() {
        writeln!(output, "\nZeroes: {}", zero_bits)?;
        let target = options.target(zero_bits);

        let mut buffer = Buffer::new(options.text().as_bytes().to_vec());
        let mut candidates = BigUint::from(0u32);
        let mut found = 0;

        let now = Instant::now();
        while found < target {
            let mut engine = SearchEngine::new(&hasher, buffer, zero_bits);
            let result = engine.run();
            candidates += result.steps() + 1u32;
            found += 1;

            // resume the scan right after the accepted input
            buffer = result.into_input();
            buffer.increment();
        }
        let elapsed = now.elapsed();

        let report = BenchmarkReport { zero_bits, found, candidates, elapsed };
        debug!("{} zero bits: found {} solutions among {} candidates in {} ms",
            zero_bits, report.found, report.candidates, elapsed.as_millis());

        writeln!(output, "Found: {}", report.found)?;
        writeln!(output, "Time taken: {}", elapsed.as_millis())?;
        if let Some(average) = report.average_millis() {
            writeln!(output, "Average: {}", average)?;
        }

        reports.push(report);
    }

    return Ok(reports);
}
