use log::{ info, trace, warn };
use num_bigint::BigUint;
use crate::crypto::{ Digest, DigestFunction, Hasher };
use crate::math;

mod buffer;
pub use buffer::Buffer;

mod options;
pub use options::{ SearchOptions, InputEncoding };


// CONSTANTS
// ================================================================================================
const PROGRESS_INTERVAL: u32 = 1 << 20;

// TYPES AND INTERFACES
// ================================================================================================

/// Brute-force search for an input whose digest has at least `threshold` leading zero bits.
///
/// Starting from the initial buffer, every iteration digests the buffer and either accepts the
/// digest or increments the buffer by one. The step counter is unbounded while the buffer wraps
/// modulo 256^length, so once the buffer wraps the two no longer agree.
pub struct SearchEngine<D: DigestFunction> {
    hasher          : D,
    buffer          : Buffer,
    threshold       : u32,
    steps           : BigUint,
    since_progress  : u32,
    state           : SearchState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchState {
    Searching,
    Found(SearchResult),
}

/// An accepted digest together with the input which produced it and the number of increments
/// performed before it was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    digest  : Digest,
    steps   : BigUint,
    input   : Buffer,
}

// SEARCH FUNCTION
// ================================================================================================

/// Searches for an input satisfying `options`, starting from `initial`.
///
/// Unless `halt_on_wrap` is set this never returns `None`, and it never returns at all if no
/// value of the buffer satisfies the threshold. With `halt_on_wrap` the search gives up after
/// 256^length steps.
pub fn search(initial: Buffer, options: &SearchOptions) -> Option<SearchResult> {
    let hasher = Hasher::new(options.algorithm());
    let mut engine = SearchEngine::new(hasher, initial, options.threshold());
    info!("searching for {} zero bits using {} over a {}-byte input",
        options.threshold(), options.algorithm(), engine.buffer().len());
    if !options.is_satisfiable() && !options.halt_on_wrap() {
        warn!("no {} digest has {} leading zero bits; the search will never finish",
            options.algorithm(), options.threshold());
    }

    let result = if options.halt_on_wrap() {
        let period = math::wrap_period(engine.buffer().len());
        engine.run_bounded(&period)
    }
    else {
        Some(engine.run())
    };

    match &result {
        Some(result) => info!("found {} zero bits after {} steps", result.zero_bits(), result.steps()),
        None => info!("no solution before the input wrapped after {} steps", engine.steps()),
    }
    return result;
}

// SEARCH ENGINE IMPLEMENTATION
// ================================================================================================
impl<D: DigestFunction> SearchEngine<D> {

    pub fn new(hasher: D, initial: Buffer, threshold: u32) -> SearchEngine<D> {
        return SearchEngine {
            hasher,
            buffer          : initial,
            threshold,
            steps           : BigUint::from(0u32),
            since_progress  : 0,
            state           : SearchState::Searching,
        };
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    pub fn threshold(&self) -> u32 {
        return self.threshold;
    }

    /// Number of increments performed so far.
    pub fn steps(&self) -> &BigUint {
        return &self.steps;
    }

    /// The candidate which will be digested next (or the accepted one once found).
    pub fn buffer(&self) -> &Buffer {
        return &self.buffer;
    }

    pub fn state(&self) -> &SearchState {
        return &self.state;
    }

    pub fn is_found(&self) -> bool {
        return match self.state {
            SearchState::Found(_) => true,
            SearchState::Searching => false,
        };
    }

    // SEARCH LOOP
    // --------------------------------------------------------------------------------------------

    /// Runs a single iteration: digests the buffer and either accepts the digest or increments
    /// the buffer. Does nothing once a result has been found.
    pub fn step(&mut self) -> &SearchState {
        if self.is_found() {
            return &self.state;
        }

        let digest = self.hasher.digest(self.buffer.as_bytes());
        if digest.leading_zero_bits() >= self.threshold {
            self.state = SearchState::Found(SearchResult {
                digest,
                steps   : self.steps.clone(),
                input   : self.buffer.clone(),
            });
            return &self.state;
        }

        self.steps += 1u32;
        if self.buffer.increment() {
            trace!("input wrapped around to zero after {} steps", self.steps);
        }

        self.since_progress += 1;
        if self.since_progress == PROGRESS_INTERVAL {
            self.since_progress = 0;
            trace!("{} steps without {} zero bits", self.steps, self.threshold);
        }

        return &self.state;
    }

    /// Iterates until an acceptable digest is found. If no value of the buffer can satisfy the
    /// threshold this never returns.
    pub fn run(&mut self) -> SearchResult {
        loop {
            if let SearchState::Found(result) = self.step() {
                return result.clone();
            }
        }
    }

    /// Like [run](Self::run) but gives up with `None` once the step counter reaches `max_steps`.
    pub fn run_bounded(&mut self, max_steps: &BigUint) -> Option<SearchResult> {
        loop {
            if let SearchState::Found(result) = &self.state {
                return Some(result.clone());
            }
            if self.steps >= *max_steps {
                return None;
            }
            self.step();
        }
    }
}

// SEARCH RESULT IMPLEMENTATION
// ================================================================================================
impl SearchResult {

    pub fn digest(&self) -> &Digest {
        return &self.digest;
    }

    /// Number of increments applied to the initial buffer before the digest was accepted.
    pub fn steps(&self) -> &BigUint {
        return &self.steps;
    }

    /// The buffer value whose digest was accepted.
    pub fn input(&self) -> &Buffer {
        return &self.input;
    }

    pub fn zero_bits(&self) -> u32 {
        return self.digest.leading_zero_bits();
    }

    pub fn into_input(self) -> Buffer {
        return self.input;
    }
}
