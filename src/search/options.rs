use crate::crypto::HashAlgorithm;

// CONSTANTS
// ================================================================================================
const DEFAULT_THRESHOLD     : u32 = 0;
const DEFAULT_HALT_ON_WRAP  : bool = false;

// TYPES AND INTERFACES
// ================================================================================================

/// Parameters of a single search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    threshold       : u32,
    algorithm       : HashAlgorithm,
    halt_on_wrap    : bool,
}

/// How caller-supplied text is turned into the initial buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEncoding {
    Utf8,
    Hex,
}

// SEARCH OPTIONS IMPLEMENTATION
// ================================================================================================
impl SearchOptions {

    pub fn new(threshold: u32, algorithm: HashAlgorithm) -> SearchOptions {
        return SearchOptions {
            threshold,
            algorithm,
            halt_on_wrap: DEFAULT_HALT_ON_WRAP,
        };
    }

    /// Makes the search give up once every value of the input buffer has been tried, instead
    /// of cycling through the same values forever.
    pub fn with_halt_on_wrap(mut self, halt_on_wrap: bool) -> SearchOptions {
        self.halt_on_wrap = halt_on_wrap;
        return self;
    }

    /// Minimum number of leading zero bits an accepted digest must have.
    pub fn threshold(&self) -> u32 {
        return self.threshold;
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        return self.algorithm;
    }

    pub fn halt_on_wrap(&self) -> bool {
        return self.halt_on_wrap;
    }

    /// Returns true if a digest of this algorithm can have `threshold` leading zero bits at all.
    pub fn is_satisfiable(&self) -> bool {
        return (self.threshold as usize) <= self.algorithm.digest_len() * 8;
    }
}

impl Default for SearchOptions {

    fn default() -> SearchOptions {
        return SearchOptions {
            threshold   : DEFAULT_THRESHOLD,
            algorithm   : HashAlgorithm::default(),
            halt_on_wrap: DEFAULT_HALT_ON_WRAP,
        };
    }
}

// INPUT ENCODING IMPLEMENTATION
// ================================================================================================
impl InputEncoding {

    pub fn name(&self) -> &'static str {
        return match self {
            InputEncoding::Utf8 => "UTF-8",
            InputEncoding::Hex  => "hex",
        };
    }
}

impl Default for InputEncoding {
    fn default() -> InputEncoding {
        return InputEncoding::Utf8;
    }
}
