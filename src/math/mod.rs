mod bytes;
pub use bytes::{ increment, count_leading_zero_bits, wrap_period };
