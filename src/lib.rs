pub mod config;
pub mod display;
pub mod factor;
pub mod facts;
pub mod primality;
pub mod session;
pub mod sieve;

pub use factor::prime_factors;
pub use primality::is_prime;
pub use sieve::{primes_in_range, sieve};
