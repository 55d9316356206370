// ============================================================================
// Operations Module
// The five exact numeric routines exposed by this crate
// ============================================================================

mod combinatorics;
mod factorial;
mod fibonacci;
mod power;
mod primality;

pub use combinatorics::combinations;
pub use factorial::factorial;
pub use fibonacci::fibonacci;
pub use power::power;
pub use primality::is_prime;
