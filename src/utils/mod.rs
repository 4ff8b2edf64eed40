mod nice_int;
mod seed;

pub use nice_int::NiceInt;
pub use seed::Seed;
