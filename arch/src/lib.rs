pub mod op;
pub mod reg;
pub mod word;

pub use op::{Arity, Op};
pub use reg::Reg;
pub use word::{Encoding, Method, Word, FIRST_CELL, MAX_WORDS};
