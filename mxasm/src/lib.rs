pub mod assemble;
pub mod error;
pub mod files;
pub mod first_pass;
pub mod ident;
pub mod labels;
pub mod line;
pub mod macros;
pub mod msg;
pub mod output;
pub mod second_pass;

pub use assemble::{assemble_text, Assembly};
pub use error::Error;
pub use first_pass::FirstPass;
pub use msg::Msgs;
pub use output::Output;
pub use second_pass::SecondPass;
