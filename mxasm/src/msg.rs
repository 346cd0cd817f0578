use crate::error::Error;
use color_print::cprintln;

// ----------------------------------------------------------------------------

/// Per-file diagnostic collector. Diagnostics are recorded as the passes walk
/// the source, so flushing preserves source-line order.
#[derive(Debug, Default)]
pub struct Msgs(Vec<Msg>);

impl Msgs {
    pub fn new() -> Self {
        Msgs(Vec::new())
    }

    pub fn error(&mut self, line: usize, error: Error) {
        self.0.push(Msg { line, error });
    }

    pub fn extend(&mut self, msgs: Msgs) {
        self.0.extend(msgs.0);
    }

    pub fn count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn flush(&self) {
        for msg in &self.0 {
            msg.print();
        }
    }
}

// ----------------------------------------------------------------------------

#[derive(Debug)]
struct Msg {
    line: usize,
    error: Error,
}

impl Msg {
    fn print(&self) {
        cprintln!("<red,bold>Error in line {}</> - {}", self.line, self.error);
    }
}
