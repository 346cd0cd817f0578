use crate::{
    first_pass::FirstPass,
    labels::Labels,
    macros,
    msg::Msgs,
    output::{self, Output},
    second_pass::SecondPass,
};
use arch::{Word, FIRST_CELL};

/// Everything one source file produced: the expanded intermediate text, the
/// tables and images, the diagnostics, and the rendered outputs when the
/// file assembled cleanly.
#[derive(Debug)]
pub struct Assembly {
    pub expanded: String,
    pub macros_found: usize,
    pub macro_errors: usize,
    pub labels: Labels,
    pub code: Vec<Word>,
    pub data: Vec<Word>,
    pub externals: Vec<(String, u16)>,
    pub has_extern: bool,
    pub has_entry: bool,
    pub msgs: Msgs,
    pub output: Option<Output>,
}

impl Assembly {
    pub fn ic(&self) -> u16 {
        FIRST_CELL + self.code.len() as u16
    }

    pub fn dc(&self) -> u16 {
        self.data.len() as u16
    }

    pub fn errors(&self) -> usize {
        self.msgs.count()
    }

    /// Word count reported by the success summary.
    pub fn words(&self) -> u16 {
        self.code.len() as u16 + self.dc()
    }
}

/// Run the whole pipeline over one source text. Macro-pass diagnostics do
/// not stop the first pass; first-pass diagnostics stop the second; any
/// diagnostic at all suppresses the rendered outputs.
pub fn assemble_text(source: &str) -> Assembly {
    let mut msgs = Msgs::new();
    let expansion = macros::expand(source, &mut msgs);
    let macro_errors = msgs.count();

    let first = FirstPass::run(&expansion.text);
    let first_clean = first.msgs.is_empty();
    let FirstPass {
        mut labels,
        mut code,
        data,
        has_extern,
        msgs: first_msgs,
    } = first;
    msgs.extend(first_msgs);

    let mut externals = Vec::new();
    let mut has_entry = false;
    if first_clean {
        let second = SecondPass::run(&expansion.text, &mut labels, &mut code);
        externals = second.externals;
        has_entry = second.has_entry;
        msgs.extend(second.msgs);
    }

    let output = msgs.is_empty().then(|| Output {
        object: output::render_object(&code, &data),
        entries: has_entry.then(|| output::render_entries(&labels)),
        externals: (has_extern && !externals.is_empty())
            .then(|| output::render_externals(&externals)),
    });

    Assembly {
        expanded: expansion.text,
        macros_found: expansion.macros.len(),
        macro_errors,
        labels,
        code,
        data,
        externals,
        has_extern,
        has_entry,
        msgs,
        output,
    }
}
