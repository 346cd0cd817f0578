use crate::labels::Labels;
use arch::{Word, FIRST_CELL};

/// Rendered output files for one source. Present only when the whole file
/// assembled without a diagnostic.
#[derive(Debug)]
pub struct Output {
    pub object: String,
    pub entries: Option<String>,
    pub externals: Option<String>,
}

/// Object text: a `<code words>\t<data words>` header, then one base-64 line
/// per word, instruction image first.
pub fn render_object(code: &[Word], data: &[Word]) -> String {
    let mut text = format!("{}\t{}\n", code.len(), data.len());
    for word in code.iter().chain(data.iter()) {
        text.push_str(&word.to_base64());
        text.push('\n');
    }
    text
}

/// Entry symbols in insertion order, `name\taddress` per line.
pub fn render_entries(labels: &Labels) -> String {
    let mut text = String::new();
    for (name, label) in labels.entries() {
        text.push_str(&format!("{}\t{}\n", name, label.address));
    }
    text
}

/// External use-sites in the order the second pass met them.
pub fn render_externals(externals: &[(String, u16)]) -> String {
    let mut text = String::new();
    for (name, address) in externals {
        text.push_str(&format!("{}\t{}\n", name, address));
    }
    text
}

/// Colorless listing of the images, one addressed word per line. Used by the
/// driver's `--dump` flag.
pub fn render_listing(code: &[Word], data: &[Word]) -> String {
    let mut text = String::new();
    for (i, word) in code.iter().enumerate() {
        text.push_str(&format!(
            "{:>4}  {}\n",
            FIRST_CELL as usize + i,
            word.to_base64()
        ));
    }
    for (i, word) in data.iter().enumerate() {
        text.push_str(&format!(
            "{:>4}  {}\n",
            FIRST_CELL as usize + code.len() + i,
            word.to_base64()
        ));
    }
    text
}
