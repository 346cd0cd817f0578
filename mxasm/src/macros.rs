use crate::{error::Error, ident, line::Line, msg::Msgs};
use indexmap::IndexMap;

pub const START_MACRO: &str = "mcro";
pub const END_MACRO: &str = "endmcro";

// ----------------------------------------------------------------------------

/// Insertion-ordered macro table: name to body text, bodies kept verbatim.
#[derive(Debug, Default)]
pub struct Macros {
    map: IndexMap<String, String>,
}

impl Macros {
    pub fn new() -> Self {
        Macros {
            map: IndexMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: String, body: String) -> Result<(), Error> {
        if self.map.contains_key(&name) {
            return Err(Error::MacroAlreadyExists(name));
        }
        self.map.insert(name, body);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

// ----------------------------------------------------------------------------

pub struct Expansion {
    pub text: String,
    pub macros: Macros,
}

enum State {
    Outside,
    Inside { name: String, body: String },
}

/// Expand `mcro NAME .. endmcro` blocks. References to previously defined
/// macros paste the stored body verbatim; pasted text is not re-scanned.
pub fn expand(source: &str, msgs: &mut Msgs) -> Expansion {
    let mut macros = Macros::new();
    let mut out = String::new();
    let mut state = State::Outside;

    for (idx, raw) in source.lines().enumerate() {
        let line_no = idx + 1;
        let line = Line::lex(raw);
        let first = line.word(0);

        state = match state {
            State::Outside => {
                if let Some(body) = macros.get(first) {
                    // The invoking line is consumed whole.
                    out.push_str(body);
                    State::Outside
                } else if first == START_MACRO {
                    State::Inside {
                        name: line.word(1).to_string(),
                        body: String::new(),
                    }
                } else {
                    // A stray `endmcro` is ordinary text and will be
                    // diagnosed as an unknown instruction later.
                    out.push_str(raw);
                    out.push('\n');
                    State::Outside
                }
            }
            State::Inside { name, mut body } => {
                if first == START_MACRO {
                    msgs.error(line_no, Error::NestedMacroDefinition);
                    body.push_str(raw);
                    body.push('\n');
                    State::Inside { name, body }
                } else if first == END_MACRO {
                    if ident::is_reserved(&name) {
                        msgs.error(line_no, Error::MacroNameIsReserved(name));
                    } else if let Err(e) = macros.insert(name, body) {
                        msgs.error(line_no, e);
                    }
                    State::Outside
                } else {
                    body.push_str(raw);
                    body.push('\n');
                    State::Inside { name, body }
                }
            }
        };
    }

    Expansion { text: out, macros }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str) -> (Expansion, Msgs) {
        let mut msgs = Msgs::new();
        let expansion = expand(source, &mut msgs);
        (expansion, msgs)
    }

    #[test]
    fn plain_text_passes_through() {
        let (exp, msgs) = run("mov @r1, @r2\n; comment\n\nstop\n");
        assert_eq!(exp.text, "mov @r1, @r2\n; comment\n\nstop\n");
        assert!(msgs.is_empty());
        assert!(exp.macros.is_empty());
    }

    #[test]
    fn expansion_pastes_body() {
        let source = "mcro M\ninc @r1\nendmcro\nM\nstop\nM\n";
        let (exp, msgs) = run(source);
        assert_eq!(exp.text, "inc @r1\nstop\ninc @r1\n");
        assert!(msgs.is_empty());
        assert_eq!(exp.macros.len(), 1);
    }

    #[test]
    fn header_lines_are_not_emitted() {
        let (exp, _) = run("mcro M\ninc @r1\nendmcro\n");
        assert_eq!(exp.text, "");
    }

    #[test]
    fn empty_body_expands_to_nothing() {
        let (exp, msgs) = run("mcro M\nendmcro\nM\nstop\n");
        assert_eq!(exp.text, "stop\n");
        assert!(msgs.is_empty());
    }

    #[test]
    fn nested_definition_is_diagnosed() {
        let source = "mcro A\nmcro B\ninc @r1\nendmcro\nA\n";
        let (exp, msgs) = run(source);
        assert_eq!(msgs.count(), 1);
        // The inner `mcro` line joined the body of A.
        assert_eq!(exp.text, "mcro B\ninc @r1\n");
    }

    #[test]
    fn reserved_name_is_diagnosed() {
        let (exp, msgs) = run("mcro mov\ninc @r1\nendmcro\n");
        assert_eq!(msgs.count(), 1);
        assert!(exp.macros.is_empty());
    }

    #[test]
    fn duplicate_name_is_diagnosed() {
        let source = "mcro M\ninc @r1\nendmcro\nmcro M\ndec @r1\nendmcro\n";
        let (exp, msgs) = run(source);
        assert_eq!(msgs.count(), 1);
        assert_eq!(exp.macros.get("M"), Some("inc @r1\n"));
    }

    #[test]
    fn stray_endmcro_is_ordinary_text() {
        let (exp, msgs) = run("endmcro\nstop\n");
        assert_eq!(exp.text, "endmcro\nstop\n");
        assert!(msgs.is_empty());
    }

    #[test]
    fn unterminated_block_is_dropped() {
        let (exp, msgs) = run("mcro M\ninc @r1\nstop\n");
        assert_eq!(exp.text, "");
        assert!(msgs.is_empty());
        assert!(exp.macros.is_empty());
    }
}
