use crate::{
    error::Error,
    first_pass::operand_texts,
    ident,
    labels::{Kind, Labels},
    line::{addressing_of, Cursor, Line, Sep, Status},
    msg::Msgs,
};
use arch::{Encoding, Method, Op, Word, FIRST_CELL};

/// Second pass: walk the expanded text again with IC restarted at the first
/// cell, fill the operand words the first pass reserved for Direct operands,
/// record every external use-site, and process `.entry` directives.
#[derive(Debug)]
pub struct SecondPass {
    pub externals: Vec<(String, u16)>,
    pub has_entry: bool,
    pub msgs: Msgs,
    ic: u16,
}

impl SecondPass {
    pub fn run(expanded: &str, labels: &mut Labels, code: &mut [Word]) -> SecondPass {
        let mut pass = SecondPass {
            externals: Vec::new(),
            has_entry: false,
            msgs: Msgs::new(),
            ic: FIRST_CELL,
        };
        for (idx, raw) in expanded.lines().enumerate() {
            pass.process(idx + 1, raw, labels, code);
        }
        pass
    }

    fn process(&mut self, line_no: usize, raw: &str, labels: &mut Labels, code: &mut [Word]) {
        let mut line = Line::lex(raw);
        if line.is_empty() {
            return;
        }
        let mut cur = Cursor::new(raw);

        // Labels were collected by the first pass.
        if line.take_label().is_some() {
            cur.skip_word();
        }
        if line.is_empty() {
            return;
        }

        match line.status() {
            Status::Data | Status::String | Status::Extern => {}
            Status::Entry => {
                cur.skip_word();
                self.mark_entries(line_no, cur, labels);
            }
            Status::Code => self.complete_instruction(line_no, &line, labels, code),
        }
    }

    fn mark_entries(&mut self, line_no: usize, mut cur: Cursor, labels: &mut Labels) {
        self.has_entry = true;
        if cur.at_end() {
            self.msgs.error(line_no, Error::MustProvideLabelsToEntry);
            return;
        }
        loop {
            cur.skip_white();
            if cur.peek() == Some(',') {
                self.msgs.error(line_no, Error::InvalidCommaPosition);
                return;
            }
            let name = cur.take_word();
            if ident::is_valid_label_name(&name) {
                if let Err(e) = labels.mark_entry(&name) {
                    self.msgs.error(line_no, e);
                }
            } else {
                self.msgs.error(line_no, Error::InvalidLabelName(name));
            }
            match cur.separator() {
                Sep::Comma => {}
                Sep::End => return,
                Sep::Missing => {
                    self.msgs.error(line_no, Error::CommaRequiredBetweenValues);
                    return;
                }
            }
        }
    }

    fn complete_instruction(
        &mut self,
        line_no: usize,
        line: &Line,
        labels: &Labels,
        code: &mut [Word],
    ) {
        let Some(op) = Op::parse(line.word(0)) else {
            // Unknown mnemonics were diagnosed by the first pass.
            return;
        };
        let (src_text, dest_text) = operand_texts(Some(op), line);
        let source = addressing_of(src_text);
        let destination = addressing_of(dest_text);

        // Past the first word laid down by the first pass.
        self.ic += 1;

        if source == Method::Register && destination == Method::Register {
            self.ic += 1;
            return;
        }
        match source {
            Method::Register | Method::Immediate => self.ic += 1,
            Method::Direct => self.resolve(line_no, src_text, labels, code),
            Method::Absent => {}
        }
        match destination {
            Method::Register | Method::Immediate => self.ic += 1,
            Method::Direct => self.resolve(line_no, dest_text, labels, code),
            Method::Absent => {}
        }
    }

    fn resolve(&mut self, line_no: usize, name: &str, labels: &Labels, code: &mut [Word]) {
        let Some(label) = labels.get(name) else {
            self.msgs
                .error(line_no, Error::LabelNotFound(name.to_string()));
            return;
        };
        let word = if label.kind == Kind::Extern {
            self.externals.push((name.to_string(), self.ic));
            Word::direct(Encoding::External, 0)
        } else {
            Word::direct(Encoding::Relocatable, label.address)
        };
        if let Some(slot) = code.get_mut((self.ic - FIRST_CELL) as usize) {
            *slot = word;
        }
        self.ic += 1;
    }
}
