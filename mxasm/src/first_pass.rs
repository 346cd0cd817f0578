use crate::{
    error::Error,
    ident,
    labels::{Kind, Labels},
    line::{addressing_of, parse_int, Count, Cursor, Line, Sep, Status},
    msg::Msgs,
};
use arch::{Arity, Method, Op, Reg, Word, FIRST_CELL};

/// First pass over the macro-expanded text: collect labels, lay out both
/// memory images, emit every word that does not depend on a symbol, and
/// record diagnostics. Data labels keep their DC offset until the pass ends
/// cleanly, at which point they are relocated behind the instruction image.
#[derive(Debug, Default)]
pub struct FirstPass {
    pub labels: Labels,
    pub code: Vec<Word>,
    pub data: Vec<Word>,
    pub has_extern: bool,
    pub msgs: Msgs,
}

/// Operand token slots for an opcode: two-operand lines are
/// `mnemonic operand , operand`, one-operand lines put their only operand in
/// the destination.
pub(crate) fn operand_texts<'a>(op: Option<Op>, line: &'a Line) -> (&'a str, &'a str) {
    match op.map(Op::arity) {
        Some(Arity::Two) => (line.word(1), line.word(3)),
        Some(Arity::One) => ("", line.word(1)),
        _ => ("", ""),
    }
}

impl FirstPass {
    pub fn run(expanded: &str) -> FirstPass {
        let mut pass = FirstPass::default();
        for (idx, raw) in expanded.lines().enumerate() {
            pass.process(idx + 1, raw);
        }
        if pass.msgs.is_empty() {
            let ic = pass.ic();
            pass.labels.relocate_data(ic);
        }
        pass
    }

    pub fn ic(&self) -> u16 {
        FIRST_CELL + self.code.len() as u16
    }

    pub fn dc(&self) -> u16 {
        self.data.len() as u16
    }

    fn process(&mut self, line_no: usize, raw: &str) {
        let mut line = Line::lex(raw);
        if line.is_empty() {
            return;
        }
        let mut cur = Cursor::new(raw);
        let line_errors = self.msgs.count();

        if let Some(label) = line.take_label() {
            match line.status() {
                // The directive defines the labels listed after it, not the
                // one in front of it.
                Status::Entry => {
                    self.msgs.error(line_no, Error::CantDefineLabelBeforeEntry);
                    return;
                }
                Status::Extern => {
                    self.msgs.error(line_no, Error::CantDefineLabelBeforeExtern);
                    return;
                }
                status => {
                    cur.skip_word();
                    self.define_label(line_no, &label, status);
                }
            }
        }
        if line.is_empty() {
            return;
        }

        match line.status() {
            Status::Data => {
                cur.skip_word();
                self.save_data(line_no, cur);
            }
            Status::String => {
                cur.skip_word();
                self.save_string(line_no, cur);
            }
            Status::Extern => {
                cur.skip_word();
                self.save_extern(line_no, cur);
            }
            Status::Entry => {} // handled by the second pass
            Status::Code => self.save_instruction(line_no, &line, line_errors),
        }
    }

    fn define_label(&mut self, line_no: usize, name: &str, status: Status) {
        if !ident::is_valid_label_name(name) {
            self.msgs
                .error(line_no, Error::InvalidLabelName(name.to_string()));
            return;
        }
        let result = match status {
            Status::Data | Status::String => self.labels.insert(name, self.dc(), Kind::Data),
            _ => self.labels.insert(name, self.ic(), Kind::Code),
        };
        if let Err(e) = result {
            self.msgs.error(line_no, e);
        }
    }

    fn save_data(&mut self, line_no: usize, mut cur: Cursor) {
        if cur.at_end() {
            self.msgs.error(line_no, Error::MustProvideValuesToData);
            return;
        }
        loop {
            cur.skip_white();
            if cur.peek() == Some(',') {
                self.msgs.error(line_no, Error::InvalidCommaPosition);
                return;
            }
            let word = cur.take_word();
            match parse_int(&word) {
                Some(value) => self.data.push(Word::data(value)),
                None => self.msgs.error(line_no, Error::DataNeedNumValue(word)),
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

    fn save_string(&mut self, line_no: usize, mut cur: Cursor) {
        cur.skip_white();
        if !cur.take_char('"') {
            self.msgs.error(line_no, Error::StringStructureNotValid);
            return;
        }
        let mut chars = Vec::new();
        while !cur.at_end() && cur.peek() != Some('"') {
            if let Some(c) = cur.bump() {
                chars.push(c);
            }
        }
        if !cur.take_char('"') {
            self.msgs.error(line_no, Error::StringMustEndInQuotes);
            return;
        }
        for c in chars {
            self.data.push(Word::character(c));
        }
        self.data.push(Word::ZERO);
        if !cur.at_end() {
            self.msgs
                .error(line_no, Error::StringDirectiveAcceptsOneParameter);
        }
    }

    fn save_extern(&mut self, line_no: usize, mut cur: Cursor) {
        self.has_extern = true;
        if cur.at_end() {
            self.msgs.error(line_no, Error::MustProvideLabelsToExtern);
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
                if let Err(e) = self.labels.insert(&name, 0, Kind::Extern) {
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

    fn save_instruction(&mut self, line_no: usize, line: &Line, line_errors: usize) {
        let op = Op::parse(line.word(0));
        let (src_text, dest_text) = operand_texts(op, line);
        let source = addressing_of(src_text);
        let destination = addressing_of(dest_text);

        self.check_instruction(line_no, op, line, source, destination);
        if self.msgs.count() != line_errors {
            // A diagnosed line reserves no words.
            return;
        }
        let Some(op) = op else { return };

        self.code.push(Word::first(op, source, destination));
        if source == Method::Register && destination == Method::Register {
            // Both registers share one operand word.
            self.code
                .push(Word::registers(Reg::parse(src_text), Reg::parse(dest_text)));
            return;
        }
        self.push_operand(source, src_text, true);
        self.push_operand(destination, dest_text, false);
    }

    fn check_instruction(
        &mut self,
        line_no: usize,
        op: Option<Op>,
        line: &Line,
        source: Method,
        destination: Method,
    ) {
        if matches!(line.count, Count::Five | Count::TooMany) {
            self.msgs.error(line_no, Error::TooMuchWordsForInstruction);
        }
        let Some(op) = op else {
            self.msgs.error(
                line_no,
                Error::InstructionNameNotExist(line.word(0).to_string()),
            );
            return;
        };
        match op.arity() {
            Arity::Two => {
                if line.count != Count::Four {
                    self.msgs
                        .error(line_no, Error::InstructionShouldReceiveTwoOperands);
                }
                if line.word(2) != "," {
                    self.msgs.error(line_no, Error::CommaRequiredBetweenOperands);
                }
            }
            Arity::One => {
                if line.count != Count::Two {
                    self.msgs
                        .error(line_no, Error::InstructionShouldReceiveOneOperand);
                }
            }
            Arity::Zero => {
                if line.count != Count::One {
                    self.msgs
                        .error(line_no, Error::InstructionShouldNotReceiveOperands);
                }
            }
        }
        if (op.forbids_immediate_destination() && destination == Method::Immediate)
            || (op.requires_direct_source() && source != Method::Direct)
        {
            self.msgs
                .error(line_no, Error::InvalidAddressMethodForInstruction);
        }
    }

    fn push_operand(&mut self, method: Method, text: &str, is_source: bool) {
        match method {
            Method::Register => {
                let reg = Reg::parse(text);
                let word = if is_source {
                    Word::registers(reg, None)
                } else {
                    Word::registers(None, reg)
                };
                self.code.push(word);
            }
            Method::Immediate => self
                .code
                .push(Word::immediate(parse_int(text).unwrap_or(0))),
            // Placeholder; the second pass fills in the address.
            Method::Direct => self.code.push(Word::ZERO),
            Method::Absent => {}
        }
    }
}
