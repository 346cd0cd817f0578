use arch::{Method, Reg};

/// Source lines are at most this many characters plus the newline.
pub const MAX_LINE_LENGTH: usize = 80;

// ----------------------------------------------------------------------------
// Lexed line

/// Word count of a lexed line. A line holds at most five tokens; anything
/// past the fifth collapses to `TooMany`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    TooMany,
}

impl Count {
    fn of(n: usize) -> Count {
        match n {
            0 => Count::Zero,
            1 => Count::One,
            2 => Count::Two,
            3 => Count::Three,
            4 => Count::Four,
            5 => Count::Five,
            _ => Count::TooMany,
        }
    }

    fn dec(self) -> Count {
        match self {
            Count::TooMany => Count::TooMany,
            Count::Five => Count::Four,
            Count::Four => Count::Three,
            Count::Three => Count::Two,
            Count::Two => Count::One,
            _ => Count::Zero,
        }
    }
}

/// What a statement's first word makes of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Data,
    String,
    Extern,
    Entry,
    Code,
}

pub fn classify(word: &str) -> Status {
    match word {
        ".data" => Status::Data,
        ".string" => Status::String,
        ".extern" => Status::Extern,
        ".entry" => Status::Entry,
        _ => Status::Code,
    }
}

/// Integers are an optional sign followed by decimal digits, nothing else.
pub fn parse_int(token: &str) -> Option<i64> {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

pub fn addressing_of(token: &str) -> Method {
    if token.is_empty() {
        Method::Absent
    } else if parse_int(token).is_some() {
        Method::Immediate
    } else if Reg::parse(token).is_some() {
        Method::Register
    } else {
        Method::Direct
    }
}

#[derive(Debug, Clone)]
pub struct Line {
    words: Vec<String>,
    pub count: Count,
}

impl Line {
    /// Lex a raw source line. Commas are first surrounded by spaces so each
    /// one lands in its own token slot; a blank line or a line whose first
    /// non-blank character is `;` lexes to zero words.
    pub fn lex(text: &str) -> Line {
        let stripped = text.trim_start_matches([' ', '\t']);
        if stripped.is_empty() || stripped.starts_with(';') {
            return Line {
                words: Vec::new(),
                count: Count::Zero,
            };
        }

        let fixed = text.replace(',', " , ");
        let mut tokens = fixed.split_whitespace();
        let words: Vec<String> = tokens.by_ref().take(5).map(str::to_string).collect();
        let count = if tokens.next().is_some() {
            Count::TooMany
        } else {
            Count::of(words.len())
        };
        Line { words, count }
    }

    /// The i-th token, or the empty string past the end.
    pub fn word(&self, i: usize) -> &str {
        self.words.get(i).map(String::as_str).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.count == Count::Zero
    }

    pub fn status(&self) -> Status {
        classify(self.word(0))
    }

    /// If the first word ends in `:`, strip it, shift the remaining words
    /// one slot left and return the label text.
    pub fn take_label(&mut self) -> Option<String> {
        let name = self.words.first()?.strip_suffix(':')?.to_string();
        self.words.remove(0);
        self.count = self.count.dec();
        Some(name)
    }
}

// ----------------------------------------------------------------------------
// Raw-text cursor

/// Character cursor over the raw line, used by the directive parsers where
/// the five-token view is too coarse (comma-separated lists, quoted
/// strings).
#[derive(Debug)]
pub struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

impl Cursor {
    pub fn new(text: &str) -> Cursor {
        Cursor {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    /// Consume `c` if it is next.
    pub fn take_char(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn skip_white(&mut self) {
        while self.peek().is_some_and(is_blank) {
            self.pos += 1;
        }
    }

    /// Skip leading blanks and one whitespace-delimited word.
    pub fn skip_word(&mut self) {
        self.skip_white();
        while self.peek().is_some_and(|c| !is_blank(c)) {
            self.pos += 1;
        }
    }

    /// True when nothing but blanks remain.
    pub fn at_end(&self) -> bool {
        self.chars[self.pos..].iter().all(|&c| is_blank(c))
    }

    /// Take characters up to the next blank, comma or end of line, then skip
    /// any blanks that follow.
    pub fn take_word(&mut self) -> String {
        let mut word = String::new();
        while let Some(c) = self.peek() {
            if is_blank(c) || c == ',' {
                break;
            }
            word.push(c);
            self.pos += 1;
        }
        self.skip_white();
        word
    }

    /// What follows a list element.
    pub fn separator(&mut self) -> Sep {
        if self.take_char(',') {
            Sep::Comma
        } else if self.at_end() {
            Sep::End
        } else {
            Sep::Missing
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sep {
    Comma,
    End,
    Missing,
}

// ----------------------------------------------------------------------------
