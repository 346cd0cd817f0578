use num_enum::IntoPrimitive;
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, EnumString, Display)]
#[repr(u8)]
#[strum(serialize_all = "lowercase")]
pub enum Op {
    Mov,
    Cmp,
    Add,
    Sub,
    Not,
    Clr,
    Lea,
    Inc,
    Dec,
    Jmp,
    Bne,
    Red,
    Prn,
    Jsr,
    Rts,
    Stop,
}

/// How many operands an opcode takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Two,
    One,
    Zero,
}

impl Op {
    /// Case-sensitive: mnemonics are lowercase only.
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    pub fn code(self) -> u16 {
        u8::from(self) as u16
    }

    pub fn arity(self) -> Arity {
        match self {
            Op::Mov | Op::Cmp | Op::Add | Op::Sub | Op::Lea => Arity::Two,
            Op::Rts | Op::Stop => Arity::Zero,
            _ => Arity::One,
        }
    }

    /// Every opcode except `cmp` and `prn` refuses a literal destination.
    pub fn forbids_immediate_destination(self) -> bool {
        !matches!(self, Op::Cmp | Op::Prn | Op::Rts | Op::Stop)
    }

    /// `lea` only reads from a labelled location.
    pub fn requires_direct_source(self) -> bool {
        matches!(self, Op::Lea)
    }
}

#[test]
fn test() {
    assert_eq!(Op::parse("mov"), Some(Op::Mov));
    assert_eq!(Op::parse("stop"), Some(Op::Stop));
    assert_eq!(Op::parse("MOV"), None);
    assert_eq!(Op::parse("movv"), None);
    assert_eq!(Op::Mov.code(), 0);
    assert_eq!(Op::Lea.code(), 6);
    assert_eq!(Op::Stop.code(), 15);
    assert_eq!(Op::Cmp.arity(), Arity::Two);
    assert_eq!(Op::Prn.arity(), Arity::One);
    assert_eq!(Op::Rts.arity(), Arity::Zero);
    assert!(Op::Mov.forbids_immediate_destination());
    assert!(!Op::Cmp.forbids_immediate_destination());
    assert!(!Op::Prn.forbids_immediate_destination());
    assert!(Op::Lea.requires_direct_source());
    assert!(!Op::Mov.requires_direct_source());
}
