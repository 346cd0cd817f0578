use num_enum::{FromPrimitive, IntoPrimitive};
use strum::{Display, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    FromPrimitive,
    IntoPrimitive,
    EnumString,
    Display,
)]
#[repr(u8)]
pub enum Reg {
    #[default]
    #[strum(serialize = "@r0")]
    R0,
    #[strum(serialize = "@r1")]
    R1,
    #[strum(serialize = "@r2")]
    R2,
    #[strum(serialize = "@r3")]
    R3,
    #[strum(serialize = "@r4")]
    R4,
    #[strum(serialize = "@r5")]
    R5,
    #[strum(serialize = "@r6")]
    R6,
    #[strum(serialize = "@r7")]
    R7,
}

impl Reg {
    /// Case-sensitive: only the `@rN` spellings name registers.
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    pub fn number(self) -> u16 {
        u8::from(self) as u16
    }
}

#[test]
fn test() {
    assert_eq!(Reg::parse("@r0"), Some(Reg::R0));
    assert_eq!(Reg::parse("@r7"), Some(Reg::R7));
    assert_eq!(Reg::parse("@R1"), None);
    assert_eq!(Reg::parse("r1"), None);
    assert_eq!(Reg::parse("@r8"), None);
    assert_eq!(Reg::R5.number(), 5);
    assert_eq!(Reg::R3.to_string(), "@r3");
}
