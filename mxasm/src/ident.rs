use arch::{Op, Reg};

/// Label names are at most this many characters.
pub const MAX_LABEL_LENGTH: usize = 31;

/// The four directives, the eight register names and the sixteen mnemonics
/// may not be reused as label or macro names.
pub fn is_reserved(name: &str) -> bool {
    matches!(name, ".data" | ".string" | ".entry" | ".extern")
        || Reg::parse(name).is_some()
        || Op::parse(name).is_some()
}

pub fn is_valid_label_name(name: &str) -> bool {
    if is_reserved(name) {
        return false;
    }
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric())
        && name.chars().count() <= MAX_LABEL_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_words() {
        assert!(is_reserved(".data"));
        assert!(is_reserved(".entry"));
        assert!(is_reserved("mov"));
        assert!(is_reserved("stop"));
        assert!(is_reserved("@r0"));
        assert!(is_reserved("@r1"));
        assert!(is_reserved("@r7"));
        assert!(!is_reserved("movx"));
        assert!(!is_reserved("data"));
    }

    #[test]
    fn label_names() {
        assert!(is_valid_label_name("X"));
        assert!(is_valid_label_name("Loop2"));
        assert!(is_valid_label_name(&"a".repeat(31)));
        assert!(!is_valid_label_name(&"a".repeat(32)));
        assert!(!is_valid_label_name(""));
        assert!(!is_valid_label_name("2nd"));
        assert!(!is_valid_label_name("has-dash"));
        assert!(!is_valid_label_name("has space"));
        assert!(!is_valid_label_name("mov"));
        assert!(!is_valid_label_name("@r3"));
    }
}
