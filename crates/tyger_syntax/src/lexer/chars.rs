//! Single-byte character classes used by the scanner.
//!
//! Classification is ASCII-only. Bytes outside ASCII belong to no class and scan as illegal input.

/// Space, tab, carriage return, or line feed.
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// A byte that ends a line (`\r` alone or as part of `\r\n`, or `\n`).
pub fn is_line_break(byte: u8) -> bool {
    matches!(byte, b'\r' | b'\n')
}

pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// A byte that may start an identifier.
pub fn is_letter(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// A byte that may continue an identifier.
pub fn is_ident_continue(byte: u8) -> bool {
    is_letter(byte) || is_digit(byte)
}

/// `None` marks the position past the last byte of the source.
pub fn is_end_of_input(byte: Option<u8>) -> bool {
    byte.is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_exactly_four_bytes() {
        let whitespace: Vec<u8> = (0u8..=255).filter(|b| is_whitespace(*b)).collect();
        assert_eq!(whitespace, vec![b'\t', b'\n', b'\r', b' ']);
    }

    #[test]
    fn underscore_is_a_letter() {
        assert!(is_letter(b'_'));
        assert!(is_letter(b'Z'));
        assert!(!is_letter(b'7'));
        assert!(is_ident_continue(b'7'));
    }

    #[test]
    fn non_ascii_bytes_have_no_class() {
        for byte in 0x80u8..=0xFF {
            assert!(!is_whitespace(byte));
            assert!(!is_digit(byte));
            assert!(!is_ident_continue(byte));
            assert!(!is_line_break(byte));
        }
    }

    #[test]
    fn end_of_input() {
        assert!(is_end_of_input(None));
        assert!(!is_end_of_input(Some(0)));
    }

    #[test]
    fn line_breaks_are_whitespace() {
        let breaks: Vec<u8> = (0u8..=255).filter(|b| is_line_break(*b)).collect();
        assert_eq!(breaks, vec![b'\n', b'\r']);
        assert!(breaks.iter().all(|b| is_whitespace(*b)));
    }
}
