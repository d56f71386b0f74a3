//! Reads LS-8 programs from disk.
//!
//! A program file is line-oriented text: each line carries one instruction
//! byte written as a base-2 literal. A `#` starts a comment that runs to
//! the end of the line, and blank lines are skipped.

use std::fs;
use std::path::Path;

use thiserror::Error;

/// An error raised while reading a program file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read program file: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: `{text}` is not an 8-bit binary literal")]
    Parse { line: usize, text: String },
}

/// Type alias for Result<T, [LoadError]>.
pub type LoadResult<T> = Result<T, LoadError>;

/// Reads the program at `path`, returning its bytes in memory order.
pub fn read_program(path: &Path) -> LoadResult<Vec<u8>> {
    let source = fs::read_to_string(path)?;
    parse_program(&source)
}

/// Parses program text into bytes, one instruction byte per line.
pub fn parse_program(source: &str) -> LoadResult<Vec<u8>> {
    let mut program = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let text = raw.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }
        let byte = u8::from_str_radix(text, 2).map_err(|_| LoadError::Parse {
            line: index + 1,
            text: text.to_string(),
        })?;
        program.push(byte);
    }
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_binary_literals_in_order() {
        let source = "10000010\n00000000\n00001000\n";
        assert_eq!(parse_program(source).unwrap(), vec![0x82, 0x00, 0x08]);
    }

    #[test]
    fn strips_comments_and_blank_lines() {
        let source = "
# print8.ls8

10000010 # LDI R0,8
00000000
00001000
01000111 # PRN R0
00000000
00000001 # HLT
";
        let program = parse_program(source).unwrap();
        assert_eq!(program, vec![0x82, 0x00, 0x08, 0x47, 0x00, 0x01]);
    }

    #[test]
    fn comment_only_lines_yield_nothing() {
        assert!(parse_program("# nothing here\n   # or here\n")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn rejects_non_binary_text_with_line_number() {
        let source = "10000010\nnot a byte\n";
        match parse_program(source) {
            Err(LoadError::Parse { line, text }) => {
                assert_eq!(line, 2);
                assert_eq!(text, "not a byte");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_literals_wider_than_a_byte() {
        assert!(matches!(
            parse_program("111111111\n"),
            Err(LoadError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_program(Path::new("/definitely/not/here.ls8")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
