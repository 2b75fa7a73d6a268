// crates/sokopack-core/src/render.rs
//
// Text form of a packed level, as line-numbered DATA statements:
//
//   1000 DATA 3,248,136,248,0,49,17
//   1001 DATA -1
//
// The second line is the end-of-stream sentinel readers loop until.

use crate::error::{Result, SokoError};

pub const KEYWORD: &str = "DATA";
pub const SENTINEL: i32 = -1;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DataBlock {
    pub first_line: u32,
    pub step: u32,
}

impl Default for DataBlock {
    fn default() -> Self {
        Self {
            first_line: 1000,
            step: 1,
        }
    }
}

impl DataBlock {
    pub fn data_line(&self, bytes: &[u8]) -> String {
        let mut s = format!("{} {} ", self.first_line, KEYWORD);
        for (i, b) in bytes.iter().enumerate() {
            if i > 0 {
                s.push(',');
            }
            s.push_str(&b.to_string());
        }
        s
    }

    pub fn end_line(&self) -> String {
        format!(
            "{} {} {}",
            self.first_line.saturating_add(self.step),
            KEYWORD,
            SENTINEL
        )
    }

    /// Both lines joined by `\n`, no trailing newline.
    pub fn render(&self, bytes: &[u8]) -> String {
        format!("{}\n{}", self.data_line(bytes), self.end_line())
    }
}

/// Payload of a single DATA line. `Ok(None)` for the sentinel line.
pub fn parse_data_line(line: &str) -> Result<Option<Vec<u8>>> {
    let rest = line.trim().trim_start_matches(|c: char| c.is_ascii_digit());
    let payload = rest
        .trim_start()
        .strip_prefix(KEYWORD)
        .ok_or_else(|| SokoError::Format(format!("not a {KEYWORD} line: {line:?}")))?
        .trim();

    if payload == SENTINEL.to_string() {
        return Ok(None);
    }
    if payload.is_empty() {
        return Ok(Some(Vec::new()));
    }

    payload
        .split(',')
        .map(|v| {
            v.trim()
                .parse::<u8>()
                .map_err(|_| SokoError::Format(format!("bad byte value {v:?}")))
        })
        .collect::<Result<Vec<u8>>>()
        .map(Some)
}

/// Concatenate DATA payloads up to the sentinel. Blank lines are ignored;
/// a missing sentinel is a format error.
pub fn parse_data_block(text: &str) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        match parse_data_line(line)? {
            Some(bytes) => out.extend_from_slice(&bytes),
            None => return Ok(out),
        }
    }
    Err(SokoError::Format("missing DATA -1 sentinel".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_default_line_numbers() {
        let s = DataBlock::default().render(&[3, 248, 0]);
        assert_eq!(s, "1000 DATA 3,248,0\n1001 DATA -1");
    }

    #[test]
    fn custom_line_numbers() {
        let b = DataBlock {
            first_line: 500,
            step: 10,
        };
        assert_eq!(b.data_line(&[1]), "500 DATA 1");
        assert_eq!(b.end_line(), "510 DATA -1");
    }

    #[test]
    fn parses_rendered_block() {
        let text = DataBlock::default().render(&[0, 0, 17]);
        assert_eq!(parse_data_block(&text).unwrap(), vec![0, 0, 17]);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_data_line("1000 PRINT 1").is_err());
        assert!(parse_data_line("1000 DATA 1,300").is_err());
        assert!(parse_data_block("1000 DATA 1,2").is_err());
        assert_eq!(parse_data_line("1001 DATA -1").unwrap(), None);
    }
}
