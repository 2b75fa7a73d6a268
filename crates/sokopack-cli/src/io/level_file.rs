// crates/sokopack-cli/src/io/level_file.rs
//
// Plain-text level source:
// - levels are separated by one or more blank lines
// - lines starting with ';' are comments; the last one directly above a level is its title
// - width/height are measured from the rows (longest row, row count)
// - trailing '\r' is dropped so CRLF files parse the same

use anyhow::{Context, Result};
use sokopack_core::LevelGrid;

pub fn load_levels(path: &str) -> Result<Vec<LevelGrid>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read levels {path}"))?;
    Ok(parse_levels(&text))
}

pub fn parse_levels(text: &str) -> Vec<LevelGrid> {
    let mut out = Vec::new();
    let mut rows: Vec<String> = Vec::new();
    let mut title: Option<String> = None;

    for raw in text.lines() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if let Some(comment) = line.strip_prefix(';') {
            if rows.is_empty() {
                title = Some(comment.trim().to_string());
            }
            continue;
        }

        if line.trim().is_empty() {
            if rows.is_empty() {
                // header comment, not attached to any level
                title = None;
            }
            flush(&mut out, &mut rows, &mut title);
            continue;
        }

        rows.push(line.to_string());
    }
    flush(&mut out, &mut rows, &mut title);

    out
}

fn flush(out: &mut Vec<LevelGrid>, rows: &mut Vec<String>, title: &mut Option<String>) {
    if rows.is_empty() {
        return;
    }
    let mut grid = LevelGrid::from_rows(std::mem::take(rows));
    if let Some(t) = title.take() {
        grid = grid.with_title(t);
    }
    out.push(grid);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_blank_lines_and_keeps_titles() {
        let text = "; First\n#####\n#@$.#\n#####\n\n\n;Second\r\n###\r\n#@#\r\n###\r\n";
        let levels = parse_levels(text);
        assert_eq!(levels.len(), 2);

        assert_eq!(levels[0].title.as_deref(), Some("First"));
        assert_eq!((levels[0].width, levels[0].height), (5, 3));

        assert_eq!(levels[1].title.as_deref(), Some("Second"));
        assert_eq!(levels[1].rows, vec!["###", "#@#", "###"]);
    }

    #[test]
    fn file_header_comment_is_not_a_level_title() {
        let levels = parse_levels("; Collection\n\n; Level 1\n###\n#@#\n###\n");
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].title.as_deref(), Some("Level 1"));

        let levels = parse_levels("; Collection\n; by someone\n\n###\n#@#\n###\n");
        assert_eq!(levels[0].title, None);

        let levels = parse_levels("; Collection\n; Level 1\n###\n#@#\n###\n");
        assert_eq!(levels[0].title.as_deref(), Some("Level 1"));
    }

    #[test]
    fn leading_spaces_are_kept() {
        let levels = parse_levels("  ###\n###@#\n#####\n");
        assert_eq!(levels[0].rows[0], "  ###");
        assert_eq!(levels[0].width, 5);
        assert_eq!(levels[0].title, None);
    }

    #[test]
    fn empty_input_has_no_levels() {
        assert!(parse_levels("").is_empty());
        assert!(parse_levels("; only a comment\n\n").is_empty());
    }
}
