use std::path::Path;

use fieldmorph_geometry::Line;

use crate::error::IoError;

/// Parse control lines from text.
///
/// Each non-empty line holds four whitespace separated integers
/// `from_x from_y to_x to_y`. Blank lines are skipped.
///
/// # Example
///
/// ```
/// use fieldmorph_geometry::Line;
/// use fieldmorph_io::lines::parse_control_lines;
///
/// let lines = parse_control_lines("0 0 10 0\n\n5 5 5 9\n").unwrap();
/// assert_eq!(lines, vec![Line::from([0, 0, 10, 0]), Line::from([5, 5, 5, 9])]);
/// ```
pub fn parse_control_lines(text: &str) -> Result<Vec<Line>, IoError> {
    text.lines()
        .enumerate()
        .filter(|(_, content)| !content.trim().is_empty())
        .map(|(i, content)| {
            let invalid = || IoError::InvalidControlLine {
                line: i + 1,
                content: content.to_string(),
            };
            let values = content
                .split_whitespace()
                .map(|v| v.parse::<i64>().map_err(|_| invalid()))
                .collect::<Result<Vec<_>, _>>()?;
            let quad: [i64; 4] = values.try_into().map_err(|_| invalid())?;
            Ok(Line::from(quad))
        })
        .collect()
}

/// Format control lines as text, one `from_x from_y to_x to_y` entry per line.
///
/// Endpoints are rounded to the pixel grid.
pub fn format_control_lines(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|line| {
            let [fx, fy, tx, ty] = line.to_quad();
            format!("{fx} {fy} {tx} {ty}\n")
        })
        .collect()
}

/// Read a control line file.
///
/// # Errors
///
/// * [`IoError::FileDoesNotExist`] if the path does not exist.
/// * [`IoError::InvalidControlLine`] if an entry is malformed.
pub fn read_control_lines(file_path: impl AsRef<Path>) -> Result<Vec<Line>, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }
    let lines = parse_control_lines(&std::fs::read_to_string(file_path)?)?;
    log::debug!("read {} control lines from {}", lines.len(), file_path.display());
    Ok(lines)
}

/// Write a control line file.
pub fn write_control_lines(file_path: impl AsRef<Path>, lines: &[Line]) -> Result<(), IoError> {
    std::fs::write(file_path, format_control_lines(lines))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_extra_whitespace() -> Result<(), IoError> {
        let lines = parse_control_lines("  1\t2  3 4  \r\n-1 0 0 -7")?;
        assert_eq!(
            lines,
            vec![Line::from([1, 2, 3, 4]), Line::from([-1, 0, 0, -7])]
        );
        Ok(())
    }

    #[test]
    fn parse_reports_line_number() {
        let res = parse_control_lines("0 0 1 1\n\n0 0 1\n");
        match res {
            Err(IoError::InvalidControlLine { line, content }) => {
                assert_eq!(line, 3);
                assert_eq!(content, "0 0 1");
            }
            other => panic!("unexpected result: {other:?}"),
        }

        assert!(matches!(
            parse_control_lines("0 0 1 x"),
            Err(IoError::InvalidControlLine { line: 1, .. })
        ));
        assert!(matches!(
            parse_control_lines("0 0 1 1 2"),
            Err(IoError::InvalidControlLine { line: 1, .. })
        ));
    }

    #[test]
    fn parse_empty_text() -> Result<(), IoError> {
        assert!(parse_control_lines("")?.is_empty());
        assert!(parse_control_lines("\n \n")?.is_empty());
        Ok(())
    }

    #[test]
    fn write_then_read_file() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("face.txt");

        let lines = vec![Line::from([12, 40, 30, 41]), Line::from([7, 7, 7, 70])];
        write_control_lines(&file_path, &lines)?;

        assert_eq!(std::fs::read_to_string(&file_path)?, "12 40 30 41\n7 7 7 70\n");
        assert_eq!(read_control_lines(&file_path)?, lines);
        Ok(())
    }

    #[test]
    fn read_missing_file() {
        assert!(matches!(
            read_control_lines("/definitely/not/here.txt"),
            Err(IoError::FileDoesNotExist(_))
        ));
    }
}
