//! Interactive yes/no confirmation before deleting anything

use std::io::{self, BufRead, Write};

/// `y` or `yes`, ignoring case and surrounding whitespace
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Ask whether `count` duplicate files should be removed
///
/// Blocks until a line is read from `input`. End of input counts as "no".
pub fn confirm_removal<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    count: usize,
) -> io::Result<bool> {
    write!(
        output,
        "\nDo you want to remove {} duplicate files? (y/n): ",
        count
    )?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        writeln!(output)?;
        return Ok(false);
    }

    Ok(is_affirmative(&answer))
}
