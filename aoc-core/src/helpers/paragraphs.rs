/// Splits puzzle input into its blank-line-separated blocks, with any
/// trailing newline on a block stripped.
pub fn paragraphs(input: &str) -> impl Iterator<Item = &str> {
    input
        .split("\n\n")
        .map(|block| block.strip_suffix('\n').unwrap_or(block))
        .filter(|block| !block.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_blocks() {
        let blocks: Vec<_> = paragraphs("a\nb\n\nc\n").collect();
        assert_eq!(blocks, ["a\nb", "c"]);
    }

    #[test]
    fn ignores_trailing_blank_lines() {
        let blocks: Vec<_> = paragraphs("a\n\n\n").collect();
        assert_eq!(blocks, ["a"]);
    }
}
