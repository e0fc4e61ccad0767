use std::io::BufRead;

/// Split input into whitespace-delimited identifiers, across any number of lines
///
/// # Errors
///
/// Returns the underlying IO error if the input cannot be read.
pub fn read_tokens<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut tokens = Vec::new();
    for line in reader.lines() {
        tokens.extend(line?.split_whitespace().map(str::to_string));
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_tokens() {
        let input = "GENE1\n  GENE2\tGENE3  \n\n\r\nGENE4\r\n";
        let tokens = read_tokens(input.as_bytes()).unwrap();
        assert_eq!(tokens, vec!["GENE1", "GENE2", "GENE3", "GENE4"]);
    }

    #[test]
    fn test_read_tokens_empty() {
        assert!(read_tokens("".as_bytes()).unwrap().is_empty());
    }
}
