//! Interactive prompt: read one query, print the shaped results.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::models::SearchResultItem;
use crate::services::SearchService;

pub const PROMPT: &str = "Enter your search query: ";

pub async fn run<R, W>(service: &SearchService, count: u32, mut input: R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let query = line.trim_end_matches(['\r', '\n']);

    if query.trim().is_empty() {
        writeln!(output, "No query entered.")?;
        return Ok(());
    }

    let results = service.search(query, count).await?;
    write_results(output, query, &results)?;
    Ok(())
}

pub fn write_results<W: Write>(output: &mut W, query: &str, results: &[SearchResultItem]) -> std::io::Result<()> {
    if results.is_empty() {
        return writeln!(output, "No results found.");
    }

    writeln!(output, "\nSearch results for '{}':\n", query)?;
    for (i, result) in results.iter().enumerate() {
        writeln!(output, "{}. {}", i + 1, result.name)?;
        writeln!(output, "   URL: {}", result.url)?;
        writeln!(output, "   Snippet: {}\n", result.snippet)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use crate::services::MockSearchProvider;
    use serde_json::json;
    use std::io::Cursor;
    use std::sync::Arc;

    fn item(name: &str, url: &str, snippet: &str) -> SearchResultItem {
        SearchResultItem {
            name: name.to_string(),
            url: url.to_string(),
            snippet: snippet.to_string(),
        }
    }

    #[test]
    fn formats_numbered_listing() {
        let mut out = Vec::new();
        write_results(
            &mut out,
            "rust",
            &[
                item("Rust", "https://www.rust-lang.org/", "Reliable"),
                item("Crates", "https://crates.io/", "Registry"),
            ],
        )
        .unwrap();

        let expected = "\nSearch results for 'rust':\n\n\
                        1. Rust\n   URL: https://www.rust-lang.org/\n   Snippet: Reliable\n\n\
                        2. Crates\n   URL: https://crates.io/\n   Snippet: Registry\n\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn empty_listing_says_so() {
        let mut out = Vec::new();
        write_results(&mut out, "rust", &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No results found.\n");
    }

    #[tokio::test]
    async fn prompts_and_searches_without_the_newline() {
        let mut provider = MockSearchProvider::new();
        provider
            .expect_raw_search()
            .withf(|query, count| query == "serde json" && *count == 10)
            .times(1)
            .returning(|_, _| {
                Ok(json!({"webPages": {"value": [
                    {"name": "serde_json", "url": "https://docs.rs/serde_json", "snippet": "JSON"}
                ]}}))
            });
        let service = SearchService::new(Arc::new(provider));

        let mut out = Vec::new();
        run(&service, 10, Cursor::new("serde json\n"), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(PROMPT));
        assert!(text.contains("1. serde_json"));
        assert!(text.contains("   URL: https://docs.rs/serde_json"));
    }

    #[tokio::test]
    async fn keeps_inner_padding_of_the_query() {
        let mut provider = MockSearchProvider::new();
        provider
            .expect_raw_search()
            .withf(|query, _| query == "  padded query ")
            .times(1)
            .returning(|_, _| {
                Ok(json!({"webPages": {"value": [{"name": "hit", "url": "https://a.test/"}]}}))
            });
        let service = SearchService::new(Arc::new(provider));

        let mut out = Vec::new();
        run(&service, 10, Cursor::new("  padded query \r\n"), &mut out)
            .await
            .unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("Search results for '  padded query ':"));
    }

    #[tokio::test]
    async fn blank_input_does_not_search() {
        let mut provider = MockSearchProvider::new();
        provider.expect_raw_search().never();
        let service = SearchService::new(Arc::new(provider));

        let mut out = Vec::new();
        run(&service, 10, Cursor::new("   \n"), &mut out).await.unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("No query entered.\n"));
    }

    #[tokio::test]
    async fn search_errors_propagate() {
        let mut provider = MockSearchProvider::new();
        provider
            .expect_raw_search()
            .returning(|_, _| Err(SearchError::Configuration));
        let service = SearchService::new(Arc::new(provider));

        let mut out = Vec::new();
        let err = run(&service, 10, Cursor::new("rust\n"), &mut out)
            .await
            .unwrap_err();
        assert!(err
            .downcast_ref::<SearchError>()
            .map(SearchError::is_configuration)
            .unwrap_or(false));
    }
}
