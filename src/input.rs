//! Reading the list of websites to process

use crate::InputError;
use std::path::Path;

/// Parses a URL list: one URL per line, blank lines and `#` comments skipped
///
/// # Example
///
/// ```
/// use contact_gatherer::input::parse_url_list;
///
/// let urls = parse_url_list("# shops\nhttps://a.test\n\n  https://b.test  \n");
/// assert_eq!(urls, vec!["https://a.test", "https://b.test"]);
/// ```
pub fn parse_url_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Reads the URL list from a file
///
/// # Returns
///
/// * `Ok(Vec<String>)` - At least one URL
/// * `Err(InputError::Io)` - The file is missing or unreadable
/// * `Err(InputError::Empty)` - The file holds no usable URL
pub fn read_input_urls(path: &Path) -> Result<Vec<String>, InputError> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let urls = parse_url_list(&content);
    if urls.is_empty() {
        return Err(InputError::Empty(path.display().to_string()));
    }

    tracing::info!("Read {} URLs from {}", urls.len(), path.display());
    Ok(urls)
}
