//! Shareable links: serialize the selected date into a query
//! parameter and hand the result to the system clipboard.

use anyhow::Result;

/// Builds the shareable URL for a selected date string.
///
/// The query value is the user's date string verbatim: valid dates
/// only contain `[0-9-]`, so no percent-encoding applies, and the
/// parameter round-trips byte-for-byte.
pub fn share_url(base: &str, date: &str) -> String {
    format!("{}?date={}", base.trim_end_matches('/'), date)
}

/// Places `text` on the system clipboard.
pub fn copy_link(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_owned())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_parameter_carries_the_date_verbatim() {
        let url = share_url("https://echoes.example", "2020-08-20");
        assert_eq!(url, "https://echoes.example?date=2020-08-20");
        let (_, query) = url.split_once("?date=").unwrap();
        assert_eq!(query, "2020-08-20");
    }

    #[test]
    fn trailing_slash_on_base_is_normalized() {
        assert_eq!(
            share_url("https://echoes.example/", "2020-03-10"),
            "https://echoes.example?date=2020-03-10"
        );
    }

    #[test]
    fn empty_date_still_produces_a_link() {
        assert_eq!(
            share_url("https://echoes.example", ""),
            "https://echoes.example?date="
        );
    }
}
