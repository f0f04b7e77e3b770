/// Known sharing-link prefix that needs rewriting before retrieval.
const DRIVE_FILE_PREFIX: &str = "https://drive.google.com/file/d/";

/// Direct-download endpoint for the same provider.
const DRIVE_DOWNLOAD_ENDPOINT: &str = "https://drive.google.com/uc?export=download&id=";

/// Rewrites a Google Drive sharing link into its direct-download form.
///
/// Any other URL passes through unchanged. The extracted file id (the
/// sixth slash-delimited component) is not validated; a malformed link
/// yields a malformed download URL and the error surfaces later as a
/// failed fetch.
pub fn direct_download_url(url: &str) -> String {
    if url.starts_with(DRIVE_FILE_PREFIX) {
        let file_id = url.split('/').nth(5).unwrap_or("");
        return format!("{}{}", DRIVE_DOWNLOAD_ENDPOINT, file_id);
    }

    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_share_link_rewritten() {
        assert_eq!(
            direct_download_url("https://drive.google.com/file/d/ABC123/view"),
            "https://drive.google.com/uc?export=download&id=ABC123"
        );
    }

    #[test]
    fn test_drive_link_without_view_suffix() {
        assert_eq!(
            direct_download_url("https://drive.google.com/file/d/ABC123"),
            "https://drive.google.com/uc?export=download&id=ABC123"
        );
    }

    #[test]
    fn test_other_urls_pass_through() {
        for url in [
            "https://example.com/logo.png",
            "https://drive.google.com/uc?export=download&id=ABC123",
            "http://drive.google.com/file/d/ABC123/view",
            "",
        ] {
            assert_eq!(direct_download_url(url), url);
        }
    }

    #[test]
    fn test_malformed_drive_link_propagates() {
        // No id segment: the rewrite still happens, with an empty id.
        assert_eq!(
            direct_download_url("https://drive.google.com/file/d/"),
            "https://drive.google.com/uc?export=download&id="
        );
    }
}
