//! One-shot download of the current document.

pub const DOWNLOAD_FILENAME: &str = "tailwind-playground.html";
pub const DOWNLOAD_CONTENT_TYPE: &str = "text/html; charset=utf-8";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl Download {
    /// The document text as typed; no template is applied.
    pub fn of_source(source: &str) -> Self {
        Self {
            filename: DOWNLOAD_FILENAME,
            content_type: DOWNLOAD_CONTENT_TYPE,
            body: source.to_string(),
        }
    }

    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_is_the_raw_source() {
        let d = Download::of_source("<p>hi</p>");
        assert_eq!(d.body, "<p>hi</p>");
        assert_eq!(d.content_type, "text/html; charset=utf-8");
        assert_eq!(
            d.content_disposition(),
            "attachment; filename=\"tailwind-playground.html\""
        );
    }
}
