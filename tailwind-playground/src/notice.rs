//! One-line, non-blocking notifications shown after user actions.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Notice {
    CodeUpdated,
    SourceCopied,
    SnippetCopied,
    ColorCopied,
    CopyFailed,
    Saved,
    SaveFailed,
    DownloadFailed,
}

impl Notice {
    pub const ALL: [Notice; 8] = [
        Notice::CodeUpdated,
        Notice::SourceCopied,
        Notice::SnippetCopied,
        Notice::ColorCopied,
        Notice::CopyFailed,
        Notice::Saved,
        Notice::SaveFailed,
        Notice::DownloadFailed,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Notice::CodeUpdated => "Code updated",
            Notice::SourceCopied => "Copied to clipboard",
            Notice::SnippetCopied => "Component copied",
            Notice::ColorCopied => "Copied to Clipboard",
            Notice::CopyFailed => "Copy failed",
            Notice::Saved => "Code saved",
            Notice::SaveFailed => "Save failed",
            Notice::DownloadFailed => "Download failed",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Notice::CodeUpdated => "Your changes have been applied to the preview",
            Notice::SourceCopied => "The HTML code has been copied to your clipboard",
            Notice::SnippetCopied => "The component code has been copied to your clipboard",
            Notice::ColorCopied => "The color has been copied to your clipboard.",
            Notice::CopyFailed => "The browser refused clipboard access",
            Notice::Saved => "Your code has been saved successfully",
            Notice::SaveFailed => "Your code could not be saved",
            Notice::DownloadFailed => "The file could not be downloaded",
        }
    }

    pub fn is_failure(self) -> bool {
        matches!(
            self,
            Notice::CopyFailed | Notice::SaveFailed | Notice::DownloadFailed
        )
    }

    /// `{ "<key>": { "title", "description", "failure" } }` for the host page.
    pub fn table_json() -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for n in Self::ALL {
            let key = serde_json::to_value(n)
                .ok()
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_default();
            map.insert(
                key,
                serde_json::json!({
                    "title": n.title(),
                    "description": n.description(),
                    "failure": n.is_failure(),
                }),
            );
        }
        serde_json::Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_every_notice_by_camel_case_key() {
        let table = Notice::table_json();
        assert_eq!(table.as_object().unwrap().len(), Notice::ALL.len());
        assert_eq!(table["sourceCopied"]["title"], "Copied to clipboard");
        assert_eq!(table["copyFailed"]["failure"], true);
        assert_eq!(table["saved"]["failure"], false);
        assert_eq!(table["codeUpdated"]["title"], "Code updated");
        assert_eq!(table["codeUpdated"]["failure"], false);
    }
}
