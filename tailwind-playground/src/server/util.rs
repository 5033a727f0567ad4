use serde::Serialize;

pub(super) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// JSON for embedding inside an inline `<script>`. Every `<` is written as
/// `\u003c`, which keeps `</script>` and `<!--` in user text from ending the
/// block. `<` only ever occurs inside JSON strings, so the result still
/// parses to the same value.
pub(super) fn json_inline<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json.replace('<', "\\u003c"),
        Err(e) => {
            tracing::error!("cannot serialize page data: {e}");
            "null".to_string()
        }
    }
}
