//! Isolated preview payloads.
//!
//! Every edit produces a complete, self-contained HTML document: a fixed
//! head (charset, viewport, the Tailwind CDN bootstrap, base font and
//! padding) with the user's markup spliced verbatim into `<body>`, followed
//! by a height-measurement script and, optionally, a link guard. The
//! document is loaded through `srcdoc` into an iframe restricted by
//! [`PREVIEW_SANDBOX`], so untrusted markup can run the styling engine's
//! scripts but never gets the host's origin or the top window.

use serde::{Deserialize, Serialize};

/// Tailwind's play CDN, which compiles utility classes in the page.
pub const STYLING_ENGINE_URL: &str = "https://cdn.tailwindcss.com";

const FONT_STACK: &str =
    r#"-apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif"#;

const BODY_PADDING: &str = "1rem";

/// Posts the document's full scroll height to the embedding page once
/// everything (including the styling engine) has loaded. The target origin
/// is `*` because a sandboxed document without `allow-same-origin` has an
/// opaque origin and cannot name the host's.
const MEASURE_JS: &str = r#"<script>
  window.addEventListener('load', function() {
    window.parent.postMessage({ height: document.body.scrollHeight }, '*');
  });
</script>"#;

/// Cancels clicks on anchors (or anything nested in one) so embedded markup
/// cannot navigate the preview frame away from the rendered document.
const LINK_GUARD_JS: &str = r#"<script>
  document.addEventListener('click', function(e) {
    var el = e.target;
    while (el && el.nodeType !== 1) el = el.parentNode;
    if (el && el.closest && el.closest('a')) e.preventDefault();
  }, true);
</script>"#;

/// One `allow-*` token of the iframe `sandbox` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    Scripts,
    SameOrigin,
    TopNavigation,
    Forms,
    Popups,
    Modals,
}

impl Capability {
    pub const ALL: [Capability; 6] = [
        Capability::Scripts,
        Capability::SameOrigin,
        Capability::TopNavigation,
        Capability::Forms,
        Capability::Popups,
        Capability::Modals,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Capability::Scripts => "allow-scripts",
            Capability::SameOrigin => "allow-same-origin",
            Capability::TopNavigation => "allow-top-navigation",
            Capability::Forms => "allow-forms",
            Capability::Popups => "allow-popups",
            Capability::Modals => "allow-modals",
        }
    }
}

/// An allow-list of sandbox capabilities. Anything not listed is denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SandboxPolicy {
    allowed: &'static [Capability],
}

/// The preview frame may run scripts and nothing else.
pub const PREVIEW_SANDBOX: SandboxPolicy = SandboxPolicy {
    allowed: &[Capability::Scripts],
};

impl SandboxPolicy {
    pub fn permits(&self, cap: Capability) -> bool {
        self.allowed.contains(&cap)
    }

    /// Value for the iframe `sandbox` attribute.
    pub fn attribute_value(&self) -> String {
        self.allowed
            .iter()
            .map(|c| c.token())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Equivalent `Content-Security-Policy` value, for serving a payload as a
    /// top-level page where no iframe attribute can apply.
    pub fn csp_header(&self) -> String {
        let tokens = self.attribute_value();
        if tokens.is_empty() {
            "sandbox".to_string()
        } else {
            format!("sandbox {tokens}")
        }
    }
}

/// Fixed boilerplate wrapped around every preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewTemplate {
    pub engine_url: String,
    pub font_stack: String,
    pub body_padding: String,
    /// Install the anchor click guard.
    pub contain_navigation: bool,
}

impl Default for PreviewTemplate {
    fn default() -> Self {
        Self {
            engine_url: STYLING_ENGINE_URL.to_string(),
            font_stack: FONT_STACK.to_string(),
            body_padding: BODY_PADDING.to_string(),
            contain_navigation: true,
        }
    }
}

impl PreviewTemplate {
    /// Build the full document for `source`. Pure: the same template and
    /// source always produce the same bytes.
    pub fn render(&self, source: &str) -> String {
        let guard = if self.contain_navigation {
            LINK_GUARD_JS
        } else {
            ""
        };

        format!(
            r##"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<script src="{engine_url}"></script>
<style>
  body {{
    font-family: {font_stack};
    padding: {body_padding};
  }}
</style>
</head>
<body>
{source}
{measure}
{guard}
</body>
</html>"##,
            engine_url = attr_escape(&self.engine_url),
            font_stack = self.font_stack,
            body_padding = self.body_padding,
            source = source,
            measure = MEASURE_JS,
            guard = guard,
        )
    }
}

/// Build a preview document with the default template.
pub fn build_payload(source: &str) -> String {
    PreviewTemplate::default().render(source)
}

fn attr_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('"', "&quot;").replace('<', "&lt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_deterministic() {
        let src = r#"<div class="p-4 bg-blue-500">hi</div>"#;
        assert_eq!(build_payload(src), build_payload(src));
    }

    #[test]
    fn source_is_spliced_verbatim_once() {
        let src = "<p class=\"text-red-500\">a & b <em>unclosed";
        let html = build_payload(src);
        assert_eq!(html.matches(src).count(), 1);
        let body_start = html.find("<body>").unwrap();
        let src_at = html.find(src).unwrap();
        assert!(src_at > body_start);
    }

    #[test]
    fn payload_carries_fixed_boilerplate() {
        let html = build_payload("");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<meta charset="UTF-8">"#));
        assert!(html.contains(r#"name="viewport""#));
        assert!(html.contains(r#"<script src="https://cdn.tailwindcss.com"></script>"#));
        assert!(html.contains("padding: 1rem;"));
        assert!(html.contains("postMessage({ height: document.body.scrollHeight }"));
    }

    #[test]
    fn link_guard_is_optional() {
        let mut tpl = PreviewTemplate::default();
        assert!(tpl.render("x").contains("closest('a')"));
        tpl.contain_navigation = false;
        let html = tpl.render("x");
        assert!(!html.contains("closest('a')"));
        assert!(html.contains("postMessage"));
    }

    #[test]
    fn sandbox_only_allows_scripts() {
        assert!(PREVIEW_SANDBOX.permits(Capability::Scripts));
        for cap in Capability::ALL.into_iter().filter(|c| *c != Capability::Scripts) {
            assert!(!PREVIEW_SANDBOX.permits(cap), "{cap:?} must be denied");
        }
        assert_eq!(PREVIEW_SANDBOX.attribute_value(), "allow-scripts");
        assert_eq!(PREVIEW_SANDBOX.csp_header(), "sandbox allow-scripts");
    }

    #[test]
    fn engine_url_cannot_break_out_of_attribute() {
        let tpl = PreviewTemplate {
            engine_url: r#"x"><script>alert(1)</script>"#.to_string(),
            ..PreviewTemplate::default()
        };
        let html = tpl.render("");
        assert!(html.contains(r#"<script src="x&quot;>&lt;script>alert(1)&lt;/script>"></script>"#));
    }
}
