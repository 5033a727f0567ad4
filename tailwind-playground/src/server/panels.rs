use crate::palette::{swatches, PaletteTab, Utility};
use crate::preview::{PreviewTemplate, PREVIEW_SANDBOX};
use crate::snippets::{by_category, Category, CATALOG};
use super::util::html_escape;

pub(super) const PREVIEW_FRAME_ID: &str = "preview-frame";

pub(super) fn build_editor_panel(source: &str) -> String {
    format!(
        r#"<div class="panel code-editor">
  <div class="panel-header">
    <span>HTML + Tailwind CSS</span>
    <span class="editor-status" id="editor-status"></span>
    <button class="btn-run" onclick="runSource()" title="Apply the code to the preview">Run</button>
  </div>
  <textarea id="editor-source" class="editor-textarea" spellcheck="false" autocapitalize="off" autocomplete="off" autocorrect="off">{escaped}</textarea>
</div>"#,
        escaped = html_escape(source),
    )
}

/// The payload is injected by script after load; see `inline_js`.
pub(super) fn build_preview_panel() -> String {
    format!(
        r#"<div class="panel preview">
  <div class="panel-header"><span>Preview</span></div>
  <div class="preview-scroll">
    <iframe id="{id}" class="preview-frame" title="preview" sandbox="{sandbox}" srcdoc=""></iframe>
  </div>
</div>"#,
        id = PREVIEW_FRAME_ID,
        sandbox = PREVIEW_SANDBOX.attribute_value(),
    )
}

/// Snippet cards. Each preview runs in its own sandboxed frame, built with
/// the same template as the editor preview.
pub(super) fn build_gallery(template: &PreviewTemplate) -> String {
    let sandbox = PREVIEW_SANDBOX.attribute_value();
    let mut html = String::from(r#"<div class="gallery"><div class="category-bar">"#);
    for (i, cat) in Category::ALL.iter().enumerate() {
        let active = if i == 0 { "active" } else { "" };
        html.push_str(&format!(
            r#"<button class="{active}" data-category="{key}">{label}</button>"#,
            key = cat.label().to_lowercase(),
            label = cat.label(),
        ));
    }
    html.push_str("</div>");

    for (i, cat) in Category::ALL.iter().enumerate() {
        let active = if i == 0 { " active" } else { "" };
        html.push_str(&format!(
            r#"<section class="category{active}" id="category-{key}"><h2>{heading}</h2><div class="card-grid">"#,
            key = cat.label().to_lowercase(),
            heading = cat.heading(),
        ));
        for snippet in by_category(*cat) {
            let index = CATALOG
                .iter()
                .position(|s| s.title == snippet.title)
                .unwrap_or_default();
            html.push_str(&format!(
                r#"<div class="card"><iframe title="{title}" sandbox="{sandbox}" loading="lazy" srcdoc="{srcdoc}"></iframe><div class="card-footer"><span>{title}</span><button onclick="copySnippet({index})" title="Copy code">Copy</button></div></div>"#,
                title = html_escape(snippet.title),
                sandbox = sandbox,
                srcdoc = html_escape(&template.render(snippet.code)),
                index = index,
            ));
        }
        html.push_str("</div></section>");
    }
    html.push_str("</div>");
    html
}

pub(super) fn build_palette() -> String {
    let mut html = String::from(
        r#"<div class="palette"><h3>Tailwind Colors</h3><p style="margin-bottom:12px">Click on any color to copy its class name to your clipboard</p><div class="category-bar">"#,
    );
    for (i, tab) in PaletteTab::ALL.iter().enumerate() {
        let active = if i == 0 { "active" } else { "" };
        html.push_str(&format!(
            r#"<button class="{active}" data-palette="{key}">{label}</button>"#,
            key = tab.label().to_lowercase(),
            label = tab.label(),
        ));
    }
    html.push_str("</div>");

    for (i, tab) in PaletteTab::ALL.iter().enumerate() {
        let active = if i == 0 { " active" } else { "" };
        html.push_str(&format!(
            r#"<section class="category{active}" id="palette-{key}">"#,
            key = tab.label().to_lowercase(),
        ));
        let utility = tab.utility();
        for group in swatches(utility) {
            html.push_str(&format!(
                r#"<div class="palette-group"><h3>{}</h3><div class="swatch-grid">"#,
                group.family.label()
            ));
            for swatch in &group.swatches {
                let class = html_escape(&swatch.class_name);
                let chip = match utility {
                    Utility::Background => format!(r#"<div class="chip {class}"></div>"#),
                    Utility::Text => {
                        format!(r#"<div class="chip"><span class="aa {class}">Aa</span></div>"#)
                    }
                    Utility::Border => format!(r#"<div class="chip outline {class}"></div>"#),
                };
                html.push_str(&format!(
                    r#"<div class="swatch" data-class="{class}" title="{name}">{chip}<div class="label">{class}</div></div>"#,
                    name = html_escape(&swatch.name),
                ));
            }
            html.push_str("</div></div>");
        }
        html.push_str("</section>");
    }
    html.push_str("</div>");
    html
}

/// Onboarding dialog, open on first visit.
pub(super) fn build_tour_prompt(open: bool) -> String {
    let class = if open { "tour-prompt open" } else { "tour-prompt" };
    format!(
        r#"<div class="{class}" id="tour-prompt">
  <div class="dialog">
    <h2>Welcome to Tailwind Playground</h2>
    <p>Would you like to take a quick tour to learn the essential features of the editor?</p>
    <div class="buttons">
      <button class="primary" onclick="startTour()">Start Tour</button>
      <button onclick="skipTour()">Skip for Now</button>
    </div>
  </div>
</div>
<div class="tour-backdrop" id="tour-backdrop"></div>
<div class="tour-bubble" id="tour-bubble">
  <div class="text" id="tour-text"></div>
  <div class="buttons">
    <button id="tour-back" onclick="tourBack()">Back</button>
    <button class="primary" id="tour-next" onclick="tourNext()">Next</button>
  </div>
</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_frame_is_sandboxed_to_scripts() {
        let html = build_preview_panel();
        assert!(html.contains(r#"sandbox="allow-scripts""#));
        assert!(!html.contains("allow-same-origin"));
        assert!(!html.contains("allow-top-navigation"));
    }

    #[test]
    fn gallery_has_a_copy_button_per_snippet() {
        let html = build_gallery(&PreviewTemplate::default());
        assert_eq!(html.matches("copySnippet(").count(), CATALOG.len());
        assert!(html.contains("copySnippet(0)"));
    }

    #[test]
    fn palette_swatches_carry_their_token() {
        let html = build_palette();
        assert!(html.contains(r#"data-class="bg-slate-50""#));
        assert!(html.contains(r#"data-class="text-red-500""#));
        assert!(html.contains(r#"data-class="border-purple-950""#));
    }

    #[test]
    fn editor_header_has_run_action() {
        let html = build_editor_panel("");
        assert!(html.contains(r#"class="btn-run" onclick="runSource()""#));
    }

    #[test]
    fn editor_escapes_source() {
        let html = build_editor_panel("</textarea><script>x</script>");
        assert!(!html.contains("</textarea><script>"));
        assert!(html.contains("&lt;/textarea&gt;"));
    }
}
