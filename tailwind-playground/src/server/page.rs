use super::css::build_css;
use super::toolbar::build_toolbar;
use super::panels::{build_editor_panel, build_gallery, build_palette, build_preview_panel, build_tour_prompt};
use super::inline_js::{build_inline_js, InlineJs};
use super::util::html_escape;
use super::DevState;

/// The full playground UI for the current session. Rendering the page
/// also settles the session, since the page embeds a fresh payload.
pub(super) fn build_host_page(state: &mut DevState) -> String {
    let rendered = state.session.render();
    let template = state.session.template().clone();

    let css = build_css(state.sync.min_height());
    let toolbar = build_toolbar();
    let editor_panel = build_editor_panel(state.session.source());
    let preview_panel = build_preview_panel();
    let gallery = build_gallery(&template);
    let palette = build_palette();
    let tour_prompt = build_tour_prompt(crate::tour::should_prompt(&state.settings));
    let inline_js = build_inline_js(&InlineJs {
        payload: &rendered.payload,
        revision: rendered.revision,
        sync: &state.sync,
    });

    // The host loads the engine too, for the palette swatches.
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Tailwind Playground</title>
<script src="{engine_url}"></script>
<style>
  {css}
</style>
</head>
<body>
{toolbar}
<div class="view active" id="view-editor">
  <div class="split">
    {editor_panel}
    <div class="divider" id="divider"></div>
    {preview_panel}
  </div>
</div>
<div class="view" id="view-components">
  {gallery}
</div>
<div class="view" id="view-colors">
  {palette}
</div>
<div class="toasts" id="toasts"></div>
{tour_prompt}
{inline_js}
</body>
</html>"##,
        engine_url = html_escape(&template.engine_url),
        css = css,
        toolbar = toolbar,
        editor_panel = editor_panel,
        preview_panel = preview_panel,
        gallery = gallery,
        palette = palette,
        tour_prompt = tour_prompt,
        inline_js = inline_js,
    )
}
