pub(super) fn build_toolbar() -> String {
    let tab_bar = r#"<div class="tab-bar">
  <button class="tab-btn tab-editor active" data-view="editor">Editor</button>
  <button class="tab-btn tab-components" data-view="components">Components</button>
  <button class="tab-btn tab-colors" data-view="colors">Colors</button>
</div>"#;

    let actions = r#"<div class="actions">
  <button class="btn-copy" onclick="copySource()" title="Copy HTML to clipboard">Copy</button>
  <button class="btn-save" id="btn-save" onclick="saveSource()" title="Save (Ctrl+S)">Save</button>
  <button class="btn-download" onclick="downloadSource()" title="Download as HTML file">Download</button>
  <button onclick="openTourPrompt()" title="Show the guided tour">Tour</button>
</div>"#;

    format!(
        r#"<div class="toolbar">
  <span class="title">Tailwind Playground</span>
  {tab_bar}
  {actions}
</div>"#,
        tab_bar = tab_bar,
        actions = actions,
    )
}
