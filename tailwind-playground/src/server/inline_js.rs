use crate::export::DOWNLOAD_FILENAME;
use crate::notice::Notice;
use crate::snippets::CATALOG;
use crate::sync::HeightSync;
use crate::tour::TOUR_STEPS;
use super::panels::PREVIEW_FRAME_ID;
use super::util::json_inline;

pub(super) struct InlineJs<'a> {
    pub payload: &'a str,
    pub revision: u64,
    pub sync: &'a HeightSync,
}

pub(super) fn build_inline_js(page: &InlineJs<'_>) -> String {
    let payload_json = json_inline(page.payload);
    let snippets_json = json_inline(CATALOG);
    let notices_json = json_inline(&Notice::table_json());
    let steps_json = json_inline(TOUR_STEPS);
    let filename_json = json_inline(DOWNLOAD_FILENAME);
    let frame_id_json = json_inline(PREVIEW_FRAME_ID);
    let sync_js = page.sync.listener_js(PREVIEW_FRAME_ID);

    format!(r##"<script>
  var SNIPPETS = {snippets_json};
  var NOTICES = {notices_json};
  var TOUR_STEPS = {steps_json};
  var DOWNLOAD_FILENAME = {filename_json};

  // ── Toasts ──────────────────────────────────────────────────────
  function notify(key) {{
    var n = NOTICES[key];
    if (!n) return;
    var box = document.getElementById('toasts');
    var el = document.createElement('div');
    el.className = n.failure ? 'toast failure' : 'toast';
    var title = document.createElement('div');
    title.className = 'toast-title';
    title.textContent = n.title;
    var desc = document.createElement('div');
    desc.className = 'toast-desc';
    desc.textContent = n.description;
    el.appendChild(title);
    el.appendChild(desc);
    box.appendChild(el);
    setTimeout(function() {{ if (el.parentNode) el.parentNode.removeChild(el); }}, 2500);
  }}

  function copyText(text, okKey) {{
    if (!navigator.clipboard || !navigator.clipboard.writeText) {{
      notify('copyFailed');
      return;
    }}
    navigator.clipboard.writeText(text)
      .then(function() {{ notify(okKey); }})
      .catch(function() {{ notify('copyFailed'); }});
  }}

  // ── Preview ─────────────────────────────────────────────────────
  var frame = document.getElementById({frame_id_json});
  var appliedRevision = {revision};
  frame.srcdoc = {payload_json};
  {sync_js}
  previewSync.attach();
  window.addEventListener('pagehide', function() {{ previewSync.detach(); }});

  // ── Editor ──────────────────────────────────────────────────────
  var ta = document.getElementById('editor-source');
  var editorStatus = document.getElementById('editor-status');

  function renderSource() {{
    return fetch('/render', {{
      method: 'POST',
      headers: {{ 'Content-Type': 'application/json' }},
      body: JSON.stringify({{ source: ta.value }})
    }})
    .then(function(r) {{ return r.json(); }})
    .then(function(data) {{
      if (data.revision <= appliedRevision) return;
      appliedRevision = data.revision;
      frame.srcdoc = data.payload;
      editorStatus.textContent = '';
    }})
    .catch(function() {{
      editorStatus.textContent = 'offline';
      throw new Error('render failed');
    }});
  }}

  function runSource() {{
    renderSource()
      .then(function() {{ notify('codeUpdated'); }})
      .catch(function() {{}});
  }}

  ta.addEventListener('input', function() {{ renderSource().catch(function() {{}}); }});
  ta.addEventListener('keydown', function(e) {{
    if (e.key === 'Tab') {{
      e.preventDefault();
      var start = ta.selectionStart;
      var end = ta.selectionEnd;
      ta.value = ta.value.substring(0, start) + '  ' + ta.value.substring(end);
      ta.selectionStart = ta.selectionEnd = start + 2;
      renderSource().catch(function() {{}});
    }}
  }});

  // ── Header actions ──────────────────────────────────────────────
  function copySource() {{
    copyText(ta.value, 'sourceCopied');
  }}

  function saveSource() {{
    var btn = document.getElementById('btn-save');
    btn.disabled = true;
    btn.textContent = 'Saving...';
    fetch('/save', {{
      method: 'POST',
      headers: {{ 'Content-Type': 'application/json' }},
      body: JSON.stringify({{ source: ta.value }})
    }})
    .then(function(r) {{ return r.json(); }})
    .then(function(data) {{ notify(data.ok ? 'saved' : 'saveFailed'); }})
    .catch(function() {{ notify('saveFailed'); }})
    .then(function() {{
      btn.disabled = false;
      btn.textContent = 'Save';
    }});
  }}

  function downloadSource() {{
    try {{
      var blob = new Blob([ta.value], {{ type: 'text/html' }});
      var url = URL.createObjectURL(blob);
      var a = document.createElement('a');
      a.href = url;
      a.download = DOWNLOAD_FILENAME;
      document.body.appendChild(a);
      a.click();
      document.body.removeChild(a);
      URL.revokeObjectURL(url);
    }} catch (e) {{
      notify('downloadFailed');
    }}
  }}

  // ── Views ───────────────────────────────────────────────────────
  function showView(name) {{
    document.querySelectorAll('.tab-btn').forEach(function(b) {{
      b.classList.toggle('active', b.dataset.view === name);
    }});
    document.querySelectorAll('.view').forEach(function(v) {{
      v.classList.toggle('active', v.id === 'view-' + name);
    }});
    if (name === 'editor') previewSync.attach(); else previewSync.detach();
  }}
  document.querySelectorAll('.tab-btn').forEach(function(btn) {{
    btn.addEventListener('click', function() {{ showView(btn.dataset.view); }});
  }});

  function wireSubTabs(attr, prefix) {{
    document.querySelectorAll('[' + attr + ']').forEach(function(btn) {{
      btn.addEventListener('click', function() {{
        var key = btn.getAttribute(attr);
        btn.parentElement.querySelectorAll('button').forEach(function(b) {{ b.classList.remove('active'); }});
        btn.classList.add('active');
        var root = btn.parentElement.parentElement;
        root.querySelectorAll('.category').forEach(function(s) {{
          s.classList.toggle('active', s.id === prefix + key);
        }});
      }});
    }});
  }}
  wireSubTabs('data-category', 'category-');
  wireSubTabs('data-palette', 'palette-');

  // ── Gallery and palette ─────────────────────────────────────────
  function copySnippet(i) {{
    var s = SNIPPETS[i];
    if (s) copyText(s.code, 'snippetCopied');
  }}
  document.querySelectorAll('.swatch').forEach(function(el) {{
    el.addEventListener('click', function() {{ copyText(el.dataset.class, 'colorCopied'); }});
  }});

  // Divider drag-resize
  var divider = document.getElementById('divider');
  var split = divider.parentElement;
  var dragging = false;
  divider.addEventListener('mousedown', function(e) {{
    dragging = true;
    e.preventDefault();
  }});
  document.addEventListener('mousemove', function(e) {{
    if (!dragging) return;
    var rect = split.getBoundingClientRect();
    var frac = (e.clientX - rect.left) / rect.width;
    var clamped = Math.max(0.2, Math.min(0.8, frac));
    split.style.gridTemplateColumns = clamped + 'fr 4px ' + (1 - clamped) + 'fr';
  }});
  document.addEventListener('mouseup', function() {{ dragging = false; }});

  // ── Onboarding tour ─────────────────────────────────────────────
  var tourIndex = -1;
  var tourTarget = null;

  function dismissTour() {{
    document.getElementById('tour-prompt').classList.remove('open');
    fetch('/tour/dismiss', {{ method: 'POST' }}).catch(function() {{}});
  }}

  function openTourPrompt() {{
    document.getElementById('tour-prompt').classList.add('open');
  }}

  function skipTour() {{
    dismissTour();
  }}

  // The server owns the tour position; the page only draws it.
  function tourAction(action) {{
    fetch('/tour/' + action, {{ method: 'POST' }})
      .then(function(r) {{ return r.json(); }})
      .then(applyTour)
      .catch(function() {{ endTour(); }});
  }}

  function applyTour(t) {{
    if (t.status === 'active' && TOUR_STEPS[t.step]) showStep(t.step); else endTour();
  }}

  function startTour() {{
    document.getElementById('tour-prompt').classList.remove('open');
    showView('editor');
    document.getElementById('tour-backdrop').classList.add('open');
    tourAction('start');
  }}

  function clearHighlight() {{
    if (tourTarget) tourTarget.classList.remove('tour-highlight');
    tourTarget = null;
  }}

  function showStep(i) {{
    clearHighlight();
    tourIndex = i;
    var step = TOUR_STEPS[i];
    var bubble = document.getElementById('tour-bubble');
    document.getElementById('tour-text').textContent = step.text;
    document.getElementById('tour-back').style.display = i === 0 ? 'none' : '';
    document.getElementById('tour-next').textContent = i === TOUR_STEPS.length - 1 ? 'Done' : 'Next';
    tourTarget = document.querySelector(step.target);
    var r = tourTarget ? tourTarget.getBoundingClientRect() : {{ top: 80, left: 80, right: 80, bottom: 80, width: 0, height: 0 }};
    if (tourTarget) tourTarget.classList.add('tour-highlight');
    bubble.classList.add('open');
    var x = r.left, y = r.bottom + 10;
    if (step.placement === 'right') {{ x = r.right + 10; y = r.top + 10; }}
    if (step.placement === 'left') {{ x = r.left - 290; y = r.top + 10; }}
    if (step.placement === 'top') {{ y = r.top - bubble.offsetHeight - 10; }}
    bubble.style.left = Math.max(8, Math.min(x, window.innerWidth - 290)) + 'px';
    bubble.style.top = Math.max(8, Math.min(y, window.innerHeight - bubble.offsetHeight - 8)) + 'px';
  }}

  function endTour() {{
    clearHighlight();
    tourIndex = -1;
    document.getElementById('tour-bubble').classList.remove('open');
    document.getElementById('tour-backdrop').classList.remove('open');
  }}

  function tourNext() {{
    if (tourIndex >= 0) tourAction('next');
  }}

  function tourBack() {{
    if (tourIndex > 0) tourAction('back');
  }}

  // Keyboard shortcuts
  document.addEventListener('keydown', function(e) {{
    if ((e.ctrlKey || e.metaKey) && e.key === 's') {{
      e.preventDefault();
      saveSource();
      return;
    }}
    if (e.key === 'Escape' && tourIndex >= 0) tourAction('cancel');
  }});
</script>"##,
        snippets_json = snippets_json,
        notices_json = notices_json,
        steps_json = steps_json,
        filename_json = filename_json,
        frame_id_json = frame_id_json,
        revision = page.revision,
        payload_json = payload_json,
        sync_js = sync_js,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(payload: &str) -> String {
        build_inline_js(&InlineJs {
            payload,
            revision: 3,
            sync: &HeightSync::default(),
        })
    }

    #[test]
    fn payload_cannot_terminate_the_script_block() {
        let js = render("<p>x</p></script><script>alert(1)</script>");
        assert_eq!(js.matches("</script>").count(), 1);
        assert!(js.trim_end().ends_with("</script>"));
    }

    #[test]
    fn stale_render_responses_are_dropped() {
        let js = render("");
        assert!(js.contains("var appliedRevision = 3;"));
        assert!(js.contains("if (data.revision <= appliedRevision) return;"));
    }

    #[test]
    fn tour_controls_follow_server_status() {
        let js = render("");
        assert!(js.contains("fetch('/tour/' + action"));
        assert!(js.contains("t.status === 'active'"));
        assert!(js.contains("tourAction('cancel')"));
    }

    #[test]
    fn run_confirms_with_a_toast() {
        let js = render("");
        assert!(js.contains("function runSource()"));
        assert!(js.contains("notify('codeUpdated')"));
    }

    #[test]
    fn listener_is_detached_when_preview_leaves() {
        let js = render("");
        assert!(js.contains("previewSync.attach();"));
        assert!(js.contains("previewSync.detach();"));
    }
}
