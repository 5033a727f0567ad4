pub(super) fn build_css(min_height_px: u32) -> String {
    format!(
        r#"* {{ margin: 0; padding: 0; box-sizing: border-box; }}
html, body {{ width: 100%; height: 100%; background: #0A0A0A; color: #A0A0A0;
  font-family: 'JetBrains Mono', monospace; font-size: 12px; }}

/* ── Header ──────────────────────────────────────── */
.toolbar {{
  height: 44px; display: flex; align-items: center; padding: 0 14px;
  border-bottom: 1px solid #2A2A2A; font-size: 11px; gap: 14px;
  background: #0A0A0A; user-select: none;
}}
.toolbar .title {{ color: #38BDF8; font-weight: 600; font-size: 13px; }}
.tab-bar {{ display: flex; gap: 2px; }}
.tab-btn {{
  background: transparent; border: 1px solid transparent; color: #666;
  padding: 4px 12px; border-radius: 3px; font-size: 11px; cursor: pointer;
  font-family: inherit;
}}
.tab-btn:hover {{ color: #A0A0A0; }}
.tab-btn.active {{ color: #FFF; background: #1F1F1F; border-color: #2A2A2A; }}
.toolbar .actions {{ margin-left: auto; display: flex; gap: 6px; }}
.toolbar .actions button {{
  background: #1F1F1F; border: 1px solid #2A2A2A; color: #A0A0A0;
  padding: 4px 10px; border-radius: 3px; font-size: 10px; cursor: pointer;
  font-family: inherit;
}}
.toolbar .actions button:hover {{ color: #FFF; border-color: #444; }}
.toolbar .actions button:disabled {{ opacity: 0.5; cursor: default; }}

/* ── Views ───────────────────────────────────────── */
.view {{ display: none; height: calc(100vh - 44px); }}
.view.active {{ display: block; }}
.split {{
  display: grid; grid-template-columns: 1fr 4px 1fr; height: 100%;
}}
.panel {{ position: relative; overflow: hidden; display: flex; flex-direction: column; }}
.panel-header {{
  height: 32px; display: flex; align-items: center; justify-content: space-between;
  padding: 0 12px; font-size: 10px; color: #666; text-transform: uppercase;
  letter-spacing: 1px; border-bottom: 1px solid #2A2A2A; background: #0F0F0F;
}}
.divider {{ background: #2A2A2A; cursor: col-resize; }}
.divider:hover {{ background: #444; }}

/* ── Editor ──────────────────────────────────────── */
.editor-textarea {{
  flex: 1; width: 100%; resize: none; border: none; outline: none;
  background: #0A0A0A; color: #E5E5E5; padding: 14px;
  font-family: inherit; font-size: 12px; line-height: 1.6; tab-size: 2;
}}
.editor-status {{ text-transform: none; letter-spacing: 0; margin-left: auto; margin-right: 8px; }}
.btn-run {{
  background: #38BDF8; border: 1px solid #38BDF8; color: #0A0A0A;
  padding: 2px 10px; border-radius: 3px; font-size: 10px; cursor: pointer;
  font-family: inherit; text-transform: none; letter-spacing: 0;
}}

/* ── Preview ─────────────────────────────────────── */
.preview-scroll {{ flex: 1; overflow: auto; background: #141414; }}
.preview-frame {{
  display: block; width: 100%; height: 100%; border: none; background: #FFF;
  min-height: {min_height_px}px;
}}

/* ── Gallery ─────────────────────────────────────── */
.gallery, .palette {{ height: 100%; overflow: auto; padding: 16px; }}
.category-bar {{ display: flex; gap: 4px; margin-bottom: 14px; }}
.category-bar button {{
  background: #1F1F1F; border: 1px solid #2A2A2A; color: #666;
  padding: 3px 10px; border-radius: 3px; font-size: 10px;
  cursor: pointer; font-family: inherit;
}}
.category-bar button.active {{ color: #38BDF8; border-color: #38BDF8; }}
.category {{ display: none; }}
.category.active {{ display: block; }}
.category h2, .palette h3 {{ color: #E5E5E5; font-size: 13px; margin: 0 0 10px; }}
.card-grid {{
  display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 12px;
}}
.card {{ border: 1px solid #2A2A2A; border-radius: 6px; overflow: hidden; background: #141414; }}
.card iframe {{ display: block; width: 100%; height: 180px; border: none; background: #FFF; }}
.card-footer {{
  display: flex; align-items: center; justify-content: space-between;
  padding: 8px 12px; border-top: 1px solid #2A2A2A;
}}
.card-footer button {{
  background: #1F1F1F; border: 1px solid #2A2A2A; color: #A0A0A0;
  padding: 2px 8px; border-radius: 3px; font-size: 10px; cursor: pointer; font-family: inherit;
}}

/* ── Palette ─────────────────────────────────────── */
.palette-group {{ margin-bottom: 20px; }}
.swatch-grid {{
  display: grid; grid-template-columns: repeat(auto-fill, minmax(110px, 1fr)); gap: 8px;
}}
.swatch {{
  border: 1px solid #2A2A2A; border-radius: 6px; overflow: hidden; cursor: pointer;
  background: #141414;
}}
.swatch:hover {{ border-color: #444; }}
.swatch .chip {{ height: 48px; display: flex; align-items: center; justify-content: center; }}
.swatch .chip.outline {{ border-width: 4px; border-style: solid; background: transparent; }}
.swatch .chip .aa {{ font-size: 20px; font-weight: 700; }}
.swatch .label {{ padding: 6px 8px; font-size: 10px; color: #A0A0A0; }}

/* ── Toasts ──────────────────────────────────────── */
.toasts {{
  position: fixed; right: 16px; bottom: 16px; display: flex; flex-direction: column;
  gap: 8px; z-index: 200;
}}
.toast {{
  background: #1F1F1F; border: 1px solid #2A2A2A; border-left: 3px solid #22C55E;
  padding: 8px 12px; border-radius: 4px; min-width: 240px;
}}
.toast.failure {{ border-left-color: #EF4444; }}
.toast .toast-title {{ color: #FFF; font-size: 11px; }}
.toast .toast-desc {{ color: #888; font-size: 10px; margin-top: 2px; }}

/* ── Onboarding and tour ─────────────────────────── */
.tour-prompt {{
  position: fixed; inset: 0; background: rgba(0,0,0,0.6); z-index: 150;
  display: none; align-items: center; justify-content: center;
}}
.tour-prompt.open {{ display: flex; }}
.tour-prompt .dialog {{
  background: #141414; border: 1px solid #2A2A2A; border-radius: 8px;
  padding: 28px; max-width: 420px;
}}
.tour-prompt h2 {{ color: #FFF; font-size: 15px; margin-bottom: 10px; }}
.tour-prompt p {{ line-height: 1.6; margin-bottom: 20px; }}
.tour-prompt .buttons {{ display: flex; gap: 8px; justify-content: flex-end; }}
.tour-prompt button, .tour-bubble button {{
  background: #1F1F1F; border: 1px solid #2A2A2A; color: #A0A0A0;
  padding: 5px 12px; border-radius: 3px; cursor: pointer; font-family: inherit; font-size: 11px;
}}
.tour-prompt button.primary, .tour-bubble button.primary {{ color: #0A0A0A; background: #38BDF8; border-color: #38BDF8; }}
.tour-backdrop {{
  position: fixed; inset: 0; background: rgba(0,0,0,0.5); z-index: 120; display: none;
}}
.tour-backdrop.open {{ display: block; }}
.tour-highlight {{ position: relative; z-index: 130; outline: 2px solid #38BDF8; }}
.tour-bubble {{
  position: fixed; z-index: 140; display: none; max-width: 280px;
  background: #141414; border: 1px solid #38BDF8; border-radius: 6px; padding: 12px;
}}
.tour-bubble.open {{ display: block; }}
.tour-bubble .text {{ line-height: 1.6; margin-bottom: 10px; color: #E5E5E5; }}
.tour-bubble .buttons {{ display: flex; gap: 6px; justify-content: flex-end; }}
"#,
        min_height_px = min_height_px,
    )
}
