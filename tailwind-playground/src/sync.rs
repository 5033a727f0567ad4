//! Height synchronization between the sandboxed preview and the host.
//!
//! The preview posts `{ height: number }` after it loads. The host pads the
//! value, applies it as the frame's CSS height, and keeps a floor via
//! `min-height` so near-empty documents do not collapse the layout. Delivery
//! is fire-and-forget: the latest message wins and malformed ones are
//! dropped.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Added to every reported height so exact-fit sizing never shows a scrollbar.
pub const HEIGHT_PADDING_PX: u32 = 32;

/// Minimum rendered height of the preview container.
pub const MIN_CONTAINER_HEIGHT_PX: u32 = 300;

/// The only message shape the host accepts from the preview.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightMessage {
    pub height: f64,
}

impl HeightMessage {
    /// Extract a height message from arbitrary message data. Extra fields are
    /// ignored; a missing, non-numeric, negative or non-finite `height`
    /// yields `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let height = value.as_object()?.get("height")?.as_f64()?;
        if height.is_finite() && height >= 0.0 {
            Some(Self { height })
        } else {
            None
        }
    }

    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str::<Value>(raw)
            .ok()
            .as_ref()
            .and_then(Self::from_value)
    }
}

/// CSS height of the preview container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerHeight {
    /// No message received yet; the frame fills its pane.
    Fill,
    Pixels(u32),
}

impl fmt::Display for ContainerHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerHeight::Fill => write!(f, "100%"),
            ContainerHeight::Pixels(px) => write!(f, "{px}px"),
        }
    }
}

/// Host-side state of the channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightSync {
    padding: u32,
    floor: u32,
    height: ContainerHeight,
}

impl Default for HeightSync {
    fn default() -> Self {
        Self::new(HEIGHT_PADDING_PX, MIN_CONTAINER_HEIGHT_PX)
    }
}

impl HeightSync {
    pub fn new(padding: u32, floor: u32) -> Self {
        Self {
            padding,
            floor,
            height: ContainerHeight::Fill,
        }
    }

    pub fn padding(&self) -> u32 {
        self.padding
    }

    /// Handle one incoming message. Returns whether it changed the height.
    pub fn receive(&mut self, data: &Value) -> bool {
        match HeightMessage::from_value(data) {
            Some(msg) => {
                self.apply(msg);
                true
            }
            None => {
                tracing::trace!("ignoring preview message without a usable height");
                false
            }
        }
    }

    /// Apply a well-formed message and return the new CSS height in pixels.
    pub fn apply(&mut self, msg: HeightMessage) -> u32 {
        // `as` saturates, so absurd heights clamp to u32::MAX
        let px = (msg.height.ceil() as u32).saturating_add(self.padding);
        self.height = ContainerHeight::Pixels(px);
        px
    }

    /// The container's CSS `height`.
    pub fn height(&self) -> ContainerHeight {
        self.height
    }

    /// The container's CSS `min-height`.
    pub fn min_height(&self) -> u32 {
        self.floor
    }

    /// What the layout shows once `min-height` is applied, if a message has
    /// arrived.
    pub fn rendered_px(&self) -> Option<u32> {
        match self.height {
            ContainerHeight::Fill => None,
            ContainerHeight::Pixels(px) => Some(px.max(self.floor)),
        }
    }

    /// Host-page controller for the frame with id `frame_id`, exposed as
    /// `previewSync` with `attach()` and `detach()`. Attaching twice installs
    /// one listener; detaching removes it.
    pub fn listener_js(&self, frame_id: &str) -> String {
        format!(
            r#"var previewSync = (function() {{
    var frame = document.getElementById({frame_id});
    var padding = {padding};
    var attached = false;
    function onMessage(event) {{
      if (!frame || event.source !== frame.contentWindow) return;
      var data = event.data;
      if (!data || typeof data !== 'object') return;
      var h = data.height;
      if (typeof h !== 'number' || !isFinite(h) || h < 0) return;
      frame.style.height = (Math.ceil(h) + padding) + 'px';
    }}
    return {{
      attach: function() {{
        if (attached) return;
        window.addEventListener('message', onMessage);
        attached = true;
      }},
      detach: function() {{
        if (!attached) return;
        window.removeEventListener('message', onMessage);
        attached = false;
      }}
    }};
  }})();"#,
            frame_id = serde_json::Value::from(frame_id),
            padding = self.padding,
        )
    }
}
