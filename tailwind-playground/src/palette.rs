//! Tailwind color-class reference.
//!
//! Every swatch is `<utility>-<family>-<shade>`; clicking one copies that
//! token. The Default tab shows background classes.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::PlaygroundError;

pub const SHADES: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFamily {
    Slate,
    Gray,
    Red,
    Green,
    Blue,
    Purple,
}

impl ColorFamily {
    pub const ALL: [ColorFamily; 6] = [
        ColorFamily::Slate,
        ColorFamily::Gray,
        ColorFamily::Red,
        ColorFamily::Green,
        ColorFamily::Blue,
        ColorFamily::Purple,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ColorFamily::Slate => "slate",
            ColorFamily::Gray => "gray",
            ColorFamily::Red => "red",
            ColorFamily::Green => "green",
            ColorFamily::Blue => "blue",
            ColorFamily::Purple => "purple",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorFamily::Slate => "Slate",
            ColorFamily::Gray => "Gray",
            ColorFamily::Red => "Red",
            ColorFamily::Green => "Green",
            ColorFamily::Blue => "Blue",
            ColorFamily::Purple => "Purple",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Utility {
    Background,
    Text,
    Border,
}

impl Utility {
    pub const ALL: [Utility; 3] = [Utility::Background, Utility::Text, Utility::Border];

    pub fn prefix(self) -> &'static str {
        match self {
            Utility::Background => "bg",
            Utility::Text => "text",
            Utility::Border => "border",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.prefix() == prefix)
    }
}

/// Tabs of the colors view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteTab {
    Default,
    Text,
    Background,
    Border,
}

impl PaletteTab {
    pub const ALL: [PaletteTab; 4] = [
        PaletteTab::Default,
        PaletteTab::Text,
        PaletteTab::Background,
        PaletteTab::Border,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PaletteTab::Default => "Default",
            PaletteTab::Text => "Text",
            PaletteTab::Background => "Background",
            PaletteTab::Border => "Border",
        }
    }

    pub fn utility(self) -> Utility {
        match self {
            PaletteTab::Default | PaletteTab::Background => Utility::Background,
            PaletteTab::Text => Utility::Text,
            PaletteTab::Border => Utility::Border,
        }
    }
}

/// A parsed color class such as `text-red-500`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorClass {
    pub utility: Utility,
    pub family: ColorFamily,
    pub shade: u16,
}

impl fmt::Display for ColorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.utility.prefix(),
            self.family.key(),
            self.shade
        )
    }
}

impl FromStr for ColorClass {
    type Err = PlaygroundError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || PlaygroundError::InvalidColorClass(token.to_string());
        let mut parts = token.split('-');
        let (Some(prefix), Some(family), Some(shade), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        let utility = Utility::from_prefix(prefix).ok_or_else(invalid)?;
        let family = ColorFamily::ALL
            .into_iter()
            .find(|f| f.key() == family)
            .ok_or_else(invalid)?;
        let shade: u16 = shade.parse().map_err(|_| invalid())?;
        if !SHADES.contains(&shade) {
            return Err(invalid());
        }
        Ok(ColorClass {
            utility,
            family,
            shade,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swatch {
    /// Human label, e.g. `Slate 50`.
    pub name: String,
    /// The token copied to the clipboard, e.g. `bg-slate-50`.
    pub class_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwatchGroup {
    pub family: ColorFamily,
    pub swatches: Vec<Swatch>,
}

/// All swatches for one utility, grouped by family in display order.
pub fn swatches(utility: Utility) -> Vec<SwatchGroup> {
    ColorFamily::ALL
        .into_iter()
        .map(|family| SwatchGroup {
            family,
            swatches: SHADES
                .into_iter()
                .map(|shade| Swatch {
                    name: format!("{} {shade}", family.label()),
                    class_name: ColorClass {
                        utility,
                        family,
                        shade,
                    }
                    .to_string(),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_names_follow_tailwind_shape() {
        let groups = swatches(Utility::Background);
        assert_eq!(groups.len(), 6);
        let slate = &groups[0];
        assert_eq!(slate.swatches[0].name, "Slate 50");
        assert_eq!(slate.swatches[0].class_name, "bg-slate-50");
        assert_eq!(slate.swatches.last().unwrap().class_name, "bg-slate-950");
    }

    #[test]
    fn text_and_border_swap_prefix() {
        assert_eq!(swatches(Utility::Text)[2].swatches[5].class_name, "text-red-500");
        assert_eq!(swatches(Utility::Border)[4].swatches[0].class_name, "border-blue-50");
    }

    #[test]
    fn default_tab_shows_backgrounds() {
        assert_eq!(PaletteTab::Default.utility(), Utility::Background);
    }

    #[test]
    fn parse_color_class() {
        let c: ColorClass = "text-purple-700".parse().unwrap();
        assert_eq!(c.utility, Utility::Text);
        assert_eq!(c.family, ColorFamily::Purple);
        assert_eq!(c.shade, 700);
        assert_eq!(c.to_string(), "text-purple-700");

        for bad in ["bg-slate", "bg-pink-500", "bg-red-550", "ring-red-500", "bg-red-500-x"] {
            assert!(bad.parse::<ColorClass>().is_err(), "{bad} should not parse");
        }
    }
}
