use serde::Deserialize;

/// The marketing icon size used by the `ios` and `universal` idioms.
const MARKETING_SIZE: &str = "1024x1024";

/// The keys of an image entry relevant for resolving its icon file.
///
/// Borrowed from the manifest value, any other keys of the entry are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageKeys<'a> {
    /// The point size of the image, for example `16x16`
    #[serde(default)]
    pub size: &'a str,

    /// The pixel density of the image, for example `2x`
    #[serde(default, borrow)]
    pub scale: Option<&'a str>,

    /// The platform the image is meant for
    #[serde(default)]
    pub idiom: &'a str,
}

impl<'a> ImageKeys<'a> {
    /// Determines the icon table key for this entry, if the idiom has one.
    pub fn icon_key(&self) -> Option<(&'a str, Option<&'a str>)> {
        match Idiom::from(self.idiom) {
            Idiom::Mac => {
                let size = self.size.split('x').next().unwrap_or_default();
                Some((size, self.scale))
            }
            Idiom::Ios | Idiom::Universal if self.size == MARKETING_SIZE => Some(("1024", None)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Idiom {
    /// macOS desktop icon
    Mac,

    /// iOS icon
    Ios,

    /// Single size icon for all platforms
    Universal,

    /// Any idiom not handled by the updater
    Other,
}

impl From<&str> for Idiom {
    fn from(value: &str) -> Self {
        match value {
            "mac" => Self::Mac,
            "ios" => Self::Ios,
            "universal" => Self::Universal,
            _ => Self::Other,
        }
    }
}
