/// The icon files an icon set is expected to contain, keyed by the pixel size
/// and the scale of the image entry.
const ICON_TABLE: &[(&str, Option<&str>, &str)] = &[
    ("16", Some("1x"), "icon_16x16.png"),
    ("16", Some("2x"), "icon_16x16@2x.png"),
    ("32", Some("1x"), "icon_32x32.png"),
    ("32", Some("2x"), "icon_32x32@2x.png"),
    ("128", Some("1x"), "icon_128x128.png"),
    ("128", Some("2x"), "icon_128x128@2x.png"),
    ("256", Some("1x"), "icon_256x256.png"),
    ("256", Some("2x"), "icon_256x256@2x.png"),
    ("512", Some("1x"), "icon_512x512.png"),
    ("512", Some("2x"), "icon_512x512@2x.png"),
    // Single marketing sized icon, has no scale
    ("1024", None, "AppIcon_1024x1024.png"),
];

/// Looks up the canonical icon filename for the given size and scale.
pub fn lookup(size: &str, scale: Option<&str>) -> Option<&'static str> {
    ICON_TABLE
        .iter()
        .find(|(s, sc, _)| *s == size && *sc == scale)
        .map(|(_, _, filename)| *filename)
}
