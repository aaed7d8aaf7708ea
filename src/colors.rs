//! Color tag styling - maps catalog color tags to display colors.

/// Packed `0xRRGGBB` for a catalog color tag, using the CSS named colors.
/// Unknown tags fall back to gray.
pub fn tag_rgb(tag: &str) -> u32 {
    match tag {
        "navy" => 0x000080,
        "blue" => 0x0000ff,
        "aqua" => 0x00ffff,
        "teal" => 0x008080,
        "olive" => 0x808000,
        "green" => 0x008000,
        "lime" => 0x00ff00,
        "yellow" => 0xffff00,
        "orange" => 0xffa500,
        "red" => 0xff0000,
        "maroon" => 0x800000,
        "fuchsia" => 0xff00ff,
        "purple" => 0x800080,
        "silver" => 0xc0c0c0,
        "gray" => 0x808080,
        "black" => 0x000000,
        _ => 0x808080,
    }
}

/// Relative luminance (0.0 - 1.0) of a packed color, sRGB-weighted.
pub fn luminance(rgb: u32) -> f32 {
    let r = ((rgb >> 16) & 0xff) as f32 / 255.0;
    let g = ((rgb >> 8) & 0xff) as f32 / 255.0;
    let b = (rgb & 0xff) as f32 / 255.0;
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Readable label color on top of the tag's swatch.
pub fn label_rgb(tag: &str) -> u32 {
    if luminance(tag_rgb(tag)) > 0.5 {
        0x000000
    } else {
        0xffffff
    }
}
