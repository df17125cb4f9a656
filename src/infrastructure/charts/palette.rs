use plotters::style::RGBColor;

pub(crate) const PALETTE: [RGBColor; 8] = [
    RGBColor(0x1E, 0x88, 0xE5),
    RGBColor(0x43, 0xA0, 0x47),
    RGBColor(0xFB, 0x8C, 0x00),
    RGBColor(0xE5, 0x39, 0x35),
    RGBColor(0x8E, 0x24, 0xAA),
    RGBColor(0x00, 0xAC, 0xC1),
    RGBColor(0x6D, 0x4C, 0x41),
    RGBColor(0x54, 0x6E, 0x7A),
];

pub(crate) fn palette_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

/// CSS hex form of [`palette_color`].
pub(crate) fn palette_hex(index: usize) -> String {
    let RGBColor(r, g, b) = palette_color(index);
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

pub(crate) fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e12 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

pub(crate) const EMPTY_CHART: &str = "لا توجد بيانات لعرضها";
