//! Data-to-cell projection shared by the canvas charts and their hit areas.

use ratatui::layout::Rect;

/// Map a data x-value into a column within `area`, clamping to the bounds.
pub fn project_x(value: f64, bounds: [f64; 2], area: Rect) -> u16 {
    let [min, max] = bounds;
    if area.width == 0 || max <= min {
        return area.x;
    }
    let t = ((value - min) / (max - min)).clamp(0.0, 1.0);
    area.x + (t * f64::from(area.width - 1)).round() as u16
}

/// Map a data y-value into a row within `area`; screen rows grow downward
/// while the data axis grows upward.
pub fn project_y(value: f64, bounds: [f64; 2], area: Rect) -> u16 {
    let [min, max] = bounds;
    if area.height == 0 || max <= min {
        return area.y;
    }
    let t = ((value - min) / (max - min)).clamp(0.0, 1.0);
    area.y + ((1.0 - t) * f64::from(area.height - 1)).round() as u16
}

/// Cells touched by the segment from `a` to `b`: one per column, or one
/// per row for vertical segments. Used to lay hit areas along a timeline
/// stroke.
pub fn segment_cells(a: (u16, u16), b: (u16, u16)) -> Vec<(u16, u16)> {
    if a.0 == b.0 {
        let (lo, hi) = if a.1 <= b.1 { (a.1, b.1) } else { (b.1, a.1) };
        return (lo..=hi).map(|y| (a.0, y)).collect();
    }
    let (from, to) = if a.0 <= b.0 { (a, b) } else { (b, a) };
    let dx = f64::from(to.0 - from.0);
    let dy = f64::from(to.1) - f64::from(from.1);
    (from.0..=to.0)
        .map(|x| {
            let t = f64::from(x - from.0) / dx;
            (x, (f64::from(from.1) + t * dy).round() as u16)
        })
        .collect()
}
