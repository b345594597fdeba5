//! Frame layout for the three linked charts.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::config::DashboardConfig;

/// Screen regions for one draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartAreas {
    pub tabs: Rect,
    pub lexis: Rect,
    pub bar: Rect,
    pub scatter: Rect,
}

/// Split the frame: region tabs on top, the timeline across the full
/// width, bar chart and scatter sharing the bottom row (mirroring the
/// source page layout).
pub fn chart_areas(area: Rect, config: &DashboardConfig) -> ChartAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Percentage(config.lexis_height_pct),
            Constraint::Min(0),
        ])
        .split(area);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(config.bar_width_pct),
            Constraint::Min(0),
        ])
        .split(rows[2]);
    ChartAreas {
        tabs: rows[0],
        lexis: rows[1],
        bar: bottom[0],
        scatter: bottom[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn areas_tile_the_frame() {
        let frame = Rect {
            x: 0,
            y: 0,
            width: 120,
            height: 40,
        };
        let areas = chart_areas(frame, &DashboardConfig::default());
        assert_eq!(areas.tabs.height, 1);
        assert_eq!(areas.tabs.width, 120);
        assert_eq!(areas.lexis.width, 120);
        assert_eq!(
            areas.tabs.height + areas.lexis.height + areas.bar.height,
            40
        );
        assert_eq!(areas.bar.height, areas.scatter.height);
        assert_eq!(areas.bar.width + areas.scatter.width, 120);
        assert_eq!(areas.scatter.x, areas.bar.right());
    }

    #[test]
    fn timeline_share_follows_config() {
        let frame = Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 41,
        };
        let config = DashboardConfig {
            lexis_height_pct: 75,
            ..DashboardConfig::default()
        };
        let areas = chart_areas(frame, &config);
        assert!(areas.lexis.height > areas.bar.height);
    }
}
