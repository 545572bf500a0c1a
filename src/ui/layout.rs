use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions below the header and above the footer.
pub struct BodyRegions {
    pub list: Rect,
    pub stats: Rect,
    pub form: Rect,
}

/// Header, banner line (zero height without an error), body, footer.
pub fn layout_regions(area: Rect, has_banner: bool) -> (Rect, Rect, Rect, Rect) {
    let banner_height = if has_banner { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(banner_height),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2], chunks[3])
}

pub fn body_regions(body: Rect) -> BodyRegions {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(body);
    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(columns[1]);
    BodyRegions {
        list: columns[0],
        stats: side[0],
        form: side[1],
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_collapses_without_error() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, banner, body, footer) = layout_regions(area, false);
        assert_eq!(header.height, 3);
        assert_eq!(banner.height, 0);
        assert_eq!(footer.height, 3);
        assert_eq!(body.height, 18);
    }

    #[test]
    fn banner_takes_one_line() {
        let (_, banner, body, _) = layout_regions(Rect::new(0, 0, 80, 24), true);
        assert_eq!(banner.height, 1);
        assert_eq!(body.height, 17);
    }

    #[test]
    fn centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(50, 20, area);
        assert_eq!(popup.width, 50);
        assert_eq!(popup.x, 25);
        assert!(popup.bottom() <= area.bottom());
    }
}
