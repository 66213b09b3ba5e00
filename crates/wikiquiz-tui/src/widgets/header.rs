//! Header bar: app name and the tab strip

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget},
};
use unicode_width::UnicodeWidthStr;
use wikiquiz_app::Tab;

use crate::theme::styles;

pub const APP_NAME: &str = "Wikipedia Quiz Generator";

/// Main header showing the app name and tabs
pub struct MainHeader {
    active: Tab,
}

impl MainHeader {
    pub fn new(active: Tab) -> Self {
        Self { active }
    }

    fn tab_titles() -> Vec<Line<'static>> {
        Tab::all()
            .iter()
            .map(|tab| Line::from(format!(" {} ", tab.label())))
            .collect()
    }

    fn selected_index(&self) -> usize {
        Tab::all()
            .iter()
            .position(|tab| *tab == self.active)
            .unwrap_or(0)
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let name_width = u16::try_from(APP_NAME.width() + 2).unwrap_or(u16::MAX);
        let [name_area, tabs_area] =
            Layout::horizontal([Constraint::Length(name_width), Constraint::Min(0)]).areas(inner);

        Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(APP_NAME, styles::accent_bold()),
        ]))
        .render(name_area, buf);

        Tabs::new(Self::tab_titles())
            .select(self.selected_index())
            .style(styles::text_secondary())
            .highlight_style(styles::focused_selected())
            .divider("│")
            .render(tabs_area, buf);
    }
}
