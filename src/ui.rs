use ratatui::{prelude::*, widgets::*};

use crate::models::Country;

/// Braille spinner for the indeterminate loading indicator
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_glyph(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Text content of a country row: name, region, capital, code
pub fn row_lines(country: &Country) -> [String; 4] {
    [
        country.name.clone(),
        country.region.clone(),
        format!("Capital:{}", country.capital),
        format!("Code:{}", country.code),
    ]
}

/// Build one country row: name emphasized, region on a highlight background,
/// capital and code below. The selected row gets a distinct background.
pub fn country_item(country: &Country, index: usize, selected: Option<usize>) -> ListItem<'static> {
    let [name, region, capital, code] = row_lines(country);

    let row_style = if selected == Some(index) {
        Style::default().bg(Color::Blue)
    } else {
        Style::default()
    };

    let lines = vec![
        Line::from(Span::styled(name, Style::default().bold())),
        Line::from(Span::styled(region, Style::default().bg(Color::Magenta))),
        Line::from(Span::raw(capital)),
        Line::from(Span::raw(code)),
        Line::from(""),
    ];

    ListItem::new(lines).style(row_style)
}
