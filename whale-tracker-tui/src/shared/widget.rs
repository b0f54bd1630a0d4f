//! Ratatui rendering for the whale dashboard
//!
//! Header, statistics row, then a two column body: asset selector over the
//! whale feed on the left, market movers over quick start on the right.

use ratatui::{
    Frame,
    layout::{Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use whale_tracker_api::Direction;

use super::format::PLACEHOLDER;
use super::input::KEY_HINTS;
use super::state::Phase;
use super::theme::Theme;
use super::view::{DashboardView, FeedView, LOADING_MESSAGE, MAX_MOVERS, StatCard, TradeRow};

const STATS_HEIGHT: u16 = 5;

/// Draw the whole dashboard into the frame
pub fn render_dashboard(f: &mut Frame, view: &DashboardView, theme: &Theme) {
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.text)),
        area,
    );

    let stats_height = if view.stats.is_some() { STATS_HEIGHT } else { 0 };
    let rows = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(stats_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(f, view, theme, rows[0]);
    if let Some(stats) = &view.stats {
        render_stats(f, stats, theme, rows[1]);
    }

    let columns = Layout::default()
        .direction(LayoutDirection::Horizontal)
        .constraints([Constraint::Percentage(67), Constraint::Percentage(33)])
        .split(rows[2]);

    let main = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(columns[0]);
    render_selector(f, view, theme, main[0]);
    render_feed(f, view, theme, main[1]);

    let sidebar = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(MAX_MOVERS as u16 * 2 + 2),
            Constraint::Min(0),
        ])
        .split(columns[1]);
    render_movers(f, view, theme, sidebar[0]);
    render_quick_start(f, view, theme, sidebar[1]);

    render_footer(f, theme, rows[3]);
}

fn panel<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.bright).add_modifier(Modifier::BOLD))
}

fn render_header(f: &mut Frame, view: &DashboardView, theme: &Theme, area: Rect) {
    let (status, status_color) = match view.phase {
        Phase::Idle => ("IDLE", theme.dim),
        Phase::Loading => ("LOADING", theme.warning),
        Phase::Loaded => ("LIVE", theme.buy),
        Phase::Failed => ("ERROR", theme.sell),
    };

    let line = Line::from(vec![
        Span::styled(
            "Real-time whale activity for ",
            Style::default().fg(theme.dim),
        ),
        Span::styled(
            format!("{} ({})", view.selected_name, view.selected_ticker),
            Style::default().fg(theme.bright).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(
            status,
            Style::default().fg(status_color).add_modifier(Modifier::BOLD),
        ),
    ]);

    f.render_widget(Paragraph::new(line).block(panel(" WHALE TRACKER ", theme)), area);
}

fn render_stats(f: &mut Frame, stats: &[StatCard; 3], theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(LayoutDirection::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    for (card, chunk) in stats.iter().zip(chunks.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                card.value.as_str(),
                Style::default().fg(theme.bright).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(card.caption.as_str(), Style::default().fg(theme.accent))),
        ];
        let block = panel(card.label, theme);
        f.render_widget(Paragraph::new(lines).block(block), *chunk);
    }
}

fn render_selector(f: &mut Frame, view: &DashboardView, theme: &Theme, area: Rect) {
    let mut spans = Vec::with_capacity(view.chips.len() * 3);
    for chip in &view.chips {
        let (r, g, b) = chip.accent;
        let mut ticker_style = Style::default()
            .fg(Color::Rgb(r, g, b))
            .add_modifier(Modifier::BOLD);
        let mut name_style = Style::default().fg(theme.text);
        if chip.selected {
            ticker_style = ticker_style.bg(theme.highlight);
            name_style = name_style.bg(theme.highlight);
        }

        spans.push(Span::styled(format!("[{}] ", chip.hotkey), Style::default().fg(theme.dim)));
        spans.push(Span::styled(chip.ticker, ticker_style));
        spans.push(Span::styled(format!(" {}", chip.display_name), name_style));
        spans.push(Span::raw("   "));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(panel(" SELECT CRYPTOCURRENCY ", theme))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_feed(f: &mut Frame, view: &DashboardView, theme: &Theme, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        "Large transactions over $50,000",
        Style::default().fg(theme.dim),
    ))];

    if let Some(error) = &view.error {
        lines.push(Line::from(Span::styled(
            format!("! {}", error),
            Style::default().fg(theme.sell).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));

    match &view.feed {
        FeedView::Loading => {
            lines.push(Line::from(Span::styled(
                LOADING_MESSAGE,
                Style::default().fg(theme.warning),
            )));
        }
        FeedView::Empty { message } => {
            lines.push(Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(theme.dim),
            )));
        }
        FeedView::Trades(rows) => {
            for row in rows {
                lines.extend(trade_lines(row, theme));
            }
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(panel(" RECENT WHALE MOVEMENTS ", theme))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn trade_lines<'a>(row: &'a TradeRow, theme: &Theme) -> [Line<'a>; 2] {
    let badge_color = match row.direction {
        Direction::Buy => theme.buy,
        Direction::Sell => theme.sell,
    };

    [
        Line::from(vec![
            Span::styled(
                format!(" {:<4} ", row.badge()),
                Style::default()
                    .fg(theme.background)
                    .bg(badge_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {:>7} ", row.age), Style::default().fg(theme.dim)),
            Span::styled(format!("{:<10}", row.symbol), Style::default().fg(theme.bright)),
            Span::styled(
                format!("{:>16}", row.value),
                Style::default().fg(theme.bright).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", row.fill), Style::default().fg(theme.accent)),
        ]),
        Line::from(vec![
            Span::raw("       "),
            Span::styled(format!("[{}]", row.exchange), Style::default().fg(theme.dim)),
            Span::styled(
                format!(" {}", row.tx_hash.as_deref().unwrap_or(PLACEHOLDER)),
                Style::default().fg(theme.dim),
            ),
        ]),
    ]
}

fn render_movers(f: &mut Frame, view: &DashboardView, theme: &Theme, area: Rect) {
    let mut lines = Vec::with_capacity(view.movers.len() * 2);

    if view.movers.is_empty() {
        lines.push(Line::from(Span::styled(PLACEHOLDER, Style::default().fg(theme.dim))));
    }

    for mover in &view.movers {
        let change_color = if mover.gaining { theme.buy } else { theme.sell };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<8}", mover.symbol),
                Style::default().fg(theme.bright).add_modifier(Modifier::BOLD),
            ),
            Span::styled(mover.price.as_str(), Style::default().fg(theme.text)),
        ]));
        lines.push(Line::from(vec![
            Span::styled(format!("{:<8}", mover.name), Style::default().fg(theme.dim)),
            Span::styled(
                mover.change.as_str(),
                Style::default().fg(change_color).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines).block(panel(" MARKET MOVERS ", theme)), area);
}

fn render_quick_start(f: &mut Frame, view: &DashboardView, theme: &Theme, area: Rect) {
    let lines = match &view.quick_start {
        Some(quick_start) => vec![
            Line::from(Span::styled("GET", Style::default().fg(theme.dim))),
            Line::from(Span::styled(
                quick_start.request_url.as_str(),
                Style::default().fg(theme.buy),
            )),
            Line::from(""),
            Line::from(Span::styled("Full documentation", Style::default().fg(theme.dim))),
            Line::from(Span::styled(
                quick_start.docs_url.as_str(),
                Style::default().fg(theme.accent),
            )),
        ],
        None => vec![Line::from(Span::styled(PLACEHOLDER, Style::default().fg(theme.dim)))],
    };

    let paragraph = Paragraph::new(lines)
        .block(panel(" QUICK START ", theme))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_footer(f: &mut Frame, theme: &Theme, area: Rect) {
    let mut spans = Vec::with_capacity(KEY_HINTS.len() * 2 + 2);
    for (key, action) in KEY_HINTS {
        spans.push(Span::styled(
            *key,
            Style::default().fg(theme.bright).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}  ", action), Style::default().fg(theme.dim)));
    }
    spans.push(Span::raw("|  "));
    spans.push(Span::styled(
        format!("theme: {}", theme.kind),
        Style::default().fg(theme.accent),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
