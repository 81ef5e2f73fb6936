use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::cli::state::{App, Dialog, Focus, MenuItem, ABOUT_TEXT, EXIT_PROMPT, INPUT_ERROR_TEXT};
use crate::cli::util::{center_rect, row_with_separators};
use crate::conversion::Currency;

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    // menu bar | from | amount | to | output | buttons | filler | status
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(size);

    let menu = Paragraph::new(Line::from(vec![
        Span::styled(" File ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" F10: menu | F1: about | F5: convert"),
    ]))
    .block(Block::default().borders(Borders::ALL).title("Currency Converter"));
    f.render_widget(menu, root[0]);

    draw_radio_row(f, root[1], "Convert from:", app.selection.from, app.focus == Focus::From);
    draw_amount(f, root[2], app);
    draw_radio_row(f, root[3], "Convert to:", app.selection.to, app.focus == Focus::To);

    let output = Paragraph::new(app.output.as_str())
        .style(Style::default().fg(Color::Green))
        .block(Block::default().borders(Borders::ALL).title("Comparable Currency is:"));
    f.render_widget(output, root[4]);

    draw_buttons(f, root[5], app.focus);

    f.render_widget(Paragraph::new(app.status.as_str()), root[7]);

    if let Some(dialog) = &app.dialog {
        draw_dialog(f, size, dialog);
    }
}

fn block_for(title: &str, focused: bool) -> Block<'_> {
    let block = Block::default().borders(Borders::ALL).title(title);
    if focused {
        block.border_style(Style::default().add_modifier(Modifier::BOLD))
    } else {
        block
    }
}

fn draw_radio_row(f: &mut Frame, area: Rect, title: &str, selected: Currency, focused: bool) {
    let mut spans = Vec::with_capacity(Currency::ALL.len() * 2);
    for c in Currency::ALL {
        let mark = if c == selected { "(•)" } else { "( )" };
        let text = format!("{mark} {} {}", c.symbol(), c.name());
        let style = if c == selected && focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw("   "));
    }
    let p = Paragraph::new(Line::from(spans)).block(block_for(title, focused));
    f.render_widget(p, area);
}

fn draw_amount(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Amount;
    let p = Paragraph::new(app.amount.value.as_str()).block(block_for("Enter Currency:", focused));
    f.render_widget(p, area);

    if focused && app.dialog.is_none() {
        let col = area.x + 1 + app.amount.cursor as u16;
        let max = area.x + area.width.saturating_sub(2);
        f.set_cursor_position(Position::new(col.min(max), area.y + 1));
    }
}

fn draw_buttons(f: &mut Frame, area: Rect, focus: Focus) {
    let button = |label: &'static str, me: Focus| {
        let style = if focus == me {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        Span::styled(format!("[ {label} ]"), style)
    };
    let line = Line::from(vec![
        button("Convert", Focus::Convert),
        Span::raw("   "),
        button("Clear", Focus::Clear),
        Span::raw("   "),
        button("Exit", Focus::Exit),
    ]);
    let p = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(block_for("", focus.is_button()));
    f.render_widget(p, area);
}

fn draw_dialog(f: &mut Frame, screen: Rect, dialog: &Dialog) {
    match dialog {
        Dialog::Result(conv) => message_box(f, screen, "Result", &conv.summary()),
        Dialog::InputError => message_box(f, screen, "Input Error", INPUT_ERROR_TEXT),
        Dialog::About => message_box(f, screen, "About", ABOUT_TEXT),
        Dialog::ConfirmExit { yes_focused } => draw_confirm_exit(f, screen, *yes_focused),
        Dialog::FileMenu { selected } => draw_file_menu(f, screen, *selected),
    }
}

fn message_box(f: &mut Frame, screen: Rect, title: &str, body: &str) {
    let height = body.lines().count() as u16 + 4;
    let area = center_rect(screen, 60, height);
    f.render_widget(Clear, area);

    let text = format!("{body}\n\n[ OK ]  (Enter)");
    let p = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(p, area);
}

fn draw_confirm_exit(f: &mut Frame, screen: Rect, yes_focused: bool) {
    let area = center_rect(screen, 40, 6);
    f.render_widget(Clear, area);

    let pick = |on: bool| {
        if on { Style::default().add_modifier(Modifier::REVERSED) } else { Style::default() }
    };
    let lines = vec![
        Line::from(EXIT_PROMPT),
        Line::from(""),
        Line::from(vec![
            Span::styled("[ Yes ]", pick(yes_focused)),
            Span::raw("   "),
            Span::styled("[ No ]", pick(!yes_focused)),
        ]),
    ];
    let p = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Confirmation window"));
    f.render_widget(p, area);
}

fn draw_file_menu(f: &mut Frame, screen: Rect, selected: usize) {
    let rows = MenuItem::ALL.len() + MenuItem::SEPARATORS_AFTER.len();
    let area = Rect {
        x: screen.x + 1,
        y: screen.y + 2,
        width: 16u16.min(screen.width),
        height: (rows as u16 + 2).min(screen.height),
    };
    f.render_widget(Clear, area);

    let mut items = Vec::with_capacity(rows);
    for (i, item) in MenuItem::ALL.iter().enumerate() {
        items.push(ListItem::new(item.label()));
        if MenuItem::SEPARATORS_AFTER.contains(&i) {
            items.push(ListItem::new("──────────"));
        }
    }

    let mut state = ListState::default();
    state.select(Some(row_with_separators(selected, &MenuItem::SEPARATORS_AFTER)));

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("File"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_stateful_widget(list, area, &mut state);
}
