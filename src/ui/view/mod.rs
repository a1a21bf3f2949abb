//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::state::{App, AppMode};
use crate::notice::Notice;
use crate::render::Card;
use components::render_dialog_framework;
use layouts::centered_rect;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(10),   // 卡片
            Constraint::Length(4), // 详情
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, app, chunks[0]);
    render_cards(frame, app, chunks[1]);
    render_details(frame, app, chunks[2]);
    render_help(frame, app, chunks[3]);

    // 渲染弹窗
    if let AppMode::Alert(notice) = app.mode() {
        render_alert_dialog(frame, notice);
    }
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(format!(
        "Inventory Management  ({} 件商品)",
        app.cards().len()
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn card_item(card: &Card, selected: bool) -> ListItem<'static> {
    let [name, category, price, stock, supplier] = card.lines();
    let text_style = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };

    ListItem::new(vec![
        Line::from(Span::styled(
            card.image.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            name,
            text_style.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(category, text_style)),
        Line::from(Span::styled(price, text_style)),
        Line::from(Span::styled(stock, text_style)),
        Line::from(Span::styled(supplier, text_style)),
        Line::from(""),
    ])
}

fn render_cards(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title("商品列表").borders(Borders::ALL);

    if app.cards().is_empty() {
        let empty = Paragraph::new("暂无商品，按 'a' 添加")
            .style(Style::default().fg(Color::Gray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .cards()
        .iter()
        .enumerate()
        .map(|(i, card)| card_item(card, i == app.selected_index))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_details(frame: &mut Frame, app: &App, area: Rect) {
    let content = match app.selected_card() {
        Some(card) => format!(
            "#{} {}  {}  {}\n库存: {}  供应商: {}",
            app.selected_index + 1,
            card.name,
            card.category,
            card.price,
            card.stock,
            card.supplier
        ),
        None => "未选中商品".to_string(),
    };

    let details = Paragraph::new(content)
        .block(Block::default().title("详情").borders(Borders::ALL))
        .wrap(Wrap { trim: true });

    frame.render_widget(details, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.mode() {
        AppMode::Normal => "[a] 添加  [d] 删除末尾  [l] 链接  [j/k] 导航  [q] 退出",
        AppMode::Alert(_) => "[Enter] 确定",
    };

    let text = match app.inventory.notifier().latest() {
        Some(logged) => format!(
            "{}  |  [{}] {}",
            help_text,
            logged.at.format("%H:%M:%S"),
            logged.notice
        ),
        None => help_text.to_string(),
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_alert_dialog(frame: &mut Frame, notice: Notice) {
    let area = centered_rect(50, 20, frame.area());
    let (title, color) = if notice.is_warning() {
        ("⚠️ 提示", Color::Red)
    } else {
        ("完成", Color::Green)
    };
    let inner = render_dialog_framework(frame, area, title);

    let dialog = Paragraph::new(format!("{}\n\n[Enter] 确定", notice))
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true });

    frame.render_widget(dialog, inner);
}
