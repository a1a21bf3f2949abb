use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing_subscriber::EnvFilter;

use stockroom::config::{self, APP_NAME, Config};
use stockroom::error::AppError;
use stockroom::ui::{self, App, render};

/// 日志写入数据目录 (~/.local/share/stockroom/stockroom.log)，终端由 TUI 独占
fn init_logging(config: &Config) -> Result<(), AppError> {
    let log_path = config::data_dir()?.join(format!("{APP_NAME}.log"));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn main() -> Result<(), AppError> {
    // 加载配置 (~/.config/stockroom/config.toml)
    let config_path = config::config_path()?;
    let config = Config::load(&config_path)?;

    init_logging(&config)?;
    tracing::info!(config = %config_path.display(), "starting");

    // 创建应用状态（首次渲染在此完成）
    let mut app = App::new(&config);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    tracing::info!(products = app.inventory.catalog().len(), "exiting");
    result.map_err(AppError::from)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
            if key.kind == crossterm::event::KeyEventKind::Press {
                if ui::handle_key_event(app, key.code) {
                    break;
                }
            }
        }
    }
    Ok(())
}
