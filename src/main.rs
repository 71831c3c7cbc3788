mod app;
mod core;
mod models;
mod system;
mod ui;
mod utils;

use anyhow::{Context, Result};
use app::{App, Settings};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use system::{FileSystem, SourceResolver};

fn main() -> Result<()> {
    logger_builder(env_logger::Env::default()).init();

    // 터미널 진입 전에 목록을 만들어야 에러 메시지가 정상 출력됨
    let settings = Settings::load().context("failed to load settings")?;
    let resolved = SourceResolver::new(FileSystem::new())
        .resolve()
        .context("failed to build file list")?;
    let mut app = App::new(resolved, settings);

    // Setup terminal
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("switch to alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("spawn terminal backend")?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("leave alternate screen")?;
    terminal.show_cursor().context("show cursor")?;

    res
}

/// 로거 설정
///
/// 화면이 stderr와 같은 터미널을 쓰므로 `RUST_LOG`가 없으면 아무것도 출력하지 않음
fn logger_builder(env: env_logger::Env<'_>) -> env_logger::Builder {
    env_logger::Builder::from_env(env.default_filter_or("off"))
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        if app.take_redraw_request() {
            terminal
                .draw(|f| ui::renderer::render(f, app))
                .context("draw frame")?;
        }

        // 이벤트 하나를 끝까지 처리한 뒤 다음 이벤트를 읽음
        match event::read().context("read event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let outcome = app.handle_key(key.modifiers, key.code);
                if !outcome.consumed {
                    debug!("Unhandled key: {:?}", key.code);
                }
            }
            Event::Resize(_, _) => app.request_redraw(),
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
