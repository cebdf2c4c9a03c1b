use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::sync::Arc;

use crate::background::{seed_loader::SeedLoader, BackgroundTaskManager};
use crate::cards::{AssetDirResolver, CardImages};
use crate::commands::{executor, handlers, AppCommand};
use crate::config::Settings;
use crate::input::KeyEvent;
use crate::log_buffer::LogBuffer;
use crate::logging::init_logging_with_buffer;
use crate::state::AppState;
use crate::ui::screens::Screen;

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub async fn run(&self) -> Result<()> {
        // Create log buffer before initializing logging
        let log_buffer = LogBuffer::new(self.settings.log_buffer_size);
        let log_path = init_logging_with_buffer(log_buffer.clone())?;

        tracing::info!("dispensa starting, logging to {}", log_path.display());
        tracing::debug!("Settings: {:?}", self.settings);

        let mut terminal = self.init()?;

        let (data_tx, mut data_rx) = tokio::sync::mpsc::unbounded_channel();

        let images = CardImages::new(
            Arc::new(AssetDirResolver::new(self.settings.asset_dir.clone())),
            self.settings.default_image.clone(),
        );
        let mut ui_state = AppState::with_images(images);
        let mut task_manager = BackgroundTaskManager::new();
        let seed_loader = SeedLoader::new(self.settings.seed_path.clone(), data_tx);

        let mut event_stream = EventStream::new();

        executor::execute_command(
            AppCommand::LoadCatalog,
            &mut ui_state,
            &mut task_manager,
            &seed_loader,
        );

        tracing::info!("Entering main event loop");

        let mut interval = tokio::time::interval(std::time::Duration::from_millis(100));
        loop {
            // Update total_entries for logs screen if active
            if let Screen::Logs(logs_state) = ui_state.current_screen_mut() {
                logs_state.total_entries = log_buffer.len();
            }

            terminal.draw(|f| {
                crate::ui::render_app(f, &ui_state, &log_buffer);
            })?;

            tokio::select! {
                _ = interval.tick() => {
                    if let Some(throbber_state) = ui_state.loading_state() {
                        throbber_state.calc_next();
                    }
                }
                Some(Ok(event)) = event_stream.next() => {
                    if let Event::Key(key) = event {
                        if matches!(key.kind, KeyEventKind::Press) {
                            // Don't log when on logs screen to avoid feedback loop
                            let on_logs_screen = matches!(ui_state.current_screen(), Screen::Logs(_));
                            if !on_logs_screen {
                                tracing::debug!("Key press: {:?}", key);
                            }
                            if let Some(command) = handlers::handle_key_input(KeyEvent::from(key), &ui_state) {
                                if !on_logs_screen {
                                    tracing::debug!("Executing command: {:?}", command);
                                }
                                executor::execute_command(
                                    command,
                                    &mut ui_state,
                                    &mut task_manager,
                                    &seed_loader,
                                );
                            }
                        }
                    }
                }
                Some(data_event) = data_rx.recv() => {
                    tracing::debug!("Received data event");
                    crate::state::reducer::reduce_data_event(&mut ui_state, data_event);
                }
            }

            if ui_state.should_quit {
                tracing::info!("Quit requested, exiting event loop");
                break;
            }
        }

        tracing::info!("Cleaning up application");

        task_manager.cancel_all();

        self.exit(terminal)?;

        Ok(())
    }

    fn init(&self) -> Result<Terminal<CrosstermBackend<std::io::Stdout>>, std::io::Error> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    fn exit(
        &self,
        mut terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), std::io::Error> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}
