//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! Async results arrive through an inbox channel: spawned tasks send
//! `UiEvent`s to `inbox_tx` and the runtime drains `inbox_rx` each frame.

use std::future::Future;
use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use depot_core::api::ApiClient;
use depot_core::config::Config;
use depot_types::Credentials;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::common::{TaskId, TaskKind};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::dashboard::DashboardData;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Poll cadence. Fast enough for the spinner and toast fades, slow enough
/// to keep the idle CPU cost negligible.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

type UiEventSender = mpsc::UnboundedSender<UiEvent>;
type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is guaranteed to be restored on drop or panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    client: Arc<ApiClient>,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    last_tick: Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime. Enters the alternate screen.
    pub fn new(config: Config, client: Arc<ApiClient>) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let session = client.auth().session();
        let state = AppState::new(config, session);

        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            client,
            inbox_tx,
            inbox_rx,
            last_tick: Instant::now(),
        })
    }

    /// Runs the main event loop. Must be called inside a multi-threaded
    /// tokio runtime; spawned fetches run on worker threads while this loop
    /// blocks on terminal input.
    pub fn run(&mut self) -> Result<()> {
        // Load immediately when a session was restored from disk.
        if self.state.tui.session.is_some() {
            let id = self.state.tui.task_seq.next_id();
            self.state.tui.tasks.refresh.on_started(id);
            self.execute_effect(UiEffect::LoadDashboard { task: Some(id) });
        }

        loop {
            let events = self.collect_events()?;
            for event in events {
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if self.state.tui.should_quit {
                break;
            }

            self.terminal.draw(|frame| {
                render::render(&self.state, frame);
            })?;
        }

        Ok(())
    }

    /// Collects events from the terminal and the inbox, emitting Tick at
    /// the configured cadence.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        let poll_duration = if events.is_empty() {
            TICK_INTERVAL.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= TICK_INTERVAL {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async task whose result comes back through the inbox,
    /// wrapped in `TaskCompleted` so stale results can be dropped.
    fn spawn_task<F, Fut>(&self, kind: TaskKind, id: TaskId, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let inner = f().await;
            let _ = tx.send(UiEvent::TaskCompleted {
                kind,
                id,
                result: Box::new(inner),
            });
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }
            UiEffect::Logout => {
                self.client.auth().logout();
            }
            UiEffect::LoadDashboard { task } => {
                let Some(task) = task else {
                    tracing::debug!("dropping unclaimed dashboard load");
                    return;
                };
                let client = Arc::clone(&self.client);
                self.spawn_task(TaskKind::Refresh, task, move || async move {
                    let result = load_dashboard(&client).await;
                    UiEvent::DashboardLoaded(result.map_err(Into::into))
                });
            }
            UiEffect::SpawnLogin {
                task,
                username,
                password,
            } => {
                let Some(task) = task else {
                    tracing::debug!("dropping unclaimed login attempt");
                    return;
                };
                let client = Arc::clone(&self.client);
                self.spawn_task(TaskKind::Login, task, move || async move {
                    let credentials = Credentials { username, password };
                    let result = client.login(&credentials).await;
                    UiEvent::LoginCompleted(result.map_err(Into::into))
                });
            }
        }
    }
}

async fn load_dashboard(
    client: &ApiClient,
) -> Result<DashboardData, depot_core::api::ApiError> {
    let summary = client.inventory_summary().await?;
    let low_stock = client.low_stock().await?;
    Ok(DashboardData { summary, low_stock })
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
