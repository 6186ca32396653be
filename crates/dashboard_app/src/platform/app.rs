use std::io::BufRead;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use dashboard_core::{update, AppState, Msg};
use dashboard_engine::EngineHandle;
use dashboard_logging::{dashboard_info, dashboard_warn};

use super::config;
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;
use super::ui::commands::Command;

/// Everything the main loop reacts to.
enum UiEvent {
    Msg(Msg),
    Command(Command),
    InvalidInput(String),
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("resolving working directory")?;
    let config = config::load(&cwd)?;
    logging::initialize(if config.log_to_terminal {
        LogDestination::Both
    } else {
        LogDestination::File
    });
    dashboard_info!("Starting dashboard against {}", config.api_base_url);

    let engine = EngineHandle::new(config.gateway_settings())
        .with_context(|| format!("connecting to {}", config.api_base_url))?;
    let mut dashboard = Dashboard::new(EffectRunner::new(engine));
    dashboard.runner.probe_health();

    let (ui_tx, ui_rx) = mpsc::channel::<UiEvent>();
    spawn_input_reader(ui_tx.clone());

    // Background tick so engine completions are picked up without input.
    let tick_tx = ui_tx.clone();
    thread::spawn(move || {
        let interval = Duration::from_millis(50);
        while tick_tx.send(UiEvent::Msg(Msg::Tick)).is_ok() {
            thread::sleep(interval);
        }
    });

    println!("{}", ui::commands::HELP);
    let _ = ui_tx.send(UiEvent::Msg(Msg::Started));

    for event in ui_rx {
        match event {
            UiEvent::Msg(msg) => dashboard.dispatch(msg),
            UiEvent::Command(Command::Quit) | UiEvent::InputClosed => break,
            UiEvent::Command(Command::Help) => println!("{}", ui::commands::HELP),
            UiEvent::Command(Command::Show) => dashboard.print(),
            UiEvent::Command(command) => {
                for msg in command.into_msgs() {
                    dashboard.dispatch(msg);
                }
            }
            UiEvent::InvalidInput(err) => println!("{err}"),
        }

        dashboard.drain_engine();
        if dashboard.state.consume_dirty() {
            dashboard.print();
        }
    }

    let in_flight = dashboard.runner.in_flight();
    if in_flight > 0 {
        dashboard_warn!("Exiting with {} request(s) still in flight", in_flight);
    }
    dashboard_info!("Dashboard stopped");
    Ok(())
}

/// Owns the single state value and routes effects to the engine.
struct Dashboard {
    state: AppState,
    runner: EffectRunner,
}

impl Dashboard {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
    }

    fn drain_engine(&mut self) {
        while let Some(msg) = self.runner.try_next_msg() {
            self.dispatch(msg);
        }
    }

    fn print(&self) {
        print!("{}", ui::render::render(&self.state.view()));
    }
}

fn spawn_input_reader(tx: mpsc::Sender<UiEvent>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let event = match line {
                Ok(line) => match ui::commands::parse(&line) {
                    Ok(Some(command)) => UiEvent::Command(command),
                    Ok(None) => continue,
                    Err(err) => UiEvent::InvalidInput(err),
                },
                Err(err) => {
                    dashboard_warn!("Failed to read input: {}", err);
                    break;
                }
            };
            if tx.send(event).is_err() {
                return;
            }
        }
        let _ = tx.send(UiEvent::InputClosed);
    });
}
