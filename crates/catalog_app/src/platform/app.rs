use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::{mpsc, Arc};
use std::thread;

use catalog_core::{update, AppState, Msg, SharedSelection};
use catalog_engine::EngineHandle;
use catalog_logging::{catalog_info, catalog_warn, RequestScope};

use super::config::AppConfig;
use super::effects::{EffectRunner, MsgSink};
use super::logging::{self, LogDestination};
use super::ui::input::{self, Intent};
use super::ui::render;

/// Everything the event loop reacts to, in arrival order.
pub enum LoopEvent {
    Msg(Msg),
    Input(String),
    InputClosed,
}

pub fn run_app(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = AppConfig::load(config_path)?;
    logging::initialize(
        LogDestination::from_flag(config.log_to_terminal),
        logging::parse_level(&config.log_level),
    );
    catalog_info!("Starting catalog browser against {}", config.base_url);

    let (event_tx, event_rx) = mpsc::channel::<LoopEvent>();
    let engine = EngineHandle::new(
        config.client_settings(),
        Arc::new(MsgSink::new(event_tx.clone())),
    )?;
    let selection = SharedSelection::new();
    let runner = EffectRunner::new(engine, Box::new(selection.clone()));

    spawn_stdin_reader(event_tx);

    let mut shell = Shell {
        state: AppState::new(),
        runner,
        selection,
    };
    shell.print(input::HELP);
    shell.dispatch_msg(Msg::Started);

    while let Ok(event) = event_rx.recv() {
        match event {
            LoopEvent::Msg(msg) => shell.dispatch_msg(msg),
            LoopEvent::Input(line) => {
                if !shell.handle_line(&line) {
                    break;
                }
            }
            LoopEvent::InputClosed => break,
        }
    }

    catalog_info!("Catalog browser exiting");
    Ok(())
}

fn spawn_stdin_reader(tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(LoopEvent::Input(line)).is_err() {
                return;
            }
        }
        let _ = tx.send(LoopEvent::InputClosed);
    });
}

struct Shell {
    state: AppState,
    runner: EffectRunner,
    selection: SharedSelection,
}

impl Shell {
    fn dispatch_msg(&mut self, msg: Msg) {
        let _scope = response_request_id(&msg).map(RequestScope::enter);
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.run(effects);

        if self.state.consume_dirty() {
            let screen = render::render(&self.state.view(), self.selection.current().as_ref());
            self.print(&screen);
        }
    }

    /// Returns `false` when the user asked to quit.
    fn handle_line(&mut self, line: &str) -> bool {
        let intent = match input::parse_intent(line) {
            Ok(Some(intent)) => intent,
            Ok(None) => return true,
            Err(err) => {
                self.print(&err.to_string());
                return true;
            }
        };

        match intent {
            Intent::Quit => return false,
            Intent::Help => self.print(input::HELP),
            Intent::Genres => self.print(&render::render_categories(self.state.categories())),
            intent => {
                let view = self.state.view();
                match input::resolve(intent.clone(), &view) {
                    Some(msg) => self.dispatch_msg(msg),
                    None => {
                        catalog_warn!("Intent {:?} has nothing to act on", intent);
                        self.print("Nothing to do.");
                    }
                }
            }
        }
        true
    }

    fn print(&self, text: &str) {
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{}", text.trim_end());
        let _ = stdout.flush();
    }
}

fn response_request_id(msg: &Msg) -> Option<u64> {
    match msg {
        Msg::CatalogLoaded { request_id, .. }
        | Msg::DetailLoaded { request_id, .. }
        | Msg::FetchFailed { request_id, .. } => Some(*request_id),
        _ => None,
    }
}
