use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use engine_logging::{engine_debug, engine_info, engine_warn};
use pdfmagic_core::{
    list_operations, update, AppState, AppViewModel, Lifecycle, Msg, SelectedFile,
};
use pdfmagic_engine::{EngineConfig, EngineEvent, EngineHandle, ServiceConfig, SubmitSettings};

use super::cli::{Cli, Command, CreateArgs};
use super::effects::EffectRunner;
use super::ui::render::{render, Severity, TerminalLine};

pub fn run_app() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    engine_logging::initialize(&cli.log_settings());

    match cli.command {
        Command::List => {
            print_catalog();
            Ok(ExitCode::SUCCESS)
        }
        Command::Health => run_health(ServiceConfig::from_env()),
        Command::Create(args) => run_create(args, ServiceConfig::from_env()),
    }
}

fn print_catalog() {
    for operation in list_operations() {
        println!(
            "{:<14} {:<20} accepts {:<13} {}",
            operation.key, operation.label, operation.accept, operation.helper_text
        );
    }
}

fn engine_for(service: ServiceConfig, output_dir: PathBuf) -> anyhow::Result<EngineHandle> {
    engine_info!("Using service at {}", service.base_url());
    let config = EngineConfig {
        submit: SubmitSettings::with_service(service),
        output_dir,
    };
    EngineHandle::new(config).context("failed to start engine")
}

fn run_health(service: ServiceConfig) -> anyhow::Result<ExitCode> {
    let base_url = service.base_url().to_string();
    let engine = engine_for(service, PathBuf::from("."))?;
    engine.check_health();

    while let Some(event) = engine.recv() {
        if let EngineEvent::HealthChecked { result } = event {
            return Ok(match result {
                Ok(health) if health.is_ok() => {
                    println!("{base_url}: {}", health.status);
                    ExitCode::SUCCESS
                }
                Ok(health) => {
                    eprintln!("{base_url}: {}", health.status);
                    ExitCode::FAILURE
                }
                Err(err) => {
                    eprintln!("{base_url}: {err}");
                    ExitCode::FAILURE
                }
            });
        }
    }
    anyhow::bail!("engine stopped before the health check finished")
}

fn run_create(args: CreateArgs, service: ServiceConfig) -> anyhow::Result<ExitCode> {
    let engine = engine_for(service, args.output_dir)?;
    let mut session = Session::new(EffectRunner::new(engine));

    let operation = args.operation.operation();
    let files: Vec<SelectedFile> = args.files.into_iter().map(SelectedFile::from_path).collect();
    for file in &files {
        if !operation.accept.accepts(&file.name) {
            engine_warn!(
                "{} does not match {} for {}; sending it anyway",
                file.name,
                operation.accept,
                operation.key
            );
        }
    }

    session.dispatch(Msg::OperationSelected(operation.key));
    session.dispatch(Msg::FilesChosen(files));
    session.dispatch(Msg::SubmitClicked);

    while session.state.is_busy() {
        match session.runner.next_msg() {
            Some(msg) => session.dispatch(msg),
            None => anyhow::bail!("engine stopped while a submission was in flight"),
        }
    }

    let view = session.state.view();
    let succeeded = view.lifecycle == Lifecycle::Succeeded && view.last_saved.is_some();
    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Owns the state machine for one run and prints what changes.
struct Session {
    state: AppState,
    runner: EffectRunner,
    last_view: Option<AppViewModel>,
}

impl Session {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
            last_view: None,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        engine_debug!("dispatch {}", msg_name(&msg));
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            let view = state.view();
            print_lines(&render(self.last_view.as_ref(), &view));
            self.last_view = Some(view);
        }
        self.state = state;
        self.runner.enqueue(effects);
    }
}

fn print_lines(lines: &[TerminalLine]) {
    for line in lines {
        match line.severity {
            Severity::Information => println!("{}", line.text),
            Severity::Error => eprintln!("{}", line.text),
        }
    }
}

// Msg carries PDF bytes; keep debug logs short.
fn msg_name(msg: &Msg) -> &'static str {
    match msg {
        Msg::OperationSelected(_) => "OperationSelected",
        Msg::FilesChosen(_) => "FilesChosen",
        Msg::SubmitClicked => "SubmitClicked",
        Msg::SubmissionFinished { .. } => "SubmissionFinished",
        Msg::SaveFinished { .. } => "SaveFinished",
    }
}
