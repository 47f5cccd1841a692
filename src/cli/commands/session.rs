//! Interactive session: one tracker, driven by events read from stdin.

use crate::cli::commands::{TerminalTracker, location, open_tracker};
use crate::config::Config;
use crate::core::tracker::Submission;
use crate::db::log::ttlog_soft;
use crate::errors::{AppError, AppResult};
use crate::models::{Coords, WorkoutForm, WorkoutKind};
use crate::ui::messages::{error, header, info, success};
use crate::ui::{TerminalList, TerminalMap};
use std::io::{self, BufRead, IsTerminal, Write};
use std::str::FromStr;

const HELP: &str = "\
Commands:
  click <lat> <lng>                                  click the map
  submit <running|cycling> <km> <min> <spm|m>        submit the form
  select <id>                                        move to a workout
  list                                               show all workouts
  reset                                              delete every workout
  help                                               show this help
  quit                                               leave the session";

/// One line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Click(Coords),
    Submit(WorkoutForm),
    Select(String),
    List,
    Reset,
    Help,
    Quit,
}

impl FromStr for SessionEvent {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let cmd = parts.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = parts.collect();

        match (cmd.as_str(), args.as_slice()) {
            ("click", [lat, lng]) => {
                let parse = |v: &str| {
                    v.parse::<f64>()
                        .map_err(|_| AppError::InvalidCoordinates(format!("'{v}'")))
                };
                Ok(SessionEvent::Click(Coords::new(parse(*lat)?, parse(*lng)?)?))
            }
            ("submit", [kind, distance, duration, rest @ ..]) if rest.len() <= 1 => {
                let kind = WorkoutKind::from_str(kind)?;
                let param = rest.first().copied().unwrap_or_default();
                let (cadence, elevation) = match kind {
                    WorkoutKind::Running => (param, ""),
                    WorkoutKind::Cycling => ("", param),
                };
                Ok(SessionEvent::Submit(WorkoutForm::from_fields(
                    kind, distance, duration, cadence, elevation,
                )))
            }
            ("select", [id]) => Ok(SessionEvent::Select(id.to_string())),
            ("list", []) => Ok(SessionEvent::List),
            ("reset", []) => Ok(SessionEvent::Reset),
            ("help", []) => Ok(SessionEvent::Help),
            ("quit" | "exit", []) => Ok(SessionEvent::Quit),
            _ => Err(AppError::InvalidInput(format!(
                "unrecognized command '{}' (type 'help')",
                line.trim()
            ))),
        }
    }
}

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut tracker = startup(cfg)?;

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    loop {
        if interactive {
            print!("> ");
            io::stdout().flush().ok();
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let event = match line.parse::<SessionEvent>() {
            Ok(ev) => ev,
            Err(e) => {
                error(e);
                continue;
            }
        };

        if event == SessionEvent::Quit {
            break;
        }

        // no error ends the session
        if let Err(e) = apply(&mut tracker, cfg, event) {
            error(e);
        }
    }

    info("Session closed.");
    Ok(())
}

/// Load stored workouts, show them, then bring the map up.
fn startup(cfg: &Config) -> AppResult<TerminalTracker> {
    let mut tracker = open_tracker(cfg, TerminalMap::new(true), TerminalList::new(false))?;
    show_list(&tracker);
    tracker.view_mut().set_echo(true);
    tracker.locate(&mut location(cfg));
    Ok(tracker)
}

fn show_list(tracker: &TerminalTracker) {
    if tracker.workouts().is_empty() {
        info("No workouts recorded yet.");
    } else {
        header("Workouts");
        tracker.view().print_all();
    }
}

fn apply(tracker: &mut TerminalTracker, cfg: &Config, event: SessionEvent) -> AppResult<()> {
    match event {
        SessionEvent::Click(at) => tracker.on_map_clicked(at)?,
        SessionEvent::Submit(form) => {
            if let Submission::Created(id) = tracker.on_form_submitted(&form)?
                && let Some(w) = tracker.find(&id)
            {
                success(format!("{} recorded (id {id})", w.describe()));
                ttlog_soft(
                    tracker.store().conn(),
                    "add",
                    &id,
                    &format!("{} at ({})", w.describe(), w.coords()),
                );
            }
        }
        SessionEvent::Select(id) => {
            if tracker.on_workout_selected(&id)
                && let Some(w) = tracker.find(&id)
            {
                info(format!("{} selected ({} time(s))", w.describe(), w.clicks()));
            }
        }
        SessionEvent::List => show_list(tracker),
        SessionEvent::Reset => {
            let removed = tracker.workouts().len();
            tracker.reset_all()?;
            tracker.view_mut().clear();
            tracker.map_mut().clear();
            ttlog_soft(
                tracker.store().conn(),
                "reset",
                "",
                &format!("{removed} workout(s) deleted"),
            );
            success(format!("All workouts deleted ({removed})."));
            tracker.locate(&mut location(cfg));
        }
        SessionEvent::Help => println!("{HELP}"),
        SessionEvent::Quit => {}
    }
    Ok(())
}
