use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span, warn};

use hubs_core::{CommitDecision, HubsSession};
use hubs_model::CanvasSize;
use hubs_persistence::{load_state_with, save_state};
use hubs_report::{SvgOptions, render_svg, sweep_csv};

use crate::cli::{Cli, DiagramArgs, DiagramFormatArg, EnterArgs, SetArgs, SweepArgs};
use crate::settings::{Settings, load_settings};
use crate::summary::{print_entry_outcomes, print_summary, ranges_table};
use crate::types::EntryOutcome;

/// Settings, state location and the restored session shared by every command.
pub struct Workspace {
    pub settings: Settings,
    pub state_path: PathBuf,
    pub session: HubsSession,
}

impl Workspace {
    pub fn open(cli: &Cli) -> Result<Self> {
        Self::load(cli.config.as_deref(), cli.state.as_deref())
    }

    /// Load settings and restore the saved inputs. Slots missing from the
    /// state file take the defaults configured in the settings.
    pub fn load(settings_path: Option<&Path>, state_path: Option<&Path>) -> Result<Self> {
        let settings = load_settings(settings_path);
        let state_path = settings.resolve_state_path(state_path);
        let snapshot = load_state_with(&state_path, &settings.ranges)
            .with_context(|| format!("load state from {}", state_path.display()))?;
        debug!(path = %state_path.display(), ?snapshot, "restored inputs");
        let session = HubsSession::new(settings.ranges).with_snapshot(snapshot);
        Ok(Self {
            settings,
            state_path,
            session,
        })
    }

    fn persist(&self) -> Result<()> {
        save_state(&self.session.snapshot(), &self.state_path)
            .with_context(|| format!("save state to {}", self.state_path.display()))?;
        info!(path = %self.state_path.display(), "saved inputs");
        Ok(())
    }
}

pub fn run_show(workspace: &Workspace) -> Result<()> {
    print_summary(&workspace.session, &workspace.state_path);
    Ok(())
}

pub fn run_set(workspace: &mut Workspace, args: &SetArgs) -> Result<()> {
    let applied = workspace.session.slide(args.field, args.value);
    if applied != args.value {
        warn!(
            field = %args.field,
            requested = args.value,
            applied,
            "value clamped to the slider range"
        );
    }
    workspace.persist()?;
    print_summary(&workspace.session, &workspace.state_path);
    Ok(())
}

pub fn run_enter(workspace: &mut Workspace, args: &EnterArgs) -> Result<()> {
    let span = info_span!("enter", field = %args.field);
    let _guard = span.enter();

    let depths = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&depths);
    let subscription = workspace
        .session
        .subscribe(move |depth| sink.borrow_mut().push(depth));

    let session = &mut workspace.session;
    let focused = session.on_field_focus_gained(args.field).text().to_string();
    debug!(text = %focused, "field focused");

    let mut outcomes = Vec::with_capacity(args.texts.len());
    for text in &args.texts {
        let decision = if args.keys {
            session.on_keys_typed(args.field, text)
        } else {
            session.on_text_changed(args.field, text)
        };
        let buffer = session
            .buffer(args.field)
            .map(|buffer| buffer.text().to_string())
            .unwrap_or_default();
        outcomes.push(EntryOutcome {
            field: args.field,
            text: buffer,
            decision,
            value: session.value(args.field),
            hub_depth: session.hub_depth(),
        });
    }
    session.on_field_focus_lost(args.field);
    session.unsubscribe(subscription);

    let commits = outcomes
        .iter()
        .filter(|outcome| matches!(outcome.decision, CommitDecision::Commit(_)))
        .count();
    // The first notification is the value delivered on subscribe.
    debug!(
        commits,
        notifications = depths.borrow().len().saturating_sub(1),
        "entry finished"
    );

    if commits > 0 {
        workspace.persist()?;
    }
    print_entry_outcomes(&outcomes);
    print_summary(&workspace.session, &workspace.state_path);
    Ok(())
}

pub fn run_reset(workspace: &mut Workspace) -> Result<()> {
    workspace.session = HubsSession::new(workspace.settings.ranges);
    workspace.persist()?;
    info!(path = %workspace.state_path.display(), "inputs reset to defaults");
    print_summary(&workspace.session, &workspace.state_path);
    Ok(())
}

pub fn run_diagram(workspace: &Workspace, args: &DiagramArgs) -> Result<()> {
    let default_canvas = workspace.settings.canvas;
    let canvas = CanvasSize::new(
        args.width.unwrap_or(default_canvas.width),
        args.height.unwrap_or(default_canvas.height),
    );
    if !(canvas.width.is_finite() && canvas.height.is_finite())
        || canvas.width <= 0.0
        || canvas.height <= 0.0
    {
        bail!(
            "canvas size must be positive, got {}x{}",
            canvas.width,
            canvas.height
        );
    }
    let session = &workspace.session;
    let primitives = session.diagram(canvas);
    let rendered = match args.format {
        DiagramFormatArg::Svg => {
            let options = SvgOptions {
                caption: (!args.no_caption)
                    .then(|| format!("Hub Depth: {} Inches", session.hub_depth_text())),
                background: true,
            };
            render_svg(&primitives, canvas, &options).context("render svg")?
        }
        DiagramFormatArg::Json => {
            serde_json::to_string_pretty(&primitives).context("serialize primitives")?
        }
    };
    write_output(args.output.as_deref(), &rendered)
}

pub fn run_sweep(workspace: &Workspace, args: &SweepArgs) -> Result<()> {
    let session = &workspace.session;
    let csv = sweep_csv(session.config(), &session.snapshot(), args.field)
        .with_context(|| format!("sweep {}", args.field))?;
    write_output(args.output.as_deref(), &csv)
}

pub fn run_ranges(workspace: &Workspace) -> Result<()> {
    println!("{}", ranges_table(workspace.session.config()));
    Ok(())
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            ensure_parent(path)?;
            fs::write(path, content).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "wrote output");
        }
        None if content.ends_with('\n') => print!("{content}"),
        None => println!("{content}"),
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    Ok(())
}
