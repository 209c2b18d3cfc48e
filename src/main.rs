use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tokio::time::sleep_until;
use tracing::info;

use itinera::app::action::Action;
use itinera::app::effect::Effect;
use itinera::app::effect_runner::EffectRunner;
use itinera::app::ports::ItinerarySource;
use itinera::app::reducer::reduce;
use itinera::app::render_schedule::next_animation_deadline;
use itinera::app::state::AppState;
use itinera::domain::DisplayState;
use itinera::error;
use itinera::infra::adapters::{BuiltinItinerarySource, TomlItinerarySource, TracingSheetObserver};
use itinera::infra::config::{TomlConfigLoader, get_log_dir};
use itinera::infra::logging;
use itinera::ui::adapters::TuiAdapter;
use itinera::ui::event::handler::handle_event;
use itinera::ui::tui::TuiRunner;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (default: <config dir>/itinera/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Itinerary TOML to show instead of the built-in sample trip
    #[arg(long, value_name = "PATH")]
    itinerary: Option<PathBuf>,

    /// Initial sheet size: collapsed, half or full
    #[arg(long, value_name = "STATE")]
    state: Option<DisplayState>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    error::install_hooks()?;

    let args = Args::parse();
    logging::init(&get_log_dir()?)?;

    // An explicit --config must load; the default file falls back to defaults.
    let mut config = match args.config {
        Some(path) => TomlConfigLoader::with_path(path).load()?,
        None => TomlConfigLoader::new()?.load_or_default(),
    };
    if let Some(initial) = args.state {
        config.sheet.default_state = initial;
    }

    let itinerary = match &args.itinerary {
        Some(path) => TomlItinerarySource::new(path.clone()).load()?,
        None => BuiltinItinerarySource.load()?,
    };
    info!(
        title = %itinerary.title,
        stops = itinerary.stop_count(),
        default_state = %config.sheet.default_state,
        "starting"
    );

    let (action_tx, mut action_rx) = mpsc::channel::<Action>(256);
    let effect_runner = EffectRunner::new(Arc::new(TracingSheetObserver));
    let mut state = AppState::new(itinerary, &config);

    let mut tui = TuiRunner::new()?;
    tui.enter()?;

    let initial_size = tui.terminal().size()?;
    reduce(
        &mut state,
        Action::Resize(initial_size.width, initial_size.height),
        Instant::now(),
    );

    loop {
        let now = Instant::now();
        let deadline = next_animation_deadline(&state, now);

        tokio::select! {
            Some(event) = tui.next_event() => {
                let action = handle_event(event, &state);
                if !action.is_none() {
                    let _ = action_tx.send(action).await;
                }
            }
            Some(action) = action_rx.recv() => {
                let now = Instant::now();
                let mut effects = reduce(&mut state, action, now);

                if state.render_dirty {
                    effects.push(Effect::Render);
                }

                let mut tui_adapter = TuiAdapter::new(&mut tui);
                effect_runner.run(effects, &mut tui_adapter, &mut state, now)?;
                state.clear_dirty();
            }
            // Next frame of a sheet transition
            _ = async {
                match deadline {
                    Some(d) => sleep_until(d.into()).await,
                    None => std::future::pending::<()>().await,
                }
            } => {
                let now = Instant::now();
                let effects = reduce(&mut state, Action::Render, now);
                let mut tui_adapter = TuiAdapter::new(&mut tui);
                effect_runner.run(effects, &mut tui_adapter, &mut state, now)?;
                state.clear_dirty();
            }
        }

        if state.should_quit {
            break;
        }
    }

    tui.exit()?;
    Ok(())
}
