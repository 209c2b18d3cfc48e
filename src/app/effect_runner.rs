//! Executes side effects returned by the reducer.

use std::sync::Arc;
use std::time::Instant;

use color_eyre::eyre::Result;

use crate::effect::Effect;
use crate::ports::{Renderer, SheetStateObserver};
use crate::state::AppState;

pub struct EffectRunner {
    sheet_observer: Arc<dyn SheetStateObserver>,
}

impl EffectRunner {
    pub fn new(sheet_observer: Arc<dyn SheetStateObserver>) -> Self {
        Self { sheet_observer }
    }

    pub fn run<R: Renderer + ?Sized>(
        &self,
        effects: Vec<Effect>,
        renderer: &mut R,
        state: &mut AppState,
        now: Instant,
    ) -> Result<()> {
        for effect in effects {
            self.run_single(effect, renderer, state, now)?;
        }
        Ok(())
    }

    fn run_single<R: Renderer + ?Sized>(
        &self,
        effect: Effect,
        renderer: &mut R,
        state: &mut AppState,
        now: Instant,
    ) -> Result<()> {
        match effect {
            Effect::Render => {
                let output = renderer.draw(state, now)?;
                state.ui.record(output);
            }
            Effect::NotifySheetState(sheet_state) => {
                self.sheet_observer.sheet_state_changed(sheet_state);
            }
        }
        Ok(())
    }
}
