pub mod fixtures;

use std::sync::OnceLock;
use std::time::Instant;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use itinera::app::ports::RenderOutput;
use itinera::app::state::AppState;
use itinera::domain::Itinerary;
use itinera::ui::components::layout::AdaptivePanelView;

pub const NARROW_WIDTH: u16 = 60;
pub const WIDE_WIDTH: u16 = 120;
pub const TEST_HEIGHT: u16 = 24;

/// Same instant for every call in a test binary, so animation sampling is
/// reproducible.
pub fn fixed_instant() -> Instant {
    static START: OnceLock<Instant> = OnceLock::new();
    *START.get_or_init(Instant::now)
}

pub fn create_test_state(width: u16) -> AppState {
    AppState::sized(fixtures::sample_itinerary(), width, TEST_HEIGHT)
}

pub fn create_sized_state(itinerary: Itinerary, width: u16, height: u16) -> AppState {
    AppState::sized(itinerary, width, height)
}

pub fn create_test_terminal(width: u16) -> Terminal<TestBackend> {
    create_sized_terminal(width, TEST_HEIGHT)
}

pub fn create_sized_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

/// Draws one frame and feeds its hit regions back into `state`, the way the
/// effect runner does.
pub fn render(
    terminal: &mut Terminal<TestBackend>,
    state: &mut AppState,
    now: Instant,
) -> RenderOutput {
    let mut output = RenderOutput::default();
    terminal
        .draw(|frame| {
            output = AdaptivePanelView::render(frame, state, now);
        })
        .unwrap();
    state.ui.record(output.clone());
    output
}

pub fn render_to_string(
    terminal: &mut Terminal<TestBackend>,
    state: &mut AppState,
    now: Instant,
) -> String {
    render(terminal, state, now);
    buffer_to_string(terminal.backend().buffer())
}

pub fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer.cell((x, y)).unwrap().symbol().to_string())
        .collect()
}

fn buffer_to_string(buffer: &Buffer) -> String {
    (0..buffer.area.height)
        .map(|y| row_text(buffer, y).trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
