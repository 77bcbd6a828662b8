use std::path::PathBuf;

use crate::report::RenderedView;

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// The viewer's state, independent of rendering.
pub struct AppState {
    /// Every chart written by this run, in report order.
    pub views: Vec<RenderedView>,

    /// Index into `views` of the chart shown in the central panel.
    pub selected: usize,

    /// Directory the charts were written to.
    pub output_dir: PathBuf,
}

impl AppState {
    pub fn new(views: Vec<RenderedView>, output_dir: PathBuf) -> Self {
        Self {
            views,
            selected: 0,
            output_dir,
        }
    }

    /// The chart currently on screen, if any were rendered.
    pub fn current(&self) -> Option<&RenderedView> {
        self.views.get(self.selected)
    }

    /// Switch to another chart; out-of-range indices are ignored.
    pub fn select(&mut self, idx: usize) {
        if idx < self.views.len() {
            self.selected = idx;
        }
    }

    /// Step forwards or backwards through the charts, wrapping around.
    pub fn step(&mut self, forward: bool) {
        let n = self.views.len();
        if n == 0 {
            return;
        }
        self.selected = if forward {
            (self.selected + 1) % n
        } else {
            (self.selected + n - 1) % n
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::Figure;

    fn state_with(names: &[&'static str]) -> AppState {
        let views = names
            .iter()
            .map(|&name| RenderedView {
                name,
                path: PathBuf::from(format!("{name}.svg")),
                figure: Figure::new(name, "x", "y"),
            })
            .collect();
        AppState::new(views, PathBuf::from("."))
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut state = state_with(&["sus", "time"]);
        state.select(1);
        assert_eq!(state.current().map(|v| v.name), Some("time"));
        state.select(5);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn step_wraps_both_ways() {
        let mut state = state_with(&["sus", "time", "score"]);
        state.step(false);
        assert_eq!(state.selected, 2);
        state.step(true);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn empty_state_has_no_current_view() {
        let mut state = state_with(&[]);
        state.step(true);
        assert!(state.current().is_none());
    }
}
