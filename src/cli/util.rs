use ratatui::layout::Rect;
use std::io;

/// Steps are evaluated by the caller before this runs; returns the first failure.
pub fn first_error(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    steps.into_iter().find(Result::is_err).unwrap_or(Ok(()))
}

/// `w` x `h` rectangle centered in `rect`, clipped to it.
pub fn center_rect(rect: Rect, w: u16, h: u16) -> Rect {
    let x = rect.x + rect.width.saturating_sub(w) / 2;
    let y = rect.y + rect.height.saturating_sub(h) / 2;
    Rect { x, y, width: w.min(rect.width), height: h.min(rect.height) }
}

/// Display index of a menu entry once separator rows are interleaved.
pub fn row_with_separators(index: usize, separators_after: &[usize]) -> usize {
    index + separators_after.iter().filter(|&&s| s < index).count()
}
