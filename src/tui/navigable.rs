//! Shared navigation trait for lists with a selectable row.

/// Navigation over a list with one selected row.
///
/// Methods only adjust the `selected` index. Clamping to valid bounds happens
/// later, when the list is resolved against its current row count.
pub trait NavigableList {
    fn selected(&self) -> usize;
    fn selected_mut(&mut self) -> &mut usize;

    fn select_up(&mut self) {
        *self.selected_mut() = self.selected().saturating_sub(1);
    }

    fn select_down(&mut self) {
        *self.selected_mut() = self.selected().saturating_add(1);
    }

    fn page_up(&mut self, n: usize) {
        *self.selected_mut() = self.selected().saturating_sub(n);
    }

    fn page_down(&mut self, n: usize) {
        *self.selected_mut() = self.selected().saturating_add(n);
    }

    fn home(&mut self) {
        *self.selected_mut() = 0;
    }

    fn end(&mut self) {
        *self.selected_mut() = usize::MAX;
    }
}
