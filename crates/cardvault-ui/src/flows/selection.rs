use super::{StatusPage, StatusToggle};

impl<P: StatusPage> StatusToggle<P> {
    /// Mirror a table's select-all checkbox onto its items.
    pub fn handle_select_all(&self, checkbox: &P::Element) {
        self.page.select_all_in_table(checkbox);
        self.page.update_batch_buttons();
    }

    /// Refresh batch controls after an item checkbox changed.
    pub fn handle_item_selected(&self) {
        self.page.update_batch_buttons();
    }
}
