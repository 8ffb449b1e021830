//! Index-based tab switcher
//!
//! Holds the active tab index and nothing else. Rendering produces the full
//! label row plus the content of the active tab only.

use dealdesk_domain::constants::TAB_CONTENT_PLACEHOLDER;

const ACTIVE_LABEL_CLASS: &str = "text-purple-600 border-b-2 border-purple-600";
const INACTIVE_LABEL_CLASS: &str = "text-gray-500 hover:text-gray-700";

/// One tab: a label and the content shown while it is active
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab<C> {
    pub label: String,
    pub content: C,
}

impl<C> Tab<C> {
    pub fn new(label: impl Into<String>, content: C) -> Self {
        Self { label: label.into(), content }
    }
}

/// Tab list plus the active index
#[derive(Debug, Clone)]
pub struct TabsState<C> {
    tabs: Vec<Tab<C>>,
    active: usize,
}

/// Label as rendered in the tab row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabLabel<'a> {
    pub index: usize,
    pub label: &'a str,
    pub active: bool,
}

impl TabLabel<'_> {
    pub const fn class(&self) -> &'static str {
        if self.active {
            ACTIVE_LABEL_CLASS
        } else {
            INACTIVE_LABEL_CLASS
        }
    }
}

/// Body of the content panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabContent<'a, C> {
    Active(&'a C),
    Placeholder(&'static str),
}

/// Rendered tab set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabsView<'a, C> {
    pub labels: Vec<TabLabel<'a>>,
    pub content: TabContent<'a, C>,
}

impl<C> TabsState<C> {
    /// Build the tab set. `default_active` falls back to the first tab.
    pub fn new(tabs: Vec<Tab<C>>, default_active: Option<usize>) -> Self {
        Self { tabs, active: default_active.unwrap_or(0) }
    }

    pub const fn active_index(&self) -> usize {
        self.active
    }

    pub fn tabs(&self) -> &[Tab<C>] {
        &self.tabs
    }

    /// Make `index` the active tab.
    ///
    /// An index without a tab is accepted; rendering then shows the
    /// placeholder instead of failing.
    pub fn select(&mut self, index: usize) {
        self.active = index;
    }

    pub fn render(&self) -> TabsView<'_, C> {
        let labels = self
            .tabs
            .iter()
            .enumerate()
            .map(|(index, tab)| TabLabel {
                index,
                label: tab.label.as_str(),
                active: index == self.active,
            })
            .collect();

        let content = self
            .tabs
            .get(self.active)
            .map_or(TabContent::Placeholder(TAB_CONTENT_PLACEHOLDER), |tab| {
                TabContent::Active(&tab.content)
            });

        TabsView { labels, content }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_tabs() -> Vec<Tab<&'static str>> {
        vec![
            Tab::new("Overview", "overview body"),
            Tab::new("Documents", "documents body"),
            Tab::new("Comments", "comments body"),
        ]
    }

    #[test]
    fn defaults_to_first_tab() {
        let tabs = TabsState::new(three_tabs(), None);
        assert_eq!(tabs.active_index(), 0);
        assert_eq!(tabs.render().content, TabContent::Active(&"overview body"));
    }

    #[test]
    fn honours_default_active() {
        let tabs = TabsState::new(three_tabs(), Some(1));
        assert_eq!(tabs.render().content, TabContent::Active(&"documents body"));
    }

    #[test]
    fn selecting_renders_only_the_selected_content() {
        let mut tabs = TabsState::new(three_tabs(), None);
        tabs.select(2);

        let view = tabs.render();
        assert_eq!(view.content, TabContent::Active(&"comments body"));
        assert_ne!(view.content, TabContent::Active(&"overview body"));
        assert_ne!(view.content, TabContent::Active(&"documents body"));

        let active: Vec<bool> = view.labels.iter().map(|l| l.active).collect();
        assert_eq!(active, vec![false, false, true]);
        assert_eq!(view.labels.len(), 3);
        assert_eq!(view.labels[2].class(), ACTIVE_LABEL_CLASS);
        assert_eq!(view.labels[0].class(), INACTIVE_LABEL_CLASS);
    }

    #[test]
    fn empty_tab_list_renders_placeholder() {
        let tabs: TabsState<String> = TabsState::new(Vec::new(), None);
        let view = tabs.render();

        assert!(view.labels.is_empty());
        assert_eq!(view.content, TabContent::Placeholder("Content not available"));
    }

    #[test]
    fn out_of_range_selection_renders_placeholder() {
        let mut tabs = TabsState::new(three_tabs(), None);
        tabs.select(7);
        assert_eq!(tabs.render().content, TabContent::Placeholder(TAB_CONTENT_PLACEHOLDER));
        assert!(tabs.render().labels.iter().all(|l| !l.active));
    }
}
