//! Hover tooltip
//!
//! Visibility is a single boolean driven by pointer and focus events. A
//! tooltip without content renders its children only and ignores events.

/// Side of the anchor the bubble appears on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Placement {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Top => "bottom-full left-1/2 -translate-x-1/2 mb-2",
            Self::Bottom => "top-full left-1/2 -translate-x-1/2 mt-2",
            Self::Left => "right-full top-1/2 -translate-y-1/2 mr-2",
            Self::Right => "left-full top-1/2 -translate-y-1/2 ml-2",
        }
    }
}

/// Events the anchor element reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
    Focus,
    Blur,
}

/// Tooltip state around some anchor content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip<C> {
    content: Option<C>,
    placement: Placement,
    visible: bool,
}

/// Rendered tooltip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipView<'a, C> {
    /// No content: children are rendered bare, no handlers attached.
    ChildrenOnly,
    /// Children wrapped in a hover target. `bubble` is present while visible.
    Anchored { placement: Placement, bubble: Option<&'a C> },
}

impl<C> Tooltip<C> {
    pub const fn new(content: Option<C>) -> Self {
        Self { content, placement: Placement::Top, visible: false }
    }

    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Whether hover/focus handlers are attached at all.
    pub const fn has_handlers(&self) -> bool {
        self.content.is_some()
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn handle(&mut self, event: PointerEvent) {
        if !self.has_handlers() {
            return;
        }
        self.visible = matches!(event, PointerEvent::Enter | PointerEvent::Focus);
    }

    pub fn render(&self) -> TooltipView<'_, C> {
        match &self.content {
            None => TooltipView::ChildrenOnly,
            Some(content) => TooltipView::Anchored {
                placement: self.placement,
                bubble: self.visible.then_some(content),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let tooltip = Tooltip::new(Some("Deal owner"));
        assert!(!tooltip.is_visible());
        assert_eq!(
            tooltip.render(),
            TooltipView::Anchored { placement: Placement::Top, bubble: None }
        );
    }

    #[test]
    fn enter_shows_and_leave_hides() {
        let mut tooltip = Tooltip::new(Some("Deal owner"));

        tooltip.handle(PointerEvent::Enter);
        assert_eq!(
            tooltip.render(),
            TooltipView::Anchored { placement: Placement::Top, bubble: Some(&"Deal owner") }
        );

        tooltip.handle(PointerEvent::Leave);
        assert!(!tooltip.is_visible());
    }

    #[test]
    fn focus_and_blur_mirror_hover() {
        let mut tooltip = Tooltip::new(Some(3_u8)).with_placement(Placement::Right);
        tooltip.handle(PointerEvent::Focus);
        assert!(tooltip.is_visible());
        tooltip.handle(PointerEvent::Blur);
        assert!(!tooltip.is_visible());
    }

    #[test]
    fn without_content_events_never_produce_a_bubble() {
        let mut tooltip: Tooltip<String> = Tooltip::new(None);
        assert!(!tooltip.has_handlers());

        for event in
            [PointerEvent::Enter, PointerEvent::Focus, PointerEvent::Leave, PointerEvent::Enter]
        {
            tooltip.handle(event);
            assert_eq!(tooltip.render(), TooltipView::ChildrenOnly);
        }
        assert!(!tooltip.is_visible());
    }
}
