//! The single floating detail overlay shared by both charts.

use dioxus::prelude::*;

/// Offset from the pointer so the overlay doesn't sit under the cursor.
pub const POINTER_OFFSET: (f64, f64) = (12.0, -28.0);

/// What an overlay shows: an optional bold heading and label/value rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipContent {
    pub title: Option<String>,
    pub rows: Vec<(String, String)>,
}

impl TooltipContent {
    pub fn new(title: Option<String>) -> Self {
        Self {
            title,
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.rows.push((label.into(), value.into()));
        self
    }

    /// Value shown next to `label`, if present.
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipState {
    content: Option<TooltipContent>,
    x: f64,
    y: f64,
}

impl TooltipState {
    pub fn show(&mut self, content: TooltipContent, x: f64, y: f64) {
        self.content = Some(content);
        self.move_to(x, y);
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x + POINTER_OFFSET.0;
        self.y = y + POINTER_OFFSET.1;
    }

    pub fn hide(&mut self) {
        self.content = None;
    }

    pub fn is_visible(&self) -> bool {
        self.content.is_some()
    }

    pub fn content(&self) -> Option<&TooltipContent> {
        self.content.as_ref()
    }

    /// Page position of the overlay's top-left corner.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Install the page-wide overlay state. Call once near the root.
pub fn provide_tooltip() -> Signal<TooltipState> {
    use_context_provider(|| Signal::new(TooltipState::default()))
}

pub fn use_tooltip() -> Signal<TooltipState> {
    use_context::<Signal<TooltipState>>()
}

/// Hover handlers for one chart mark.
#[derive(Clone, Copy)]
pub struct HoverHandlers {
    tooltip: Signal<TooltipState>,
}

impl HoverHandlers {
    pub fn new(tooltip: Signal<TooltipState>) -> Self {
        Self { tooltip }
    }

    pub fn enter(mut self, content: TooltipContent, evt: &MouseEvent) {
        let point = evt.page_coordinates();
        self.tooltip.write().show(content, point.x, point.y);
    }

    pub fn moved(mut self, evt: &MouseEvent) {
        let point = evt.page_coordinates();
        self.tooltip.write().move_to(point.x, point.y);
    }

    pub fn leave(mut self) {
        self.tooltip.write().hide();
    }
}

#[component]
pub fn Tooltip() -> Element {
    let tooltip = use_tooltip();
    let state = tooltip();
    let (left, top) = state.position();
    let opacity = if state.is_visible() { 1 } else { 0 };

    rsx! {
        div {
            id: "tooltip",
            class: "tooltip",
            role: "tooltip",
            style: "left: {left}px; top: {top}px; opacity: {opacity};",
            if let Some(content) = state.content() {
                if let Some(title) = content.title.as_ref() {
                    strong { class: "tooltip__title", "{title}" }
                }
                for (label, value) in content.rows.iter() {
                    div { class: "tooltip__row",
                        span { class: "tooltip__label", "{label}: " }
                        span { class: "tooltip__value", "{value}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_move_hide_cycle() {
        let mut state = TooltipState::default();
        assert!(!state.is_visible());

        state.show(TooltipContent::new(Some("Cubs".into())).row("Year", "1960"), 100.0, 200.0);
        assert!(state.is_visible());
        assert_eq!(state.position(), (112.0, 172.0));
        assert_eq!(state.content().and_then(|c| c.value_of("Year")), Some("1960"));

        state.move_to(10.0, 50.0);
        assert_eq!(state.position(), (22.0, 22.0));

        state.hide();
        assert!(!state.is_visible());
        assert!(state.content().is_none());
    }

    #[test]
    fn showing_new_content_replaces_the_old() {
        let mut state = TooltipState::default();
        state.show(TooltipContent::new(Some("Cubs".into())), 0.0, 0.0);
        state.show(TooltipContent::new(Some("Mets".into())), 0.0, 0.0);
        assert_eq!(
            state.content().and_then(|c| c.title.as_deref()),
            Some("Mets")
        );
    }
}
