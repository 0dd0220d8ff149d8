use portal_core::{PortalLocale, UiBinding, UiTrigger};
use portal_ui::{render_document, DocumentParts, RenderedRegion};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Screen,
    Shell,
    Page,
    ChatWidget,
    Modal,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Screen,
        Region::Shell,
        Region::Page,
        Region::ChatWidget,
        Region::Modal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Screen => "screen",
            Self::Shell => "shell",
            Self::Page => "page",
            Self::ChatWidget => "chat_widget",
            Self::Modal => "modal",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Live markup and handler bindings, one slot per region.
///
/// Replacing a region drops every binding it held before, so the set of
/// bindings always matches the markup currently shown.
pub struct PortalDocument {
    screen: RenderedRegion,
    shell: RenderedRegion,
    page: RenderedRegion,
    chat_widget: RenderedRegion,
    modal: RenderedRegion,
}

impl PortalDocument {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, region: Region) -> &mut RenderedRegion {
        match region {
            Region::Screen => &mut self.screen,
            Region::Shell => &mut self.shell,
            Region::Page => &mut self.page,
            Region::ChatWidget => &mut self.chat_widget,
            Region::Modal => &mut self.modal,
        }
    }

    pub fn region(&self, region: Region) -> &RenderedRegion {
        match region {
            Region::Screen => &self.screen,
            Region::Shell => &self.shell,
            Region::Page => &self.page,
            Region::ChatWidget => &self.chat_widget,
            Region::Modal => &self.modal,
        }
    }

    pub fn replace(&mut self, region: Region, rendered: RenderedRegion) {
        *self.slot_mut(region) = rendered;
    }

    pub fn clear(&mut self, region: Region) {
        *self.slot_mut(region) = RenderedRegion::default();
    }

    pub fn bindings(&self) -> impl Iterator<Item = &UiBinding> {
        Region::ALL
            .into_iter()
            .flat_map(move |region| self.region(region).bindings.iter())
    }

    pub fn find_binding(&self, element_id: &str, trigger: UiTrigger) -> Option<&UiBinding> {
        self.bindings()
            .find(|binding| binding.element_id == element_id && binding.trigger == trigger)
    }

    pub fn binding_count(&self) -> usize {
        self.bindings().count()
    }

    pub fn render_html(&self, locale: PortalLocale) -> String {
        render_document(&DocumentParts {
            lang: locale.html_lang(),
            screen: &self.screen.html,
            shell: &self.shell.html,
            page: &self.page.html,
            chat_widget: &self.chat_widget.html,
            modal: &self.modal.html,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{PortalDocument, Region};
    use portal_core::{PortalEvent, PortalLocale, UiBinding, UiTrigger};
    use portal_ui::RenderedRegion;

    fn region_with(id: &str) -> RenderedRegion {
        RenderedRegion::new(
            format!("<button id=\"{id}\">x</button>"),
            vec![UiBinding::click(id, PortalEvent::Logout)],
        )
    }

    #[test]
    fn unit_replace_drops_previous_region_bindings() {
        let mut document = PortalDocument::new();
        document.replace(Region::Shell, region_with("first"));
        document.replace(Region::Shell, region_with("second"));
        assert_eq!(document.binding_count(), 1);
        assert!(document.find_binding("first", UiTrigger::Click).is_none());
        assert!(document.find_binding("second", UiTrigger::Click).is_some());
    }

    #[test]
    fn unit_clear_empties_region() {
        let mut document = PortalDocument::new();
        document.replace(Region::Modal, region_with("portal-modal-ok"));
        document.clear(Region::Modal);
        assert!(document.region(Region::Modal).is_empty());
        assert_eq!(document.binding_count(), 0);
    }

    #[test]
    fn functional_render_html_wraps_every_region() {
        let mut document = PortalDocument::new();
        document.replace(Region::Screen, region_with("landing-go-login"));
        let html = document.render_html(PortalLocale::English);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("landing-go-login"));
        assert!(html.contains("portal-modal-region"));
    }
}
