use crate::constants::*;
use crate::dom;
use universe_core::{Section, SectionRouter};
use web_sys as web;

/// Shows the content panel for the active section and hides the others. The
/// universe itself has no panel; the canvas stays visible underneath.
pub struct DomRouter {
    document: web::Document,
}

impl DomRouter {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }

    fn show_only(&self, section: Section) {
        for s in Section::ALL {
            if s == Section::Universe {
                continue;
            }
            dom::set_hidden(
                &self.document,
                &section_element_id(s.as_str()),
                s != section,
            );
        }
        self.document.set_title(section.title());
    }
}

impl SectionRouter for DomRouter {
    fn request_section(&mut self, section: Section) {
        log::info!("[nav] showing {}", section);
        self.show_only(section);
    }
}
