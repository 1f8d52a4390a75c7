//! DOM overlay: title block, project list, detail panel and loader splash.

use crate::constants::*;
use crate::dom;
use folio_core::catalog::counter_label;
use folio_core::{Catalog, CatalogEntry, DetailContent, OverlayPresenter};
use web_sys as web;

pub struct DomOverlay {
    document: web::Document,
    count: usize,
    list_items: Vec<web::Element>,
    hovered: Option<usize>,
}

impl DomOverlay {
    /// Build the project list and show the first artwork's title block.
    pub fn new(document: web::Document, catalog: &Catalog) -> Self {
        let list_items = build_list(&document, catalog);
        let mut overlay = Self {
            document,
            count: catalog.len(),
            list_items,
            hovered: None,
        };
        if let Some(first) = catalog.get(0) {
            overlay.current_changed(0, first);
        }
        overlay
    }

    pub fn set_hovered(&mut self, hovered: Option<usize>) {
        if hovered == self.hovered {
            return;
        }
        for (i, el) in self.list_items.iter().enumerate() {
            dom::toggle_class(el, HOVERED_CLASS, hovered == Some(i));
        }
        self.hovered = hovered;
    }

    fn fill_detail(&self, detail: &DetailContent<'_>) {
        let meta = &detail.entry.metadata;
        dom::set_text(&self.document, DETAIL_TITLE_ID, &meta.title);
        dom::set_text(&self.document, DETAIL_DESCRIPTION_ID, &meta.description);
        dom::set_text(&self.document, DETAIL_META_ID, &detail.meta_lines().join(" · "));
        dom::set_text(&self.document, DETAIL_NEXT_TITLE_ID, detail.next_title());
        if let Some(button) = self.document.get_element_by_id(DETAIL_NEXT_ID) {
            let label = format!("View next project: {}", detail.next_title());
            _ = button.set_attribute("aria-label", &label);
        }
        self.fill_images(detail.entry);
    }

    fn fill_images(&self, entry: &CatalogEntry) {
        let Some(parent) = self.document.get_element_by_id(DETAIL_IMAGES_ID) else {
            log::warn!("[overlay] missing #{}", DETAIL_IMAGES_ID);
            return;
        };
        parent.set_text_content(None);
        for (i, src) in entry.detail_images().enumerate() {
            let Ok(img) = self.document.create_element("img") else {
                continue;
            };
            _ = img.set_attribute("src", src);
            _ = img.set_attribute("alt", &format!("{} ({})", entry.metadata.title, i + 1));
            _ = img.set_attribute("loading", "lazy");
            _ = parent.append_child(&img);
        }
    }
}

fn build_list(document: &web::Document, catalog: &Catalog) -> Vec<web::Element> {
    let Some(parent) = document.get_element_by_id(LIST_ID) else {
        log::warn!("[overlay] missing #{}", LIST_ID);
        return Vec::new();
    };
    parent.set_text_content(None);
    catalog
        .entries()
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            let li = document.create_element("li").ok()?;
            _ = li.set_attribute("data-index", &i.to_string());
            li.set_text_content(Some(&entry.metadata.title));
            parent.append_child(&li).ok()?;
            Some(li)
        })
        .collect()
}

impl OverlayPresenter for DomOverlay {
    fn current_changed(&mut self, index: usize, entry: &CatalogEntry) {
        log::info!("[overlay] current {} ({})", index, entry.id);
        dom::set_text(&self.document, TITLE_ID, &entry.metadata.title);
        dom::set_text(&self.document, COUNTER_ID, &counter_label(index, self.count));
        dom::set_text(
            &self.document,
            CATEGORY_ID,
            entry.metadata.category.label(),
        );
        for (i, el) in self.list_items.iter().enumerate() {
            dom::toggle_class(el, CURRENT_CLASS, i == index);
        }
    }

    fn detail_visibility_changed(
        &mut self,
        visible: bool,
        index: usize,
        detail: &DetailContent<'_>,
    ) {
        log::info!("[overlay] detail {} visible={}", index, visible);
        if visible {
            self.fill_detail(detail);
        }
        if let Some(el) = self.document.get_element_by_id(DETAIL_ID) {
            dom::set_hidden(&el, !visible);
        }
        if let Some(body) = self.document.body() {
            dom::toggle_class(&body, DETAIL_OPEN_CLASS, visible);
        }
    }

    fn loader_finished(&mut self) {
        if let Some(el) = self.document.get_element_by_id(LOADER_ID) {
            dom::set_hidden(&el, true);
        }
    }
}
