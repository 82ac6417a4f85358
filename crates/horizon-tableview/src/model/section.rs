//! Sections: labelled groups of model items.

use std::fmt;
use std::sync::Arc;

use super::item::ModelItem;

/// Default header height for sections built without an explicit height.
pub const DEFAULT_SECTION_HEIGHT: f32 = 40.0;

/// Default point size for section label fonts.
pub const DEFAULT_LABEL_FONT_SIZE: f32 = 17.0;

/// Builder carrying a section's label configuration.
///
/// # Example
///
/// ```
/// use horizon_tableview::model::SectionLabelBuilder;
///
/// let label = SectionLabelBuilder::new("Mobile plans", 15.0, 32.0)
///     .with_font_name("Inter-SemiBold");
/// assert_eq!(label.text(), "Mobile plans");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLabelBuilder {
    text: String,
    font_name: String,
    font_size: f32,
    height: f32,
}

impl Default for SectionLabelBuilder {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_name: String::new(),
            font_size: DEFAULT_LABEL_FONT_SIZE,
            height: DEFAULT_SECTION_HEIGHT,
        }
    }
}

impl SectionLabelBuilder {
    /// Creates a label configuration. The font name defaults to empty,
    /// meaning the host's default font.
    pub fn new(text: impl Into<String>, font_size: f32, height: f32) -> Self {
        Self {
            text: text.into(),
            font_name: String::new(),
            font_size,
            height,
        }
    }

    /// Sets the font name using builder pattern.
    pub fn with_font_name(mut self, font_name: impl Into<String>) -> Self {
        self.font_name = font_name.into();
        self
    }

    /// The label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The header height.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Builds a section holding `items`.
    pub fn build(self, items: Vec<Arc<dyn ModelItem>>) -> Section {
        Section::new(self, items)
    }
}

/// Font used by a section header.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionFont {
    /// Font family name; empty means the host default.
    pub name: String,
    /// Point size.
    pub size: f32,
}

/// Describes a header for the host to render.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionHeader {
    /// The text to display, already indented.
    pub text: String,
    /// The header font.
    pub font: SectionFont,
    /// The header height.
    pub height: f32,
}

/// A labelled group of model items.
#[derive(Clone)]
pub struct Section {
    label: String,
    label_height: f32,
    font: SectionFont,
    items: Vec<Arc<dyn ModelItem>>,
}

impl Section {
    /// Creates a section from a label configuration and its items.
    pub fn new(label: SectionLabelBuilder, items: Vec<Arc<dyn ModelItem>>) -> Self {
        Self {
            label: label.text,
            label_height: label.height,
            font: SectionFont {
                name: label.font_name,
                size: label.font_size,
            },
            items,
        }
    }

    /// Creates an unlabelled section.
    pub fn unlabelled(items: Vec<Arc<dyn ModelItem>>) -> Self {
        Self::new(SectionLabelBuilder::default(), items)
    }

    /// The label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The configured header height. Only meaningful when the label is set.
    pub fn label_height(&self) -> f32 {
        self.label_height
    }

    /// The header font.
    pub fn font(&self) -> &SectionFont {
        &self.font
    }

    /// Returns `true` if the label is non-empty.
    pub fn has_label(&self) -> bool {
        !self.label.is_empty()
    }

    /// The items in display order.
    pub fn items(&self) -> &[Arc<dyn ModelItem>] {
        &self.items
    }

    /// Builds the header descriptor, or `None` for an unlabelled section.
    pub fn header(&self) -> Option<SectionHeader> {
        if !self.has_label() {
            return None;
        }
        Some(SectionHeader {
            text: format!("   {}", self.label),
            font: self.font.clone(),
            height: self.label_height,
        })
    }

    /// Returns a copy of this section keeping only the items that pass
    /// `predicate`. Label and font are preserved.
    pub(crate) fn retain_copy<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&dyn ModelItem) -> bool,
    {
        Self {
            label: self.label.clone(),
            label_height: self.label_height,
            font: self.font.clone(),
            items: self
                .items
                .iter()
                .filter(|item| predicate(Arc::as_ref(item)))
                .cloned()
                .collect(),
        }
    }
}

impl fmt::Debug for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section")
            .field("label", &self.label)
            .field("label_height", &self.label_height)
            .field("items", &self.items.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BasicItem, CellDescriptor};

    fn items(n: usize) -> Vec<Arc<dyn ModelItem>> {
        (0..n)
            .map(|i| {
                Arc::new(BasicItem::new(format!("item {i}"), CellDescriptor::new("Cell", 44.0)))
                    as Arc<dyn ModelItem>
            })
            .collect()
    }

    #[test]
    fn test_builder_defaults() {
        let label = SectionLabelBuilder::default();
        assert_eq!(label.text(), "");
        assert_eq!(label.height(), DEFAULT_SECTION_HEIGHT);
    }

    #[test]
    fn test_header_is_indented() {
        let section = SectionLabelBuilder::new("Roaming", 14.0, 28.0)
            .with_font_name("Inter")
            .build(items(2));

        let header = section.header().expect("labelled section has a header");
        assert_eq!(header.text, "   Roaming");
        assert_eq!(header.height, 28.0);
        assert_eq!(header.font, SectionFont { name: "Inter".into(), size: 14.0 });
        assert_eq!(section.items().len(), 2);
    }

    #[test]
    fn test_unlabelled_section_has_no_header() {
        let section = Section::unlabelled(items(1));
        assert!(!section.has_label());
        assert!(section.header().is_none());
    }

    #[test]
    fn test_retain_copy_shares_items() {
        let section = SectionLabelBuilder::new("All", 14.0, 30.0).build(items(3));
        let copy = section.retain_copy(|item| item.key() != "item 1");

        assert_eq!(copy.label(), "All");
        assert_eq!(copy.items().len(), 2);
        assert!(Arc::ptr_eq(&copy.items()[0], &section.items()[0]));
    }
}
