//! Table view configuration.
//!
//! [`TableViewConfig`] can be built in code with the `with_*` setters or
//! loaded from TOML. Every field is optional in TOML and falls back to its
//! default.
//!
//! ```
//! use horizon_tableview::TableViewConfig;
//!
//! let config = TableViewConfig::from_toml_str(r#"
//!     show_selection = true
//!     default_section_height = 32.0
//! "#)?;
//! assert!(config.show_selection);
//! assert!(!config.all_selected);
//! # Ok::<(), horizon_tableview::Error>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{DEFAULT_LABEL_FONT_SIZE, DEFAULT_SECTION_HEIGHT, SectionLabelBuilder};

/// Behaviour switches and metrics for a [`TableView`](crate::TableView).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableViewConfig {
    /// Whether selectable cells show their selected state.
    pub show_selection: bool,
    /// Initial "show all" mode.
    pub all_selected: bool,
    /// Header height for sections created through the view.
    pub default_section_height: f32,
    /// Row height estimate passed to the host; 0 disables estimation.
    pub estimated_row_height: f32,
    /// Padding above section headers.
    pub section_header_top_padding: f32,
}

impl Default for TableViewConfig {
    fn default() -> Self {
        Self {
            show_selection: false,
            all_selected: false,
            default_section_height: DEFAULT_SECTION_HEIGHT,
            estimated_row_height: 0.0,
            section_header_top_padding: 0.0,
        }
    }
}

impl TableViewConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether selection visuals are shown.
    pub fn with_show_selection(mut self, show: bool) -> Self {
        self.show_selection = show;
        self
    }

    /// Sets the initial "show all" mode.
    pub fn with_all_selected(mut self, all_selected: bool) -> Self {
        self.all_selected = all_selected;
        self
    }

    /// Sets the default section header height.
    pub fn with_default_section_height(mut self, height: f32) -> Self {
        self.default_section_height = height;
        self
    }

    /// Sets the row height estimate.
    pub fn with_estimated_row_height(mut self, height: f32) -> Self {
        self.estimated_row_height = height;
        self
    }

    /// Sets the padding above section headers.
    pub fn with_section_header_top_padding(mut self, padding: f32) -> Self {
        self.section_header_top_padding = padding;
        self
    }

    /// A label builder using this configuration's section height and the
    /// default label font size.
    pub fn label_builder(&self, text: impl Into<String>) -> SectionLabelBuilder {
        SectionLabelBuilder::new(text, DEFAULT_LABEL_FONT_SIZE, self.default_section_height)
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses a TOML configuration file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&content)
    }
}
