//! Drives a `TableView` the way a host toolkit adapter would, printing each
//! query and notification.
//!
//! Run with: cargo run -p horizon-tableview --example host_walkthrough

use std::sync::Arc;

use horizon_tableview::prelude::*;

#[derive(Default)]
struct PlanCell {
    tapped: bool,
    identifier: Option<Identifier>,
}

impl Cell for PlanCell {
    fn as_selectable_mut(&mut self) -> Option<&mut dyn SelectableCell> {
        Some(self)
    }
}

impl SelectableCell for PlanCell {
    fn is_tapped(&self) -> bool {
        self.tapped
    }

    fn set_tapped(&mut self, tapped: bool) {
        self.tapped = tapped;
    }

    fn identifier(&self) -> Option<&Identifier> {
        self.identifier.as_ref()
    }

    fn set_identifier(&mut self, identifier: Identifier) {
        self.identifier = Some(identifier);
    }
}

impl CellType for PlanCell {
    fn create() -> Self {
        Self::default()
    }
}

fn plan(name: &str, kind: &str, year: i64) -> Arc<dyn ModelItem> {
    Arc::new(
        BasicItem::new(name, CellDescriptor::of::<PlanCell>(56.0))
            .with_primary(kind)
            .with_secondary(year),
    )
}

fn dump(view: &mut TableView) {
    for section in 0..view.number_of_sections() {
        if let Some(header) = view.header_for_section(section) {
            println!("[{}] (height {})", header.text, view.header_height(section));
        }
        for row in 0..view.number_of_rows(section) {
            let path = RowPath::new(section, row);
            let tapped = view
                .cell_for_row(path)
                .handle()
                .and_then(|h| h.lock().as_selectable_mut().map(|c| c.is_tapped()))
                .unwrap_or(false);
            println!("  {path} {}", if tapped { "(selected)" } else { "" });
        }
    }
}

fn main() -> horizon_tableview::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("horizon_tableview=debug")
        .init();

    let config = TableViewConfig::from_toml_str(
        r#"
        show_selection = true
        default_section_height = 32.0
        "#,
    )?;

    let sections = vec![
        config.label_builder("Home").build(vec![
            plan("Fiber 1000", "fixed", 2024),
            plan("DSL 100", "fixed", 2021),
        ]),
        config.label_builder("Mobile").build(vec![
            plan("Unlimited", "mobile", 2024),
            plan("Prepaid", "mobile", 2022),
        ]),
    ];

    let mut view = TableView::new(config, sections, [CellRegistration::of::<PlanCell>()]);
    view.reload_requested.connect(|_| println!("-> reload"));
    view.row_selected.connect(|item| println!("-> selected item {}", item.key()));

    dump(&mut view);
    view.did_select_row(RowPath::new(1, 0));
    dump(&mut view);

    view.filter_by_secondary(&FilterValue::from(2024));
    dump(&mut view);

    view.show_all();
    dump(&mut view);
    Ok(())
}
