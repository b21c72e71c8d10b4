//! Responsive wrapping, click-to-sort headers, and row selection sync.

use super::UiController;
use crate::app::dom;
use crate::core::error::UiError;
use crate::core::table::{
    SORT_ASC_CLASS, SORT_DESC_CLASS, SelectionState, SortDirection, SortKey, sort_order,
};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, Node};

const TABLE_SELECTOR: &str = ".table";
const CONTAINER_SELECTOR: &str = ".table-container";
const SORTABLE_SELECTOR: &str = "th[data-sortable]";
const HEADER_CHECKBOX: &str = r#"thead input[type="checkbox"]"#;
const ROW_CHECKBOXES: &str = r#"tbody input[type="checkbox"]"#;
const SELECTED_CLASS: &str = "selected";

impl UiController {
    pub(super) fn bind_tables(self: &Rc<Self>) {
        for table in dom::query_all(&self.document, TABLE_SELECTOR) {
            dom::log_result(wrap_table(&self.document, &table));
            self.bind_sorting(&table);
            self.bind_row_selection(&table);
        }
    }

    fn bind_sorting(self: &Rc<Self>, table: &Element) {
        for header in dom::query_all_in(table, SORTABLE_SELECTOR) {
            dom::log_result(dom::set_style(&header, "cursor", "pointer"));
            let table = table.clone();
            let target = header.clone();
            self.on(&header, "click", move |_controller, _event| {
                sort_table(&table, &target);
            });
        }
    }

    fn bind_row_selection(self: &Rc<Self>, table: &Element) {
        let Some(select_all) = dom::query_in(table, HEADER_CHECKBOX)
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let rows = row_checkboxes(table);
        if rows.is_empty() {
            return;
        }

        {
            let header = select_all.clone();
            let rows = rows.clone();
            self.on(&select_all, "change", move |_controller, _event| {
                for checkbox in &rows {
                    checkbox.set_checked(header.checked());
                    mark_row(checkbox);
                }
            });
        }
        for checkbox in &rows {
            let table = table.clone();
            let target = checkbox.clone();
            self.on(checkbox, "change", move |_controller, _event| {
                mark_row(&target);
                sync_select_all(&table);
            });
        }
    }
}

fn wrap_table(document: &Document, table: &Element) -> Result<(), UiError> {
    if dom::closest(table, CONTAINER_SELECTOR).is_some() {
        return Ok(());
    }
    let Some(parent) = table.parent_node() else {
        return Ok(());
    };
    let container = document
        .create_element("div")
        .map_err(|err| UiError::js("createElement", err))?;
    container.set_class_name("table-container");
    let anchor: &Node = table;
    parent
        .insert_before(&container, Some(anchor))
        .map_err(|err| UiError::js("insertBefore", err))?;
    container
        .append_child(table)
        .map_err(|err| UiError::js("appendChild", err))?;
    Ok(())
}

fn column_index(header: &Element) -> Option<u32> {
    let node: &Node = header;
    let siblings = header.parent_element()?.children();
    (0..siblings.length()).find(|&idx| {
        siblings
            .item(idx)
            .is_some_and(|child| child.is_same_node(Some(node)))
    })
}

fn cell_key(row: &Element, column: u32) -> SortKey {
    let text = row
        .children()
        .item(column)
        .and_then(|cell| cell.text_content())
        .unwrap_or_default();
    SortKey::from_cell(&text)
}

fn sort_table(table: &Element, header: &Element) {
    let Some(body) = dom::query_in(table, "tbody") else {
        return;
    };
    let Some(column) = column_index(header) else {
        return;
    };
    let direction = SortDirection::next(dom::has_class(header, SORT_ASC_CLASS));

    for th in dom::query_all_in(table, "th") {
        dom::log_result(dom::remove_class(&th, SORT_ASC_CLASS));
        dom::log_result(dom::remove_class(&th, SORT_DESC_CLASS));
    }
    dom::log_result(dom::add_class(header, direction.class()));

    let rows = dom::query_all_in(&body, "tr");
    let keys: Vec<SortKey> = rows.iter().map(|row| cell_key(row, column)).collect();
    for idx in sort_order(&keys, direction) {
        if let Err(err) = body.append_child(&rows[idx]) {
            dom::log_error(&UiError::js("appendChild", err));
        }
    }
}

fn row_checkboxes(table: &Element) -> Vec<HtmlInputElement> {
    dom::query_all_in(table, ROW_CHECKBOXES)
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlInputElement>().ok())
        .collect()
}

fn mark_row(checkbox: &HtmlInputElement) {
    if let Some(row) = dom::closest(checkbox, "tr") {
        dom::log_result(dom::set_class(&row, SELECTED_CLASS, checkbox.checked()));
    }
}

fn sync_select_all(table: &Element) {
    let Some(select_all) = dom::query_in(table, HEADER_CHECKBOX)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    let rows = row_checkboxes(table);
    let checked = rows.iter().filter(|checkbox| checkbox.checked()).count();
    let (is_checked, indeterminate) =
        SelectionState::from_counts(checked, rows.len()).header_flags();
    select_all.set_checked(is_checked);
    select_all.set_indeterminate(indeterminate);
}
