use dioxus::prelude::*;

use crate::domain::{BulkCells, BulkRowView};

const COLUMNS: [&str; 9] = [
    "Brand",
    "Model",
    "Condition",
    "Buy Price",
    "Max Profit",
    "Quick Sale",
    "Expected Sale",
    "Time to Sell",
    "Details",
];

#[component]
pub fn BulkTable(rows: Vec<BulkRowView>) -> Element {
    let count = rows.len();
    let failed = rows
        .iter()
        .filter(|row| matches!(row.cells, BulkCells::Error(_)))
        .count();

    rsx! {
        section { class: "results",
            header { class: "table-header",
                h3 { "Bulk Results" }
                span { class: "muted", "{count} items, {failed} failed" }
            }
            table { class: "bulk-table",
                thead {
                    tr {
                        for column in COLUMNS {
                            th { "{column}" }
                        }
                    }
                }
                tbody {
                    for row in rows {
                        BulkRow { row }
                    }
                }
            }
        }
    }
}

#[component]
fn BulkRow(row: BulkRowView) -> Element {
    rsx! {
        tr {
            td { "{row.brand}" }
            td { "{row.model}" }
            td { "{row.condition}" }
            match row.cells {
                BulkCells::Error(message) => rsx! {
                    td { colspan: "5", class: "error-cell", "{message}" }
                },
                BulkCells::Prices(cells) => rsx! {
                    for cell in cells {
                        td { "{cell}" }
                    }
                },
            }
            td { "{row.details}" }
        }
    }
}
