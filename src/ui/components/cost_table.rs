use dioxus::prelude::*;

use crate::domain::{ReportRow, ReportSnapshot};
use crate::util::format::{format_ars, format_ars_cents};

#[component]
pub fn CostTable(snapshot: ReportSnapshot) -> Element {
    let rows = snapshot.rows();

    rsx! {
        table { class: "cost-table",
            tbody {
                for row in rows {
                    match row {
                        ReportRow::Item { concept, amount } => rsx! {
                            tr {
                                td { "{concept}" }
                                td { class: "amount", "{format_ars_cents(amount)}" }
                            }
                        },
                        ReportRow::Spacer => rsx! {
                            tr { class: "spacer", td { colspan: "2" } }
                        },
                        ReportRow::Total { concept, amount } => rsx! {
                            tr { class: "total",
                                td { "{concept}" }
                                td { class: "amount", "{format_ars(amount)}" }
                            }
                        },
                    }
                }
            }
        }
    }
}
