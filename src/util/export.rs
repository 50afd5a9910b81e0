//! Writes the cost analysis of a priced product to disk.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{ReportRow, ReportSnapshot};
use crate::util::format::{format_ars, format_ars_cents};
use crate::util::persistence::{reports_dir, StorageError};
use crate::util::version::APP_NAME;

pub const REPORT_STEM: &str = "Analisis_de_Costos";
const TABLE_WIDTH: usize = 44;

/// Plain-text rendition: header, suggested price block, cost table, footer.
pub fn render_text(snapshot: &ReportSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ANÁLISIS DE COSTOS");
    if let Some(name) = &snapshot.product_name {
        let _ = writeln!(out, "Producto: {name}");
    }
    let _ = writeln!(out, "Fecha: {}", snapshot.generated_on);
    out.push('\n');

    let _ = writeln!(
        out,
        "PRECIO DE VENTA SUGERIDO: {}",
        format_ars(snapshot.suggested_price)
    );
    let _ = writeln!(out, "Ganancia por unidad: {}", format_ars(snapshot.profit));
    out.push('\n');

    push_row(&mut out, "Concepto", "Monto");
    out.push_str(&"-".repeat(TABLE_WIDTH));
    out.push('\n');
    for row in snapshot.rows() {
        match row {
            ReportRow::Item { concept, amount } => {
                push_row(&mut out, &concept, &format_ars_cents(amount))
            }
            ReportRow::Spacer => out.push('\n'),
            ReportRow::Total { concept, amount } => {
                out.push_str(&"=".repeat(TABLE_WIDTH));
                out.push('\n');
                push_row(&mut out, &concept, &format_ars(amount));
            }
        }
    }
    out.push('\n');
    let _ = writeln!(out, "Generado con {APP_NAME}");
    out
}

fn push_row(out: &mut String, concept: &str, amount: &str) {
    let pad = TABLE_WIDTH.saturating_sub(concept.chars().count() + amount.chars().count());
    let _ = writeln!(out, "{concept}{}{amount}", " ".repeat(pad.max(1)));
}

/// Writes `<stem>.txt` and `<stem>.json` into `dir`, or into the user data
/// directory when `dir` is `None`. Returns the text file path.
pub fn export_report(snapshot: &ReportSnapshot, dir: Option<&Path>) -> Result<PathBuf, StorageError> {
    let dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => reports_dir().ok_or(StorageError::StorageUnavailable)?,
    };
    fs::create_dir_all(&dir)?;

    let text_path = dir.join(format!("{REPORT_STEM}.txt"));
    fs::write(&text_path, render_text(snapshot))?;
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(dir.join(format!("{REPORT_STEM}.json")), json)?;

    tracing::info!(target: "report", path = %text_path.display(), "report exported");
    Ok(text_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PricingSession, RateTables};
    use time::macros::date;

    fn snapshot() -> ReportSnapshot {
        let mut session = PricingSession::blank(RateTables::default());
        session.product_name = "Torta".to_string();
        session.materials.add("Harina", 1_200.0).unwrap();
        session.materials.add("Huevos", 800.5).unwrap();
        let quote = session.quote();
        ReportSnapshot::capture_on(&session, &quote, date!(2025 - 11 - 02))
    }

    #[test]
    fn text_has_header_price_and_total() {
        let snapshot = snapshot();
        let text = render_text(&snapshot);
        assert!(text.starts_with("ANÁLISIS DE COSTOS\nProducto: Torta\nFecha: 02/11/2025\n"));
        assert!(text.contains(&format!(
            "PRECIO DE VENTA SUGERIDO: {}",
            format_ars(snapshot.suggested_price)
        )));
        let total_line = text
            .lines()
            .find(|line| line.starts_with("COSTO TOTAL REAL"))
            .unwrap();
        assert!(total_line.ends_with(&format_ars(snapshot.total_cost)));
        assert!(text.contains("Harina"));
    }

    #[test]
    fn line_items_keep_their_cents() {
        let text = render_text(&snapshot());
        let huevos = text.lines().find(|line| line.starts_with("Huevos")).unwrap();
        assert!(huevos.ends_with("$ 800,5"));
        let harina = text.lines().find(|line| line.starts_with("Harina")).unwrap();
        assert!(harina.ends_with("$ 1.200"));
    }

    #[test]
    fn export_writes_text_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = snapshot();
        let path = export_report(&snapshot, Some(dir.path())).unwrap();
        assert_eq!(path, dir.path().join("Analisis_de_Costos.txt"));

        let raw = fs::read_to_string(dir.path().join("Analisis_de_Costos.json")).unwrap();
        let parsed: ReportSnapshot = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
