//! "Am I paid fairly?" check against union reference salaries.

use serde::{Deserialize, Serialize};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use super::error::{non_negative, PricingError, PricingResult};
use super::rates::RateTables;

/// Width of the "in line" band around the reference, as a fraction.
pub const SALARY_BAND: f64 = 0.10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryVerdict {
    Below,
    InLine,
    Above,
}

impl SalaryVerdict {
    pub fn headline(&self) -> &'static str {
        match self {
            SalaryVerdict::Below => "Estás cobrando menos de lo debido",
            SalaryVerdict::InLine => "Tu sueldo está en regla",
            SalaryVerdict::Above => "¡Excelente! Ganás más del promedio",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryCheckInput {
    pub job_title: String,
    pub gross: f64,
    pub net: f64,
    pub category: String,
}

/// What a completed check would hand to a lead database.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SalaryCapture {
    pub job_title: String,
    pub gross: f64,
    pub net: f64,
    pub category_label: String,
    /// Rounded to two decimals.
    pub diff_pct: String,
    pub captured_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SalaryCheck {
    pub verdict: SalaryVerdict,
    pub reference: f64,
    pub diff_pct: f64,
    pub capture: SalaryCapture,
}

impl SalaryCheck {
    pub fn detail(&self, format_money: impl Fn(f64) -> String) -> String {
        let reference = format_money(self.reference);
        match self.verdict {
            SalaryVerdict::Below => format!(
                "Según tu categoría, deberías estar cobrando aproximadamente {reference} en mano. Estás un {:.1}% abajo del convenio.",
                self.diff_pct.abs()
            ),
            SalaryVerdict::InLine => {
                format!("Tu sueldo coincide con el convenio colectivo ({reference} aprox).")
            }
            SalaryVerdict::Above => format!(
                "Estás cobrando un {:.1}% por encima del convenio básico. ¡Cuidá ese trabajo!",
                self.diff_pct
            ),
        }
    }
}

pub fn classify(net: f64, reference: f64) -> SalaryVerdict {
    if net < reference * (1.0 - SALARY_BAND) {
        SalaryVerdict::Below
    } else if net > reference * (1.0 + SALARY_BAND) {
        SalaryVerdict::Above
    } else {
        SalaryVerdict::InLine
    }
}

/// Compares the net salary with the category reference. Job title, a positive
/// net amount and a known category are all required.
pub fn check_salary(tables: &RateTables, input: &SalaryCheckInput) -> PricingResult<SalaryCheck> {
    if input.job_title.trim().is_empty() {
        return Err(PricingError::MissingSelection("job title".to_string()));
    }
    let net = non_negative("net", input.net)?;
    if net == 0.0 {
        return Err(PricingError::MissingSelection("net salary".to_string()));
    }
    let gross = non_negative("gross", input.gross)?;
    let reference = tables
        .salary_reference(&input.category)
        .ok_or_else(|| PricingError::MissingSelection("salary category".to_string()))?;

    let diff_pct = (net - reference.amount) / reference.amount * 100.0;
    let verdict = classify(net, reference.amount);

    let capture = SalaryCapture {
        job_title: input.job_title.trim().to_string(),
        gross,
        net,
        category_label: reference.label.clone(),
        diff_pct: format!("{diff_pct:.2}"),
        captured_at: OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default(),
    };
    tracing::info!(
        target: "salary",
        job_title = %capture.job_title,
        category = %capture.category_label,
        diff_pct = %capture.diff_pct,
        "salary check captured"
    );

    Ok(SalaryCheck {
        verdict,
        reference: reference.amount,
        diff_pct,
        capture,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(net: f64, category: &str) -> SalaryCheckInput {
        SalaryCheckInput {
            job_title: "Vendedor".to_string(),
            gross: net * 1.2,
            net,
            category: category.to_string(),
        }
    }

    #[test]
    fn band_edges_are_in_line() {
        assert_eq!(classify(855_000.0, 950_000.0), SalaryVerdict::InLine);
        assert_eq!(classify(1_045_000.0, 950_000.0), SalaryVerdict::InLine);
        assert_eq!(classify(854_999.0, 950_000.0), SalaryVerdict::Below);
        assert_eq!(classify(1_045_001.0, 950_000.0), SalaryVerdict::Above);
    }

    #[test]
    fn below_reference() {
        let tables = RateTables::default();
        let check = check_salary(&tables, &input(760_000.0, "comercio_admin_a")).unwrap();
        assert_eq!(check.verdict, SalaryVerdict::Below);
        assert!((check.diff_pct + 20.0).abs() < 1e-9);
        assert_eq!(check.capture.diff_pct, "-20.00");
        assert_eq!(check.capture.category_label, "Comercio - Administrativo A");
        assert!(check.detail(|v| format!("{v:.0}")).contains("20.0% abajo"));
    }

    #[test]
    fn above_reference() {
        let tables = RateTables::default();
        let check = check_salary(&tables, &input(1_320_000.0, "uocra_oficial")).unwrap();
        assert_eq!(check.verdict, SalaryVerdict::Above);
        assert!((check.diff_pct - 20.0).abs() < 1e-9);
    }

    #[test]
    fn requires_all_fields() {
        let tables = RateTables::default();
        let mut missing_title = input(900_000.0, "comercio_admin_a");
        missing_title.job_title = "   ".to_string();
        assert!(matches!(
            check_salary(&tables, &missing_title),
            Err(PricingError::MissingSelection(_))
        ));
        assert!(matches!(
            check_salary(&tables, &input(0.0, "comercio_admin_a")),
            Err(PricingError::MissingSelection(_))
        ));
        assert!(matches!(
            check_salary(&tables, &input(900_000.0, "")),
            Err(PricingError::MissingSelection(_))
        ));
        assert!(matches!(
            check_salary(&tables, &input(-5.0, "comercio_admin_a")),
            Err(PricingError::InvalidInput { field: "net", .. })
        ));
    }
}
