use precio_justo::domain::{
    AppState, BusinessType, CalcStep, ChannelConfig, ChannelCostEvaluator, Employee,
    FixedCostAllocator, FixedPointSolver, Industry, LaborConfig, LaborEstimator, ListingTier,
    MaterialsLedger, PricingSession, RateTables, RatesSource, ReportSnapshot, SoloLabor,
    StrategyChoice, TaxProfile, TeamLabor, ViewState,
};

fn close(actual: f64, expected: f64, tolerance: f64) -> bool {
    (actual - expected).abs() < tolerance
}

fn bakery_session() -> PricingSession {
    let mut session = PricingSession::blank(RateTables::default());
    session.materials.add("Harina", 3_000.0).unwrap();
    session.materials.add("Caja", 1_000.0).unwrap();
    session.fixed.add("Alquiler", 40_000.0).unwrap();
    session.set_business_type(BusinessType::Solo);
    session
}

#[test]
fn solo_marketplace_quote_end_to_end() {
    let quote = bakery_session().quote();

    assert_eq!(quote.materials_total, 4_000.0);
    assert!(close(quote.labor_cost_per_unit, 1_984.13, 0.01));
    assert_eq!(quote.fixed_cost_per_unit, 400.0);
    assert!(close(quote.candidate_price, 11_968.25, 0.01));
    // 14% commission + low-ticket fee + 3.5% Buenos Aires withholding
    assert!(close(quote.channel_cost, 3_594.44, 0.01));
    assert!(close(quote.total_cost, 9_978.57, 0.01));
    assert!(close(quote.suggested_price, 12_972.14, 0.01));
    assert!(close(quote.profit, quote.suggested_price - quote.total_cost, 1e-6));
}

#[test]
fn materials_total_is_exact_sum() {
    let mut ledger = MaterialsLedger::new();
    let costs = [0.25, 1_200.0, 350.5, 0.0, 99.75];
    for (idx, cost) in costs.iter().enumerate() {
        ledger.add(format!("Insumo {idx}"), *cost).unwrap();
    }
    assert_eq!(ledger.total(), costs.iter().sum::<f64>());

    assert!(!ledger.remove(uuid::Uuid::new_v4()));
    assert_eq!(ledger.items().len(), costs.len());
}

#[test]
fn team_labor_with_one_formal_employee() {
    let estimator = LaborEstimator::new(RateTables::default().labor);
    let team = TeamLabor {
        roster: vec![Employee::formal("Vendedor", 950_000.0).unwrap()],
        minutes_per_unit: 30.0,
    };

    assert_eq!(estimator.monthly_employer_cost(&team.roster[0]), 1_282_500.0);
    assert!(close(estimator.team_cost_per_unit(&team), 4_007.8125, 1e-9));
    assert!(close(
        estimator.cost_per_unit(&LaborConfig::Team(team)),
        4_007.81,
        0.01
    ));
}

#[test]
fn fixed_costs_spread_over_units() {
    let mut fixed = FixedCostAllocator::empty(100);
    fixed.add("Alquiler", 25_000.0).unwrap();
    fixed.add("Servicios", 15_000.0).unwrap();
    assert_eq!(fixed.cost_per_unit(), 400.0);

    fixed.set_expected_units(0);
    assert_eq!(fixed.cost_per_unit(), 0.0);
}

#[test]
fn marketplace_fee_examples() {
    let evaluator = ChannelCostEvaluator::new(RateTables::default());
    let config = ChannelConfig::Marketplace {
        tier: ListingTier::Standard,
        free_shipping: false,
        tax: TaxProfile {
            province: "ba".to_string(),
            simplified_regime: false,
        },
    };

    let mid = evaluator.evaluate(&config, 20_000.0);
    assert_eq!(mid.commission, 2_800.0);
    assert_eq!(mid.low_ticket_surcharge, 0.0);
    assert_eq!(mid.shipping, 0.0);
    assert_eq!(mid.tax_withholding, 700.0);
    assert_eq!(mid.total(), 3_500.0);

    let boundary = evaluator.evaluate(&config, 30_000.0);
    assert_eq!(boundary.shipping, 6_500.0);
}

#[test]
fn recomputation_is_pure() {
    let session = bakery_session();
    let first = session.quote();
    let second = session.quote();
    assert_eq!(first.total_cost.to_bits(), second.total_cost.to_bits());
    assert_eq!(first.suggested_price.to_bits(), second.suggested_price.to_bits());
}

#[test]
fn zero_markup_sells_at_cost() {
    let mut session = bakery_session();
    session.set_markup(0.0);
    let quote = session.quote();
    assert_eq!(quote.profit, 0.0);
    assert_eq!(quote.suggested_price, quote.total_cost);
}

#[test]
fn fixed_point_price_covers_its_own_fees() {
    let mut session = bakery_session();
    session.strategy = StrategyChoice::FixedPoint(FixedPointSolver::default());
    let quote = session.quote();

    let evaluator = session.channel_evaluator();
    let fees = evaluator.evaluate(&session.channel, quote.candidate_price).total();
    let base = quote.materials_total + quote.labor_cost_per_unit + quote.fixed_cost_per_unit;
    let expected = (base + fees) * (1.0 + session.markup_pct / 100.0);
    assert!(close(quote.candidate_price, expected, 0.05));
}

#[test]
fn fixed_point_near_low_ticket_threshold_covers_fees() {
    // Base 8000 with markup 30% falls between both sides of the 15000
    // low-ticket threshold, so no price reproduces itself.
    let mut session = PricingSession::blank(RateTables::default());
    session.materials.add("Tela", 8_000.0).unwrap();
    session.labor = LaborConfig::Solo(SoloLabor {
        active: false,
        ..SoloLabor::default()
    });
    session.strategy = StrategyChoice::FixedPoint(FixedPointSolver::default());
    let quote = session.quote();

    assert!(!quote.converged);
    assert_eq!(quote.iterations, 64);
    assert!(quote.suggested_price >= 15_000.0);
    let fees_at_suggested = session
        .channel_evaluator()
        .evaluate(&session.channel, quote.suggested_price)
        .total();
    assert!(fees_at_suggested <= quote.channel_cost + 1.0);
    assert!(quote.profit >= 0.0);
}

#[test]
fn fixed_point_reports_convergence() {
    let mut session = bakery_session();
    session.strategy = StrategyChoice::FixedPoint(FixedPointSolver::default());
    let quote = session.quote();
    assert!(quote.converged);
    assert!(quote.iterations > 0);
}

#[test]
fn hand_built_negative_labor_never_lowers_total_cost() {
    let mut session = PricingSession::blank(RateTables::default());
    session.materials.add("Insumo", 1_000.0).unwrap();
    session.labor = LaborConfig::Solo(SoloLabor {
        monthly_salary: -5_000_000.0,
        ..SoloLabor::default()
    });
    let quote = session.quote();

    assert_eq!(quote.labor_cost_per_unit, 0.0);
    assert!(quote.total_cost >= quote.materials_total);
    assert!(quote.suggested_price >= quote.total_cost);
}

#[test]
fn finalizing_reprices_channel_at_suggested_price() {
    let mut session = bakery_session();
    let first = session.finalize();
    let second = session.quote();
    assert_eq!(second.candidate_price, first.suggested_price);
    assert!(second.channel_cost > first.channel_cost);
}

#[test]
fn wizard_drives_team_session() {
    let mut state = AppState::with_tables(RateTables::default(), RatesSource::BuiltIn);
    state.wizard.start();
    state.choose_business(BusinessType::Team);
    state.wizard.choose_industry(Industry::Gastro);
    assert_eq!(state.wizard.view, ViewState::Calculator(CalcStep::Materials));
    assert!(matches!(state.session.labor, LaborConfig::Team(_)));

    for _ in CalcStep::ALL {
        state.wizard.next();
    }
    assert_eq!(state.wizard.step(), Some(CalcStep::FinalPrice));

    state.restart();
    assert_eq!(state.wizard.view, ViewState::Welcome);
}

#[test]
fn report_export_round_trip() {
    let mut session = bakery_session();
    session.product_name = "Budín".to_string();
    let quote = session.quote();
    let snapshot = ReportSnapshot::capture(&session, &quote);

    let dir = tempfile::tempdir().unwrap();
    let path = precio_justo::util::export::export_report(&snapshot, Some(dir.path())).unwrap();
    let text = std::fs::read_to_string(path).unwrap();
    assert!(text.contains("Producto: Budín"));
    assert!(text.contains("COSTO TOTAL REAL"));
    assert!(text.contains(&precio_justo::util::format::format_ars(quote.suggested_price)));
}
