use anyhow::Result;
use css_isolation_grid::{
    DefaultsProvider, FormattedLength, Grid, GridConfig, GridError, GridOverrides, SettingsStore,
    distribute_equal_width, global, position, width,
};
use css_values_units::{CalcNode, Length, LengthUnit, Percentage};
use cssparser::ToCss;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn half_width_on_percentage_gutter() -> Result<()> {
    init_logging();
    let config = GridConfig::new(12, "2%".parse()?, "2%".parse()?)?;
    let result = width(6.0, &config);
    assert_eq!(result, FormattedLength::Single(Length::percent(49.0)));
    Ok(())
}

#[test]
fn quarter_offset_on_rem_gutter() -> Result<()> {
    init_logging();
    let config = GridConfig::new(12, "1rem".parse()?, "2%".parse()?)?;
    let FormattedLength::WithFallback {
        fallback,
        expression,
    } = position(3.0, &config)
    else {
        anyhow::bail!("rem gutter must emit a fallback");
    };
    assert_eq!(fallback, Length::percent(25.5));
    assert_eq!(expression.to_css_string(), "calc((100% + 1rem) * 0.25)");
    assert_eq!(
        expression,
        CalcNode::product(
            CalcNode::sum(Length::percent(100.0).into(), Length::rem(1.0).into()),
            CalcNode::Number(0.25)
        )
    );
    Ok(())
}

#[test]
fn three_cells_per_row() -> Result<()> {
    init_logging();
    let overrides = GridOverrides::from_json(r#"{"columns": 12}"#)?;
    let config = overrides.apply(&GridConfig::default());
    let dist = distribute_equal_width(3, &config)?;

    assert_eq!(dist.rules.len(), 3);
    let summary: Vec<(u32, String, bool)> = dist
        .rules
        .iter()
        .map(|rule| (rule.pattern.phase, rule.position.literal().to_css_string(), rule.clear))
        .collect();
    assert_eq!(
        summary,
        [
            (1, "0%".to_owned(), true),
            (2, "34%".to_owned(), false),
            (3, "68%".to_owned(), false),
        ]
    );
    assert_eq!(dist.rules[1].position.values()[1], "calc((100% + 1rem) * 0.3333333333)");
    Ok(())
}

#[test]
fn unknown_setting_is_rejected_both_ways() {
    init_logging();
    let store = SettingsStore::default();
    let before = store.defaults();

    let set = store.set_default("margin", "1rem");
    assert!(matches!(set, Err(GridError::UnknownSetting(ref name)) if name == "margin"));
    assert_eq!(store.defaults(), before);

    let get = Grid::new(&store).setting("margin");
    assert!(matches!(get, Err(GridError::UnknownSetting(_))));
    assert_eq!(
        set.err().map(|err| err.to_string()).unwrap_or_default(),
        "grid setting `margin` does not exist"
    );
}

#[test]
fn full_span_is_exactly_full_width() -> Result<()> {
    init_logging();
    for gutter in ["0%", "2%", "5.5%", "1rem", "24px", "0.75em"] {
        let config = GridConfig::new(16, gutter.parse()?, Percentage(3.0))?;
        let full = width(16.0, &config).literal();
        assert_eq!(full.unit, LengthUnit::Percent);
        assert!((full.value - 100.0).abs() < 1e-9, "gutter {gutter}: {full:?}");
    }
    Ok(())
}

#[test]
fn spans_summing_to_the_grid_cover_the_row() -> Result<()> {
    init_logging();
    // Gutter terms aside, the fractions of adjacent cells add up to the row.
    let config = GridConfig::new(12, Length::percent(0.0), Percentage(0.0))?;
    let total: f64 = [2.0, 3.5, 6.5]
        .into_iter()
        .map(|span| width(span, &config).literal().value)
        .sum();
    assert!((total - 100.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn stylesheet_keeps_fallback_before_calc() -> Result<()> {
    init_logging();
    let fixed = GridConfig::default();
    let sheet = Grid::new(&fixed).distribute_stylesheet(".cards > *", 4)?;
    let css = sheet.to_css_string();

    assert_eq!(sheet.rules.len(), 5);
    let fallback = css.find("width: 23.5%;");
    let calc = css.find("width: calc((100% + 1rem) * 0.25 - 1rem);");
    assert!(fallback.is_some() && calc.is_some());
    assert!(fallback < calc);
    assert!(css.contains(".cards > *:nth-child(4n + 1) {\n  margin-left: 0%;"));
    assert!(css.contains("  clear: both;\n}"));
    assert_eq!(css.matches("clear: both;").count(), 1);
    assert_eq!(css.matches("clear: none;").count(), 3);
    Ok(())
}

#[test]
fn global_defaults_roundtrip() -> Result<()> {
    init_logging();
    let grid = Grid::from_global();
    global().set_default("columns", "16")?;
    assert_eq!(grid.config().columns.get(), 16);
    assert_eq!(grid.width(8.0).literal(), Length::percent(49.0));

    let pinned = grid.with_overrides(GridOverrides::from_json(r#"{"columns": 12}"#)?);
    assert_eq!(pinned.config().columns.get(), 12);

    global().reset();
    assert_eq!(grid.config(), GridConfig::default());
    Ok(())
}
