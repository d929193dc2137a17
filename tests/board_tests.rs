use dealscope::{
    by_recent_activity, kanban_columns, Deal, DealFilter, DealId, InsuranceLine,
    QuarterlyPremiums, Salesperson, Stage,
};

use chrono::{TimeZone, Utc};
use im::Vector;

fn deal(account: &str, salesperson: Salesperson, stage: Stage, value: f64) -> Deal {
    let now = Utc::now();
    Deal {
        id: DealId::generate(),
        account_name: account.to_string(),
        salesperson,
        insurance_line: InsuranceLine::Incendio,
        stage,
        premiums: QuarterlyPremiums::new(value, 0.0, 0.0, 0.0),
        total_value: value,
        notes: String::new(),
        company: String::new(),
        created_at: now,
        last_modified_at: now,
    }
}

fn sample() -> Vector<Deal> {
    Vector::from(vec![
        deal("A", Salesperson::PoliMauro, Stage::ToVisit, 100.0),
        deal("B", Salesperson::PoliMauro, Stage::Won, 200.0),
        deal("C", Salesperson::DuranteLuca, Stage::ToVisit, 300.0),
        deal("D", Salesperson::DuranteLuca, Stage::Lost, 400.0),
    ])
}

#[test]
fn test_empty_filter_selects_everything() {
    let deals = sample();
    let filtered = DealFilter::default().apply(&deals);
    assert_eq!(filtered.len(), 4);
}

#[test]
fn test_filter_by_stage() {
    let deals = sample();
    let filter = DealFilter {
        stage: Some(Stage::ToVisit),
        salesperson: None,
    };
    let filtered = filter.apply(&deals);
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|deal| deal.stage == Stage::ToVisit));
}

#[test]
fn test_filter_by_salesperson() {
    let deals = sample();
    let filter = DealFilter {
        stage: None,
        salesperson: Some(Salesperson::DuranteLuca),
    };
    assert_eq!(filter.apply(&deals).len(), 2);
}

#[test]
fn test_filter_combines_both_fields() {
    let deals = sample();
    let filter = DealFilter {
        stage: Some(Stage::ToVisit),
        salesperson: Some(Salesperson::DuranteLuca),
    };
    let filtered = filter.apply(&deals);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered.front().unwrap().account_name, "C");
}

#[test]
fn test_filter_preserves_collection_order() {
    let deals = sample();
    let filter = DealFilter {
        stage: Some(Stage::ToVisit),
        salesperson: None,
    };
    let accounts: Vec<String> = filter
        .apply(&deals)
        .iter()
        .map(|deal| deal.account_name.clone())
        .collect();
    assert_eq!(accounts, vec!["A", "C"]);
}

#[test]
fn test_kanban_shows_all_columns_and_partitions_deals() {
    let deals = sample();
    let columns = kanban_columns(&deals);
    assert_eq!(columns.len(), 8);

    let stages: Vec<Stage> = columns.iter().map(|column| column.stage).collect();
    assert_eq!(stages, Stage::ALL.to_vec());

    let total: usize = columns.iter().map(|column| column.count).sum();
    assert_eq!(total, deals.len());

    let to_visit = &columns[0];
    assert_eq!(to_visit.count, 2);
    assert_eq!(to_visit.volume, 400.0);
    assert_eq!(to_visit.deals.len(), 2);

    // empty stages still get a column
    let quoted = columns
        .iter()
        .find(|column| column.stage == Stage::Quoted)
        .unwrap();
    assert_eq!(quoted.count, 0);
    assert_eq!(quoted.volume, 0.0);
}

#[test]
fn test_recent_activity_sorts_latest_first() {
    let mut a = deal("OLDEST", Salesperson::PoliMauro, Stage::ToVisit, 1.0);
    a.last_modified_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let mut b = deal("NEWEST", Salesperson::PoliMauro, Stage::ToVisit, 1.0);
    b.last_modified_at = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
    let mut c = deal("MIDDLE", Salesperson::PoliMauro, Stage::ToVisit, 1.0);
    c.last_modified_at = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();

    let ordered = by_recent_activity(&Vector::from(vec![a, b, c]));
    let accounts: Vec<&str> = ordered.iter().map(|deal| deal.account_name.as_str()).collect();
    assert_eq!(accounts, vec!["NEWEST", "MIDDLE", "OLDEST"]);
}
