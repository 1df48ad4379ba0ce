use chrono::NaiveDate;
use migration::MigratorTrait;
use sea_orm::Database;

use engine::{
    CustomerNewCmd, DateRange, Engine, EntryKind, EntryNewCmd, OrderNewCmd, PaymentStatus,
    TaskNewCmd, TaskStatus,
};

async fn engine_with_db() -> Engine {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Engine::builder().database(db).build().await.unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn range(start: NaiveDate, end: NaiveDate) -> DateRange {
    DateRange {
        start: Some(start),
        end: Some(end),
    }
}

#[tokio::test]
async fn order_export_respects_inclusive_range() {
    let engine = engine_with_db().await;

    engine
        .new_order(OrderNewCmd::new("SO-1001", 5000).order_date(date(2024, 1, 5)))
        .await
        .unwrap();
    engine
        .new_order(
            OrderNewCmd::new("SO-1002", 7500)
                .order_date(date(2024, 2, 10))
                .payment_status(PaymentStatus::Paid),
        )
        .await
        .unwrap();

    let (orders, _) = engine
        .export_orders(range(date(2024, 1, 1), date(2024, 1, 31)))
        .await
        .unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order_number, "SO-1001");
    assert_eq!(orders[0].amount_minor, 5000);
    assert_eq!(orders[0].payment_status, PaymentStatus::Pending);
}

#[tokio::test]
async fn export_includes_records_on_the_boundary_dates() {
    let engine = engine_with_db().await;

    engine
        .new_entry(EntryNewCmd::new(EntryKind::Expense, 100).date(date(2024, 1, 1)))
        .await
        .unwrap();
    engine
        .new_entry(EntryNewCmd::new(EntryKind::Expense, 200).date(date(2024, 1, 31)))
        .await
        .unwrap();
    engine
        .new_entry(EntryNewCmd::new(EntryKind::Expense, 300).date(date(2024, 2, 1)))
        .await
        .unwrap();

    let entries = engine
        .export_entries(range(date(2024, 1, 1), date(2024, 1, 31)), None)
        .await
        .unwrap();
    let amounts: Vec<i64> = entries.iter().map(|e| e.amount_minor).collect();
    assert_eq!(amounts, vec![100, 200]);
}

#[tokio::test]
async fn start_after_end_yields_empty_export() {
    let engine = engine_with_db().await;

    engine
        .new_entry(EntryNewCmd::new(EntryKind::Expense, 100).date(date(2024, 1, 15)))
        .await
        .unwrap();

    let entries = engine
        .export_entries(range(date(2024, 2, 1), date(2024, 1, 1)), None)
        .await
        .unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn entry_export_kind_filter() {
    let engine = engine_with_db().await;

    for (kind, amount) in [
        (EntryKind::Expense, 100),
        (EntryKind::Expense, 200),
        (EntryKind::Income, 900),
    ] {
        engine
            .new_entry(EntryNewCmd::new(kind, amount).date(date(2024, 1, 10)))
            .await
            .unwrap();
    }

    let full_range = range(date(2024, 1, 1), date(2024, 1, 31));

    let expenses = engine
        .export_entries(full_range, Some(EntryKind::Expense))
        .await
        .unwrap();
    assert_eq!(expenses.len(), 2);
    assert!(expenses.iter().all(|e| e.kind == EntryKind::Expense));

    let income = engine
        .export_entries(full_range, Some(EntryKind::Income))
        .await
        .unwrap();
    assert_eq!(income.len(), 1);
    assert!(income.iter().all(|e| e.kind == EntryKind::Income));

    let all = engine.export_entries(full_range, None).await.unwrap();
    assert_eq!(all.len(), expenses.len() + income.len());
}

#[tokio::test]
async fn export_rows_are_sorted_date_ascending() {
    let engine = engine_with_db().await;

    for day in [20, 5, 12] {
        engine
            .new_customer(CustomerNewCmd::new(format!("Customer {day}")).created_at(date(2024, 1, day)))
            .await
            .unwrap();
    }

    let customers = engine
        .export_customers(range(date(2024, 1, 1), date(2024, 1, 31)))
        .await
        .unwrap();
    let days: Vec<u32> = customers
        .iter()
        .map(|c| chrono::Datelike::day(&c.created_at))
        .collect();
    assert_eq!(days, vec![5, 12, 20]);
}

#[tokio::test]
async fn order_export_resolves_customer_names() {
    let engine = engine_with_db().await;

    let customer = engine
        .new_customer(CustomerNewCmd::new("Ada Moss"))
        .await
        .unwrap();
    engine
        .new_order(
            OrderNewCmd::new("SO-1001", 5000)
                .customer_id(customer.id)
                .order_date(date(2024, 1, 5)),
        )
        .await
        .unwrap();

    let (orders, names) = engine
        .export_orders(range(date(2024, 1, 1), date(2024, 1, 31)))
        .await
        .unwrap();
    assert_eq!(orders.len(), 1);
    let name = orders[0]
        .customer_id
        .and_then(|id| names.get(&id).cloned());
    assert_eq!(name.as_deref(), Some("Ada Moss"));
}

#[tokio::test]
async fn task_export_status_filter() {
    let engine = engine_with_db().await;

    engine
        .new_task(TaskNewCmd::new("Open task").date(date(2024, 1, 5)))
        .await
        .unwrap();
    engine
        .new_task(
            TaskNewCmd::new("Done task")
                .status(TaskStatus::Done)
                .date(date(2024, 1, 6)),
        )
        .await
        .unwrap();

    let (done, _) = engine
        .export_tasks(
            range(date(2024, 1, 1), date(2024, 1, 31)),
            Some(TaskStatus::Done),
        )
        .await
        .unwrap();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].title, "Done task");
}

#[tokio::test]
async fn deleted_records_disappear_from_exports() {
    let engine = engine_with_db().await;

    let keep = engine
        .new_entry(EntryNewCmd::new(EntryKind::Expense, 100).date(date(2024, 1, 10)))
        .await
        .unwrap();
    let gone = engine
        .new_entry(EntryNewCmd::new(EntryKind::Expense, 200).date(date(2024, 1, 11)))
        .await
        .unwrap();

    engine.delete_entry(gone.id).await.unwrap();

    let entries = engine
        .export_entries(range(date(2024, 1, 1), date(2024, 1, 31)), None)
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, keep.id);
}

#[tokio::test]
async fn open_bounds_export_everything() {
    let engine = engine_with_db().await;

    engine
        .new_entry(EntryNewCmd::new(EntryKind::Expense, 100).date(date(2020, 6, 1)))
        .await
        .unwrap();
    engine
        .new_entry(EntryNewCmd::new(EntryKind::Income, 200).date(date(2026, 6, 1)))
        .await
        .unwrap();

    let entries = engine
        .export_entries(DateRange::default(), None)
        .await
        .unwrap();
    assert_eq!(entries.len(), 2);
}
