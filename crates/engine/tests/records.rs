use chrono::NaiveDate;
use migration::MigratorTrait;
use sea_orm::Database;
use uuid::Uuid;

use engine::{
    CustomerListFilter, CustomerNewCmd, CustomerUpdateCmd, Engine, EngineError, EntryNewCmd,
    EntryKind, OrderListFilter, OrderNewCmd, OrderUpdateCmd, PaymentStatus, TaskListFilter,
    TaskNewCmd, TaskStatus, TaskUpdateCmd,
};

async fn engine_with_db() -> Engine {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Engine::builder().database(db).build().await.unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn customer_round_trips_all_fields() {
    let engine = engine_with_db().await;

    let created = engine
        .new_customer(CustomerNewCmd {
            name: "Ada Moss".to_string(),
            email: Some("ada@example.com".to_string()),
            phone: Some("555-0101".to_string()),
            city: Some("Turin".to_string()),
            country: Some("Italy".to_string()),
            platform_customer_id: Some("cust_9917".to_string()),
            note: Some("prefers pickup".to_string()),
            created_at: Some(date(2024, 3, 15)),
        })
        .await
        .unwrap();

    let listed = engine
        .list_customers(&CustomerListFilter::default())
        .await
        .unwrap();
    assert_eq!(listed, vec![created.clone()]);

    let fetched = engine.customer(created.id).await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.email.as_deref(), Some("ada@example.com"));
    assert_eq!(fetched.platform_customer_id.as_deref(), Some("cust_9917"));
    assert_eq!(fetched.created_at, date(2024, 3, 15));
}

#[tokio::test]
async fn customer_name_must_not_be_blank() {
    let engine = engine_with_db().await;

    let err = engine
        .new_customer(CustomerNewCmd::new("   "))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidValue(_)));
}

#[tokio::test]
async fn customer_update_keeps_absent_fields() {
    let engine = engine_with_db().await;

    let created = engine
        .new_customer(
            CustomerNewCmd::new("Ada Moss")
                .email("ada@example.com")
                .phone("555-0101"),
        )
        .await
        .unwrap();

    let updated = engine
        .update_customer(CustomerUpdateCmd::new(created.id).name("Ada Moss-Hale"))
        .await
        .unwrap();

    assert_eq!(updated.name, "Ada Moss-Hale");
    assert_eq!(updated.email.as_deref(), Some("ada@example.com"));
    assert_eq!(updated.phone.as_deref(), Some("555-0101"));

    let fetched = engine.customer(created.id).await.unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn customer_search_matches_name_email_phone() {
    let engine = engine_with_db().await;

    engine
        .new_customer(CustomerNewCmd::new("Ada Moss").email("ada@example.com"))
        .await
        .unwrap();
    engine
        .new_customer(CustomerNewCmd::new("Bruno Keel").phone("555-0123"))
        .await
        .unwrap();

    let by_email = engine
        .list_customers(&CustomerListFilter {
            search: Some("ada@".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].name, "Ada Moss");

    let by_phone = engine
        .list_customers(&CustomerListFilter {
            search: Some("555-0123".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_phone.len(), 1);
    assert_eq!(by_phone[0].name, "Bruno Keel");
}

#[tokio::test]
async fn deleting_customer_nulls_order_and_task_references() {
    let engine = engine_with_db().await;

    let customer = engine
        .new_customer(CustomerNewCmd::new("Ada Moss"))
        .await
        .unwrap();
    let order = engine
        .new_order(OrderNewCmd::new("SO-1001", 5000).customer_id(customer.id))
        .await
        .unwrap();
    let task = engine
        .new_task(TaskNewCmd::new("Follow up on return").customer_id(customer.id))
        .await
        .unwrap();

    engine.delete_customer(customer.id).await.unwrap();

    assert!(matches!(
        engine.customer(customer.id).await.unwrap_err(),
        EngineError::KeyNotFound(_)
    ));

    let order = engine.order(order.id).await.unwrap();
    assert_eq!(order.customer_id, None);
    let task = engine.task(task.id).await.unwrap();
    assert_eq!(task.customer_id, None);
}

#[tokio::test]
async fn order_round_trips_and_lists_newest_first() {
    let engine = engine_with_db().await;

    engine
        .new_order(
            OrderNewCmd::new("SO-1001", 5000)
                .order_date(date(2024, 1, 5))
                .payment_status(PaymentStatus::Paid),
        )
        .await
        .unwrap();
    engine
        .new_order(OrderNewCmd::new("SO-1002", 7500).order_date(date(2024, 2, 10)))
        .await
        .unwrap();

    let listed = engine.list_orders(&OrderListFilter::default()).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].order_number, "SO-1002");
    assert_eq!(listed[1].order_number, "SO-1001");
    assert_eq!(listed[1].payment_status, PaymentStatus::Paid);
}

#[tokio::test]
async fn order_amount_must_be_non_negative() {
    let engine = engine_with_db().await;

    let err = engine
        .new_order(OrderNewCmd::new("SO-1001", -1))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));

    let order = engine
        .new_order(OrderNewCmd::new("SO-1002", 0))
        .await
        .unwrap();
    let err = engine
        .update_order(OrderUpdateCmd::new(order.id).amount_minor(-5))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));
}

#[tokio::test]
async fn order_with_unknown_customer_is_rejected() {
    let engine = engine_with_db().await;

    let err = engine
        .new_order(OrderNewCmd::new("SO-1001", 5000).customer_id(Uuid::new_v4()))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::KeyNotFound(_)));
}

#[tokio::test]
async fn deleting_unknown_order_is_not_found() {
    let engine = engine_with_db().await;

    let err = engine.delete_order(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, EngineError::KeyNotFound(_)));
}

#[tokio::test]
async fn entry_defaults_category_and_date() {
    let engine = engine_with_db().await;

    let entry = engine
        .new_entry(EntryNewCmd::new(EntryKind::Expense, 1250))
        .await
        .unwrap();
    assert_eq!(entry.category, "General");
    assert_eq!(entry.date, chrono::Utc::now().date_naive());

    let fetched = engine.entry(entry.id).await.unwrap();
    assert_eq!(fetched, entry);
}

#[tokio::test]
async fn entry_amount_must_be_non_negative() {
    let engine = engine_with_db().await;

    let err = engine
        .new_entry(EntryNewCmd::new(EntryKind::Income, -100))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));
}

#[tokio::test]
async fn task_defaults_to_pending_and_updates_status() {
    let engine = engine_with_db().await;

    let task = engine
        .new_task(TaskNewCmd::new("Restock shelves"))
        .await
        .unwrap();
    assert_eq!(task.status, TaskStatus::Pending);

    let updated = engine
        .update_task(TaskUpdateCmd::new(task.id).status(TaskStatus::Done))
        .await
        .unwrap();
    assert_eq!(updated.status, TaskStatus::Done);
    assert_eq!(updated.title, "Restock shelves");
}

#[tokio::test]
async fn task_status_filter_restricts_listing() {
    let engine = engine_with_db().await;

    engine
        .new_task(TaskNewCmd::new("Open task"))
        .await
        .unwrap();
    engine
        .new_task(TaskNewCmd::new("Done task").status(TaskStatus::Done))
        .await
        .unwrap();

    let done = engine
        .list_tasks(&TaskListFilter {
            status: Some(TaskStatus::Done),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].title, "Done task");
}

#[tokio::test]
async fn totals_cover_all_tables() {
    let engine = engine_with_db().await;

    engine
        .new_customer(CustomerNewCmd::new("Ada Moss"))
        .await
        .unwrap();
    engine
        .new_order(OrderNewCmd::new("SO-1001", 5000))
        .await
        .unwrap();
    engine
        .new_entry(EntryNewCmd::new(EntryKind::Income, 9000))
        .await
        .unwrap();
    engine
        .new_entry(EntryNewCmd::new(EntryKind::Expense, 4000))
        .await
        .unwrap();
    engine
        .new_task(TaskNewCmd::new("Open task"))
        .await
        .unwrap();
    engine
        .new_task(TaskNewCmd::new("Done task").status(TaskStatus::Done))
        .await
        .unwrap();

    let totals = engine.totals().await.unwrap();
    assert_eq!(totals.customers, 1);
    assert_eq!(totals.orders, 1);
    assert_eq!(totals.income_minor, 9000);
    assert_eq!(totals.expense_minor, 4000);
    assert_eq!(totals.net_minor, 5000);
    assert_eq!(totals.open_tasks, 1);
}
