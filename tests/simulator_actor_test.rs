use chrono::NaiveDate;
use service_dashboard::config::{DashboardConfig, SimulatorConfig};
use service_dashboard::model::{parse_date, OrderRecord, StatusCatalog};
use service_dashboard::simulator::mock::ScriptedRandom;
use service_dashboard::simulator::{FixedClock, SeededRandom, SimulatorActor, SimulatorError};
use std::sync::Arc;
use std::time::Duration;

fn day(s: &str) -> NaiveDate {
    parse_date(s).unwrap()
}

fn config(arrival: f64, resolution: f64, max_records: usize) -> Arc<DashboardConfig> {
    Arc::new(DashboardConfig {
        simulator: SimulatorConfig {
            max_records,
            tick_interval_ms: 2000,
            arrival_probability: arrival,
            resolution_probability: resolution,
            channel_capacity: 8,
        },
        ..DashboardConfig::default()
    })
}

fn seed_records() -> Vec<OrderRecord> {
    let catalog = StatusCatalog::default();
    vec![
        OrderRecord::opened(1, 100, day("2024-03-01"), &catalog),
        OrderRecord::opened(2, 151, day("2024-03-01"), &catalog),
        OrderRecord::opened(3, 600, day("2024-03-02"), &catalog),
    ]
}

/// The timer drives ticks on its own; with paused time the runtime jumps straight
/// to each deadline.
#[tokio::test(start_paused = true)]
async fn test_timer_ticks_mutate_collection() {
    let (actor, client) = SimulatorActor::new(config(1.0, 0.0, 200), seed_records());
    let handle = tokio::spawn(
        actor
            .with_random(SeededRandom::seeded(1))
            .with_clock(Arc::new(FixedClock(day("2024-03-09"))))
            .run(),
    );

    // Nothing happens before the first period elapses
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(client.snapshot().await.unwrap().len(), 3);

    // Three periods in total have elapsed by 6.5s
    tokio::time::sleep(Duration::from_millis(5000)).await;
    let snapshot = client.snapshot().await.unwrap();
    assert_eq!(snapshot.len(), 6);
    let ids: Vec<_> = snapshot.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    assert!(snapshot[3..]
        .iter()
        .all(|r| r.created_date.as_deref() == Some("2024-03-09")));

    client.stop().await.unwrap();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_snapshots_are_copy_on_write() {
    let (actor, client) = SimulatorActor::new(config(1.0, 1.0, 200), seed_records());
    let handle = tokio::spawn(
        actor
            .with_random(ScriptedRandom::new([0.0, 0.0], [0, 0]))
            .with_clock(Arc::new(FixedClock(day("2024-03-09"))))
            .run(),
    );

    let before = client.snapshot().await.unwrap();
    let report = client.tick_now().await.unwrap();
    let after = client.snapshot().await.unwrap();

    assert_eq!(report.arrived, Some(4));
    assert_eq!(report.resolved, Some(1));
    assert_eq!(report.size, 4);

    assert_eq!(*before, seed_records(), "earlier snapshot must not change");
    assert_eq!(after.len(), 4);
    assert_eq!(after[0].code, 500);
    assert_eq!(after[0].finished_date.as_deref(), Some("2024-03-09"));

    client.stop().await.unwrap();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_zero_probability_ticks_are_no_ops() {
    let (actor, client) = SimulatorActor::new(config(0.0, 0.0, 200), seed_records());
    let handle = tokio::spawn(actor.with_random(SeededRandom::seeded(3)).run());

    let before = client.snapshot().await.unwrap();
    for _ in 0..20 {
        let report = client.tick_now().await.unwrap();
        assert_eq!(report.arrived, None);
        assert_eq!(report.resolved, None);
        assert_eq!(report.evicted, 0);
    }
    let after = client.snapshot().await.unwrap();
    assert_eq!(*after, *before);

    client.stop().await.unwrap();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_eviction_keeps_most_recent_records() {
    let cap = 10;
    let (actor, client) = SimulatorActor::new(config(1.0, 0.3, cap), seed_records());
    let handle = tokio::spawn(actor.with_random(SeededRandom::seeded(11)).run());

    for _ in 0..30 {
        let report = client.tick_now().await.unwrap();
        assert!(report.size <= cap);
    }

    let snapshot = client.snapshot().await.unwrap();
    let ids: Vec<_> = snapshot.iter().map(|r| r.id).collect();
    // 3 seeded + 30 arrivals, the last 10 survive
    assert_eq!(ids, (24..=33).collect::<Vec<_>>());

    client.stop().await.unwrap();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_replace_applies_cap() {
    let (actor, client) = SimulatorActor::new(config(0.0, 0.0, 2), Vec::new());
    let handle = tokio::spawn(actor.run());

    let evicted = client.replace(seed_records()).await.unwrap();
    assert_eq!(evicted, 1);
    let ids: Vec<_> = client.snapshot().await.unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3]);

    client.stop().await.unwrap();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_initial_collection_is_capped() {
    let (actor, client) = SimulatorActor::new(config(0.0, 0.0, 1), seed_records());
    let handle = tokio::spawn(actor.run());

    let snapshot = client.snapshot().await.unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id, 3);

    client.stop().await.unwrap();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_summary_uses_injected_clock() {
    let (actor, client) = SimulatorActor::new(config(0.0, 0.0, 200), seed_records());
    let handle = tokio::spawn(actor.with_clock(Arc::new(FixedClock(day("2024-04-02")))).run());

    let summary = client.summary().await.unwrap();
    assert_eq!(summary.as_of, day("2024-04-02"));
    assert_eq!(summary.last_month_submissions, 1);
    assert_eq!(summary.status_counts.get("New"), Some(1));

    client.stop().await.unwrap();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_stop_closes_the_client() {
    let (actor, client) = SimulatorActor::new(config(0.5, 0.4, 200), seed_records());
    let handle = tokio::spawn(actor.run());

    client.stop().await.unwrap();
    handle.await.unwrap();

    assert!(client.is_closed());
    assert_eq!(client.snapshot().await.unwrap_err(), SimulatorError::ActorClosed);
    assert_eq!(client.stop().await.unwrap_err(), SimulatorError::ActorClosed);
}

#[tokio::test]
async fn test_dropping_clients_ends_the_task() {
    let (actor, client) = SimulatorActor::new(config(0.5, 0.4, 200), seed_records());
    let handle = tokio::spawn(actor.run());

    let other = client.clone();
    drop(client);
    assert_eq!(other.snapshot().await.unwrap().len(), 3);
    drop(other);

    tokio::time::timeout(Duration::from_secs(1), handle)
        .await
        .expect("simulator should stop once every client is gone")
        .unwrap();
}

#[tokio::test]
async fn test_stop_ends_the_task_while_clients_remain() {
    let (actor, client) = SimulatorActor::new(config(0.0, 0.0, 200), seed_records());
    let handle = tokio::spawn(actor.run());
    let other = client.clone();

    assert_eq!(client.tick_now().await.unwrap().size, 3);
    client.stop().await.unwrap();

    tokio::time::timeout(Duration::from_secs(1), handle)
        .await
        .expect("stop should end the task even with a live client")
        .unwrap();
    assert!(other.is_closed());
    assert_eq!(other.tick_now().await.unwrap_err(), SimulatorError::ActorClosed);
}
