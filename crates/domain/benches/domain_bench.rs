use criterion::{Criterion, criterion_group, criterion_main};
use domain::{
    Aggregate, CreateListing, Listing, ListingEvent, ListingService, Money, PublishListing,
    SellListing, UsageCondition,
};
use event_store::{AggregateId, InMemoryEventStore};

fn bench_create_listing(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("domain/create_listing", |b| {
        b.iter(|| {
            rt.block_on(async {
                let store = InMemoryEventStore::new();
                let service = ListingService::new(store);
                let cmd = CreateListing::with_new_id(
                    "Bike",
                    "Road bike, 2020",
                    Money::from_cents(50000),
                    UsageCondition::Used,
                );
                service.create_listing(cmd).await.unwrap();
            });
        });
    });
}

fn bench_full_command_cycle(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("domain/full_create_publish_sell", |b| {
        b.iter(|| {
            rt.block_on(async {
                let store = InMemoryEventStore::new();
                let service = ListingService::new(store);
                let cmd = CreateListing::with_new_id(
                    "Bike",
                    "Road bike, 2020",
                    Money::from_cents(50000),
                    UsageCondition::Used,
                );
                let listing_id = cmd.listing_id;
                service.create_listing(cmd).await.unwrap();
                service
                    .publish_listing(PublishListing::new(listing_id))
                    .await
                    .unwrap();
                service
                    .sell_listing(SellListing::new(listing_id))
                    .await
                    .unwrap();
            });
        });
    });
}

fn bench_replay_fold(c: &mut Criterion) {
    let listing_id = AggregateId::new();
    let mut history = vec![ListingEvent::listing_created(
        listing_id,
        "Bike",
        "Road bike, 2020",
        Money::from_cents(50000),
        UsageCondition::Used,
    )];
    for i in 0..500 {
        history.push(ListingEvent::photo_added(format!("photo-{i}.jpg").into()));
    }
    history.push(ListingEvent::listing_published());
    history.push(ListingEvent::listing_sold());

    c.bench_function("domain/replay_fold_500_events", |b| {
        b.iter(|| {
            let mut listing = Listing::default();
            listing.apply_events(history.iter().cloned());
            assert!(listing.is_terminal());
        });
    });
}

criterion_group!(
    benches,
    bench_create_listing,
    bench_full_command_cycle,
    bench_replay_fold
);
criterion_main!(benches);
