use std::sync::Arc;
use std::thread;

use oynaiq::catalog::{
    seed_matches, MatchRepository, MatchStatus, MatchStore, NewMatch, Sport, StoreError,
};

fn new_match(sport: Sport, current: u32, total: u32) -> NewMatch {
    NewMatch {
        sport,
        title: "Вечерняя игра".to_string(),
        location: "City Arena".to_string(),
        date_human: "завтра".to_string(),
        time_human: "20:00".to_string(),
        maps_url: "https://maps.google.com/?q=City+Arena".to_string(),
        players_current: current,
        players_total: total,
        deposit: 0,
        level: "любители".to_string(),
        organizer: "organizer".to_string(),
        rules: "5×5".to_string(),
        refund_policy: "Без депозита — просто приходи".to_string(),
        status: MatchStatus::from_free_slots(total - current),
    }
}

#[test]
fn filters_by_sport_in_insertion_order() {
    let store = MatchStore::new(seed_matches());

    let football: Vec<u32> = store.all_by_sport(Sport::Football).iter().map(|m| m.id).collect();
    assert_eq!(football, vec![1, 2]);

    let basketball = store.all_by_sport(Sport::Basketball);
    assert_eq!(basketball.len(), 1);
    assert_eq!(basketball[0].status, MatchStatus::LowInterest);

    assert!(store.all_by_sport(Sport::Other).is_empty());
}

#[test]
fn unknown_id_is_not_found() {
    let store = MatchStore::new(seed_matches());
    assert_eq!(store.by_id(99), Err(StoreError::NotFound { id: 99 }));
    assert_eq!(store.increment_participant(99), Err(StoreError::NotFound { id: 99 }));
}

#[test]
fn append_assigns_next_id() {
    let store = MatchStore::new(seed_matches());

    let first = store.append(new_match(Sport::Other, 1, 10)).expect("append");
    let second = store.append(new_match(Sport::Other, 1, 10)).expect("append");

    assert_eq!(first.id, 5);
    assert_eq!(second.id, 6);
    assert_eq!(store.by_id(6).map(|m| m.title), Ok("Вечерняя игра".to_string()));
    assert_eq!(store.all_by_sport(Sport::Other).len(), 2);
}

#[test]
fn append_to_empty_store_starts_at_one() {
    let store = MatchStore::default();
    assert!(store.is_empty());
    let stored = store
        .append(new_match(Sport::Football, 1, 10))
        .expect("append");
    assert_eq!(stored.id, 1);
}

#[test]
fn append_caps_current_at_total() {
    let store = MatchStore::default();
    let stored = store
        .append(new_match(Sport::Football, 12, 10))
        .expect("append");
    assert_eq!(stored.players_current, 10);
}

#[test]
fn append_reports_exhausted_ids() {
    let mut last = seed_matches().remove(0);
    last.id = u32::MAX;
    let store = MatchStore::new(vec![last]);

    assert_eq!(
        store.append(new_match(Sport::Football, 1, 10)),
        Err(StoreError::IdsExhausted { last: u32::MAX })
    );
    assert_eq!(store.len(), 1);
}

#[test]
fn increment_stops_at_capacity() {
    let store = MatchStore::new(seed_matches());

    // Football #1 is 8/10.
    assert_eq!(store.increment_participant(1), Ok(true));
    assert_eq!(store.increment_participant(1), Ok(true));
    assert_eq!(store.increment_participant(1), Ok(false));

    let m = store.by_id(1).expect("seed match");
    assert_eq!(m.players_current, 10);
    assert_eq!(m.free_slots(), 0);
}

#[test]
fn increment_does_not_change_status() {
    let store = MatchStore::new(seed_matches());
    store.increment_participant(4).expect("seed match");
    store.increment_participant(4).expect("seed match");
    assert_eq!(store.by_id(4).map(|m| m.status), Ok(MatchStatus::NearFull));
}

#[test]
fn concurrent_appends_get_unique_ids() {
    let store = Arc::new(MatchStore::new(seed_matches()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..10)
                    .map(|_| {
                        store
                            .append(new_match(Sport::Volleyball, 1, 12))
                            .expect("append")
                            .id
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids: Vec<u32> = handles
        .into_iter()
        .flat_map(|h| h.join().expect("thread panicked"))
        .collect();
    ids.sort_unstable();
    ids.dedup();

    assert_eq!(ids.len(), 80);
    assert_eq!(ids.first(), Some(&5));
    assert_eq!(ids.last(), Some(&84));
    assert_eq!(store.len(), 84);
}

#[test]
fn concurrent_joins_never_overbook() {
    let store = Arc::new(MatchStore::new(seed_matches()));

    // Basketball #3 is 2/6: exactly four joins succeed.
    let handles: Vec<_> = (0..16)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.increment_participant(3).expect("seed match"))
        })
        .collect();

    let joined = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .filter(|&ok| ok)
        .count();

    assert_eq!(joined, 4);
    assert_eq!(store.by_id(3).map(|m| m.players_current), Ok(6));
}
