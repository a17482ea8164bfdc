use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use almanac_calendar::CompIdCounter;

#[test]
fn fresh_counter_sequence() {
    let ids = CompIdCounter::new();
    let issued: Vec<u64> = (0..3).map(|_| ids.next_id().get()).collect();
    assert_eq!(issued, vec![0, 1, 2]);
}

#[test]
fn concurrent_ids_are_unique_and_dense() {
    let ids = Arc::new(CompIdCounter::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let ids = Arc::clone(&ids);
            thread::spawn(move || {
                let mut local = Vec::with_capacity(250);
                for _ in 0..250 {
                    local.push(ids.next_id().get());
                }
                local
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        let local = handle.join().unwrap();
        assert!(
            local.windows(2).all(|w| w[0] < w[1]),
            "ids within one thread must increase"
        );
        for id in local {
            assert!(seen.insert(id), "id {id} issued twice");
        }
    }
    assert_eq!(seen.len(), 1000);
    assert!(seen.iter().all(|&id| id < 1000));
    assert_eq!(ids.peek().get(), 1000);
}
