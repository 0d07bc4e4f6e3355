use lastseen::LastSeenSketch;
use std::time::{Duration, Instant};

fn main() {
    let mut seen = LastSeenSketch::<Instant>::new(1000).unwrap();
    println!("capacity: {}", seen.capacity());

    let start = Instant::now();
    let events: [(u64, u64); 6] = [(17, 0), (42, 1), (17, 2), (99, 3), (42, 4), (7, 5)];

    for &(key, secs) in events.iter() {
        let now = start + Duration::from_secs(secs);
        match seen.lookup_and_update(key, now) {
            Some(last) => println!("key {:>3}: duplicate, last seen {:?} earlier", key, now - last),
            None => println!("key {:>3}: new", key),
        }
    }

    let since = start + Duration::from_secs(2);
    println!("distinct keys after t+2s: {}", seen.count_distinct(since));
    assert_eq!(seen.count_distinct(since), 3);
    assert!(seen.lookup(1234).is_none());
}
