use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use ring_queue::{Queue, QueueConfig, QueueError};
use std::collections::{HashMap, VecDeque};

fn contents(q: &Queue) -> Vec<String> {
    q.iter_front().map(str::to_owned).collect()
}

fn build(values: &[String]) -> Queue {
    values.iter().cloned().collect()
}

// Short strings over a tiny alphabet so duplicates are common.
fn texts() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-d]{0,2}", 0..48)
}

proptest! {
    #[test]
    fn random_interleaved_insert_and_remove(
        action in proptest::collection::vec(any::<usize>(), 0..64)
    ){
        let mut q = Queue::new();
        let mut model: VecDeque<String> = VecDeque::new();

        for a in action {
            let text = a.to_string();
            match a & 0x03 {
                0x00 => {
                    q.insert_head(&text).unwrap();
                    model.push_front(text);
                },
                0x01 => {
                    q.insert_tail(&text).unwrap();
                    model.push_back(text);
                },
                0x02 => {
                    let got = q.remove_head().map(|e| e.into_value());
                    prop_assert_eq!(model.pop_front(), got);
                },
                0x03 => {
                    let got = q.remove_tail().map(|e| e.into_value());
                    prop_assert_eq!(model.pop_back(), got);
                },
                _ => unreachable!(),
            }

            prop_assert_eq!(model.len(), q.size());
            prop_assert_eq!(model.len(), q.len());
        }

        prop_assert_eq!(model.iter().cloned().collect::<Vec<_>>(), contents(&q));
        let back: Vec<String> = q.iter_back().map(str::to_owned).collect();
        prop_assert_eq!(model.iter().rev().cloned().collect::<Vec<_>>(), back);
    }
}

proptest! {
    #[test]
    fn insert_head_then_remove_head_round_trips(
        values in texts(),
        text in "[a-z]{0,8}",
    ) {
        let mut q = build(&values);

        q.insert_head(&text).unwrap();
        let e = q.remove_head().unwrap();

        prop_assert_eq!(text.as_str(), e.value());
        prop_assert_eq!(values, contents(&q));
        e.release();
    }
}

proptest! {
    #[test]
    fn remove_into_truncates_to_buffer(
        text in "[a-z]{0,12}",
        size in 0usize..16,
    ) {
        let mut q = Queue::new();
        q.insert_tail(&text).unwrap();

        let mut buf = vec![0xffu8; size];
        let e = q.remove_head_into(&mut buf).unwrap();

        if size > 0 {
            let n = text.len().min(size - 1);
            prop_assert_eq!(&text.as_bytes()[..n], &buf[..n]);
            prop_assert_eq!(0, buf[n]);
        }
        prop_assert_eq!(text, e.into_value());
    }
}

proptest! {
    #[test]
    fn reverse_is_an_involution(values in texts()) {
        let mut q = build(&values);

        q.reverse();
        let mut reversed = values.clone();
        reversed.reverse();
        prop_assert_eq!(reversed, contents(&q));

        q.reverse();
        prop_assert_eq!(values, contents(&q));
    }
}

proptest! {
    #[test]
    fn sort_orders_and_is_idempotent(values in texts()) {
        let mut q = build(&values);

        q.sort();
        let once = contents(&q);

        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(&expected, &once);

        for w in once.windows(2) {
            prop_assert!(w[0] <= w[1]);
        }

        q.sort();
        prop_assert_eq!(once, contents(&q));
        prop_assert_eq!(values.len(), q.size());
        prop_assert_eq!(0, q.len_freelist());
    }
}

proptest! {
    #[test]
    fn delete_dup_keeps_only_unique_values(values in texts()) {
        let mut q = build(&values);

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for v in &values {
            *counts.entry(v.as_str()).or_insert(0) += 1;
        }
        let mut expected: Vec<String> = values
            .iter()
            .filter(|v| counts[v.as_str()] == 1)
            .cloned()
            .collect();
        expected.sort();

        prop_assert!(q.delete_dup());
        prop_assert_eq!(&expected, &contents(&q));
        prop_assert_eq!(expected.len(), q.size());
        prop_assert_eq!(values.len() - expected.len(), q.len_freelist());
    }
}

proptest! {
    #[test]
    fn delete_mid_removes_lower_middle(values in texts()) {
        let mut q = build(&values);

        if values.is_empty() {
            prop_assert!(!q.delete_mid());
        } else {
            let mut expected = values.clone();
            expected.remove((values.len() - 1) / 2);

            prop_assert!(q.delete_mid());
            prop_assert_eq!(expected, contents(&q));
        }
    }
}

proptest! {
    #[test]
    fn swap_pairs_swaps_each_pair(values in texts()) {
        let mut q = build(&values);
        q.swap_pairs();

        let mut expected = values.clone();
        for pair in expected.chunks_mut(2) {
            pair.reverse();
        }
        prop_assert_eq!(expected, contents(&q));

        // Swapping again puts everything back.
        q.swap_pairs();
        prop_assert_eq!(values, contents(&q));
    }
}

proptest! {
    #[test]
    fn bounded_queue_never_exceeds_limit(
        limit in 0usize..8,
        pushes in proptest::collection::vec(any::<bool>(), 0..16),
    ) {
        let mut q = Queue::with_config(QueueConfig::new().max_len(limit));

        for (i, front) in pushes.into_iter().enumerate() {
            let text = i.to_string();
            let r = if front { q.insert_head(&text) } else { q.insert_tail(&text) };

            if i < limit {
                prop_assert!(r.is_ok());
            } else {
                prop_assert_eq!(Err(QueueError::CapacityExceeded { limit }), r);
            }
            prop_assert!(q.len() <= limit);
        }
    }
}

proptest! {
    #[test]
    fn random_remove(
        seed in any::<u64>(),
        pushes in proptest::collection::vec(any::<usize>(), 0..64),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut q = Queue::new();
        let mut tokens = Vec::new();

        for p in pushes {
            let text = p.to_string();
            let tok = q.insert_tail(&text).unwrap();
            tokens.push((tok, text));
        }

        // Rearranging the ring must not invalidate any token.
        q.sort();
        q.reverse();
        q.swap_pairs();

        tokens.shuffle(&mut rng);

        for (t, p) in tokens {
            prop_assert_eq!(Some(p), q.remove(&t).map(|e| e.into_value()));
            prop_assert_eq!(q.len(), q.size());
        }

        prop_assert!(q.is_empty());
    }
}
