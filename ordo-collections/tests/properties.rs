//! Randomized operation sequences checked against `std` models.

use std::collections::{BTreeSet, VecDeque};

use ordo_collections::heap::{build_heap, heap_sort, heapify, is_heap, sort_by_draining};
use ordo_collections::{BoundedQueue, BoundedStack, Error, OrderedTree, PriorityQueue, SeqList};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const SEEDS: [u64; 4] = [1, 42, 12345, 0xDEAD_BEEF];

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// =============================================================================
// PriorityQueue
// =============================================================================

#[test]
fn heap_property_holds_across_mixed_operations() {
    init_logging();
    for seed in SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut pq: PriorityQueue = PriorityQueue::with_capacity(64);
        let mut model: Vec<i64> = Vec::new();
        let (mut inserts, mut deletes) = (0usize, 0usize);

        for _ in 0..2_000 {
            if rng.gen_bool(0.6) {
                let key = rng.gen_range(-50..50);
                match pq.insert(key) {
                    Ok(()) => {
                        model.push(key);
                        inserts += 1;
                    }
                    Err(err) => {
                        assert_eq!(err, Error::CapacityExceeded { capacity: 64 });
                        assert_eq!(pq.len(), 64);
                    }
                }
            } else {
                match pq.delete_min() {
                    Ok(min) => {
                        let expected = *model.iter().min().unwrap();
                        assert_eq!(min, expected);
                        let pos = model.iter().position(|&k| k == min).unwrap();
                        model.swap_remove(pos);
                        deletes += 1;
                    }
                    Err(err) => {
                        assert_eq!(err, Error::EmptyQueue);
                        assert!(model.is_empty());
                    }
                }
            }

            assert!(is_heap(pq.as_slice()), "seed {seed}: heap property violated");
            assert_eq!(pq.len(), inserts - deletes);
            assert_eq!(pq.find_min().ok(), model.iter().min());
        }
    }
}

#[test]
fn draining_yields_non_decreasing_order() {
    init_logging();
    for seed in SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let keys: Vec<i64> = (0..500).map(|_| rng.gen_range(-1000..1000)).collect();

        let mut pq: PriorityQueue = PriorityQueue::with_capacity(keys.len());
        for &key in &keys {
            pq.insert(key).unwrap();
        }

        let mut drained = Vec::with_capacity(keys.len());
        while let Ok(min) = pq.delete_min() {
            drained.push(min);
        }

        let mut expected = keys.clone();
        expected.sort_unstable();
        assert_eq!(drained, expected);
    }
}

#[test]
fn bulk_build_matches_repeated_insert() {
    init_logging();
    let mut rng = SmallRng::seed_from_u64(7);
    let keys: Vec<i64> = (0..300).map(|_| rng.gen_range(0..100)).collect();

    let built = PriorityQueue::build(300, keys.iter().copied()).unwrap();
    assert!(is_heap(built.as_slice()));

    let mut inserted: PriorityQueue = PriorityQueue::with_capacity(300);
    for &key in &keys {
        inserted.insert(key).unwrap();
    }

    assert_eq!(built.into_sorted_vec(), inserted.into_sorted_vec());
}

#[test]
fn in_place_routines_over_caller_slices() {
    init_logging();
    for seed in SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let keys: Vec<i32> = (0..257).map(|_| rng.gen_range(-500..500)).collect();

        let mut expected = keys.clone();
        expected.sort_unstable();

        let mut sorted = keys.clone();
        heap_sort(&mut sorted);
        assert_eq!(sorted, expected);

        assert_eq!(sort_by_draining(keys.clone()), expected);

        let mut heap = keys.clone();
        build_heap(&mut heap);
        assert!(is_heap(&heap));

        // Replace the root and repair with a single heapify call
        heap[0] = i32::MAX;
        heapify(&mut heap, 0);
        assert!(is_heap(&heap));
    }
}

// =============================================================================
// OrderedTree
// =============================================================================

#[test]
fn tree_matches_btreeset_model() {
    init_logging();
    for seed in SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut tree: OrderedTree = OrderedTree::new();
        let mut model = BTreeSet::new();

        for _ in 0..3_000 {
            let key = rng.gen_range(0..200i64);
            let before = tree.len();

            if rng.gen_bool(0.55) {
                assert_eq!(tree.insert(key), model.insert(key));
            } else {
                let existed = model.remove(&key);
                assert_eq!(tree.remove(&key), existed);
                let expected_len = if existed { before - 1 } else { before };
                assert_eq!(tree.len(), expected_len, "seed {seed}: count drifted");
            }

            assert_eq!(tree.len(), model.len());
        }

        // In-order keys strictly increasing is the BST property
        let keys: Vec<i64> = tree.iter().copied().collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(keys, model.iter().copied().collect::<Vec<_>>());

        for key in 0..200 {
            assert_eq!(tree.contains(&key), model.contains(&key));
        }
        assert_eq!(tree.first(), model.first());
        assert_eq!(tree.last(), model.last());
    }
}

#[test]
fn tree_survives_draining_every_key() {
    init_logging();
    let mut rng = SmallRng::seed_from_u64(99);
    let mut keys: Vec<i64> = (0..500).collect();
    for i in (1..keys.len()).rev() {
        keys.swap(i, rng.gen_range(0..=i));
    }

    let mut tree: OrderedTree = keys.iter().copied().collect();
    for (removed, key) in keys.iter().enumerate() {
        assert!(tree.remove(key));
        assert_eq!(tree.len(), keys.len() - removed - 1);
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
}

// =============================================================================
// SeqList / BoundedQueue / BoundedStack
// =============================================================================

#[test]
fn seq_list_matches_vec_model() {
    init_logging();
    for seed in SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut list: SeqList<u32> = SeqList::new();
        let mut model: Vec<u32> = Vec::new();

        for step in 0..1_000u32 {
            let position = rng.gen_range(0..=model.len() + 1);
            if rng.gen_bool(0.6) {
                let result = list.insert(position, step);
                if position <= model.len() {
                    assert_eq!(result, Ok(()));
                    model.insert(position, step);
                } else {
                    assert!(result.is_err());
                }
            } else {
                let result = list.remove(position);
                if position < model.len() {
                    assert_eq!(result, Ok(model.remove(position)));
                } else {
                    assert!(result.is_err());
                }
            }
            assert_eq!(list.len(), model.len());
        }

        assert_eq!(list.iter().copied().collect::<Vec<_>>(), model);
    }
}

#[test]
fn bounded_queue_matches_vecdeque_model() {
    init_logging();
    for seed in SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut queue: BoundedQueue<u64> = BoundedQueue::with_capacity(16);
        let mut model: VecDeque<u64> = VecDeque::new();

        for step in 0..2_000u64 {
            if rng.gen_bool(0.5) {
                let accepted = queue.push(step).is_ok();
                assert_eq!(accepted, model.len() < 16);
                if accepted {
                    model.push_back(step);
                }
            } else {
                assert_eq!(queue.pop(), model.pop_front());
            }
            assert_eq!(queue.front(), model.front());
            assert_eq!(queue.len(), model.len());
        }

        assert!(queue.iter().eq(model.iter()));
    }
}

#[test]
fn bounded_stack_matches_vec_model() {
    init_logging();
    for seed in SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut stack: BoundedStack<u64> = BoundedStack::with_capacity(8);
        let mut model: Vec<u64> = Vec::new();

        for step in 0..2_000u64 {
            if rng.gen_bool(0.5) {
                let accepted = stack.push(step).is_ok();
                assert_eq!(accepted, model.len() < 8);
                if accepted {
                    model.push(step);
                }
            } else {
                assert_eq!(stack.pop(), model.pop());
            }
            assert_eq!(stack.peek(), model.last());
            assert_eq!(stack.len(), model.len());
        }

        assert!(stack.iter().eq(model.iter().rev()));
    }
}
