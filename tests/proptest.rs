use proptest::prelude::*;
use random_queues::{Deque, RandomizedQueue};
use std::collections::VecDeque;

proptest! {
    // The deque replays every operation sequence exactly like the
    // standard array-backed deque.
    #[test]
    fn deque_matches_reference_deque(
        actions in proptest::collection::vec(any::<usize>(), 0..64)
    ) {
        let mut deque: Deque<usize> = Deque::new();
        let mut model: VecDeque<usize> = VecDeque::new();

        for a in actions {
            match a & 0x03 {
                0x00 => {
                    deque.push_front(a);
                    model.push_front(a);
                }
                0x01 => {
                    deque.push_back(a);
                    model.push_back(a);
                }
                0x02 => {
                    assert_eq!(model.pop_front(), deque.pop_front());
                }
                0x03 => {
                    assert_eq!(model.pop_back(), deque.pop_back());
                }
                _ => unreachable!(),
            }

            assert_eq!(model.len(), deque.len());
            assert_eq!(model.front(), deque.front());
            assert_eq!(model.back(), deque.back());
        }

        let got: Vec<usize> = deque.iter().copied().collect();
        let want: Vec<usize> = model.iter().copied().collect();
        assert_eq!(want, got);
    }
}

proptest! {
    #[test]
    fn deque_len_is_pushes_minus_pops(
        pushes in proptest::collection::vec(any::<bool>(), 0..64),
        pops in proptest::collection::vec(any::<bool>(), 0..64)
    ) {
        let mut deque: Deque<usize> = Deque::new();

        let len = pushes.len();

        for (front, v) in pushes.into_iter().zip(0..len) {
            if front {
                deque.push_front(v);
            } else {
                deque.push_back(v);
            }
        }

        let mut popped = 0;
        for front in pops {
            let r = if front {
                deque.pop_front()
            } else {
                deque.pop_back()
            };
            if r.is_some() {
                popped += 1;
            }
        }

        assert_eq!(len - popped, deque.len());
    }
}

proptest! {
    // Draining a randomized queue returns exactly the enqueued
    // multiset, in some order.
    #[test]
    fn randomized_queue_returns_exactly_what_went_in(
        items in proptest::collection::vec(any::<u32>(), 0..64)
    ) {
        let mut queue = RandomizedQueue::new();
        for &i in &items {
            queue.enqueue(i);
        }
        assert_eq!(items.len(), queue.len());

        let mut drained = Vec::new();
        while let Some(i) = queue.dequeue() {
            drained.push(i);
        }
        assert!(queue.is_empty());

        let mut want = items;
        want.sort();
        drained.sort();
        assert_eq!(want, drained);
    }
}

proptest! {
    #[test]
    fn randomized_queue_size_tracks_mutations(
        actions in proptest::collection::vec(any::<u32>(), 0..64)
    ) {
        let mut queue = RandomizedQueue::new();
        let mut expected = 0usize;

        for a in actions {
            if a % 3 == 0 {
                if queue.dequeue().is_some() {
                    expected -= 1;
                }
            } else {
                queue.enqueue(a);
                expected += 1;
            }

            assert_eq!(expected, queue.len());
            assert!(queue.capacity() >= 1);
            assert!(queue.len() <= queue.capacity());
        }
    }
}

proptest! {
    // Every iterator instance yields a permutation of the current
    // contents and leaves the queue untouched.
    #[test]
    fn shuffled_iterator_is_a_permutation_of_the_queue(
        items in proptest::collection::vec(any::<u32>(), 0..64)
    ) {
        let mut queue = RandomizedQueue::new();
        for &i in &items {
            queue.enqueue(i);
        }

        let mut seen: Vec<u32> = queue.iter().copied().collect();
        seen.sort();

        let mut want = items;
        want.sort();
        assert_eq!(want, seen);
        assert_eq!(want.len(), queue.len());
    }
}
