//! Property tests: containers against simple models over random
//! operation sequences.

use cask_collections::{BidiQueue, GrowableArray, Stack};
use cask_core::ContainerConfig;
use cask_test_utils::fixtures::pattern;
use cask_test_utils::ReferenceDeque;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Push(usize),
    Pop,
}

fn ops() -> impl Strategy<Value = Vec<Op>> {
    // Push-heavy runs followed by pop-heavy runs, so both growth and
    // shrinking get exercised.
    proptest::collection::vec(
        prop_oneof![
            3 => (0usize..10_000).prop_map(Op::Push),
            2 => Just(Op::Pop),
        ],
        0..300,
    )
}

fn widths() -> impl Strategy<Value = usize> {
    prop_oneof![Just(1usize), Just(4), Just(8), Just(37)]
}

proptest! {
    #[test]
    fn queue_matches_reference_deque(width in widths(), floor in 0usize..16, ops in ops()) {
        let config = ContainerConfig::new().with_min_capacity(floor);
        let mut queue = BidiQueue::with_config(width, config).unwrap();
        let mut model = ReferenceDeque::new();
        let mut out = vec![0u8; width];

        for op in ops {
            match op {
                Op::Push(seed) => {
                    let element = pattern(seed, width);
                    queue.push(&element).unwrap();
                    model.push(&element);
                }
                Op::Pop => {
                    let before = queue.capacity();
                    let size_before = queue.len();
                    match model.pop() {
                        Some(expected) => {
                            queue.pop_into(&mut out).unwrap();
                            prop_assert_eq!(&out, &expected);
                        }
                        None => prop_assert!(queue.pop_into(&mut out).is_err()),
                    }
                    if queue.capacity() < before {
                        prop_assert!(queue.capacity() >= size_before);
                        prop_assert!(queue.capacity() <= (2 * size_before + 1).max(floor));
                    }
                }
            }

            prop_assert!(queue.len() <= queue.capacity());
            prop_assert!(queue.window().end <= queue.capacity());
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.is_empty(), model.is_empty());
            prop_assert_eq!(queue.peek().ok(), model.peek());
            let seen: Vec<Vec<u8>> = queue.iter().map(<[u8]>::to_vec).collect();
            prop_assert_eq!(seen, model.head_to_tail());
        }
    }

    #[test]
    fn array_matches_vec(width in widths(), floor in 0usize..16, ops in ops()) {
        let config = ContainerConfig::new().with_min_capacity(floor);
        let mut array = GrowableArray::with_config(width, config).unwrap();
        let mut model: Vec<Vec<u8>> = Vec::new();
        let mut out = vec![0u8; width];

        for op in ops {
            match op {
                Op::Push(seed) => {
                    let element = pattern(seed, width);
                    array.push(&element).unwrap();
                    model.push(element);
                }
                Op::Pop => {
                    let before = array.capacity();
                    match model.pop() {
                        Some(expected) => {
                            array.pop_into(&mut out).unwrap();
                            prop_assert_eq!(&out, &expected);
                        }
                        None => prop_assert!(array.pop_into(&mut out).is_err()),
                    }
                    if array.capacity() < before {
                        prop_assert!(array.capacity() >= array.len());
                        prop_assert!(array.capacity() <= (2 * array.len() + 1).max(floor));
                    }
                }
            }

            prop_assert!(array.len() <= array.capacity());
            prop_assert_eq!(array.len(), model.len());
            let seen: Vec<Vec<u8>> = array.iter().map(<[u8]>::to_vec).collect();
            prop_assert_eq!(&seen, &model);
        }
    }

    #[test]
    fn stack_round_trips_any_width(width in widths(), seed in 0usize..10_000, depth in 0usize..40) {
        let mut stack = Stack::new(width).unwrap();
        for i in 0..depth {
            stack.push(&pattern(i, width)).unwrap();
        }
        let element = pattern(seed, width);
        stack.push(&element).unwrap();
        let mut out = vec![0u8; width];
        stack.pop_into(&mut out).unwrap();
        prop_assert_eq!(out, element);
        prop_assert_eq!(stack.len(), depth);
    }

    #[test]
    fn array_get_is_idempotent(width in widths(), count in 1usize..50, index in 0usize..50) {
        let mut array = GrowableArray::new(width).unwrap();
        for i in 0..count {
            array.push(&pattern(i, width)).unwrap();
        }
        let index = index % count;
        let first = array.get(index).unwrap().to_vec();
        prop_assert_eq!(array.get(index).unwrap(), &first[..]);
        prop_assert_eq!(first, pattern(index, width));
    }
}
