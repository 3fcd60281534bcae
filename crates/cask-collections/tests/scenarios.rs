//! End-to-end walkthroughs of the array and the queue.

use cask_collections::{BidiQueue, GrowableArray};
use cask_core::{ContainerError, Element};

fn render_i32(bytes: &[u8], f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", i32::decode(bytes))
}

#[test]
fn queue_grows_recenters_and_drains() {
    let mut queue = BidiQueue::new(4).unwrap();
    for i in 0..12i32 {
        queue.push_value(&i).unwrap();
    }
    assert_eq!(queue.len(), 12);
    assert_eq!(queue.capacity(), 21);
    assert_eq!(
        queue.listing(render_i32).to_string(),
        "[11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0]"
    );

    for expected in 0..5 {
        assert_eq!(queue.pop_value::<i32>().unwrap(), expected);
    }
    assert_eq!(queue.len(), 7);
    // 11 live of 21 on the second pop: recentered and halved.
    assert_eq!(queue.capacity(), 11);
    assert_eq!(queue.window(), 4..11);
    assert_eq!(
        queue.listing(render_i32).to_string(),
        "[11, 10, 9, 8, 7, 6, 5]"
    );
    assert!(!queue.is_empty());

    for expected in 5..12 {
        assert_eq!(queue.pop_value::<i32>().unwrap(), expected);
    }
    assert!(queue.is_empty());
    assert_eq!(queue.capacity(), 10);
    assert_eq!(queue.listing(render_i32).to_string(), "[]");
    assert_eq!(queue.pop_value::<i32>(), Err(ContainerError::Empty));
}

#[test]
fn array_push_pop_and_resize() {
    let mut array = GrowableArray::with_len(4, 10).unwrap();
    for i in 0..10i32 {
        array.set_value(i as usize, &i).unwrap();
    }

    array.push_value(&123i32).unwrap();
    assert_eq!(array.len(), 11);
    assert_eq!(
        array.listing(render_i32).to_string(),
        "[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 123]"
    );
    assert_eq!(array.get_value::<i32>(10).unwrap(), 123);

    assert_eq!(array.pop_value::<i32>().unwrap(), 123);
    assert_eq!(array.len(), 10);
    assert_eq!(array.capacity(), 10);
    assert_eq!(array.get_value::<i32>(9).unwrap(), 9);
    assert!(!array.is_empty());

    array.resize(2 * array.len()).unwrap();
    assert_eq!(array.len(), 20);
    assert_eq!(array.capacity(), 20);
    // The slot that held 123 was cleared on pop.
    assert_eq!(array.get(10).unwrap(), &[0, 0, 0, 0]);
    assert_eq!(array.iter().count(), 20);
    assert_eq!(array.get_value::<i32>(9).unwrap(), 9);
}

#[test]
fn fresh_containers_refuse_reads() {
    let mut array = GrowableArray::new(4).unwrap();
    assert!(matches!(
        array.get(0),
        Err(ContainerError::IndexOutOfRange { index: 0, len: 0 })
    ));
    assert!(array.set(0, &[0; 4]).is_err());
    assert_eq!(array.pop_value::<i32>(), Err(ContainerError::Empty));

    let mut queue = BidiQueue::new(4).unwrap();
    assert_eq!(queue.peek(), Err(ContainerError::Empty));
    assert_eq!(queue.pop_value::<i32>(), Err(ContainerError::Empty));
    assert_eq!(queue.iter().count(), 0);
}
