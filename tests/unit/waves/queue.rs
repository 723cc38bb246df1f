use super::*;
use crate::color::rgba::Color;

fn wave(button: usize, spawn_ms: f64) -> Wave {
    Wave::new(button, Color::rgb(1.0, 1.0, 1.0), spawn_ms)
}

#[test]
fn iterates_in_insertion_order() {
    let mut q: WaveQueue<u32, 4> = WaveQueue::new();
    assert!(q.is_empty());
    for v in [10, 20, 30] {
        assert_eq!(q.push(v), None);
    }
    assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
    assert_eq!(q.iter().len(), 3);
}

#[test]
fn overflow_evicts_exactly_the_oldest() {
    let mut q: WaveQueue = WaveQueue::new();
    for b in 0..q.capacity() {
        assert_eq!(q.push(wave(b, b as f64)), None);
    }
    let evicted = q.push(wave(0, 100.0));
    assert_eq!(evicted, Some(wave(0, 0.0)));
    assert_eq!(q.len(), BUTTON_COUNT);

    let spawn_times: Vec<f64> = q.iter().map(|w| w.spawn_ms).collect();
    let mut expected: Vec<f64> = (1..BUTTON_COUNT).map(|b| b as f64).collect();
    expected.push(100.0);
    assert_eq!(spawn_times, expected);
}

#[test]
fn wraps_many_times_under_burst_pushes() {
    let mut q: WaveQueue<u32, 3> = WaveQueue::new();
    for v in 0..20 {
        q.push(v);
    }
    assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![17, 18, 19]);
    assert_eq!(q.get(0), Some(&17));
    assert_eq!(q.get(3), None);
}

#[test]
fn iteration_is_restartable() {
    let mut q: WaveQueue<u32, 2> = WaveQueue::new();
    q.push(1);
    q.push(2);
    let first: Vec<_> = (&q).into_iter().collect();
    let second: Vec<_> = q.iter().collect();
    assert_eq!(first, second);
}
