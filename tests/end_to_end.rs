use tschunk::{AppendResult, ChunkOps, Direction, Sample, UncompressedChunk};

fn collect<C: ChunkOps>(chunk: &C, direction: Direction) -> Vec<(u64, f64)> {
    chunk
        .iter(direction)
        .map(|s| (s.timestamp, s.value))
        .collect()
}

#[test]
fn capacity_three_scenario() {
    let mut chunk = UncompressedChunk::new(3).expect("chunk");

    for (ts, value) in [(10, 1.0), (20, 2.0), (30, 3.0)] {
        assert_eq!(
            chunk.append(Sample::new(ts, value)),
            AppendResult::Appended
        );
    }
    assert_eq!(chunk.append(Sample::new(40, 4.0)), AppendResult::Full);

    assert_eq!(chunk.first_timestamp(), Some(10));
    assert_eq!(chunk.last_timestamp(), Some(30));
    assert_eq!(chunk.num_samples(), 3);

    let mut forward = chunk.iter(Direction::Forward);
    assert_eq!(forward.next(), Some(Sample::new(10, 1.0)));
    assert_eq!(forward.next(), Some(Sample::new(20, 2.0)));
    assert_eq!(forward.next(), Some(Sample::new(30, 3.0)));
    assert_eq!(forward.next(), None);

    assert_eq!(
        collect(&chunk, Direction::Reverse),
        vec![(30, 3.0), (20, 2.0), (10, 1.0)]
    );
}

#[test]
fn capacity_bound_for_several_sizes() {
    for capacity in [1_usize, 2, 7, 64, 360] {
        let mut chunk = UncompressedChunk::new(capacity).expect("chunk");
        for i in 0..capacity {
            assert_eq!(
                chunk.append(Sample::new(i as u64, i as f64)),
                AppendResult::Appended
            );
        }
        assert_eq!(chunk.append(Sample::new(u64::MAX, 0.0)), AppendResult::Full);
        assert_eq!(chunk.num_samples(), capacity);
        assert_eq!(chunk.last_timestamp(), Some(capacity as u64 - 1));
    }
}

#[test]
fn order_preserved_for_partial_fill() {
    let input: Vec<Sample> = (0..5)
        .map(|i| Sample::new(100 + i * 7, i as f64))
        .collect();
    let mut chunk = UncompressedChunk::new(16).expect("chunk");
    for &sample in &input {
        assert_eq!(chunk.append(sample), AppendResult::Appended);
    }

    let forward: Vec<Sample> = chunk.iter(Direction::Forward).collect();
    assert_eq!(forward, input);

    let mut reverse: Vec<Sample> = chunk.iter(Direction::from_reverse(true)).collect();
    reverse.reverse();
    assert_eq!(reverse, input);
}

#[test]
fn empty_chunk_reports_no_timestamps() {
    let chunk = UncompressedChunk::new(3).expect("chunk");
    assert_eq!(chunk.first_timestamp(), None);
    assert_eq!(chunk.last_timestamp(), None);
    assert!(collect(&chunk, Direction::Forward).is_empty());
    assert!(collect(&chunk, Direction::Reverse).is_empty());
}

#[test]
fn independent_iterators_do_not_interfere() {
    let mut chunk = UncompressedChunk::new(4).expect("chunk");
    for ts in 1..=4 {
        let _ = chunk.append(Sample::new(ts, 0.0));
    }

    let mut a = chunk.iter(Direction::Forward);
    let mut b = chunk.iter(Direction::Forward);
    assert_eq!(a.next().map(|s| s.timestamp), Some(1));
    assert_eq!(a.next().map(|s| s.timestamp), Some(2));
    assert_eq!(b.next().map(|s| s.timestamp), Some(1));
    drop(a);
    assert_eq!(b.count(), 3);
    assert_eq!(chunk.num_samples(), 4);
}

#[test]
fn concurrent_readers_across_threads() {
    let mut chunk = UncompressedChunk::new(1000).expect("chunk");
    for ts in 0..1000 {
        let _ = chunk.append(Sample::new(ts, ts as f64));
    }

    let chunk = &chunk;
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(move |i| {
                let direction = Direction::from_reverse(i % 2 == 1);
                scope.spawn(move || chunk.iter(direction).map(|s| s.value).sum::<f64>())
            })
            .collect();
        for handle in handles {
            let sum = handle.join().expect("reader thread");
            assert_eq!(sum, 499_500.0);
        }
    });
}
