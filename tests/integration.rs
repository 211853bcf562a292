use fdct8::{BLOCK_SIZE, Block, forward, inverse};

fn assert_blocks_close(a: &Block, b: &Block, tolerance: f32, context: &str) {
    for y in 0..BLOCK_SIZE {
        for x in 0..BLOCK_SIZE {
            assert!(
                (a.get(x, y) - b.get(x, y)).abs() <= tolerance,
                "{}: sample ({}, {}) differs: {} vs {}",
                context,
                x,
                y,
                a.get(x, y),
                b.get(x, y)
            );
        }
    }
}

#[test]
fn ramp_block_round_trips_through_public_api() {
    let original = Block::from_fn(|x, y| (x * 8 + y) as f32 * 4.0 - 126.0);
    let mut block = original;
    forward(&mut block);
    inverse(&mut block);
    assert_blocks_close(&block, &original, 1e-2, "ramp");
}

#[test]
fn slice_constructed_block_round_trips() {
    let samples: Vec<f32> = (0..64).map(|i| ((i * 37 + 11) % 401) as f32 - 200.0).collect();
    let original = Block::from_slice(&samples).unwrap();
    let mut block = original;
    forward(&mut block);
    inverse(&mut block);
    assert_blocks_close(&block, &original, 1e-2, "slice");
}

#[test]
fn wrong_sized_slices_are_rejected() {
    for len in [0usize, 1, 8, 63, 65, 128] {
        let samples = vec![0.0f32; len];
        assert!(
            Block::from_slice(&samples).is_err(),
            "slice of {} samples should be rejected",
            len
        );
    }
}

#[test]
fn double_forward_is_not_identity() {
    let original = Block::from_fn(|x, y| (x as f32 + 1.0) * (y as f32 + 1.0));
    let mut block = original;
    forward(&mut block);
    forward(&mut block);
    let mut diff = 0.0f32;
    for y in 0..BLOCK_SIZE {
        for x in 0..BLOCK_SIZE {
            diff += (block.get(x, y) - original.get(x, y)).abs();
        }
    }
    assert!(diff > 1.0, "two forward passes left the block unchanged");
}

#[test]
fn concurrent_transforms_match_serial_results() {
    let blocks: Vec<Block> = (0..16)
        .map(|n| Block::from_fn(move |x, y| ((x * 5 + y * 3 + n * 7) % 61) as f32 - 30.0))
        .collect();

    let serial: Vec<Block> = blocks
        .iter()
        .map(|b| {
            let mut t = *b;
            forward(&mut t);
            inverse(&mut t);
            t
        })
        .collect();

    let mut parallel = blocks.clone();
    std::thread::scope(|scope| {
        for block in &mut parallel {
            scope.spawn(move || {
                forward(block);
                inverse(block);
            });
        }
    });

    for (i, (s, p)) in serial.iter().zip(parallel.iter()).enumerate() {
        assert_blocks_close(s, p, 0.0, &format!("block {}", i));
    }
}
