use mathbox_surd::{Generator, Request, Tuning, diag};

fn request(width: f32, height: f32) -> Request {
    Request {
        width,
        height,
        ..Default::default()
    }
}

#[test]
fn height_floor() {
    let generator = Generator::new();
    let tuning = Tuning::default();
    let base = generator.base_height();
    let at_base = generator.generate(&request(1.2, base), &tuning);
    for h in [0.0, 0.1, base * 0.5, base - 1e-4] {
        let res = generator.generate(&request(1.2, h), &tuning);
        assert_eq!(res.points, at_base.points, "height {}", h);
        assert_eq!(res.vinculum, at_base.vinculum);
    }
}

#[test]
fn determinism_across_instances() {
    let tuning = Tuning::default();
    let a = Generator::new().generate(&request(2.5, 3.7), &tuning);
    let b = Generator::new().generate(&request(2.5, 3.7), &tuning);
    let c = Generator::new().generate(&request(2.5, 3.7), &tuning);
    assert_eq!(a.points, b.points);
    assert_eq!(b.points, c.points);
}

#[test]
fn continuity_through_lock_heights() {
    let generator = Generator::new();
    let tuning = Tuning::default();
    let locks = [
        tuning.upstroke_angle.lock_height,
        tuning.downstroke_angle.lock_height,
        tuning.downstroke_height_ratio.lock_height,
        tuning.hook_rotation.lock_height,
        tuning.hook_length_scale.lock_height,
    ];
    let step = 1e-3;
    for lock in locks {
        let mut prev = generator.generate(&request(1.0, lock - 20.0 * step), &tuning);
        for i in -19..=20 {
            let res = generator.generate(&request(1.0, lock + i as f32 * step), &tuning);
            assert!(
                (res.advance_width - prev.advance_width).abs() < 0.02,
                "advance jumps near lock {}",
                lock
            );
            assert!(
                (res.ascent - prev.ascent).abs() < 0.02,
                "ascent jumps near lock {}",
                lock
            );
            prev = res;
        }
    }
}

#[test]
fn concurrent_generation() {
    let generator = Generator::new();
    let tuning = Tuning::default();
    let expected = generator.generate(&request(1.0, 2.0), &tuning);
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| generator.generate(&request(1.0, 2.0), &tuning)))
            .collect();
        for h in handles {
            let res = h.join().unwrap();
            assert_eq!(res.points, expected.points);
        }
    });
}

#[test]
fn decomposition_matches_buffer() {
    let res = Generator::new().generate(&request(1.0, 2.0), &Tuning::default());
    let nodes = diag::decompose(&res.points);
    assert_eq!(nodes.len(), res.points.len() / diag::FLOATS_PER_NODE);
    for (i, n) in nodes.iter().enumerate() {
        let at = i * diag::FLOATS_PER_NODE;
        assert_eq!(n.anchor.x, res.points[at + 2]);
        assert_eq!(n.anchor.y, res.points[at + 3]);
        assert_eq!(n.has_in, n.handle_in != n.anchor);
        assert_eq!(n.has_out, n.handle_out != n.anchor);
    }
}

#[test]
fn svg_data_has_one_segment_per_node() {
    let res = Generator::new().generate(&request(1.0, 2.0), &Tuning::default());
    let d = res.svg_path_data();
    let segments = d.matches(['L', 'C']).count();
    assert_eq!(segments, res.nodes().len());
}
