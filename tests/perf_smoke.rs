use gridbox_engine::World;

#[test]
fn perf_smoke_advance() {
    let mut world = World::new();
    world.enable_perf_metrics(true);
    world.load_reference_scenario();
    for i in 0..64 {
        let x = 100.0 + (i % 16) as f32 * 12.0;
        let y = 60.0 + (i / 16) as f32 * 12.0;
        assert!(world.add_body(x, y, 4.0, 4.0, 5.0, 0.2, false) >= 0);
    }
    let ran = world.advance(1.0 / 60.0);
    let stats = world.get_perf_stats();
    assert_eq!(stats.sub_steps(), ran);
    assert!(stats.advance_ms() >= 0.0);
    assert!(stats.pairs_tested() > 0);
}
