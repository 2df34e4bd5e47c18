use std::thread;

use cavern_core::{GeneratorConfig, WorldGenerator, generate_world};

#[test]
fn test_determinism_identical_seeds_produce_identical_worlds() {
    let first = generate_world(12_345, 80, 30).expect("generation should succeed");
    let second = generate_world(12_345, 80, 30).expect("generation should succeed");

    assert_eq!(first.grid, second.grid, "identical seeds must produce identical grids");
    assert_eq!(first.rooms, second.rooms, "room order must be stable");
    assert_eq!(first.corridors, second.corridors);
    assert_eq!(first.fingerprint(), second.fingerprint());
}

#[test]
fn test_determinism_different_seeds_produce_different_fingerprints() {
    let first = generate_world(123, 80, 30).expect("generation should succeed");
    let second = generate_world(456, 80, 30).expect("generation should succeed");

    assert_ne!(
        first.fingerprint(),
        second.fingerprint(),
        "different seeds should produce different worlds"
    );
}

#[test]
fn test_determinism_dimensions_are_part_of_the_world() {
    let narrow = generate_world(99, 60, 30).expect("generation should succeed");
    let wide = generate_world(99, 80, 30).expect("generation should succeed");
    assert_ne!(narrow.canonical_bytes(), wide.canonical_bytes());
}

#[test]
fn test_determinism_independent_generators_on_threads_agree() {
    let seeds = [7_u64, 8, 9, 10];
    let handles: Vec<_> = seeds
        .iter()
        .map(|&seed| thread::spawn(move || generate_world(seed, 80, 30).map(|w| w.fingerprint())))
        .collect();

    for (handle, &seed) in handles.into_iter().zip(seeds.iter()) {
        let threaded = handle.join().expect("generator thread panicked");
        let local = generate_world(seed, 80, 30).map(|w| w.fingerprint());
        assert_eq!(threaded, local, "seed {seed} diverged across threads");
    }
}

#[test]
fn test_determinism_explicit_default_config_matches_new() {
    let implicit = WorldGenerator::new(2_718, 80, 30).generate();
    let explicit =
        WorldGenerator::with_config(2_718, 80, 30, GeneratorConfig::default()).generate();
    assert_eq!(implicit, explicit);
}
