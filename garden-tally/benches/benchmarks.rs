use garden_tally::process;
use garden_tally::segment::segment;

fn main() {
    divan::main();
}

const SAMPLE_MAP: &str = include_str!("../sample.txt");

#[divan::bench]
fn full_pipeline() {
    process(divan::black_box(SAMPLE_MAP)).unwrap();
}

#[divan::bench]
fn segment_only() {
    let lines = divan::black_box(SAMPLE_MAP).lines().collect::<Vec<_>>();
    segment(&lines).unwrap();
}
