use crossed_wires::{bounds, parser, part1, part2, solve};

fn main() {
    divan::main();
}

const SCENARIO_2: &str = "R75,D30,R83,U83,L12,D49,R71,U7,L72\nU62,R66,U55,R34,D71,R55,D58,R83\n";
const SCENARIO_3: &str =
    "R98,U47,R26,D63,R33,U87,L62,D20,R33,U53,R51\nU98,R91,D20,R16,D67,R40,U7,R15,U6,R7\n";

#[divan::bench]
fn part1() {
    part1::process(divan::black_box(SCENARIO_2)).unwrap();
}

#[divan::bench]
fn part2() {
    part2::process(divan::black_box(SCENARIO_2)).unwrap();
}

#[divan::bench]
fn full_run() {
    solve::run(divan::black_box(SCENARIO_3), false).unwrap();
}

#[divan::bench]
fn parse() {
    parser::parse_wires(divan::black_box(SCENARIO_2)).unwrap();
}

#[divan::bench]
fn bounds_scan() {
    let wires = parser::parse_wires(SCENARIO_2).unwrap();
    bounds::scan(divan::black_box(&wires));
}
