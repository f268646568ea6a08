use ggraph::core::{Tick, TickAxis};

fn majors(ticks: &[Tick]) -> Vec<f64> {
    ticks
        .iter()
        .filter(|tick| tick.is_major)
        .map(|tick| tick.position)
        .collect()
}

#[test]
fn linear_ticks_use_nice_steps() {
    let ticks: Vec<Tick> = TickAxis::new(0.0, 10.0, 3, false).ticks().collect();
    assert_eq!(majors(&ticks), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    // Steps of 2 are split in four.
    assert_eq!(ticks.len(), 21);
    assert!(ticks.windows(2).all(|pair| pair[0].position < pair[1].position));
}

#[test]
fn ticks_stay_inside_the_requested_interval() {
    let ticks: Vec<Tick> = TickAxis::new(-0.37, 1.93, 5, false).ticks().collect();
    assert!(!ticks.is_empty());
    assert!(ticks.iter().all(|tick| (-0.37..=1.93).contains(&tick.position)));
    assert!(ticks.iter().any(|tick| tick.is_major));
}

#[test]
fn reversed_interval_is_accepted() {
    let forward: Vec<Tick> = TickAxis::new(0.0, 10.0, 3, false).ticks().collect();
    let reversed: Vec<Tick> = TickAxis::new(10.0, 0.0, 3, false).ticks().collect();
    assert_eq!(forward, reversed);
}

#[test]
fn degenerate_or_non_finite_interval_has_no_ticks() {
    assert_eq!(TickAxis::new(1.0, 1.0, 3, false).ticks().count(), 0);
    assert_eq!(TickAxis::new(f64::NAN, 1.0, 3, false).ticks().count(), 0);
}

#[test]
fn log_ticks_mark_decades_as_major() {
    let ticks: Vec<Tick> = TickAxis::new(0.0, 2.0, 3, true).ticks().collect();
    assert_eq!(majors(&ticks), vec![0.0, 1.0, 2.0]);
    // 2..9 times each of the two full decades.
    assert_eq!(ticks.len(), 3 + 2 * 8);
    let second = ticks[1].position;
    assert!((second - 2f64.log10()).abs() < 1e-12);
}

#[test]
fn iterator_is_restartable() {
    let axis = TickAxis::new(-3.0, 7.0, 4, false);
    let first: Vec<Tick> = axis.ticks().collect();
    let second: Vec<Tick> = axis.ticks().collect();
    assert_eq!(first, second);
}
