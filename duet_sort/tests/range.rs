use duet_sort::orst::range::range;

#[test]
fn empty_when_bounds_meet() {
    assert!(range(5, 5).is_empty());
}

#[test]
fn zero_to_three() {
    assert_eq!(range(0, 3), vec![0, 1, 2]);
}

#[test]
fn works_with_indices() {
    let v = ['a', 'b', 'c', 'd'];
    let picked = range(1_usize, v.len()).into_iter().map(|i| v[i]).collect::<String>();
    assert_eq!(picked, "bcd");
}
