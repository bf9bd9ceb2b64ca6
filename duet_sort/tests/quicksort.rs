use duet_sort::orst::{is_sorted, is_sorted_all, quicksort, LomutoSorter};
use duet_sort::{run_demo, sample};
use quickcheck::quickcheck;
use utilities::lists::TestLists;

fn std_sorted(list: &[i32]) -> Vec<i32> {
    let mut expected = list.to_vec();
    expected.sort();
    expected
}

mod sample_list {
    use super::*;

    #[test]
    fn unsorted_before_and_sorted_after() {
        let mut list = sample::random_list();
        assert!(!is_sorted(&list));

        let sorted = quicksort(&mut list);
        assert!(is_sorted(sorted));
        assert!(is_sorted_all(sorted));
    }

    #[test]
    fn matches_std_sort() {
        let mut list = sample::random_list();
        quicksort(&mut list);
        assert_eq!(list, std_sorted(&sample::RANDOM_LIST));
        assert_eq!(list.first(), Some(&1));
        assert_eq!(list.last(), Some(&492));
    }

    #[test]
    fn demo_output() {
        let mut out = Vec::new();
        run_demo(sample::random_list(), LomutoSorter::default(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("false"));
        assert_eq!(lines.next(), Some("true"));

        let values = lines
            .map(|l| l.parse::<i32>().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(values, std_sorted(&sample::RANDOM_LIST));
    }
}

mod fixtures {
    use super::*;

    #[test]
    fn every_list_sorts_like_std() {
        let lists = TestLists::new();
        for (name, list) in lists.all() {
            let mut actual = list.to_vec();
            quicksort(&mut actual);
            assert_eq!(actual, std_sorted(list), "{name} list");
            assert!(is_sorted(&actual), "{name} list");
        }
    }

    #[test]
    fn trivial_lists_are_unchanged() {
        let lists = TestLists::new();

        let mut empty = lists.empty.clone();
        assert!(quicksort(&mut empty).is_empty());

        let mut single = lists.single.clone();
        assert_eq!(quicksort(&mut single), [7]);
    }

    #[test]
    fn sorted_list_is_unchanged() {
        let lists = TestLists::new();
        let mut sorted = lists.sorted.clone();
        quicksort(&mut sorted);
        assert_eq!(sorted, lists.sorted);
    }
}

mod properties {
    use super::*;

    #[test]
    fn output_is_a_sorted_permutation() {
        fn prop(xs: Vec<i32>) -> bool {
            let mut actual = xs.clone();
            quicksort(&mut actual);
            actual == std_sorted(&xs)
        }
        quickcheck(prop as fn(Vec<i32>) -> bool);
    }

    #[test]
    fn sorted_output_passes_the_check() {
        fn prop(xs: Vec<i32>) -> bool {
            let mut xs = xs;
            is_sorted(quicksort(&mut xs))
        }
        quickcheck(prop as fn(Vec<i32>) -> bool);
    }

    #[test]
    fn keeps_length() {
        fn prop(xs: Vec<i32>) -> bool {
            let mut actual = xs.clone();
            quicksort(&mut actual).len() == xs.len()
        }
        quickcheck(prop as fn(Vec<i32>) -> bool);
    }
}
