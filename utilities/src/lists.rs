use duet_sort::sample;

pub struct TestLists {
    pub random: Vec<i32>,
    pub empty: Vec<i32>,
    pub single: Vec<i32>,
    pub sorted: Vec<i32>,
    pub reversed: Vec<i32>,
    pub repeated: Vec<i32>,
    pub negatives: Vec<i32>,
}

impl TestLists {
    pub fn new() -> Self {
        // The built in list of the quicksort demo
        let random = sample::random_list();

        let empty = vec![];
        let single = vec![7];
        let sorted = (0..100).collect();
        let reversed = (0..100).rev().collect();

        // A single value repeated, every partition puts the pivot last
        let repeated = vec![5; 50];

        let negatives = vec![0, -3, i32::MAX, 12, i32::MIN, -3, 8, -1];

        TestLists {
            random,
            empty,
            single,
            sorted,
            reversed,
            repeated,
            negatives,
        }
    }

    /// Every list, paired with a name for assertion messages.
    pub fn all(&self) -> Vec<(&'static str, &[i32])> {
        vec![
            ("random", self.random.as_slice()),
            ("empty", self.empty.as_slice()),
            ("single", self.single.as_slice()),
            ("sorted", self.sorted.as_slice()),
            ("reversed", self.reversed.as_slice()),
            ("repeated", self.repeated.as_slice()),
            ("negatives", self.negatives.as_slice()),
        ]
    }
}

impl Default for TestLists {
    fn default() -> Self {
        Self::new()
    }
}
