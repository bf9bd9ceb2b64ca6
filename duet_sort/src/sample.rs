//! The fixed input list of the quicksort demo.

/// One hundred integers in no particular order. Some values repeat (`8`, `80`, `240`, `246`,
/// `290` and `322` appear twice).
pub const RANDOM_LIST: [i32; 100] = [
    413, 1, 322, 175, 12, 81, 433, 365, 116, 342,
    324, 435, 204, 4, 8, 199, 256, 266, 316, 57,
    454, 191, 10, 97, 80, 28, 339, 382, 444, 236,
    450, 110, 105, 442, 489, 492, 167, 280, 295, 78,
    355, 436, 269, 156, 458, 278, 331, 79, 301, 132,
    389, 353, 260, 240, 69, 315, 246, 314, 337, 329,
    194, 114, 292, 290, 72, 33, 177, 434, 244, 369,
    328, 405, 268, 117, 410, 397, 367, 363, 246, 424,
    8, 137, 263, 447, 321, 159, 488, 257, 193, 303,
    143, 202, 322, 282, 250, 55, 80, 240, 290, 34,
];

/// A freshly allocated copy of [`RANDOM_LIST`].
pub fn random_list() -> Vec<i32> {
    RANDOM_LIST.to_vec()
}
