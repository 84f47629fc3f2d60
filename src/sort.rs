//! In-place comparison sorts over mutable slices.

/// Selection sort by pairwise exchange, O(n^2).
pub fn selection<T: Ord>(arr: &mut [T]) {
    for i in 0..arr.len() {
        for j in i + 1..arr.len() {
            if arr[i] > arr[j] {
                arr.swap(i, j);
            }
        }
    }
}

/// Bubble sort, O(n^2); each pass floats the largest remaining item to the
/// end.
pub fn bubble<T: Ord>(arr: &mut [T]) {
    for i in 0..arr.len() {
        for j in 0..arr.len().saturating_sub(i + 1) {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
            }
        }
    }
}

/// Insertion sort: grows a sorted prefix by sinking each new item into
/// place.
pub fn insertion<T: Ord>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Shell sort with a halving gap sequence; gap 1 degenerates to insertion
/// sort over an almost-sorted slice.
pub fn shell<T: Ord>(arr: &mut [T]) {
    let mut gap = arr.len() / 2;
    while gap >= 1 {
        for i in gap..arr.len() {
            let mut j = i;
            while j >= gap && arr[j - gap] > arr[j] {
                arr.swap(j - gap, j);
                j -= gap;
            }
        }
        gap /= 2;
    }
}

/// Quicksort with a median-of-three pivot.
pub fn quick<T: Ord>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }

    let last = arr.len() - 1;
    let pivot = median_of_three(arr);
    arr.swap(pivot, last);

    let mut store = 0;
    for i in 0..last {
        if arr[i] < arr[last] {
            arr.swap(i, store);
            store += 1;
        }
    }
    arr.swap(store, last);

    let (left, right) = arr.split_at_mut(store);
    quick(left);
    quick(&mut right[1..]);
}

/// Orders the first, middle and last element, then returns the middle
/// index, which now holds the median of the three.
fn median_of_three<T: Ord>(arr: &mut [T]) -> usize {
    let last = arr.len() - 1;
    let mid = last / 2;

    if arr[0] > arr[mid] {
        arr.swap(0, mid);
    }
    if arr[mid] > arr[last] {
        arr.swap(mid, last);
    }
    if arr[0] > arr[mid] {
        arr.swap(0, mid);
    }
    mid
}

#[cfg(test)]
mod test {
    use super::{bubble, insertion, quick, selection, shell};

    const SORTS: [fn(&mut [i32]); 5] = [selection, bubble, insertion, shell, quick];

    #[test]
    fn sorts_agree_with_the_standard_library() {
        let input = [170, 45, 75, -90, -802, 24, 2, 66, 15, 15, 0, 1];
        let mut expected = input.to_vec();
        expected.sort();

        for sort in SORTS {
            let mut arr = input.to_vec();
            sort(&mut arr);
            assert_eq!(arr, expected);
        }
    }

    #[test]
    fn degenerate_inputs() {
        for sort in SORTS {
            let mut empty: Vec<i32> = vec![];
            sort(&mut empty);
            assert!(empty.is_empty());

            let mut single = vec![42];
            sort(&mut single);
            assert_eq!(single, [42]);

            let mut pair = vec![2, 1];
            sort(&mut pair);
            assert_eq!(pair, [1, 2]);
        }
    }

    #[test]
    fn already_sorted_and_reversed() {
        let sorted: Vec<i32> = (0..64).collect();
        let reversed: Vec<i32> = (0..64).rev().collect();

        for sort in SORTS {
            let mut arr = sorted.clone();
            sort(&mut arr);
            assert_eq!(arr, sorted);

            let mut arr = reversed.clone();
            sort(&mut arr);
            assert_eq!(arr, sorted);
        }
    }

    #[test]
    fn all_equal_elements() {
        for sort in SORTS {
            let mut arr = vec![7; 33];
            sort(&mut arr);
            assert_eq!(arr, vec![7; 33]);
        }
    }

    #[test]
    fn sorts_owned_strings() {
        let mut words: Vec<String> = ["pear", "apple", "fig", "banana"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        quick(&mut words);
        assert_eq!(words, ["apple", "banana", "fig", "pear"]);
    }
}
